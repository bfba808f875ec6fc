//! Response shapes shared by every endpoint.
//!
//! Most endpoints wrap their body as `{ success, data, message?, pagination? }`
//! but a few return the bare value. Both decode through [`Payload`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Envelope(Envelope<T>),
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_data(self) -> T {
        match self {
            Self::Envelope(envelope) => envelope.data,
            Self::Bare(data) => data,
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            Self::Envelope(envelope) => envelope.pagination.as_ref(),
            Self::Bare(_) => None,
        }
    }
}

/// Server-side paging metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl Pagination {
    /// Metadata for a response that arrived without any: everything fits on
    /// one page.
    pub fn single(len: usize) -> Self {
        Self {
            page: 1,
            limit: u32::try_from(len).unwrap_or(u32::MAX),
            total: len as u64,
            total_pages: 1,
        }
    }

    /// `total_pages`, never less than one so that page 1 is always the last
    /// page of an empty listing.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::single(0)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn from_payload(payload: Payload<Vec<T>>) -> Self {
        let pagination = payload.pagination().copied();
        let items = payload.into_data();
        let pagination = pagination.unwrap_or_else(|| Pagination::single(items.len()));
        Self { items, pagination }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enveloped_listing_keeps_pagination() {
        let body = json!({
            "success": true,
            "data": [1, 2, 3],
            "pagination": { "page": 2, "limit": 3, "total": 9, "totalPages": 3 }
        });
        let page = Page::from_payload(serde_json::from_value::<Payload<Vec<u32>>>(body).unwrap());
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn bare_array_is_a_single_page() {
        let page = Page::from_payload(
            serde_json::from_value::<Payload<Vec<u32>>>(json!([4, 5])).unwrap(),
        );
        assert_eq!(page.items, vec![4, 5]);
        assert_eq!(page.pagination, Pagination::single(2));
    }

    #[test]
    fn empty_listing_still_has_a_last_page() {
        let pagination: Pagination =
            serde_json::from_value(json!({ "page": 1, "limit": 10, "total": 0, "totalPages": 0 }))
                .unwrap();
        assert_eq!(pagination.last_page(), 1);
    }
}
