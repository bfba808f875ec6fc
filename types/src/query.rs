/// Filters that can be appended to a listing request.
pub trait Filters: Clone + Default + PartialEq + 'static {
    /// Query parameters for the filters that are set. Unset filters emit
    /// nothing.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Listings without filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilters;

impl Filters for NoFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Everything needed to request one page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub filters: F,
}

impl<F: Filters> ListQuery<F> {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
            filters: F::default(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        pairs.extend(self.filters.query_pairs());
        pairs
    }
}
