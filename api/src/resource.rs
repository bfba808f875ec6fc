//! Paginated admin listings.
//!
//! Each listing is a marker type naming its entity, filters and endpoint so
//! that one list controller can drive all of them.

use serde::de::DeserializeOwned;
use types::{
    ContactMessage, Filters, ListQuery, NoFilters, Order, OrderFilters, Page, Profile,
    ProfileFilters, Result, User, UserFilters,
};

use crate::ApiClient;

pub trait ListResource: 'static {
    type Item: DeserializeOwned + Clone + PartialEq + 'static;
    type Filters: Filters;

    /// Listing endpoint, also the base of per-item routes.
    const PATH: &'static str;
    /// Plural noun used in status messages.
    const NOUN: &'static str;

    fn item_id(item: &Self::Item) -> &str;
}

pub struct Users;

impl ListResource for Users {
    type Item = User;
    type Filters = UserFilters;

    const PATH: &'static str = "/api/admin/users";
    const NOUN: &'static str = "users";

    fn item_id(item: &User) -> &str {
        &item.id
    }
}

pub struct Orders;

impl ListResource for Orders {
    type Item = Order;
    type Filters = OrderFilters;

    const PATH: &'static str = "/api/orders/admin/all";
    const NOUN: &'static str = "orders";

    fn item_id(item: &Order) -> &str {
        &item.id
    }
}

pub struct Profiles;

impl ListResource for Profiles {
    type Item = Profile;
    type Filters = ProfileFilters;

    const PATH: &'static str = "/api/admin/profiles";
    const NOUN: &'static str = "profiles";

    fn item_id(item: &Profile) -> &str {
        &item.id
    }
}

pub struct ContactMessages;

impl ListResource for ContactMessages {
    type Item = ContactMessage;
    type Filters = NoFilters;

    const PATH: &'static str = "/api/get/contact-messages";
    const NOUN: &'static str = "messages";

    fn item_id(item: &ContactMessage) -> &str {
        &item.id
    }
}

impl ApiClient {
    /// Fetches one page of `R`.
    pub async fn list<R: ListResource>(&self, query: &ListQuery<R::Filters>) -> Result<Page<R::Item>> {
        let payload = self
            .get_payload::<Vec<R::Item>>(R::PATH, &query.query_pairs())
            .await?;
        Ok(Page::from_payload(payload))
    }
}
