mod auth;
mod client;
mod contact;
mod dashboard;
mod documents;
mod orders;
mod profiles;
mod resource;
mod session;
mod users;

pub use client::ApiClient;
pub use resource::{ContactMessages, ListResource, Orders, Profiles, Users};
pub use session::{MemoryTokenStore, Session, TokenStore};
