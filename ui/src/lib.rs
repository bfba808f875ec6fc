//! State and shared components for the admin pages.
//!
//! The controllers (`list`, `editor`, `analytics`, `debounce`, `mutation`,
//! `notice`) are plain Rust and tested without a renderer. `hooks` and
//! `components` bind them to Dioxus.

mod analytics;
mod components;
mod debounce;
mod editor;
mod hooks;
mod list;
mod mutation;
mod notice;

pub use analytics::{
    Bar, ChartSeries, DashboardFetch, StatCard, fetch_dashboard, order_volume, orders_by_status,
    profile_views, revenue, stat_cards, top_profiles, user_growth,
};
pub use components::{
    ConfirmDialog, ModalFrame, PaginationControls, SearchBox, StatusBadge, TableMessage,
    ToastStack,
};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use editor::{AUTO_CLOSE_DELAY, DocumentEditor, close_after_delay};
pub use hooks::{
    DocumentHandle, Notifier, ResourceList, use_document_editor, use_notifier,
    use_notifier_provider, use_resource_list,
};
pub use list::{ListController, ListOf, LoadOutcome, LoadTicket};
pub use mutation::{Modal, MutationMessages};
pub use notice::{NOTICE_DURATION, Notice, NoticeKind, Notices, Toast};
