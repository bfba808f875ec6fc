mod contact;
mod dashboard;
mod document;
mod envelope;
mod error;
mod order;
mod profile;
mod query;
mod session;
mod user;
pub mod validation;

pub use contact::{ContactMessage, ContactReply, ReplyForm};
pub use dashboard::{
    CountPoint, DashboardAnalytics, DashboardStats, OrderPoint, StatusCount, TopProfile,
    ViewPoint,
};
pub use document::{DocumentKind, PolicyDocument, PolicyForm};
pub use envelope::{Envelope, Page, Pagination, Payload};
pub use error::{Error, Result, ValidationError};
pub use order::{CardDesign, Order, OrderFilters, OrderStatus, OrderStatusUpdate};
pub use profile::{Profile, ProfileFilters, ProfileType, SocialLink, UserRef};
pub use query::{Filters, ListQuery, NoFilters};
pub use session::{AdminIdentity, Credentials, LoginData, SessionStatus};
pub use user::{PasswordReset, PasswordResetRequest, ProfileRef, Role, User, UserFilters, UserForm};
