mod components;

mod login;
pub use login::{Login, NotFound};

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod orders;
pub use orders::Orders;

mod profiles;
pub use profiles::Profiles;

mod messages;
pub use messages::Messages;

mod documents;
pub use documents::{Privacy, Terms};
