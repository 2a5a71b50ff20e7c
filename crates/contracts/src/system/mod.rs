pub mod auth;
pub mod view_state;

pub use auth::{AdminCredential, ADMIN_SECRET};
pub use view_state::{Screen, ViewEvent, ViewState};
