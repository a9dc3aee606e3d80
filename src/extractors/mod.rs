//! Request extractors that reject through `AppError`.

pub mod form;
pub mod json;
pub mod session;

pub use form::FormData;
pub use json::JsonBody;
pub use session::{AdminGuard, AdminSession, SESSION_COOKIE};
