//! SQL access per resource, password hashing and sessions.

pub mod admins;
pub mod blogs;
pub mod budgets;
pub mod catalog;
pub mod password;
pub mod sessions;
pub mod validation;

pub use admins::AdminService;
pub use blogs::BlogService;
pub use budgets::BudgetService;
pub use catalog::CatalogService;
pub use sessions::{Session, SessionService};
