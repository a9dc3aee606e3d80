//! Row types and request bodies, one module per resource.

pub mod admin;
pub mod blog;
pub mod budget;
pub mod catalog;

pub use admin::{AddAdminRequest, Admin, AdminRecord, LoginRequest, NewAdmin, UpdateAdminRequest};
pub use blog::{Blog, BlogForm, NewBlog};
pub use budget::{BudgetRow, CreateBudgetRequest, CreatedBudget, NewBudget, NewCustomer, UpdateBudgetStatusRequest};
pub use catalog::{NewService, Service};

/// Timestamp layout used for every blog date in responses.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
