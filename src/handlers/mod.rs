//! HTTP handlers for budgets, blog posts, the services catalog and admins.

pub mod admin;
pub mod blog;
pub mod budget;
pub mod catalog;
