//! OpenAPI document served at `/openapi.json`.

use crate::handlers::{admin, blog, budget, catalog};
use crate::models::{
    AddAdminRequest, Admin, Blog, BudgetRow, CreateBudgetRequest, LoginRequest, Service, UpdateAdminRequest,
    UpdateBudgetStatusRequest,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bizsite", description = "Budgets, blog, services catalog and admin API"),
    paths(
        budget::create_budget,
        budget::list_budgets,
        budget::update_budget_status,
        blog::add_blog,
        blog::get_blogs,
        blog::get_blog_by_id,
        catalog::create_service,
        catalog::get_services,
        catalog::get_service,
        admin::login,
        admin::logout,
        admin::check_admin,
        admin::add_admin,
        admin::update_admin,
        admin::delete_admin,
    ),
    components(schemas(
        CreateBudgetRequest,
        UpdateBudgetStatusRequest,
        BudgetRow,
        Blog,
        Service,
        Admin,
        LoginRequest,
        AddAdminRequest,
        UpdateAdminRequest,
    )),
    tags(
        (name = "budgets", description = "Customer budget requests"),
        (name = "blogs", description = "Blog posts"),
        (name = "services", description = "Services catalog"),
        (name = "admins", description = "Admin login and management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/create_budget",
            "/budgets",
            "/budgets/{id}",
            "/blogs",
            "/blogs/{id}",
            "/services",
            "/services/{id}",
            "/login",
            "/logout",
            "/check-admin",
            "/add_admin",
            "/admins/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
