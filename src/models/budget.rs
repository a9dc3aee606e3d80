//! Budget submissions: request body, joined listing row and batch numbers.

use crate::error::AppError;
use crate::service::validation::{present, take_present};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Layout of the batch number shared by all budget rows of one submission.
const BUDGET_NUMBER_FORMAT: &str = "%Y%m%d%H%M%S";

/// Body of `POST /create_budget`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBudgetRequest {
    pub customers_name: Option<String>,
    pub customers_city: Option<String>,
    pub customers_phone: Option<String>,
    pub customers_comment: Option<String>,
    pub services_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub customer: NewCustomer,
    pub services_ids: Vec<i32>,
}

impl CreateBudgetRequest {
    pub fn validate(self) -> Result<NewBudget, AppError> {
        let services_ids = self.services_ids.filter(|ids| !ids.is_empty());
        let (Some(services_ids), Some(_)) = (services_ids, present(&self.customers_name)) else {
            return Err(AppError::Validation("Missing customer or service details".into()));
        };
        Ok(NewBudget {
            customer: NewCustomer {
                name: self.customers_name.unwrap_or_default(),
                city: self.customers_city,
                phone: self.customers_phone,
                comment: self.customers_comment,
            },
            services_ids,
        })
    }
}

/// Response payload of a successful submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedBudget {
    pub customers_id: i32,
    pub budgets_number: String,
}

/// One budget row joined to its customer. `budgets_services_ids` lists every service id of
/// the same submission, comma separated.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct BudgetRow {
    pub budgets_id: i32,
    pub budgets_number: String,
    pub budgets_customers_id: i32,
    pub budgets_services_ids: String,
    pub budgets_status: String,
    pub customers_name: String,
    pub customers_city: Option<String>,
    pub customers_phone: Option<String>,
    pub customers_comment: Option<String>,
}

/// Body of `PUT /budgets/{id}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBudgetStatusRequest {
    pub budgets_status: Option<String>,
}

impl UpdateBudgetStatusRequest {
    pub fn validate(self) -> Result<String, AppError> {
        take_present(self.budgets_status)
            .ok_or_else(|| AppError::Validation("Missing budget status".into()))
    }
}

/// Batch number for a submission made at `now`. Two submissions in the same second share it.
pub fn budget_number(now: NaiveDateTime) -> String {
    now.format(BUDGET_NUMBER_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(name: Option<&str>, ids: Option<Vec<i32>>) -> CreateBudgetRequest {
        CreateBudgetRequest {
            customers_name: name.map(String::from),
            customers_city: Some("Lviv".into()),
            customers_phone: Some("+380000000000".into()),
            customers_comment: None,
            services_ids: ids,
        }
    }

    #[test]
    fn number_is_second_granular_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 1, 900)
            .unwrap();
        assert_eq!(budget_number(at), "20240309070501");
    }

    #[test]
    fn valid_request_keeps_all_service_ids() {
        let budget = request(Some("Olena"), Some(vec![3, 1, 3])).validate().unwrap();
        assert_eq!(budget.services_ids, vec![3, 1, 3]);
        assert_eq!(budget.customer.name, "Olena");
        assert_eq!(budget.customer.city.as_deref(), Some("Lviv"));
    }

    #[test]
    fn missing_name_or_services_is_rejected() {
        for req in [
            request(None, Some(vec![1])),
            request(Some("  "), Some(vec![1])),
            request(Some("Olena"), None),
            request(Some("Olena"), Some(vec![])),
        ] {
            let err = req.validate().unwrap_err();
            assert_eq!(err.to_string(), "Missing customer or service details");
        }
    }

    #[test]
    fn status_must_be_present() {
        assert!(UpdateBudgetStatusRequest { budgets_status: None }.validate().is_err());
        assert_eq!(
            UpdateBudgetStatusRequest { budgets_status: Some("done".into()) }.validate().unwrap(),
            "done"
        );
    }
}
