//! Budget submissions: one customer plus one budget row per selected service.

use crate::error::AppError;
use crate::models::{BudgetRow, CreatedBudget, NewBudget};
use sqlx::PgPool;

pub struct BudgetService;

impl BudgetService {
    /// Insert the customer and all of its budget rows in one transaction. A failure on any
    /// row rolls back the customer too.
    pub async fn create(pool: &PgPool, budget: &NewBudget, number: &str) -> Result<CreatedBudget, AppError> {
        let mut tx = pool.begin().await?;
        let (customers_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO customers (customers_name, customers_city, customers_phone, customers_comment)
            VALUES ($1, $2, $3, $4)
            RETURNING customers_id
            "#,
        )
        .bind(&budget.customer.name)
        .bind(&budget.customer.city)
        .bind(&budget.customer.phone)
        .bind(&budget.customer.comment)
        .fetch_one(&mut *tx)
        .await?;

        for service_id in &budget.services_ids {
            sqlx::query(
                "INSERT INTO budgets (budgets_number, budgets_customers_id, budgets_services_id) VALUES ($1, $2, $3)",
            )
            .bind(number)
            .bind(customers_id)
            .bind(service_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!(
            customers_id,
            budgets_number = number,
            services = budget.services_ids.len(),
            "budget created"
        );
        Ok(CreatedBudget {
            customers_id,
            budgets_number: number.to_string(),
        })
    }

    /// All budget rows with their customer, newest number first. The number is compared as a
    /// string, which matches chronological order while every number has the same length.
    pub async fn list(pool: &PgPool) -> Result<Vec<BudgetRow>, AppError> {
        let rows = sqlx::query_as::<_, BudgetRow>(
            r#"
            SELECT
                b.budgets_id,
                b.budgets_number,
                b.budgets_customers_id,
                string_agg(b.budgets_services_id::text, ',') OVER (
                    PARTITION BY b.budgets_number, b.budgets_customers_id
                    ORDER BY b.budgets_id
                    ROWS BETWEEN UNBOUNDED PRECEDING AND UNBOUNDED FOLLOWING
                ) AS budgets_services_ids,
                b.budgets_status,
                c.customers_name,
                c.customers_city,
                c.customers_phone,
                c.customers_comment
            FROM budgets b
            JOIN customers c ON b.budgets_customers_id = c.customers_id
            ORDER BY b.budgets_number DESC, b.budgets_id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Set the status of one budget row. Returns the number of rows touched; zero for an
    /// unknown id is not an error.
    pub async fn update_status(pool: &PgPool, budgets_id: i32, status: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE budgets SET budgets_status = $1 WHERE budgets_id = $2")
            .bind(status)
            .bind(budgets_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(budgets_id, "status update matched no budget");
        }
        Ok(result.rows_affected())
    }
}
