//! Expenses repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::expense::{CreateExpense, Expense, UpdateExpense},
};

#[derive(Clone)]
pub struct ExpensesRepository {
    pool: Pool<Sqlite>,
}

impl ExpensesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List expenses, optionally restricted to a year/month
    pub async fn list(&self, year: Option<i32>, month: Option<u32>) -> AppResult<Vec<Expense>> {
        let mut conditions = Vec::new();
        if year.is_some() {
            conditions.push("strftime('%Y', date) = ?");
        }
        if month.is_some() {
            conditions.push("strftime('%m', date) = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM expenses {} ORDER BY date DESC, id DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Expense>(&query);
        if let Some(y) = year {
            builder = builder.bind(format!("{:04}", y));
        }
        if let Some(m) = month {
            builder = builder.bind(format!("{:02}", m));
        }

        Ok(builder.fetch_all(&self.pool).await?)
    }

    /// Get expense by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Expense> {
        sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense {} not found", id)))
    }

    /// Create an expense row
    pub async fn create(&self, data: &CreateExpense) -> AppResult<Expense> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount, date, category, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.description)
        .bind(data.amount)
        .bind(data.date)
        .bind(&data.category)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an expense, touching only the supplied fields
    pub async fn update(&self, id: i64, data: &UpdateExpense) -> AppResult<Expense> {
        let mut sets = Vec::new();

        if data.description.is_some() {
            sets.push("description = ?");
        }
        if data.amount.is_some() {
            sets.push("amount = ?");
        }
        if data.date.is_some() {
            sets.push("date = ?");
        }
        if data.category.is_some() {
            sets.push("category = ?");
        }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE expenses SET {} WHERE id = ? RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Expense>(&query);
        if let Some(ref val) = data.description {
            builder = builder.bind(val);
        }
        if let Some(val) = data.amount {
            builder = builder.bind(val);
        }
        if let Some(val) = data.date {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.category {
            builder = builder.bind(val);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Expense {} not found", id)))
    }

    /// Delete an expense
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Expense {} not found", id)));
        }
        Ok(())
    }
}
