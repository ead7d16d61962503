//! Lockers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::locker::{CreateLocker, Locker, UpdateLocker},
};

#[derive(Clone)]
pub struct LockersRepository {
    pool: Pool<Sqlite>,
}

impl LockersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all lockers ordered by label
    pub async fn list(&self) -> AppResult<Vec<Locker>> {
        let rows = sqlx::query_as::<_, Locker>("SELECT * FROM lockers ORDER BY label")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get locker by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Locker> {
        sqlx::query_as::<_, Locker>("SELECT * FROM lockers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Locker {} not found", id)))
    }

    /// Create a locker
    pub async fn create(&self, data: &CreateLocker) -> AppResult<Locker> {
        let row = sqlx::query_as::<_, Locker>(
            r#"
            INSERT INTO lockers (label, size, monthly_price, is_occupied, notes, created_at)
            VALUES (?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.label)
        .bind(&data.size)
        .bind(data.monthly_price)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a locker, touching only the supplied fields
    pub async fn update(&self, id: i64, data: &UpdateLocker) -> AppResult<Locker> {
        let mut sets = Vec::new();

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ?", $name));
                }
            };
        }

        add_field!(data.label, "label");
        add_field!(data.size, "size");
        add_field!(data.monthly_price, "monthly_price");
        add_field!(data.is_occupied, "is_occupied");
        add_field!(data.customer_name, "customer_name");
        add_field!(data.customer_phone, "customer_phone");
        add_field!(data.rented_from, "rented_from");
        add_field!(data.rented_until, "rented_until");
        add_field!(data.notes, "notes");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE lockers SET {} WHERE id = ? RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Locker>(&query);
        if let Some(ref val) = data.label {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.size {
            builder = builder.bind(val);
        }
        if let Some(val) = data.monthly_price {
            builder = builder.bind(val);
        }
        if let Some(val) = data.is_occupied {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.customer_name {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.customer_phone {
            builder = builder.bind(val);
        }
        if let Some(val) = data.rented_from {
            builder = builder.bind(val);
        }
        if let Some(val) = data.rented_until {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.notes {
            builder = builder.bind(val);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Locker {} not found", id)))
    }

    /// Delete a locker
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM lockers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Locker {} not found", id)));
        }
        Ok(())
    }
}
