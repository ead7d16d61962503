//! Equipment repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{Pool, Row, Sqlite};
use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all equipment ordered by name
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment
                (name, category, description, price_per_day, price_tiers,
                 quantity_total, images, specifications, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(&data.description)
        .bind(data.price_per_day)
        .bind(data.price_tiers.as_ref().map(Json))
        .bind(data.quantity_total.unwrap_or(1))
        .bind(Json(data.images.clone().unwrap_or_default()))
        .bind(data.specifications.as_ref().map(Json))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment, touching only the supplied fields
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = ?".to_string()];

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ?", $name));
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.category, "category");
        add_field!(data.description, "description");
        add_field!(data.price_per_day, "price_per_day");
        add_field!(data.price_tiers, "price_tiers");
        add_field!(data.quantity_total, "quantity_total");
        add_field!(data.images, "images");
        add_field!(data.specifications, "specifications");

        let query = format!(
            "UPDATE equipment SET {} WHERE id = ? RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        if let Some(ref val) = data.name {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.category {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.description {
            builder = builder.bind(val);
        }
        if let Some(val) = data.price_per_day {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.price_tiers {
            builder = builder.bind(Json(val));
        }
        if let Some(val) = data.quantity_total {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.images {
            builder = builder.bind(Json(val));
        }
        if let Some(ref val) = data.specifications {
            builder = builder.bind(Json(val));
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Units of one equipment item committed to rentals whose date window
    /// covers `today`. Counts the primary reference plus instance rows.
    pub async fn units_in_use(&self, equipment_id: i64, today: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT
                (SELECT COUNT(*) FROM rentals r
                 WHERE r.equipment_id = ?1 AND r.status != 'completed'
                   AND r.start_date <= ?2 AND r.end_date >= ?2)
              + (SELECT COUNT(*) FROM rental_equipment_items ri
                 JOIN rentals r2 ON ri.rental_id = r2.id
                 WHERE ri.equipment_id = ?1 AND r2.status != 'completed'
                   AND r2.start_date <= ?2 AND r2.end_date >= ?2)
            "#,
        )
        .bind(equipment_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Per-equipment unit usage map for `today`, for listing views
    pub async fn units_in_use_map(&self, today: NaiveDate) -> AppResult<HashMap<i64, i64>> {
        let rows = sqlx::query(
            r#"
            SELECT equipment_id, COUNT(*) as in_use FROM (
                SELECT r.equipment_id FROM rentals r
                WHERE r.status != 'completed'
                  AND r.start_date <= ?1 AND r.end_date >= ?1
                UNION ALL
                SELECT ri.equipment_id FROM rental_equipment_items ri
                JOIN rentals r2 ON ri.rental_id = r2.id
                WHERE r2.status != 'completed'
                  AND r2.start_date <= ?1 AND r2.end_date >= ?1
            )
            GROUP BY equipment_id
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("equipment_id"), row.get("in_use")))
            .collect())
    }
}
