//! Rentals repository: transactional writes over the rental record and
//! its equipment-instance association rows

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::rental::{CreateRental, EquipmentInstance, Rental},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Sqlite>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List rentals, optionally restricted to a start-date year/month
    pub async fn list(&self, year: Option<i32>, month: Option<u32>) -> AppResult<Vec<Rental>> {
        let mut conditions = Vec::new();
        if year.is_some() {
            conditions.push("strftime('%Y', start_date) = ?");
        }
        if month.is_some() {
            conditions.push("strftime('%m', start_date) = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM rentals {} ORDER BY start_date DESC, id DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Rental>(&query);
        if let Some(y) = year {
            builder = builder.bind(format!("{:04}", y));
        }
        if let Some(m) = month {
            builder = builder.bind(format!("{:02}", m));
        }

        Ok(builder.fetch_all(&self.pool).await?)
    }

    /// Get rental by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Rental> {
        sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", id)))
    }

    /// Equipment instances attached to a rental
    pub async fn get_instances(&self, rental_id: i64) -> AppResult<Vec<EquipmentInstance>> {
        let rows = sqlx::query_as::<_, EquipmentInstance>(
            r#"
            SELECT equipment_id, instance_number FROM rental_equipment_items
            WHERE rental_id = ? ORDER BY equipment_id, instance_number
            "#,
        )
        .bind(rental_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a rental and its instance rows in one transaction: a crash
    /// mid-write never leaves a rental with a partial equipment list.
    pub async fn create(
        &self,
        data: &CreateRental,
        instances: &[EquipmentInstance],
    ) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals
                (equipment_id, customer_name, customer_phone, start_date, end_date,
                 delivery, delivery_address, rental_price, delivery_price,
                 delivery_cost, source, comment, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'pending', ?)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.customer_name)
        .bind(&data.customer_phone)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.delivery)
        .bind(&data.delivery_address)
        .bind(data.rental_price)
        .bind(data.delivery_price)
        .bind(data.delivery_cost)
        .bind(&data.source)
        .bind(&data.comment)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for instance in instances {
            sqlx::query(
                r#"
                INSERT INTO rental_equipment_items (rental_id, equipment_id, instance_number)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(rental.id)
            .bind(instance.equipment_id)
            .bind(instance.instance_number)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(rental)
    }

    /// Persist a fully resolved rental state. When `replace_instances` is
    /// supplied, the whole association set is swapped (delete then insert)
    /// inside the same transaction as the parent row.
    pub async fn update(
        &self,
        rental: &Rental,
        replace_instances: Option<&[EquipmentInstance]>,
    ) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals SET
                equipment_id = ?, customer_name = ?, customer_phone = ?,
                start_date = ?, end_date = ?, delivery = ?, delivery_address = ?,
                rental_price = ?, delivery_price = ?, delivery_cost = ?,
                source = ?, comment = ?, status = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(rental.equipment_id)
        .bind(&rental.customer_name)
        .bind(&rental.customer_phone)
        .bind(rental.start_date)
        .bind(rental.end_date)
        .bind(rental.delivery)
        .bind(&rental.delivery_address)
        .bind(rental.rental_price)
        .bind(rental.delivery_price)
        .bind(rental.delivery_cost)
        .bind(&rental.source)
        .bind(&rental.comment)
        .bind(rental.status)
        .bind(rental.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", rental.id)))?;

        if let Some(instances) = replace_instances {
            sqlx::query("DELETE FROM rental_equipment_items WHERE rental_id = ?")
                .bind(rental.id)
                .execute(&mut *tx)
                .await?;

            for instance in instances {
                sqlx::query(
                    r#"
                    INSERT INTO rental_equipment_items (rental_id, equipment_id, instance_number)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(rental.id)
                .bind(instance.equipment_id)
                .bind(instance.instance_number)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a rental; instance rows go with it via FK cascade
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Rental {} not found", id)));
        }
        Ok(())
    }

    /// Rentals whose window covers `day` and that are not completed
    pub async fn count_active(&self, day: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM rentals
            WHERE status != 'completed' AND start_date <= ?1 AND end_date >= ?1
            "#,
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Rentals past their end date and not completed
    pub async fn count_overdue(&self, day: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rentals WHERE status != 'completed' AND end_date < ?",
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Rentals starting on `day`, for the daily summary
    pub async fn starting_on(&self, day: NaiveDate) -> AppResult<Vec<Rental>> {
        let rows = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE start_date = ? AND status != 'completed' ORDER BY id",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Rentals ending on `day`, for the daily summary
    pub async fn ending_on(&self, day: NaiveDate) -> AppResult<Vec<Rental>> {
        let rows = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE end_date = ? AND status != 'completed' ORDER BY id",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Rentals past their end date as of `day`, for the daily summary
    pub async fn overdue_as_of(&self, day: NaiveDate) -> AppResult<Vec<Rental>> {
        let rows = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE end_date < ? AND status != 'completed' ORDER BY end_date",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
