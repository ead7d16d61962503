//! Bookings repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingStatus, CreateBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Sqlite>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List bookings, optionally filtered by status and/or equipment
    pub async fn list(
        &self,
        status: Option<BookingStatus>,
        equipment_id: Option<i64>,
    ) -> AppResult<Vec<Booking>> {
        let mut conditions = Vec::new();
        if status.is_some() {
            conditions.push("status = ?");
        }
        if equipment_id.is_some() {
            conditions.push("equipment_id = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM bookings {} ORDER BY start_date DESC, id DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Booking>(&query);
        if let Some(s) = status {
            builder = builder.bind(s);
        }
        if let Some(eq) = equipment_id {
            builder = builder.bind(eq);
        }

        Ok(builder.fetch_all(&self.pool).await?)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Bookings for one equipment item in a non-terminal status. The
    /// caller decides which of them actually block, so the pending-hold
    /// policy stays out of the SQL.
    pub async fn candidates_for_conflict(&self, equipment_id: i64) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE equipment_id = ? AND status IN ('pending', 'confirmed', 'active')
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a booking in `pending` status
    pub async fn create(&self, data: &CreateBooking, total_price: f64) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (equipment_id, customer_name, customer_phone, customer_email,
                 start_date, end_date, total_price, status, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.customer_name)
        .bind(&data.customer_phone)
        .bind(&data.customer_email)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(total_price)
        .bind(&data.comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist a fully resolved booking state (service has already merged
    /// the update, re-checked conflicts and re-priced)
    pub async fn update(&self, booking: &Booking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                equipment_id = ?, customer_name = ?, customer_phone = ?,
                customer_email = ?, start_date = ?, end_date = ?,
                total_price = ?, status = ?, comment = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(booking.equipment_id)
        .bind(&booking.customer_name)
        .bind(&booking.customer_phone)
        .bind(&booking.customer_email)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_price)
        .bind(booking.status)
        .bind(&booking.comment)
        .bind(booking.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking.id)))
    }

    /// Set booking status only
    pub async fn set_status(&self, id: i64, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ? WHERE id = ? RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Delete a booking
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(())
    }

    /// Count bookings in `pending` status
    pub async fn count_pending(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Bookings whose date range covers `day`, for the daily summary
    pub async fn starting_on(&self, day: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE start_date = ? AND status IN ('confirmed', 'active') ORDER BY id",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
