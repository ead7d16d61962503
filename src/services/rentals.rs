//! Rental lifecycle and multi-instance composition

use sqlx::Row;
use validator::Validate;

use crate::{
    api::customers::CustomerSummary,
    error::{AppError, AppResult},
    models::rental::{CreateRental, Rental, RentalDetails, UpdateRental},
    repository::Repository,
    services::business_today,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
    utc_offset_hours: i32,
}

impl RentalsService {
    pub fn new(repository: Repository, utc_offset_hours: i32) -> Self {
        Self {
            repository,
            utc_offset_hours,
        }
    }

    /// List rentals with derived statuses, optionally by start month
    pub async fn list(&self, year: Option<i32>, month: Option<u32>) -> AppResult<Vec<RentalDetails>> {
        let today = business_today(self.utc_offset_hours);
        let rentals = self.repository.rentals.list(year, month).await?;

        let mut result = Vec::with_capacity(rentals.len());
        for rental in rentals {
            let instances = self.repository.rentals.get_instances(rental.id).await?;
            result.push(RentalDetails::new(rental, instances, today));
        }
        Ok(result)
    }

    /// Get one rental with derived status
    pub async fn get(&self, id: i64) -> AppResult<RentalDetails> {
        let today = business_today(self.utc_offset_hours);
        let rental = self.repository.rentals.get_by_id(id).await?;
        let instances = self.repository.rentals.get_instances(id).await?;
        Ok(RentalDetails::new(rental, instances, today))
    }

    /// Create a rental together with its equipment-instance set
    pub async fn create(&self, data: CreateRental) -> AppResult<RentalDetails> {
        data.validate()?;

        if data.end_date < data.start_date {
            return Err(AppError::Validation(
                "end date must not be before start date".to_string(),
            ));
        }

        // Primary equipment must exist; instance rows are FK-checked
        self.repository.equipment.get_by_id(data.equipment_id).await?;

        let instances = data.instances();
        let rental = self.repository.rentals.create(&data, &instances).await?;

        let today = business_today(self.utc_offset_hours);
        let instances = self.repository.rentals.get_instances(rental.id).await?;
        Ok(RentalDetails::new(rental, instances, today))
    }

    /// Update a rental; a supplied instance list replaces the whole set
    pub async fn update(&self, id: i64, data: UpdateRental) -> AppResult<RentalDetails> {
        data.validate()?;

        let existing = self.repository.rentals.get_by_id(id).await?;

        let merged = Rental {
            equipment_id: data.equipment_id.unwrap_or(existing.equipment_id),
            customer_name: data.customer_name.clone().unwrap_or(existing.customer_name),
            customer_phone: data.customer_phone.clone().unwrap_or(existing.customer_phone),
            start_date: data.start_date.unwrap_or(existing.start_date),
            end_date: data.end_date.unwrap_or(existing.end_date),
            delivery: data.delivery.unwrap_or(existing.delivery),
            delivery_address: data.delivery_address.clone().or(existing.delivery_address),
            rental_price: data.rental_price.unwrap_or(existing.rental_price),
            delivery_price: data.delivery_price.unwrap_or(existing.delivery_price),
            delivery_cost: data.delivery_cost.unwrap_or(existing.delivery_cost),
            source: data.source.clone().or(existing.source),
            comment: data.comment.clone().or(existing.comment),
            status: data.status.unwrap_or(existing.status),
            ..existing
        };

        if merged.end_date < merged.start_date {
            return Err(AppError::Validation(
                "end date must not be before start date".to_string(),
            ));
        }

        if merged.equipment_id != existing.equipment_id {
            self.repository.equipment.get_by_id(merged.equipment_id).await?;
        }

        let replacement = data.instances();
        let rental = self
            .repository
            .rentals
            .update(&merged, replacement.as_deref())
            .await?;

        let today = business_today(self.utc_offset_hours);
        let instances = self.repository.rentals.get_instances(id).await?;
        Ok(RentalDetails::new(rental, instances, today))
    }

    /// Delete a rental
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.rentals.delete(id).await
    }

    /// Customers aggregated from rentals and bookings, grouped by phone
    pub async fn list_customers(&self) -> AppResult<Vec<CustomerSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT
                customer_phone as phone,
                MAX(customer_name) as name,
                SUM(is_rental) as rentals_count,
                SUM(1 - is_rental) as bookings_count,
                SUM(amount) as total_spent,
                MAX(date) as last_date
            FROM (
                SELECT customer_phone, customer_name, 1 as is_rental,
                       rental_price + delivery_price as amount, start_date as date
                FROM rentals
                UNION ALL
                SELECT customer_phone, customer_name, 0 as is_rental,
                       total_price as amount, start_date as date
                FROM bookings
            )
            GROUP BY customer_phone
            ORDER BY last_date DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CustomerSummary {
                phone: row.get("phone"),
                name: row.get("name"),
                rentals_count: row.get("rentals_count"),
                bookings_count: row.get("bookings_count"),
                total_spent: row.get("total_spent"),
                last_date: row.get("last_date"),
            })
            .collect())
    }
}
