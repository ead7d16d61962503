//! Equipment catalog service

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::booking::booking_duration_days,
    models::equipment::{CreateEquipment, Equipment, EquipmentDetails, UpdateEquipment},
    repository::Repository,
    services::business_today,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    utc_offset_hours: i32,
}

impl CatalogService {
    pub fn new(repository: Repository, utc_offset_hours: i32) -> Self {
        Self {
            repository,
            utc_offset_hours,
        }
    }

    /// List the catalog with availability derived from today's rentals
    pub async fn list(&self) -> AppResult<Vec<EquipmentDetails>> {
        let today = business_today(self.utc_offset_hours);
        let equipment = self.repository.equipment.list().await?;
        let in_use = self.repository.equipment.units_in_use_map(today).await?;

        Ok(equipment
            .into_iter()
            .map(|item| {
                let used = in_use.get(&item.id).copied().unwrap_or(0);
                EquipmentDetails::new(item, used)
            })
            .collect())
    }

    /// Get one catalog entry with derived availability
    pub async fn get(&self, id: i64) -> AppResult<EquipmentDetails> {
        let today = business_today(self.utc_offset_hours);
        let equipment = self.repository.equipment.get_by_id(id).await?;
        let used = self.repository.equipment.units_in_use(id, today).await?;
        Ok(EquipmentDetails::new(equipment, used))
    }

    /// Price quote for a date range: resolved duration, per-day rate
    /// and total, without touching any booking state.
    pub async fn quote(
        &self,
        id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<(i64, f64, f64)> {
        let duration_days = booking_duration_days(start_date, end_date).ok_or_else(|| {
            AppError::Validation("end date must be after start date".to_string())
        })?;
        let equipment = self.repository.equipment.get_by_id(id).await?;
        let daily_rate = equipment.daily_rate(duration_days);
        Ok((duration_days, daily_rate, duration_days as f64 * daily_rate))
    }

    /// Create a catalog entry
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        self.repository.equipment.create(&data).await
    }

    /// Update a catalog entry
    pub async fn update(&self, id: i64, data: UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        self.repository.equipment.update(id, &data).await
    }

    /// Delete a catalog entry
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
