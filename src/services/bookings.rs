//! Booking lifecycle: validation, availability, pricing, persistence

use validator::Validate;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::booking::{
        booking_duration_days, ranges_overlap, Booking, BookingStatus, CreateBooking,
        UpdateBooking,
    },
    repository::Repository,
    services::notifier::NotifierService,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    config: BookingConfig,
    notifier: NotifierService,
}

impl BookingsService {
    pub fn new(repository: Repository, config: BookingConfig, notifier: NotifierService) -> Self {
        Self {
            repository,
            config,
            notifier,
        }
    }

    /// List bookings for the admin back-office
    pub async fn list(
        &self,
        status: Option<BookingStatus>,
        equipment_id: Option<i64>,
    ) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list(status, equipment_id).await
    }

    /// Get booking by ID
    pub async fn get(&self, id: i64) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Whether an overlapping booking blocks the requested range.
    /// `exclude_booking_id` skips the record being edited.
    pub async fn has_conflict(
        &self,
        equipment_id: i64,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        exclude_booking_id: Option<i64>,
    ) -> AppResult<bool> {
        let candidates = self
            .repository
            .bookings
            .candidates_for_conflict(equipment_id)
            .await?;

        Ok(candidates.iter().any(|existing| {
            Some(existing.id) != exclude_booking_id
                && existing.status.blocks_new_requests(self.config.block_on_pending)
                && ranges_overlap(
                    start_date,
                    end_date,
                    existing.start_date,
                    existing.end_date,
                )
        }))
    }

    /// Create a booking from a public request: validate, check the date
    /// range, check availability, resolve the price, persist, notify.
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        data.validate()?;

        let duration_days = booking_duration_days(data.start_date, data.end_date)
            .ok_or_else(|| {
                AppError::Validation("end date must be after start date".to_string())
            })?;

        let equipment = self.repository.equipment.get_by_id(data.equipment_id).await?;

        if self
            .has_conflict(data.equipment_id, data.start_date, data.end_date, None)
            .await?
        {
            return Err(AppError::Conflict(
                "Equipment is already booked for the requested dates".to_string(),
            ));
        }

        let daily_rate = equipment.daily_rate(duration_days);
        let total_price = duration_days as f64 * daily_rate;

        let booking = self.repository.bookings.create(&data, total_price).await?;

        self.notifier.dispatch(format!(
            "New booking #{}: {} for {} ({} - {}), {} day(s), total {:.2}. Contact: {} {}",
            booking.id,
            equipment.name,
            booking.customer_name,
            booking.start_date,
            booking.end_date,
            duration_days,
            booking.total_price,
            booking.customer_phone,
            booking.customer_email.as_deref().unwrap_or("-"),
        ));

        Ok(booking)
    }

    /// Update a booking. Date or equipment changes re-run the conflict
    /// check (excluding this booking) and re-price the range.
    pub async fn update(&self, id: i64, data: UpdateBooking) -> AppResult<Booking> {
        data.validate()?;

        let existing = self.repository.bookings.get_by_id(id).await?;

        let mut merged = Booking {
            equipment_id: data.equipment_id.unwrap_or(existing.equipment_id),
            customer_name: data.customer_name.unwrap_or(existing.customer_name),
            customer_phone: data.customer_phone.unwrap_or(existing.customer_phone),
            customer_email: data.customer_email.or(existing.customer_email),
            start_date: data.start_date.unwrap_or(existing.start_date),
            end_date: data.end_date.unwrap_or(existing.end_date),
            status: data.status.unwrap_or(existing.status),
            comment: data.comment.or(existing.comment),
            ..existing
        };

        let range_changed = merged.equipment_id != existing.equipment_id
            || merged.start_date != existing.start_date
            || merged.end_date != existing.end_date;

        if range_changed {
            let duration_days = booking_duration_days(merged.start_date, merged.end_date)
                .ok_or_else(|| {
                    AppError::Validation("end date must be after start date".to_string())
                })?;

            let equipment = self
                .repository
                .equipment
                .get_by_id(merged.equipment_id)
                .await?;

            if self
                .has_conflict(merged.equipment_id, merged.start_date, merged.end_date, Some(id))
                .await?
            {
                return Err(AppError::Conflict(
                    "Equipment is already booked for the requested dates".to_string(),
                ));
            }

            merged.total_price = duration_days as f64 * equipment.daily_rate(duration_days);
        }

        self.repository.bookings.update(&merged).await
    }

    /// Admin status transition
    pub async fn set_status(&self, id: i64, status: BookingStatus) -> AppResult<Booking> {
        // Confirming a booking must not stack it onto another confirmed one
        if status.blocks_new_requests(false) {
            let booking = self.repository.bookings.get_by_id(id).await?;
            if self
                .has_conflict(
                    booking.equipment_id,
                    booking.start_date,
                    booking.end_date,
                    Some(id),
                )
                .await?
            {
                return Err(AppError::Conflict(
                    "Another confirmed booking overlaps these dates".to_string(),
                ));
            }
        }
        self.repository.bookings.set_status(id, status).await
    }

    /// Delete a booking
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }
}
