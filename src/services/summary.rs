//! Daily summary scheduler.
//!
//! Fires once per calendar day at a configured wall-clock time in a
//! fixed UTC offset, scans the rental book and dispatches one summary
//! message. The scan is read-only and idempotent: running it twice on
//! the same day resends the same text.

use chrono::{Duration, FixedOffset, NaiveDate, Utc};

use crate::{
    config::SummaryConfig,
    error::AppResult,
    models::booking::Booking,
    models::rental::Rental,
    repository::Repository,
    services::notifier::NotifierService,
};

#[derive(Clone)]
pub struct SummaryService {
    repository: Repository,
    notifier: NotifierService,
    config: SummaryConfig,
}

impl SummaryService {
    pub fn new(repository: Repository, notifier: NotifierService, config: SummaryConfig) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.config.utc_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// Run forever, firing at the configured local time each day.
    /// Spawned from `main` when `summary.enabled` is set.
    pub async fn run(self) {
        let offset = self.offset();
        let hour = self.config.hour.min(23);
        let minute = self.config.minute.min(59);

        loop {
            let now = Utc::now().with_timezone(&offset).naive_local();
            let mut fire_at = now
                .date()
                .and_hms_opt(hour, minute, 0)
                .expect("clamped time is valid");
            if now >= fire_at {
                fire_at += Duration::days(1);
            }

            let wait = (fire_at - now)
                .to_std()
                .unwrap_or(std::time::Duration::from_secs(60));
            tracing::debug!("Next daily summary in {}s", wait.as_secs());
            tokio::time::sleep(wait).await;

            let day = Utc::now().with_timezone(&offset).date_naive();
            if let Err(e) = self.send_daily_summary(day).await {
                tracing::error!("Daily summary failed: {}", e);
            }
        }
    }

    /// Scan the rental and booking books for `day` and dispatch one
    /// summary message
    pub async fn send_daily_summary(&self, day: NaiveDate) -> AppResult<()> {
        let starting = self.repository.rentals.starting_on(day).await?;
        let ending = self.repository.rentals.ending_on(day).await?;
        let overdue = self.repository.rentals.overdue_as_of(day).await?;
        let bookings = self.repository.bookings.starting_on(day).await?;

        let text = format_summary(day, &starting, &ending, &overdue, &bookings);
        self.notifier.send(&text).await
    }
}

/// Render the summary text for one day
pub fn format_summary(
    day: NaiveDate,
    starting: &[Rental],
    ending: &[Rental],
    overdue: &[Rental],
    bookings: &[Booking],
) -> String {
    let mut lines = vec![format!("Summary for {}", day)];

    lines.push(format!("Starting today: {}", starting.len()));
    for rental in starting {
        lines.push(format!(
            "  #{} {} until {}",
            rental.id, rental.customer_name, rental.end_date
        ));
    }

    lines.push(format!("Ending today: {}", ending.len()));
    for rental in ending {
        lines.push(format!(
            "  #{} {} ({})",
            rental.id, rental.customer_name, rental.customer_phone
        ));
    }

    lines.push(format!("Overdue: {}", overdue.len()));
    for rental in overdue {
        lines.push(format!(
            "  #{} {} ({}), due {}",
            rental.id, rental.customer_name, rental.customer_phone, rental.end_date
        ));
    }

    lines.push(format!("Bookings starting today: {}", bookings.len()));
    for booking in bookings {
        lines.push(format!(
            "  #{} {} ({}) until {}",
            booking.id, booking.customer_name, booking.customer_phone, booking.end_date
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rental::RentalStatus;

    fn rental(id: i64, name: &str, end: &str) -> Rental {
        Rental {
            id,
            equipment_id: 1,
            customer_name: name.into(),
            customer_phone: "+70000000000".into(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: end.parse().unwrap(),
            delivery: false,
            delivery_address: None,
            rental_price: 1000.0,
            delivery_price: 0.0,
            delivery_cost: 0.0,
            source: None,
            comment: None,
            status: RentalStatus::Pending,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summary_counts_sections() {
        let day: NaiveDate = "2025-06-10".parse().unwrap();
        let starting = vec![rental(1, "Ivanov", "2025-06-12")];
        let overdue = vec![rental(2, "Petrov", "2025-06-08")];

        let text = format_summary(day, &starting, &[], &overdue, &[]);
        assert!(text.contains("Summary for 2025-06-10"));
        assert!(text.contains("Starting today: 1"));
        assert!(text.contains("Ending today: 0"));
        assert!(text.contains("Overdue: 1"));
        assert!(text.contains("Bookings starting today: 0"));
        assert!(text.contains("#2 Petrov"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let day: NaiveDate = "2025-06-10".parse().unwrap();
        let starting = vec![rental(1, "Ivanov", "2025-06-12")];
        let first = format_summary(day, &starting, &[], &[], &[]);
        let second = format_summary(day, &starting, &[], &[], &[]);
        assert_eq!(first, second);
    }
}
