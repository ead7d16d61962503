//! Booking model, date-range overlap and duration rules

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Booking lifecycle status. Transitions are admin-driven.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this status blocks overlapping requests.
    /// Pending bookings only block when the optimistic-hold policy is
    /// switched off via `booking.block_on_pending`.
    pub fn blocks_new_requests(self, block_on_pending: bool) -> bool {
        match self {
            BookingStatus::Confirmed | BookingStatus::Active => true,
            BookingStatus::Pending => block_on_pending,
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }
}

/// Booking record. Start and end are inclusive calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i64,
    pub equipment_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub equipment_id: i64,
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub customer_name: String,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub customer_phone: String,
    #[validate(email(message = "invalid email address"))]
    pub customer_email: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(max = 1000, message = "comment too long"))]
    pub comment: Option<String>,
}

/// Admin booking update. Date or equipment changes re-run the conflict
/// check (excluding this booking) and re-price the range.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBooking {
    pub equipment_id: Option<i64>,
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub customer_name: Option<String>,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub customer_phone: Option<String>,
    #[validate(email(message = "invalid email address"))]
    pub customer_email: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
    #[validate(length(max = 1000, message = "comment too long"))]
    pub comment: Option<String>,
}

/// Inclusive-inclusive date range overlap: covers full containment,
/// partial overlap on either edge, and exact match.
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && e1 >= s2
}

/// Whole-day rental duration. `None` when the range is empty or
/// reversed: same-day and negative ranges never reach pricing.
pub fn booking_duration_days(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    let days = (end - start).num_days();
    if days > 0 {
        Some(days)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_overlap_on_trailing_edge() {
        // Confirmed booking 2025-03-10..2025-03-15; new request 14..20
        // overlaps on the 14th and 15th.
        assert!(ranges_overlap(
            d("2025-03-14"),
            d("2025-03-20"),
            d("2025-03-10"),
            d("2025-03-15"),
        ));
    }

    #[test]
    fn test_overlap_containment_and_exact_match() {
        assert!(ranges_overlap(d("2025-03-11"), d("2025-03-12"), d("2025-03-10"), d("2025-03-15")));
        assert!(ranges_overlap(d("2025-03-10"), d("2025-03-15"), d("2025-03-10"), d("2025-03-15")));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!ranges_overlap(d("2025-03-16"), d("2025-03-20"), d("2025-03-10"), d("2025-03-15")));
        assert!(!ranges_overlap(d("2025-03-01"), d("2025-03-09"), d("2025-03-10"), d("2025-03-15")));
    }

    #[test]
    fn test_single_shared_day_conflicts() {
        assert!(ranges_overlap(d("2025-03-15"), d("2025-03-20"), d("2025-03-10"), d("2025-03-15")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            ("2025-03-14", "2025-03-20", "2025-03-10", "2025-03-15"),
            ("2025-03-16", "2025-03-20", "2025-03-10", "2025-03-15"),
            ("2025-03-10", "2025-03-15", "2025-03-10", "2025-03-15"),
        ];
        for (s1, e1, s2, e2) in cases {
            assert_eq!(
                ranges_overlap(d(s1), d(e1), d(s2), d(e2)),
                ranges_overlap(d(s2), d(e2), d(s1), d(e1)),
            );
        }
    }

    #[test]
    fn test_duration_counts_whole_days() {
        assert_eq!(booking_duration_days(d("2025-03-10"), d("2025-03-15")), Some(5));
        assert_eq!(booking_duration_days(d("2025-03-10"), d("2025-03-11")), Some(1));
    }

    #[test]
    fn test_same_day_and_reversed_ranges_rejected() {
        assert_eq!(booking_duration_days(d("2025-03-10"), d("2025-03-10")), None);
        assert_eq!(booking_duration_days(d("2025-03-15"), d("2025-03-10")), None);
    }

    #[test]
    fn test_blocking_statuses() {
        assert!(BookingStatus::Confirmed.blocks_new_requests(false));
        assert!(BookingStatus::Active.blocks_new_requests(false));
        assert!(!BookingStatus::Pending.blocks_new_requests(false));
        assert!(BookingStatus::Pending.blocks_new_requests(true));
        assert!(!BookingStatus::Cancelled.blocks_new_requests(true));
        assert!(!BookingStatus::Completed.blocks_new_requests(true));
    }
}
