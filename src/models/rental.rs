//! Rental model, derived status and multi-instance composition

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Rental status. The stored value is admin-set; listings and detail
/// views show the value derived from the dates (see [`derive_status`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Active,
    Completed,
    Overdue,
}

/// Compute the status a rental displays as of `today`.
///
/// `completed` is sticky: it is only reached by an explicit write and
/// always wins over the dates. Otherwise the dates decide: past the end
/// date the rental is overdue, inside the window it is active, before
/// the window it is pending.
pub fn derive_status(
    stored: RentalStatus,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> RentalStatus {
    if stored == RentalStatus::Completed {
        RentalStatus::Completed
    } else if today > end {
        RentalStatus::Overdue
    } else if start <= today {
        RentalStatus::Active
    } else {
        RentalStatus::Pending
    }
}

/// Rental record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rental {
    pub id: i64,
    /// Primary equipment reference
    pub equipment_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery: bool,
    pub delivery_address: Option<String>,
    pub rental_price: f64,
    pub delivery_price: f64,
    pub delivery_cost: f64,
    /// Acquisition channel (site, phone, walk-in, ...)
    pub source: Option<String>,
    pub comment: Option<String>,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

/// One physical unit of a catalog item attached to a rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentInstance {
    pub equipment_id: i64,
    pub instance_number: i64,
}

/// Rental with derived status and its equipment instances, for display.
/// `status` is the derived value; `stored_status` is the persisted one.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RentalDetails {
    pub id: i64,
    pub equipment_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delivery: bool,
    pub delivery_address: Option<String>,
    pub rental_price: f64,
    pub delivery_price: f64,
    pub delivery_cost: f64,
    pub source: Option<String>,
    pub comment: Option<String>,
    /// Derived from the dates on every read; what listings reflect
    pub status: RentalStatus,
    /// Persisted status as last set by an admin
    pub stored_status: RentalStatus,
    pub equipment_instances: Vec<EquipmentInstance>,
    pub created_at: DateTime<Utc>,
}

impl RentalDetails {
    pub fn new(rental: Rental, instances: Vec<EquipmentInstance>, today: NaiveDate) -> Self {
        let derived = derive_status(rental.status, rental.start_date, rental.end_date, today);
        Self {
            id: rental.id,
            equipment_id: rental.equipment_id,
            customer_name: rental.customer_name,
            customer_phone: rental.customer_phone,
            start_date: rental.start_date,
            end_date: rental.end_date,
            delivery: rental.delivery,
            delivery_address: rental.delivery_address,
            rental_price: rental.rental_price,
            delivery_price: rental.delivery_price,
            delivery_cost: rental.delivery_cost,
            source: rental.source,
            comment: rental.comment,
            status: derived,
            stored_status: rental.status,
            equipment_instances: instances,
            created_at: rental.created_at,
        }
    }
}

/// Create rental request. Instances may come as explicit
/// `(equipment_id, instance_number)` pairs or, from legacy callers, as a
/// bare list of equipment ids.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRental {
    pub equipment_id: i64,
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub customer_name: String,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub customer_phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub delivery: bool,
    pub delivery_address: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub rental_price: f64,
    #[serde(default)]
    pub delivery_price: f64,
    #[serde(default)]
    pub delivery_cost: f64,
    pub source: Option<String>,
    #[validate(length(max = 1000, message = "comment too long"))]
    pub comment: Option<String>,
    pub equipment_instances: Option<Vec<EquipmentInstance>>,
    /// Legacy payload shape: ids only, instance number defaults to 1
    pub equipment_ids: Option<Vec<i64>>,
}

impl CreateRental {
    /// Normalized instance set: explicit pairs win over the legacy list.
    pub fn instances(&self) -> Vec<EquipmentInstance> {
        normalize_instances(&self.equipment_instances, &self.equipment_ids)
    }
}

/// Admin rental update. `equipment_instances: Some([])` clears the set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRental {
    pub equipment_id: Option<i64>,
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub customer_name: Option<String>,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub customer_phone: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub delivery: Option<bool>,
    pub delivery_address: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub rental_price: Option<f64>,
    pub delivery_price: Option<f64>,
    pub delivery_cost: Option<f64>,
    pub source: Option<String>,
    #[validate(length(max = 1000, message = "comment too long"))]
    pub comment: Option<String>,
    pub status: Option<RentalStatus>,
    pub equipment_instances: Option<Vec<EquipmentInstance>>,
    pub equipment_ids: Option<Vec<i64>>,
}

impl UpdateRental {
    /// Normalized replacement set, `None` when the request leaves the
    /// associations untouched.
    pub fn instances(&self) -> Option<Vec<EquipmentInstance>> {
        if self.equipment_instances.is_none() && self.equipment_ids.is_none() {
            return None;
        }
        Some(normalize_instances(&self.equipment_instances, &self.equipment_ids))
    }
}

fn normalize_instances(
    explicit: &Option<Vec<EquipmentInstance>>,
    legacy_ids: &Option<Vec<i64>>,
) -> Vec<EquipmentInstance> {
    if let Some(pairs) = explicit {
        return pairs.clone();
    }
    legacy_ids
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|&equipment_id| EquipmentInstance {
            equipment_id,
            instance_number: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_active_inside_window() {
        // stored pending, started yesterday, ends tomorrow -> active
        let status = derive_status(
            RentalStatus::Pending,
            d("2025-06-09"),
            d("2025-06-11"),
            d("2025-06-10"),
        );
        assert_eq!(status, RentalStatus::Active);
    }

    #[test]
    fn test_window_edges_are_active() {
        assert_eq!(
            derive_status(RentalStatus::Pending, d("2025-06-10"), d("2025-06-12"), d("2025-06-10")),
            RentalStatus::Active,
        );
        assert_eq!(
            derive_status(RentalStatus::Pending, d("2025-06-08"), d("2025-06-10"), d("2025-06-10")),
            RentalStatus::Active,
        );
    }

    #[test]
    fn test_overdue_after_end() {
        assert_eq!(
            derive_status(RentalStatus::Active, d("2025-06-01"), d("2025-06-05"), d("2025-06-10")),
            RentalStatus::Overdue,
        );
    }

    #[test]
    fn test_pending_before_start() {
        assert_eq!(
            derive_status(RentalStatus::Pending, d("2025-06-15"), d("2025-06-20"), d("2025-06-10")),
            RentalStatus::Pending,
        );
    }

    #[test]
    fn test_completed_is_sticky() {
        // Dates say overdue, stored status wins
        assert_eq!(
            derive_status(RentalStatus::Completed, d("2025-06-01"), d("2025-06-05"), d("2025-06-10")),
            RentalStatus::Completed,
        );
        // Dates say active, stored status still wins
        assert_eq!(
            derive_status(RentalStatus::Completed, d("2025-06-09"), d("2025-06-11"), d("2025-06-10")),
            RentalStatus::Completed,
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let args = (RentalStatus::Pending, d("2025-06-09"), d("2025-06-11"), d("2025-06-10"));
        let first = derive_status(args.0, args.1, args.2, args.3);
        let second = derive_status(args.0, args.1, args.2, args.3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_ids_default_to_instance_one() {
        let create = CreateRental {
            equipment_id: 7,
            customer_name: "Test".into(),
            customer_phone: "+70000000000".into(),
            start_date: d("2025-06-01"),
            end_date: d("2025-06-03"),
            delivery: false,
            delivery_address: None,
            rental_price: 1000.0,
            delivery_price: 0.0,
            delivery_cost: 0.0,
            source: None,
            comment: None,
            equipment_instances: None,
            equipment_ids: Some(vec![7, 9]),
        };
        assert_eq!(
            create.instances(),
            vec![
                EquipmentInstance { equipment_id: 7, instance_number: 1 },
                EquipmentInstance { equipment_id: 9, instance_number: 1 },
            ],
        );
    }

    #[test]
    fn test_explicit_instances_win_over_legacy_ids() {
        let create = CreateRental {
            equipment_id: 7,
            customer_name: "Test".into(),
            customer_phone: "+70000000000".into(),
            start_date: d("2025-06-01"),
            end_date: d("2025-06-03"),
            delivery: false,
            delivery_address: None,
            rental_price: 1000.0,
            delivery_price: 0.0,
            delivery_cost: 0.0,
            source: None,
            comment: None,
            equipment_instances: Some(vec![
                EquipmentInstance { equipment_id: 7, instance_number: 1 },
                EquipmentInstance { equipment_id: 7, instance_number: 2 },
            ]),
            equipment_ids: Some(vec![99]),
        };
        assert_eq!(
            create.instances(),
            vec![
                EquipmentInstance { equipment_id: 7, instance_number: 1 },
                EquipmentInstance { equipment_id: 7, instance_number: 2 },
            ],
        );
    }

    #[test]
    fn test_update_instance_semantics() {
        let mut update = UpdateRental {
            equipment_id: None,
            customer_name: None,
            customer_phone: None,
            start_date: None,
            end_date: None,
            delivery: None,
            delivery_address: None,
            rental_price: None,
            delivery_price: None,
            delivery_cost: None,
            source: None,
            comment: None,
            status: None,
            equipment_instances: None,
            equipment_ids: None,
        };
        // Nothing supplied: associations untouched
        assert_eq!(update.instances(), None);
        // Empty list supplied: clears the set
        update.equipment_instances = Some(vec![]);
        assert_eq!(update.instances(), Some(vec![]));
    }
}
