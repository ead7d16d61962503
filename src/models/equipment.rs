//! Equipment model and tiered pricing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

/// Per-day rates keyed by minimum rental duration. Longer rentals get the
/// rate of the highest threshold they reach; absent thresholds are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceTiers {
    #[serde(rename = "1", skip_serializing_if = "Option::is_none")]
    pub day_1: Option<f64>,
    #[serde(rename = "2", skip_serializing_if = "Option::is_none")]
    pub day_2: Option<f64>,
    #[serde(rename = "3", skip_serializing_if = "Option::is_none")]
    pub day_3: Option<f64>,
    #[serde(rename = "7", skip_serializing_if = "Option::is_none")]
    pub day_7: Option<f64>,
    #[serde(rename = "14", skip_serializing_if = "Option::is_none")]
    pub day_14: Option<f64>,
    #[serde(rename = "30", skip_serializing_if = "Option::is_none")]
    pub day_30: Option<f64>,
}

impl PriceTiers {
    /// Resolve the per-day rate for a rental of `duration_days`.
    ///
    /// Thresholds are scanned in descending order; the first one that is
    /// less than or equal to the duration wins. Returns `None` when no
    /// threshold matches (caller falls back to the flat rate).
    pub fn rate_for(&self, duration_days: i64) -> Option<f64> {
        let thresholds = [
            (30, self.day_30),
            (14, self.day_14),
            (7, self.day_7),
            (3, self.day_3),
            (2, self.day_2),
            (1, self.day_1),
        ];
        thresholds
            .iter()
            .find(|(days, rate)| *days <= duration_days && rate.is_some())
            .and_then(|(_, rate)| *rate)
    }
}

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Flat per-day rate, used when no tier matches
    pub price_per_day: f64,
    /// Optional duration-tiered rate schedule
    #[schema(value_type = Option<PriceTiers>)]
    pub price_tiers: Option<Json<PriceTiers>>,
    /// Number of physical units owned
    pub quantity_total: i64,
    /// Image paths, managed externally
    #[schema(value_type = Vec<String>)]
    pub images: Json<Vec<String>>,
    /// Free-form specification map (label -> value)
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<Json<HashMap<String, String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    /// Resolve the per-day rate for a rental of `duration_days`.
    /// Pure computation over the record's tier schedule.
    pub fn daily_rate(&self, duration_days: i64) -> f64 {
        self.price_tiers
            .as_ref()
            .and_then(|tiers| tiers.rate_for(duration_days))
            .unwrap_or(self.price_per_day)
    }
}

/// Equipment with availability derived from today's active rentals
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentDetails {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price_per_day: f64,
    #[schema(value_type = Option<PriceTiers>)]
    pub price_tiers: Option<Json<PriceTiers>>,
    pub quantity_total: i64,
    /// Units not committed to a rental whose date window covers today.
    /// Always within `0..=quantity_total`.
    pub quantity_available: i64,
    #[schema(value_type = Vec<String>)]
    pub images: Json<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<Json<HashMap<String, String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EquipmentDetails {
    pub fn new(equipment: Equipment, units_in_use: i64) -> Self {
        let available = (equipment.quantity_total - units_in_use).clamp(0, equipment.quantity_total);
        Self {
            id: equipment.id,
            name: equipment.name,
            category: equipment.category,
            description: equipment.description,
            price_per_day: equipment.price_per_day,
            price_tiers: equipment.price_tiers,
            quantity_total: equipment.quantity_total,
            quantity_available: available,
            images: equipment.images,
            specifications: equipment.specifications,
            created_at: equipment.created_at,
            updated_at: equipment.updated_at,
        }
    }
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price_per_day: f64,
    pub price_tiers: Option<PriceTiers>,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity_total: Option<i64>,
    pub images: Option<Vec<String>>,
    pub specifications: Option<HashMap<String, String>>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price_per_day: Option<f64>,
    pub price_tiers: Option<PriceTiers>,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity_total: Option<i64>,
    pub images: Option<Vec<String>>,
    pub specifications: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(day_1: f64, day_3: f64, day_7: f64, day_14: f64, day_30: f64) -> PriceTiers {
        PriceTiers {
            day_1: Some(day_1),
            day_2: None,
            day_3: Some(day_3),
            day_7: Some(day_7),
            day_14: Some(day_14),
            day_30: Some(day_30),
        }
    }

    #[test]
    fn test_five_day_rental_uses_three_day_tier() {
        let t = tiers(1000.0, 800.0, 600.0, 500.0, 400.0);
        assert_eq!(t.rate_for(5), Some(800.0));
        // total = duration * rate
        assert_eq!(5.0 * t.rate_for(5).unwrap(), 4000.0);
    }

    #[test]
    fn test_exact_thresholds() {
        let t = tiers(1000.0, 800.0, 600.0, 500.0, 400.0);
        assert_eq!(t.rate_for(1), Some(1000.0));
        assert_eq!(t.rate_for(3), Some(800.0));
        assert_eq!(t.rate_for(7), Some(600.0));
        assert_eq!(t.rate_for(14), Some(500.0));
        assert_eq!(t.rate_for(30), Some(400.0));
        assert_eq!(t.rate_for(90), Some(400.0));
    }

    #[test]
    fn test_missing_tier_is_skipped() {
        let t = tiers(1000.0, 800.0, 600.0, 500.0, 400.0);
        // No 2-day tier configured: a 2-day rental falls through to 1-day
        assert_eq!(t.rate_for(2), Some(1000.0));
    }

    #[test]
    fn test_rate_is_monotonically_non_increasing() {
        let t = tiers(1000.0, 800.0, 600.0, 500.0, 400.0);
        let mut prev = f64::MAX;
        for d in 1..=60 {
            let rate = t.rate_for(d).unwrap();
            assert!(rate <= prev, "rate went up at {} days", d);
            prev = rate;
        }
    }

    #[test]
    fn test_flat_rate_fallback() {
        let equipment = Equipment {
            id: 1,
            name: "Generator".into(),
            category: None,
            description: None,
            price_per_day: 1500.0,
            price_tiers: None,
            quantity_total: 2,
            images: Json(vec![]),
            specifications: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(equipment.daily_rate(1), 1500.0);
        assert_eq!(equipment.daily_rate(14), 1500.0);
    }

    #[test]
    fn test_availability_clamped_to_total() {
        let equipment = Equipment {
            id: 1,
            name: "Drill".into(),
            category: None,
            description: None,
            price_per_day: 300.0,
            price_tiers: None,
            quantity_total: 2,
            images: Json(vec![]),
            specifications: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(EquipmentDetails::new(equipment.clone(), 0).quantity_available, 2);
        assert_eq!(EquipmentDetails::new(equipment.clone(), 1).quantity_available, 1);
        // Over-committed data never reports negative availability
        assert_eq!(EquipmentDetails::new(equipment, 5).quantity_available, 0);
    }
}
