//! Revenue and expense statistics

use chrono::Datelike;
use sqlx::Row;
use std::collections::HashMap;

use crate::{
    api::stats::{MonthlySummary, StatsResponse},
    error::AppResult,
    repository::Repository,
    services::business_today,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    utc_offset_hours: i32,
}

impl StatsService {
    pub fn new(repository: Repository, utc_offset_hours: i32) -> Self {
        Self {
            repository,
            utc_offset_hours,
        }
    }

    /// Headline counts plus month-to-date money figures
    pub async fn overview(&self) -> AppResult<StatsResponse> {
        let pool = &self.repository.pool;
        let today = business_today(self.utc_offset_hours);
        let year = format!("{:04}", today.year());
        let month = format!("{:02}", today.month());

        let equipment_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(pool)
            .await?;

        let active_rentals = self.repository.rentals.count_active(today).await?;
        let overdue_rentals = self.repository.rentals.count_overdue(today).await?;
        let pending_bookings = self.repository.bookings.count_pending().await?;

        let month_revenue: f64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(rental_price + delivery_price), 0.0) FROM rentals
            WHERE strftime('%Y', start_date) = ? AND strftime('%m', start_date) = ?
            "#,
        )
        .bind(&year)
        .bind(&month)
        .fetch_one(pool)
        .await?;

        let month_expenses: f64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0.0) FROM expenses
            WHERE strftime('%Y', date) = ? AND strftime('%m', date) = ?
            "#,
        )
        .bind(&year)
        .bind(&month)
        .fetch_one(pool)
        .await?;

        Ok(StatsResponse {
            equipment_count,
            active_rentals,
            overdue_rentals,
            pending_bookings,
            month_revenue,
            month_expenses,
        })
    }

    /// Per-month revenue/expense summary for one year. Months with no
    /// activity on either side are omitted.
    pub async fn monthly(&self, year: i32) -> AppResult<Vec<MonthlySummary>> {
        let pool = &self.repository.pool;
        let year_str = format!("{:04}", year);

        let rental_rows = sqlx::query(
            r#"
            SELECT CAST(strftime('%m', start_date) AS INTEGER) as month,
                   COUNT(*) as rentals_count,
                   COALESCE(SUM(rental_price), 0.0) as rental_revenue,
                   COALESCE(SUM(delivery_price), 0.0) as delivery_revenue,
                   COALESCE(SUM(delivery_cost), 0.0) as delivery_costs
            FROM rentals
            WHERE strftime('%Y', start_date) = ?
            GROUP BY month
            "#,
        )
        .bind(&year_str)
        .fetch_all(pool)
        .await?;

        let expense_rows = sqlx::query(
            r#"
            SELECT CAST(strftime('%m', date) AS INTEGER) as month,
                   COALESCE(SUM(amount), 0.0) as expenses_total
            FROM expenses
            WHERE strftime('%Y', date) = ?
            GROUP BY month
            "#,
        )
        .bind(&year_str)
        .fetch_all(pool)
        .await?;

        // month -> (count, rental revenue, delivery revenue, delivery costs, expenses)
        let mut period_map: HashMap<i64, (i64, f64, f64, f64, f64)> = HashMap::new();

        for row in rental_rows {
            let entry = period_map
                .entry(row.get("month"))
                .or_insert((0, 0.0, 0.0, 0.0, 0.0));
            entry.0 = row.get("rentals_count");
            entry.1 = row.get("rental_revenue");
            entry.2 = row.get("delivery_revenue");
            entry.3 = row.get("delivery_costs");
        }

        for row in expense_rows {
            let entry = period_map
                .entry(row.get("month"))
                .or_insert((0, 0.0, 0.0, 0.0, 0.0));
            entry.4 = row.get("expenses_total");
        }

        let mut summary: Vec<MonthlySummary> = period_map
            .into_iter()
            .map(
                |(month, (rentals_count, rental_revenue, delivery_revenue, delivery_costs, expenses_total))| {
                    MonthlySummary {
                        month: month as u32,
                        rentals_count,
                        rental_revenue,
                        delivery_revenue,
                        delivery_costs,
                        expenses_total,
                        net: rental_revenue + delivery_revenue - delivery_costs - expenses_total,
                    }
                },
            )
            .collect();

        summary.sort_by_key(|entry| entry.month);
        Ok(summary)
    }
}
