//! Business logic services

pub mod articles;
pub mod bookings;
pub mod catalog;
pub mod expenses;
pub mod lockers;
pub mod notifier;
pub mod rentals;
pub mod stats;
pub mod summary;

use chrono::{FixedOffset, NaiveDate, Utc};

use crate::{
    config::{BookingConfig, NotifierConfig, SummaryConfig},
    repository::Repository,
};

/// Current calendar date in the business timezone (a fixed UTC offset).
/// Status derivation and availability both key off this value.
pub(crate) fn business_today(utc_offset_hours: i32) -> NaiveDate {
    let offset = FixedOffset::east_opt(utc_offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    Utc::now().with_timezone(&offset).date_naive()
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub bookings: bookings::BookingsService,
    pub rentals: rentals::RentalsService,
    pub expenses: expenses::ExpensesService,
    pub lockers: lockers::LockersService,
    pub articles: articles::ArticlesService,
    pub stats: stats::StatsService,
    pub notifier: notifier::NotifierService,
    pub summary: summary::SummaryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        booking_config: BookingConfig,
        notifier_config: NotifierConfig,
        summary_config: SummaryConfig,
    ) -> Self {
        let notifier = notifier::NotifierService::new(notifier_config);
        let utc_offset_hours = summary_config.utc_offset_hours;

        Self {
            catalog: catalog::CatalogService::new(repository.clone(), utc_offset_hours),
            bookings: bookings::BookingsService::new(
                repository.clone(),
                booking_config,
                notifier.clone(),
            ),
            rentals: rentals::RentalsService::new(repository.clone(), utc_offset_hours),
            expenses: expenses::ExpensesService::new(repository.clone()),
            lockers: lockers::LockersService::new(repository.clone()),
            articles: articles::ArticlesService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone(), utc_offset_hours),
            summary: summary::SummaryService::new(repository, notifier.clone(), summary_config),
            notifier,
        }
    }
}
