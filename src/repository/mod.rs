//! Repository layer for database operations

pub mod articles;
pub mod bookings;
pub mod equipment;
pub mod expenses;
pub mod lockers;
pub mod rentals;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub equipment: equipment::EquipmentRepository,
    pub bookings: bookings::BookingsRepository,
    pub rentals: rentals::RentalsRepository,
    pub expenses: expenses::ExpensesRepository,
    pub lockers: lockers::LockersRepository,
    pub articles: articles::ArticlesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            expenses: expenses::ExpensesRepository::new(pool.clone()),
            lockers: lockers::LockersRepository::new(pool.clone()),
            articles: articles::ArticlesRepository::new(pool.clone()),
            pool,
        }
    }
}
