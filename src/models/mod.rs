//! Data models for the ToolRent server

pub mod article;
pub mod booking;
pub mod equipment;
pub mod expense;
pub mod locker;
pub mod rental;

// Re-export commonly used types
pub use article::Article;
pub use booking::{Booking, BookingStatus};
pub use equipment::{Equipment, PriceTiers};
pub use expense::Expense;
pub use locker::Locker;
pub use rental::{EquipmentInstance, Rental, RentalDetails, RentalStatus};
