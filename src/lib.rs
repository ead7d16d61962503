//! ToolRent Equipment Rental Management Server
//!
//! A Rust REST API server for a small equipment-rental business:
//! public catalog and booking endpoints, an admin back-office for
//! rentals, expenses and lockers, and a chat-webhook notifier.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
