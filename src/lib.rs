//! Figaro Barbershop Booking System
//!
//! A Rust REST server for barbershop bookings: clients resolve free time
//! slots and book appointments, barbers manage weekly availability windows
//! and advance appointments through their lifecycle.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<services::Services>,
}
