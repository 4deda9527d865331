//! Repository layer for database operations

pub mod appointments;
pub mod availability;
pub mod services;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub services: services::ServicesRepository,
    pub appointments: appointments::AppointmentsRepository,
    pub availability: availability::AvailabilityRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            services: services::ServicesRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            availability: availability::AvailabilityRepository::new(pool.clone()),
            pool,
        }
    }
}

/// True when the error is a schema-level uniqueness violation, used to turn
/// constraint failures into deterministic conflict responses.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
