//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{BarberSummary, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// List all barbers for the public catalog
    pub async fn list_barbers(&self) -> AppResult<Vec<BarberSummary>> {
        let barbers = sqlx::query_as::<_, BarberSummary>(
            "SELECT id, name FROM users WHERE role = 'BARBER' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(barbers)
    }
}
