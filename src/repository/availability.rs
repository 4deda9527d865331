//! Availability windows repository for database operations

use chrono::NaiveTime;
use sqlx::{Pool, Postgres};

use super::is_unique_violation;
use crate::{
    error::{AppError, AppResult},
    models::availability::AvailabilityWindow,
};

#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: Pool<Postgres>,
}

impl AvailabilityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a barber's windows, ordered by weekday
    pub async fn list_for_barber(&self, barber_id: i32) -> AppResult<Vec<AvailabilityWindow>> {
        let windows = sqlx::query_as::<_, AvailabilityWindow>(
            "SELECT * FROM barber_availability WHERE barber_id = $1 ORDER BY day_of_week",
        )
        .bind(barber_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(windows)
    }

    /// Find the barber's window for one weekday. No window is a normal
    /// outcome ("closed that day"), so this returns an Option, not an error.
    pub async fn find_for_weekday(
        &self,
        barber_id: i32,
        day_of_week: i16,
    ) -> AppResult<Option<AvailabilityWindow>> {
        let window = sqlx::query_as::<_, AvailabilityWindow>(
            "SELECT * FROM barber_availability WHERE barber_id = $1 AND day_of_week = $2",
        )
        .bind(barber_id)
        .bind(day_of_week)
        .fetch_optional(&self.pool)
        .await?;
        Ok(window)
    }

    /// Create a window. The schema allows one window per (barber, weekday);
    /// a duplicate surfaces as a deterministic conflict.
    pub async fn create(
        &self,
        barber_id: i32,
        day_of_week: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<AvailabilityWindow> {
        let result = sqlx::query_as::<_, AvailabilityWindow>(
            r#"
            INSERT INTO barber_availability (barber_id, day_of_week, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(barber_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(window) => Ok(window),
            Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(format!(
                "An availability window already exists for weekday {}",
                day_of_week
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a window owned by the given barber. Ownership is part of the
    /// WHERE clause, so another barber's window reads as not found.
    pub async fn delete_owned(&self, id: i32, barber_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM barber_availability WHERE id = $1 AND barber_id = $2")
            .bind(id)
            .bind(barber_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Availability window {} not found",
                id
            )));
        }
        Ok(())
    }
}
