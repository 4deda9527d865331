//! Appointments repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use super::is_unique_violation;
use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentDetails},
        enums::AppointmentStatus,
    },
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get appointment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment with id {} not found", id)))
    }

    /// Appointments that occupy the barber's time in `[from, to]`. Canceled
    /// rows are excluded here, not by the caller: a canceled appointment
    /// frees its slot.
    pub async fn list_occupying(
        &self,
        barber_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE barber_id = $1 AND date >= $2 AND date <= $3 AND status <> 'CANCELED'
            ORDER BY date
            "#,
        )
        .bind(barber_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    /// Check whether a live appointment already holds the exact instant
    pub async fn exists_at(&self, barber_id: i32, date: DateTime<Utc>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM appointments
                WHERE barber_id = $1 AND date = $2 AND status <> 'CANCELED'
            )
            "#,
        )
        .bind(barber_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new SCHEDULED appointment. The partial unique index on
    /// (barber_id, date) is the authority on double booking: a concurrent
    /// insert that loses the race comes back as a unique violation and is
    /// reported as the slot being taken, never as a generic failure.
    pub async fn create(
        &self,
        user_id: i32,
        barber_id: i32,
        service_id: i32,
        service_name: &str,
        date: DateTime<Utc>,
    ) -> AppResult<Appointment> {
        let result = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (user_id, barber_id, service_id, service_name, date, status)
            VALUES ($1, $2, $3, $4, $5, 'SCHEDULED')
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(barber_id)
        .bind(service_id)
        .bind(service_name)
        .bind(date)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(appointment) => Ok(appointment),
            Err(e) if is_unique_violation(&e) => Err(AppError::SlotTaken(format!(
                "The {} slot is already reserved",
                date.to_rfc3339()
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Set an appointment's status
    pub async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment with id {} not found", id)))
    }

    /// A client's appointments from `from` onwards, ascending
    pub async fn list_upcoming_for_user(
        &self,
        user_id: i32,
        from: DateTime<Utc>,
    ) -> AppResult<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE user_id = $1 AND date >= $2 ORDER BY date",
        )
        .bind(user_id)
        .bind(from)
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    /// One page of a barber's appointments with client identity, optionally
    /// filtered by status and date range
    pub async fn list_for_barber(
        &self,
        barber_id: i32,
        status: Option<AppointmentStatus>,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<AppointmentDetails>> {
        let mut conditions = vec!["a.barber_id = $1".to_string()];
        let mut idx = 2;

        if status.is_some() {
            conditions.push(format!("a.status = ${}", idx));
            idx += 1;
        }
        if range.is_some() {
            conditions.push(format!("a.date >= ${} AND a.date <= ${}", idx, idx + 1));
            idx += 2;
        }

        let query = format!(
            r#"
            SELECT a.id, a.date, a.service_name, a.status,
                   u.name as client_name, u.email as client_email
            FROM appointments a
            JOIN users u ON a.user_id = u.id
            WHERE {}
            ORDER BY a.date
            LIMIT ${} OFFSET ${}
            "#,
            conditions.join(" AND "),
            idx,
            idx + 1
        );

        let mut builder = sqlx::query_as::<_, AppointmentDetails>(&query).bind(barber_id);
        if let Some(s) = status {
            builder = builder.bind(s);
        }
        if let Some((from, to)) = range {
            builder = builder.bind(from).bind(to);
        }

        let rows = builder
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Total count matching the barber listing filters
    pub async fn count_for_barber(
        &self,
        barber_id: i32,
        status: Option<AppointmentStatus>,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> AppResult<i64> {
        let mut conditions = vec!["barber_id = $1".to_string()];
        let mut idx = 2;

        if status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if range.is_some() {
            conditions.push(format!("date >= ${} AND date <= ${}", idx, idx + 1));
        }

        let query = format!(
            "SELECT COUNT(*) FROM appointments WHERE {}",
            conditions.join(" AND ")
        );

        let mut builder = sqlx::query_scalar::<_, i64>(&query).bind(barber_id);
        if let Some(s) = status {
            builder = builder.bind(s);
        }
        if let Some((from, to)) = range {
            builder = builder.bind(from).bind(to);
        }

        let count = builder.fetch_one(&self.pool).await?;
        Ok(count)
    }
}
