//! Availability window management service

use chrono::NaiveTime;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        availability::{AvailabilityWindow, CreateAvailabilityWindow},
        user::UserClaims,
    },
    repository::Repository,
    scheduling,
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
}

impl AvailabilityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the authenticated barber's windows
    pub async fn list(&self, claims: &UserClaims) -> AppResult<Vec<AvailabilityWindow>> {
        claims.require_barber()?;
        self.repository.availability.list_for_barber(claims.user_id).await
    }

    /// Create a window for the authenticated barber
    pub async fn create(
        &self,
        claims: &UserClaims,
        data: CreateAvailabilityWindow,
    ) -> AppResult<AvailabilityWindow> {
        claims.require_barber()?;
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let start = NaiveTime::parse_from_str(&data.start_time, scheduling::SLOT_FORMAT)
            .map_err(|_| AppError::Validation("Invalid start_time (use HH:MM)".to_string()))?;
        let end = NaiveTime::parse_from_str(&data.end_time, scheduling::SLOT_FORMAT)
            .map_err(|_| AppError::Validation("Invalid end_time (use HH:MM)".to_string()))?;

        if start >= end {
            return Err(AppError::Validation(
                "start_time must be before end_time".to_string(),
            ));
        }

        self.repository
            .availability
            .create(claims.user_id, data.day_of_week, start, end)
            .await
    }

    /// Delete one of the authenticated barber's windows
    pub async fn delete(&self, claims: &UserClaims, id: i32) -> AppResult<()> {
        claims.require_barber()?;
        self.repository.availability.delete_owned(id, claims.user_id).await
    }
}
