//! Availability window models

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A barber's recurring bookable interval on one weekday. Edits are
/// delete+recreate; rows are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailabilityWindow {
    pub id: i32,
    pub barber_id: i32,
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_of_week: i16,
    /// Window opening time
    pub start_time: NaiveTime,
    /// Window closing time
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// Create availability window request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAvailabilityWindow {
    /// Day of week (0=Sunday, 6=Saturday)
    #[validate(range(min = 0, max = 6, message = "day_of_week must be between 0 and 6"))]
    pub day_of_week: i16,
    /// Opening time (HH:MM)
    pub start_time: String,
    /// Closing time (HH:MM)
    pub end_time: String,
}
