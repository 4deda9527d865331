//! Service (bookable offering) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bookable offering. Reference data for the booking engine; administered
/// externally and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: i32,
    /// Display name, snapshotted onto appointments at booking time
    pub name: String,
    /// Duration in minutes
    pub duration: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}
