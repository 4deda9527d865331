//! Appointment models and related request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::enums::AppointmentStatus;

/// Appointment model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i32,
    /// Booking client
    pub user_id: i32,
    pub barber_id: i32,
    pub service_id: i32,
    /// Service name snapshotted at booking time
    pub service_name: String,
    /// Absolute reservation instant (UTC)
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking request. `date` is an RFC 3339 timestamp parsed and validated at
/// the boundary before any booking logic runs.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAppointment {
    pub user_id: i32,
    pub barber_id: i32,
    pub service_id: i32,
    /// Requested instant (RFC 3339, e.g. "2025-06-16T09:30:00Z")
    pub date: String,
}

/// Status update request (owning barber only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
}

/// Appointment with client identity, for the barber's schedule view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AppointmentDetails {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub service_name: String,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_email: String,
}

/// One page of a barber's appointment listing
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentPage {
    pub items: Vec<AppointmentDetails>,
    pub total: i64,
}

/// Query parameters for the barber appointment listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AppointmentQuery {
    /// Filter by status
    pub status: Option<AppointmentStatus>,
    /// Restrict to today's appointments
    pub today: Option<bool>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Page size
    pub size: Option<i64>,
}

/// Query parameter for slot resolution endpoints
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotQuery {
    /// Calendar day (YYYY-MM-DD)
    pub date: String,
}
