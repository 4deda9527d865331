//! Barber-facing endpoints: catalog listing, slot resolution, schedule view

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{AppointmentPage, AppointmentQuery, SlotQuery},
        user::BarberSummary,
    },
    scheduling,
};

use super::AuthenticatedUser;

/// Free slots for one barber and day
#[derive(Serialize, ToSchema)]
pub struct AvailableSlotsResponse {
    /// Ascending wall-clock slots, "HH:MM"
    pub slots: Vec<String>,
}

/// Reserved instants for one barber and day
#[derive(Serialize, ToSchema)]
pub struct BusySlotsResponse {
    /// Reserved instants (RFC 3339)
    pub slots: Vec<DateTime<Utc>>,
}

fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))
}

/// List all barbers
#[utoipa::path(
    get,
    path = "/barbers",
    tag = "barbers",
    responses(
        (status = 200, description = "All barbers", body = Vec<BarberSummary>)
    )
)]
pub async fn list_barbers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BarberSummary>>> {
    let barbers = state.services.catalog.list_barbers().await?;
    Ok(Json(barbers))
}

/// Resolve the free slots for a barber on a given day
#[utoipa::path(
    get,
    path = "/barbers/{barber_id}/available",
    tag = "barbers",
    params(
        ("barber_id" = i32, Path, description = "Barber user ID"),
        SlotQuery
    ),
    responses(
        (status = 200, description = "Free slots, ascending", body = AvailableSlotsResponse),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn available_slots(
    State(state): State<crate::AppState>,
    Path(barber_id): Path<i32>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<AvailableSlotsResponse>> {
    let date = parse_day(&query.date)?;

    let slots = state.services.booking.available_slots(barber_id, date).await?;
    let slots = slots
        .iter()
        .map(|slot| slot.format(scheduling::SLOT_FORMAT).to_string())
        .collect();

    Ok(Json(AvailableSlotsResponse { slots }))
}

/// List the reserved instants for a barber on a given day
#[utoipa::path(
    get,
    path = "/barbers/{barber_id}/busy",
    tag = "barbers",
    params(
        ("barber_id" = i32, Path, description = "Barber user ID"),
        SlotQuery
    ),
    responses(
        (status = 200, description = "Reserved instants", body = BusySlotsResponse),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn busy_slots(
    State(state): State<crate::AppState>,
    Path(barber_id): Path<i32>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<BusySlotsResponse>> {
    let date = parse_day(&query.date)?;
    let slots = state.services.booking.busy_instants(barber_id, date).await?;
    Ok(Json(BusySlotsResponse { slots }))
}

/// The authenticated barber's appointments, filterable and paginated
#[utoipa::path(
    get,
    path = "/barbers/appointments",
    tag = "barbers",
    security(("bearer_auth" = [])),
    params(AppointmentQuery),
    responses(
        (status = 200, description = "One page of the barber's schedule", body = AppointmentPage),
        (status = 403, description = "Not a barber")
    )
)]
pub async fn barber_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<AppointmentQuery>,
) -> AppResult<Json<AppointmentPage>> {
    let page = state
        .services
        .booking
        .barber_appointments(&claims, query)
        .await?;
    Ok(Json(page))
}
