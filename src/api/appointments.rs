//! Appointment lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::appointment::{Appointment, CreateAppointment, UpdateAppointmentStatus},
};

use super::AuthenticatedUser;

/// Book an appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Slot already reserved"),
        (status = 422, description = "Date in the past or outside availability")
    )
)]
pub async fn create_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state.services.booking.create_booking(&claims, request).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// The authenticated client's upcoming appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Upcoming appointments, ascending", body = Vec<Appointment>)
    )
)]
pub async fn list_my_appointments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state.services.booking.my_appointments(&claims).await?;
    Ok(Json(appointments))
}

/// Cancel a future appointment (owning client only)
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment canceled", body = Appointment),
        (status = 403, description = "Not the booking client"),
        (status = 404, description = "Appointment not found"),
        (status = 409, description = "Appointment not in a cancelable state"),
        (status = 422, description = "Appointment already in the past")
    )
)]
pub async fn cancel_appointment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.booking.cancel(&claims, id).await?;
    Ok(Json(appointment))
}

/// Advance an appointment's status (owning barber only)
#[utoipa::path(
    patch,
    path = "/appointments/{id}",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentStatus,
    responses(
        (status = 200, description = "Status updated", body = Appointment),
        (status = 403, description = "Not a barber"),
        (status = 404, description = "Appointment not found for this barber"),
        (status = 409, description = "Transition not allowed")
    )
)]
pub async fn update_appointment_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    let appointment = state
        .services
        .booking
        .update_status(&claims, id, request.status)
        .await?;
    Ok(Json(appointment))
}
