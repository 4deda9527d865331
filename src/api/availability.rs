//! Availability window management endpoints (barber only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::availability::{AvailabilityWindow, CreateAvailabilityWindow},
};

use super::AuthenticatedUser;

/// List the authenticated barber's availability windows
#[utoipa::path(
    get,
    path = "/barbers/availability",
    tag = "availability",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Windows ordered by weekday", body = Vec<AvailabilityWindow>),
        (status = 403, description = "Not a barber")
    )
)]
pub async fn list_windows(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<AvailabilityWindow>>> {
    let windows = state.services.availability.list(&claims).await?;
    Ok(Json(windows))
}

/// Create an availability window for the authenticated barber
#[utoipa::path(
    post,
    path = "/barbers/availability",
    tag = "availability",
    security(("bearer_auth" = [])),
    request_body = CreateAvailabilityWindow,
    responses(
        (status = 201, description = "Window created", body = AvailabilityWindow),
        (status = 400, description = "Malformed window"),
        (status = 403, description = "Not a barber"),
        (status = 409, description = "A window already exists for that weekday")
    )
)]
pub async fn create_window(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateAvailabilityWindow>,
) -> AppResult<(StatusCode, Json<AvailabilityWindow>)> {
    let window = state.services.availability.create(&claims, request).await?;
    Ok((StatusCode::CREATED, Json(window)))
}

/// Delete one of the authenticated barber's availability windows
#[utoipa::path(
    delete,
    path = "/barbers/availability/{id}",
    tag = "availability",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Availability window ID")
    ),
    responses(
        (status = 204, description = "Window deleted"),
        (status = 403, description = "Not a barber"),
        (status = 404, description = "Window not found")
    )
)]
pub async fn delete_window(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.availability.delete(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
