//! Service catalog endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::service::Service};

/// List all offered services
#[utoipa::path(
    get,
    path = "/services",
    tag = "catalog",
    responses(
        (status = 200, description = "All bookable services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list_services().await?;
    Ok(Json(services))
}
