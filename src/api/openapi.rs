//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, availability, barbers, health, services};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Figaro API",
        version = "0.1.0",
        description = "Barbershop Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        services::list_services,
        barbers::list_barbers,
        // Slot resolution
        barbers::available_slots,
        barbers::busy_slots,
        // Appointments
        appointments::create_appointment,
        appointments::list_my_appointments,
        appointments::cancel_appointment,
        appointments::update_appointment_status,
        barbers::barber_appointments,
        // Availability
        availability::list_windows,
        availability::create_window,
        availability::delete_window,
    ),
    components(
        schemas(
            // Catalog
            crate::models::service::Service,
            crate::models::user::BarberSummary,
            // Enums
            crate::models::enums::Role,
            crate::models::enums::AppointmentStatus,
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::CreateAppointment,
            crate::models::appointment::UpdateAppointmentStatus,
            crate::models::appointment::AppointmentDetails,
            crate::models::appointment::AppointmentPage,
            crate::models::appointment::AppointmentQuery,
            crate::models::appointment::SlotQuery,
            // Availability
            crate::models::availability::AvailabilityWindow,
            crate::models::availability::CreateAvailabilityWindow,
            // Slot responses
            barbers::AvailableSlotsResponse,
            barbers::BusySlotsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Services and barbers catalog"),
        (name = "barbers", description = "Slot resolution and barber schedule"),
        (name = "appointments", description = "Booking and appointment lifecycle"),
        (name = "availability", description = "Barber availability windows")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
