//! Slot resolution and booking engine
//!
//! Resolution derives candidate slots from the barber's weekly window, then
//! drops the ones already held by live appointments. Booking re-validates the
//! request end-to-end and commits; the schema's partial unique index
//! serializes concurrent attempts on the same (barber, instant) so at most
//! one can succeed.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentPage, AppointmentQuery, CreateAppointment},
        enums::AppointmentStatus,
        user::UserClaims,
    },
    repository::Repository,
    scheduling,
};

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    /// Free slots for a barber on a calendar day, ascending. A day with no
    /// window (or an unknown barber) resolves to an empty list, not an error.
    pub async fn available_slots(
        &self,
        barber_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<NaiveTime>> {
        let weekday = scheduling::weekday_index(date);
        let window = match self
            .repository
            .availability
            .find_for_weekday(barber_id, weekday)
            .await?
        {
            Some(window) => window,
            None => return Ok(Vec::new()),
        };

        let candidates = scheduling::generate_slots(
            window.start_time,
            window.end_time,
            self.config.slot_interval_minutes,
        );

        let (from, to) = scheduling::day_bounds(date);
        let occupied: Vec<NaiveTime> = self
            .repository
            .appointments
            .list_occupying(barber_id, from, to)
            .await?
            .iter()
            .map(|a| a.date.time())
            .collect();

        Ok(scheduling::filter_taken(candidates, &occupied))
    }

    /// Instants already reserved for a barber on a calendar day
    pub async fn busy_instants(
        &self,
        barber_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<DateTime<Utc>>> {
        let (from, to) = scheduling::day_bounds(date);
        let appointments = self
            .repository
            .appointments
            .list_occupying(barber_id, from, to)
            .await?;
        Ok(appointments.into_iter().map(|a| a.date).collect())
    }

    /// Validate and commit a booking. Checks run cheapest-first and
    /// short-circuit; the slot collision check is last so doomed requests
    /// fail before touching the appointments table.
    pub async fn create_booking(
        &self,
        claims: &UserClaims,
        request: CreateAppointment,
    ) -> AppResult<Appointment> {
        claims.require_self(request.user_id)?;

        let date = DateTime::parse_from_rfc3339(&request.date)
            .map_err(|_| {
                AppError::Validation("Invalid date (expected an RFC 3339 timestamp)".to_string())
            })?
            .with_timezone(&Utc);

        if date <= Utc::now() {
            return Err(AppError::Temporal(
                "Appointments cannot be booked in the past".to_string(),
            ));
        }

        let service = self.repository.services.get_by_id(request.service_id).await?;

        let weekday = scheduling::weekday_index(date.date_naive());
        let window = self
            .repository
            .availability
            .find_for_weekday(request.barber_id, weekday)
            .await?
            .ok_or_else(|| {
                AppError::AvailabilityConflict(
                    "The barber has no availability on that day".to_string(),
                )
            })?;

        let time = date.time();
        if !scheduling::within_window(time, window.start_time, window.end_time) {
            return Err(AppError::AvailabilityConflict(format!(
                "Requested time {} is outside the barber's {}-{} window",
                time.format(scheduling::SLOT_FORMAT),
                window.start_time.format(scheduling::SLOT_FORMAT),
                window.end_time.format(scheduling::SLOT_FORMAT)
            )));
        }

        // Early reject for the common case; under a race the unique index
        // decides, and create() maps the violation to the same error.
        if self
            .repository
            .appointments
            .exists_at(request.barber_id, date)
            .await?
        {
            return Err(AppError::SlotTaken(format!(
                "The {} slot is already reserved",
                date.to_rfc3339()
            )));
        }

        self.repository
            .appointments
            .create(
                request.user_id,
                request.barber_id,
                request.service_id,
                &service.name,
                date,
            )
            .await
    }

    /// Cancel a future appointment on behalf of its owning client. The row
    /// is kept and marked CANCELED, which releases the slot.
    pub async fn cancel(&self, claims: &UserClaims, appointment_id: i32) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(appointment_id).await?;

        if appointment.user_id != claims.user_id {
            return Err(AppError::Authorization(
                "Only the booking client may cancel an appointment".to_string(),
            ));
        }
        if appointment.date <= Utc::now() {
            return Err(AppError::Temporal(
                "Only future appointments can be canceled".to_string(),
            ));
        }
        if !appointment
            .status
            .can_transition_to(AppointmentStatus::Canceled)
        {
            return Err(AppError::InvalidTransition(format!(
                "A {} appointment cannot be canceled",
                appointment.status
            )));
        }

        self.repository
            .appointments
            .update_status(appointment.id, AppointmentStatus::Canceled)
            .await
    }

    /// Advance an appointment's lifecycle on behalf of its barber. Barbers
    /// only move work forward; cancellation belongs to the client.
    pub async fn update_status(
        &self,
        claims: &UserClaims,
        appointment_id: i32,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        claims.require_barber()?;

        if !matches!(
            status,
            AppointmentStatus::InProgress | AppointmentStatus::Completed
        ) {
            return Err(AppError::Validation(
                "Target status must be IN_PROGRESS or COMPLETED".to_string(),
            ));
        }

        let appointment = self.repository.appointments.get_by_id(appointment_id).await?;
        if appointment.barber_id != claims.user_id {
            return Err(AppError::NotFound(format!(
                "Appointment with id {} not found",
                appointment_id
            )));
        }
        if !appointment.status.can_transition_to(status) {
            return Err(AppError::InvalidTransition(format!(
                "{} -> {} is not allowed",
                appointment.status, status
            )));
        }

        self.repository
            .appointments
            .update_status(appointment.id, status)
            .await
    }

    /// The authenticated client's upcoming appointments
    pub async fn my_appointments(&self, claims: &UserClaims) -> AppResult<Vec<Appointment>> {
        self.repository
            .appointments
            .list_upcoming_for_user(claims.user_id, Utc::now())
            .await
    }

    /// The authenticated barber's schedule, filterable and paginated
    pub async fn barber_appointments(
        &self,
        claims: &UserClaims,
        query: AppointmentQuery,
    ) -> AppResult<AppointmentPage> {
        claims.require_barber()?;

        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, 100);
        let offset = (page - 1) * size;

        let range = if query.today.unwrap_or(false) {
            Some(scheduling::day_bounds(Utc::now().date_naive()))
        } else {
            None
        };

        let items = self
            .repository
            .appointments
            .list_for_barber(claims.user_id, query.status, range, size, offset)
            .await?;
        let total = self
            .repository
            .appointments
            .count_for_barber(claims.user_id, query.status, range)
            .await?;

        Ok(AppointmentPage { items, total })
    }
}
