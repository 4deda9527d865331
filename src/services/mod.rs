//! Business logic services

pub mod availability;
pub mod booking;
pub mod catalog;

use crate::{config::BookingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub booking: booking::BookingService,
    pub availability: availability::AvailabilityService,
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking_config: BookingConfig) -> Self {
        Self {
            booking: booking::BookingService::new(repository.clone(), booking_config),
            availability: availability::AvailabilityService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository),
        }
    }
}
