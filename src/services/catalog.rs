//! Public catalog service (barbers and services)

use crate::{
    error::AppResult,
    models::{service::Service, user::BarberSummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all offered services
    pub async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.repository.services.list().await
    }

    /// List all barbers
    pub async fn list_barbers(&self) -> AppResult<Vec<BarberSummary>> {
        self.repository.users.list_barbers().await
    }
}
