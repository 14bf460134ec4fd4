use actix_web::web;
use sqlx::SqlitePool;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{LifecycleService, QueryService, RegistrationService};

/// Services shared by every worker, all backed by the same pool.
#[derive(Clone)]
pub struct AppState {
    pub registration_service: web::Data<RegistrationService>,
    pub query_service: web::Data<QueryService>,
    pub lifecycle_service: web::Data<LifecycleService>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            registration_service: web::Data::new(RegistrationService::new(pool.clone())),
            query_service: web::Data::new(QueryService::new(pool.clone())),
            lifecycle_service: web::Data::new(LifecycleService::new(pool)),
        }
    }

    /// Registers the services as app data and mounts every route.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.registration_service.clone())
            .app_data(self.query_service.clone())
            .app_data(self.lifecycle_service.clone())
            .configure(routes::configure);
    }
}
