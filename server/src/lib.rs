//! HTTP interface of the race simulator
//!
//! Routes:
//! - `POST /iniciar-carrera` creates a race
//! - `PUT /actualizar-carrera/{id}` resets a race
//! - `GET /simular-carrera/{id}` simulates a race to completion
//! - `GET /carreras`, `GET /carreras/{id}`, `DELETE /carreras/{id}` list, fetch and delete races

pub mod error;
pub mod handlers;
pub mod models;

use actix_web::web;
use racesim::pre::service_opts::PersistMode;
use racesim::store::RaceStore;
use std::sync::{Mutex, MutexGuard};

use error::AppError;
use handlers::races;

/// Application state shared across handlers
pub struct AppState {
    pub store: Mutex<Box<dyn RaceStore>>,
    pub persist_mode: PersistMode,
}

impl AppState {
    pub fn new(store: Box<dyn RaceStore>, persist_mode: PersistMode) -> AppState {
        AppState {
            store: Mutex::new(store),
            persist_mode,
        }
    }

    pub fn lock_store(&self) -> Result<MutexGuard<'_, Box<dyn RaceStore>>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::InternalError("Race store lock is poisoned".to_string()))
    }
}

/// configure registers the routes and the extractor error handlers of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
    .route("/iniciar-carrera", web::post().to(races::start_race))
    .route("/actualizar-carrera/{id}", web::put().to(races::update_race))
    .route("/simular-carrera/{id}", web::get().to(races::simulate_race))
    .route("/carreras", web::get().to(races::list_races))
    .route("/carreras/{id}", web::get().to(races::get_race))
    .route("/carreras/{id}", web::delete().to(races::delete_race));
}
