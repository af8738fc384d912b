use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use racesim::error::RaceError;
use std::fmt;
use tracing::error;

use crate::models::ErrorResponse;

pub const NOT_FOUND_MSG: &str = "Carrera no encontrada.";
pub const INTERNAL_MSG: &str = "Error interno del servidor.";

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Required request data is missing or malformed
    BadRequest(String),
    /// Unknown race id
    NotFound,
    /// Race id already taken
    Conflict(String),
    /// Internal server error, e.g. a failing race store
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound => write!(f, "Not found: {}", NOT_FOUND_MSG),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::NotFound => NOT_FOUND_MSG.to_string(),
            // details are only logged
            AppError::InternalError(_) => INTERNAL_MSG.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

impl From<RaceError> for AppError {
    fn from(e: RaceError) -> Self {
        match e {
            RaceError::MissingInput(msg) => AppError::BadRequest(msg),
            RaceError::NotFound(_) => AppError::NotFound,
            RaceError::CreationConflict(id) => {
                AppError::Conflict(format!("Ya existe una carrera con el id {}.", id))
            }
            RaceError::Unfinishable(_) => AppError::BadRequest(
                "La carrera no puede finalizar: ningún competidor avanza.".to_string(),
            ),
            RaceError::Store(e) => {
                error!("Race store failure: {:#}", e);
                AppError::InternalError(format!("{:#}", e))
            }
        }
    }
}
