use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use racesim::core::handle_race;
use racesim::pre::race_pars::RaceParsInput;

use crate::error::AppError;
use crate::models::{MessageResponse, SimulateRaceResponse, StartRaceResponse, UpdateRaceResponse};
use crate::AppState;

/// read_race_pars decodes the optional JSON body of a start or update request. A missing body or
/// a body that is not declared as JSON yields no parameters at all.
fn read_race_pars(req: &HttpRequest, body: &web::Bytes) -> Result<RaceParsInput, AppError> {
    if body.is_empty() || !req.content_type().ends_with("json") {
        return Ok(RaceParsInput::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Start a race with the requested number of competitors and distance
pub async fn start_race(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let race_pars = read_race_pars(&req, &body)?;
    let mut store = state.lock_store()?;
    let race_id = handle_race::start_race(&mut **store, &race_pars, &mut rand::thread_rng())?;

    Ok(HttpResponse::Ok().json(StartRaceResponse {
        message: "Carrera creada con éxito".to_string(),
        race_id,
    }))
}

/// Reset a race, optionally with new competitors and a new distance
pub async fn update_race(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let race_pars = read_race_pars(&req, &body)?;
    let mut store = state.lock_store()?;
    let race = handle_race::update_race(
        &mut **store,
        path.into_inner(),
        &race_pars,
        &mut rand::thread_rng(),
    )?;

    Ok(HttpResponse::Ok().json(UpdateRaceResponse {
        message: "Carrera actualizada con éxito.".to_string(),
        race,
    }))
}

/// Simulate a race to completion, or return the stored result of a finished race
pub async fn simulate_race(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    // the simulation runs to completion, so keep it off the async workers
    let result = web::block(move || -> Result<_, AppError> {
        let mut store = state.lock_store()?;
        let result = handle_race::simulate_race(&mut **store, id, state.persist_mode)?;
        Ok(result)
    })
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SimulateRaceResponse::from(result)))
}

/// List all races
pub async fn list_races(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let races = handle_race::list_races(&**store)?;

    Ok(HttpResponse::Ok().json(races))
}

/// Get a single race
pub async fn get_race(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let race = handle_race::get_race(&**store, path.into_inner())?;

    Ok(HttpResponse::Ok().json(race))
}

/// Delete a race
pub async fn delete_race(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let mut store = state.lock_store()?;
    handle_race::delete_race(&mut **store, path.into_inner())?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Carrera eliminada con éxito.".to_string(),
    }))
}
