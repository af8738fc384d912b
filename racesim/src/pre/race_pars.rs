use crate::error::RaceError;
use serde::Deserialize;

pub const MISSING_START_PARS_MSG: &str =
    "Faltan datos: cantidadCompetidores y distancia son obligatorios.";

/// RaceParsInput holds the (optional) parameters of a start or update request. A value of zero
/// is treated the same way as an absent value.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RaceParsInput {
    #[serde(rename = "cantidadCompetidores", default)]
    pub no_competitors: Option<u32>,
    #[serde(rename = "distancia", default)]
    pub distance: Option<f64>,
}

impl RaceParsInput {
    /// no_competitors_given returns the number of competitors if it was given and is non-zero.
    pub fn no_competitors_given(&self) -> Option<u32> {
        self.no_competitors.filter(|&n| n != 0)
    }

    /// distance_given returns the distance if it was given and is non-zero.
    pub fn distance_given(&self) -> Option<f64> {
        self.distance.filter(|&d| d != 0.0)
    }
}

/// * `no_competitors` - Number of competitors in the race
/// * `total_distance` - (km) Distance a competitor must cover to win
#[derive(Debug, Clone, PartialEq)]
pub struct RacePars {
    pub no_competitors: u32,
    pub total_distance: f64,
}

/// check_start_pars assures that both parameters required to start a race are present and
/// returns them, or raises MissingInput.
pub fn check_start_pars(input: &RaceParsInput) -> Result<RacePars, RaceError> {
    match (input.no_competitors_given(), input.distance_given()) {
        (Some(no_competitors), Some(total_distance)) => Ok(RacePars {
            no_competitors,
            total_distance,
        }),
        _ => Err(RaceError::MissingInput(MISSING_START_PARS_MSG.to_string())),
    }
}
