use racesim::core::race::{Race, Snapshot};
use racesim::post::race_result::{RaceResult, WinnerInfo};
use serde::{Deserialize, Serialize};

/// Race creation response
#[derive(Debug, Serialize, Deserialize)]
pub struct StartRaceResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "carreraId")]
    pub race_id: u32,
}

/// Race update response
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRaceResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "carrera")]
    pub race: Race,
}

/// Race simulation response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateRaceResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "historial")]
    pub history: Vec<Snapshot>,
    #[serde(rename = "ganador")]
    pub winner: WinnerInfo,
}

impl From<RaceResult> for SimulateRaceResponse {
    fn from(result: RaceResult) -> Self {
        SimulateRaceResponse {
            message: result.message(),
            history: result.history,
            winner: result.winner,
        }
    }
}

/// Plain confirmation response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
