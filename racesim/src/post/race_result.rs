use crate::core::race::Snapshot;
use serde::{Deserialize, Serialize};

/// * `id` - Id of the winning competitor
/// * `distance_covered` - (km) Distance covered by the winner, formatted with two decimals
/// * `total_ticks` - Number of ticks the winner needed to reach the total distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerInfo {
    pub id: u32,
    #[serde(rename = "distanciaRecorrida")]
    pub distance_covered: String,
    #[serde(rename = "tiempoTotal")]
    pub total_ticks: u32,
}

/// RaceResult contains the outcome of a simulation request. already_finished is set if the race
/// was finished before the request and therefore was not simulated again.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub already_finished: bool,
    pub history: Vec<Snapshot>,
    pub winner: WinnerInfo,
}

impl RaceResult {
    /// message returns the user-facing summary of the result.
    pub fn message(&self) -> String {
        if self.already_finished {
            String::from("La carrera ya ha finalizado.")
        } else {
            format!("El ganador es el competidor {}", self.winner.id)
        }
    }
}
