//! Persistence of race records
//!
//! Races are stored as one ordered collection keyed by race id. Every mutating operation
//! persists the whole collection before returning.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::race::Race;
use crate::error::RaceError;
use serde::{Deserialize, Serialize};

/// RaceStore maps race ids to race records.
pub trait RaceStore: Send {
    /// Appends a new race, fails with CreationConflict if the id is already taken.
    fn create(&mut self, race: &Race) -> Result<(), RaceError>;
    /// Returns the race with the given id.
    fn get(&self, id: u32) -> Result<Race, RaceError>;
    /// Replaces the stored race in place.
    fn update(&mut self, id: u32, race: &Race) -> Result<(), RaceError>;
    /// Removes the race with the given id.
    fn delete(&mut self, id: u32) -> Result<(), RaceError>;
    /// Returns all races in insertion order.
    fn list(&self) -> Result<Vec<Race>, RaceError>;

    fn contains(&self, id: u32) -> Result<bool, RaceError> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(RaceError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// RaceCollection is the persisted document layout: `{ "carreras": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceCollection {
    #[serde(rename = "carreras")]
    pub races: Vec<Race>,
}

impl RaceCollection {
    fn position(&self, id: u32) -> Option<usize> {
        self.races.iter().position(|race| race.id == id)
    }

    pub fn insert(&mut self, race: &Race) -> Result<(), RaceError> {
        if self.position(race.id).is_some() {
            return Err(RaceError::CreationConflict(race.id));
        }
        self.races.push(race.to_owned());
        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&Race, RaceError> {
        self.races
            .iter()
            .find(|race| race.id == id)
            .ok_or(RaceError::NotFound(id))
    }

    pub fn replace(&mut self, id: u32, race: &Race) -> Result<(), RaceError> {
        let idx = self.position(id).ok_or(RaceError::NotFound(id))?;
        self.races[idx] = race.to_owned();
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<Race, RaceError> {
        let idx = self.position(id).ok_or(RaceError::NotFound(id))?;
        Ok(self.races.remove(idx))
    }
}
