use crate::core::race::Race;
use crate::error::RaceError;
use crate::store::{RaceCollection, RaceStore};

/// MemoryStore keeps the race collection in memory only. It shares the semantics of
/// JsonFileStore and is used where no persistence is wanted, e.g. in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RaceCollection,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// writes returns the number of times the collection was persisted.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RaceStore for MemoryStore {
    fn create(&mut self, race: &Race) -> Result<(), RaceError> {
        self.collection.insert(race)?;
        self.writes += 1;
        Ok(())
    }

    fn get(&self, id: u32) -> Result<Race, RaceError> {
        self.collection.get(id).map(|race| race.to_owned())
    }

    fn update(&mut self, id: u32, race: &Race) -> Result<(), RaceError> {
        self.collection.replace(id, race)?;
        self.writes += 1;
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<(), RaceError> {
        self.collection.remove(id)?;
        self.writes += 1;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Race>, RaceError> {
        Ok(self.collection.races.to_owned())
    }
}
