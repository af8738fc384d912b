use crate::core::race::Race;
use crate::error::RaceError;
use crate::store::{RaceCollection, RaceStore};
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// JsonFileStore keeps all races in a single JSON document. The document is read completely on
/// every access and rewritten completely on every mutation. There is no protection against
/// partial writes, i.e. a crash while writing can corrupt the file.
#[derive(Debug)]
pub struct JsonFileStore {
    filepath: PathBuf,
}

impl JsonFileStore {
    /// open returns a store backed by the given file, which is initialized with an empty
    /// collection if it does not exist yet.
    pub fn open(filepath: &Path) -> anyhow::Result<JsonFileStore> {
        let store = JsonFileStore {
            filepath: filepath.to_owned(),
        };

        if !filepath.exists() {
            info!("Initializing race store at {}", filepath.display());
            store.write_db(&RaceCollection::default())?;
        }

        Ok(store)
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// read_db reads the JSON file and decodes it into the race collection.
    fn read_db(&self) -> anyhow::Result<RaceCollection> {
        // open file
        let fh = OpenOptions::new()
            .read(true)
            .open(&self.filepath)
            .with_context(|| format!("Failed to open race store {}!", self.filepath.display()))?;

        // read and parse file content
        let collection = serde_json::from_reader(BufReader::new(fh))
            .with_context(|| format!("Failed to parse race store {}!", self.filepath.display()))?;
        Ok(collection)
    }

    /// write_db replaces the content of the JSON file with the given race collection.
    fn write_db(&self, collection: &RaceCollection) -> anyhow::Result<()> {
        let fh = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.filepath)
            .with_context(|| format!("Failed to open race store {}!", self.filepath.display()))?;

        let mut writer = BufWriter::new(fh);
        serde_json::to_writer_pretty(&mut writer, collection)
            .with_context(|| format!("Failed to write race store {}!", self.filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write race store {}!", self.filepath.display()))?;
        Ok(())
    }
}

impl RaceStore for JsonFileStore {
    fn create(&mut self, race: &Race) -> Result<(), RaceError> {
        let mut collection = self.read_db()?;
        collection.insert(race)?;
        self.write_db(&collection)?;
        Ok(())
    }

    fn get(&self, id: u32) -> Result<Race, RaceError> {
        let collection = self.read_db()?;
        collection.get(id).map(|race| race.to_owned())
    }

    fn update(&mut self, id: u32, race: &Race) -> Result<(), RaceError> {
        let mut collection = self.read_db()?;
        collection.replace(id, race)?;
        self.write_db(&collection)?;
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<(), RaceError> {
        let mut collection = self.read_db()?;
        collection.remove(id)?;
        self.write_db(&collection)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Race>, RaceError> {
        Ok(self.read_db()?.races)
    }
}
