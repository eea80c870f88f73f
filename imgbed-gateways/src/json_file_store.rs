use imgbed_core::{
    entities::FrequencyMap,
    repositories::{Error, Result, TagFrequencyRepo},
};
use jfs::Store;
use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

/// Persists every value as a JSON file named after its key.
pub struct JsonFileStore {
    json_store: Store,
}

impl JsonFileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        fs::create_dir_all(directory.as_ref())?;
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl TagFrequencyRepo for JsonFileStore {
    fn load_frequency(&self, key: &str) -> Result<Option<FrequencyMap>> {
        match self.json_store.get::<FrequencyMap>(key) {
            Ok(frequency) => Ok(Some(frequency)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
                    Err(Error::Corrupt(err.to_string()))
                }
                _ => Err(err.into()),
            },
        }
    }

    fn save_frequency(&self, key: &str, frequency: &FrequencyMap) -> Result<()> {
        self.json_store.save_with_id(frequency, key)?;
        log::debug!("Saved {} tag counts as '{key}'", frequency.len());
        Ok(())
    }
}
