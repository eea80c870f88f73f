// Local persistence traits.
// The host provides some kind of key-value storage. The core
// only reads and writes whole frequency maps by a fixed key.

use crate::entities::FrequencyMap;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The stored value is corrupt: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait TagFrequencyRepo {
    /// Returns `None` if nothing has been stored under this key yet.
    fn load_frequency(&self, key: &str) -> Result<Option<FrequencyMap>>;
    fn save_frequency(&self, key: &str, frequency: &FrequencyMap) -> Result<()>;
}
