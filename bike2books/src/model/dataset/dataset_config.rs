use std::{collections::HashSet, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use super::DatasetSource;
use crate::error::Bike2BooksError;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DatasetConfig {
    /// directory holding the downloaded files
    pub directory: PathBuf,
    pub connect_timeout_secs: u64,
    pub sources: Vec<DatasetSource>,
}

impl DatasetConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), Bike2BooksError> {
        let mut file_names: HashSet<&str> = HashSet::new();
        for source in self.sources.iter() {
            if source.file_name.is_empty() {
                return Err(Bike2BooksError::InvalidConfiguration(format!(
                    "dataset '{}' has an empty file name",
                    source.name
                )));
            }
            if !file_names.insert(source.file_name.as_str()) {
                return Err(Bike2BooksError::InvalidConfiguration(format!(
                    "dataset file name '{}' is used more than once",
                    source.file_name
                )));
            }
        }
        Ok(())
    }
}
