use serde::{Deserialize, Serialize};

/// a remote file to download into the data directory
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DatasetSource {
    /// short label used in log messages, such as "libraries"
    pub name: String,
    pub url: String,
    /// file name to write within the data directory
    pub file_name: String,
}
