use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetStatus {
    /// the data directory already existed, nothing was downloaded
    AlreadyPresent(PathBuf),
    /// the data directory was created and these files were downloaded
    Downloaded(Vec<PathBuf>),
}
