use std::path::{Path, PathBuf};

use itertools::Itertools;

use super::{DatasetConfig, DatasetStatus};
use crate::error::Bike2BooksError;

/// makes sure the datasets are present on disk. if the data directory exists
/// this does nothing, otherwise the directory is created and every source is
/// downloaded into it. when a download fails the directory is removed again so
/// that the next call retries from scratch.
///
/// # Arguments
///
/// * `config` - data directory and dataset sources
///
/// # Returns
///
/// * whether the data was already present or which files were downloaded
pub fn ensure_datasets(config: &DatasetConfig) -> Result<DatasetStatus, Bike2BooksError> {
    let directory = config.directory.as_path();
    if directory.is_dir() {
        log::info!(
            "data directory {} already exists, skipping download",
            directory.to_string_lossy()
        );
        return Ok(DatasetStatus::AlreadyPresent(directory.to_path_buf()));
    }
    if directory.exists() {
        return Err(Bike2BooksError::InvalidConfiguration(format!(
            "data directory path '{}' exists but is not a directory",
            directory.to_string_lossy()
        )));
    }
    config.validate()?;
    create_dirs(directory)?;

    match download_all(config) {
        Ok(paths) => Ok(DatasetStatus::Downloaded(paths)),
        Err(e) => {
            if let Err(cleanup) = std::fs::remove_dir_all(directory) {
                log::warn!(
                    "failed to remove partial data directory {}: {cleanup}",
                    directory.to_string_lossy()
                );
            }
            Err(e)
        }
    }
}

fn download_all(config: &DatasetConfig) -> Result<Vec<PathBuf>, Bike2BooksError> {
    if config.sources.is_empty() {
        return Ok(vec![]);
    }
    let directory = config.directory.as_path();
    let downloads = config
        .sources
        .iter()
        .map(|source| {
            log::info!("downloading {} from {}", source.name, source.url);
            downloader::Download::new(&source.url).file_name(Path::new(&source.file_name))
        })
        .collect_vec();

    let parallelism: u16 = downloads.len().try_into().unwrap_or(u16::MAX);
    let mut downloader = downloader::downloader::Builder::default()
        .connect_timeout(config.connect_timeout())
        .download_folder(directory)
        .parallel_requests(parallelism)
        .build()
        .map_err(|e| Bike2BooksError::DatasetError(format!("failed to build downloader: {e}")))?;

    let results = downloader
        .download(&downloads)
        .map_err(|e| Bike2BooksError::DatasetError(e.to_string()))?;

    let failures = results
        .iter()
        .filter_map(|result| result.as_ref().err().map(|e| e.to_string()))
        .collect_vec();
    if !failures.is_empty() {
        for failure in failures.iter() {
            log::error!("{failure}");
        }
        return Err(Bike2BooksError::DatasetError(format!(
            "{} of {} downloads failed: {}",
            failures.len(),
            downloads.len(),
            failures.join("; ")
        )));
    }

    Ok(config
        .sources
        .iter()
        .map(|source| directory.join(&source.file_name))
        .collect())
}

/// helper function to "mkdir -p path" - make all directories along a path
fn create_dirs(directory: &Path) -> Result<(), Bike2BooksError> {
    std::fs::create_dir_all(directory).map_err(|e| {
        Bike2BooksError::DatasetError(format!(
            "error building data directory '{}': {e}",
            directory.to_string_lossy()
        ))
    })
}
