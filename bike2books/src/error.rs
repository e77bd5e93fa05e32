use thiserror::Error;

#[derive(Error, Debug)]
pub enum Bike2BooksError {
    #[error("sample radius must be a non-negative number of miles, found {0}")]
    InvalidRadius(f64),
    #[error("nearest facility lookup requires at least one facility")]
    EmptyCollection,
    #[error("no entry found for key '{0}'")]
    KeyNotFound(String),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("failure acquiring datasets: {0}")]
    DatasetError(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
