use std::path::PathBuf;

use config::Config;
use serde::{Deserialize, Serialize};

use crate::{
    error::Bike2BooksError,
    model::{
        dataset::{DatasetConfig, DatasetSource},
        sample::{LocationSampler, SamplerConfig},
        travel::TravelSpeeds,
    },
};

/// configuration shipped with the crate, used as the base layer for every run
pub const DEFAULT_CONFIG: &str = include_str!("bike2books-config.toml");

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Bike2BooksConfig {
    pub data_directory: PathBuf,
    pub connect_timeout_secs: u64,
    pub libraries_file: String,
    pub datasets: Vec<DatasetSource>,
    pub sampler: SamplerConfig,
    pub speeds: TravelSpeeds,
}

impl Bike2BooksConfig {
    /// loads the default configuration, overlaid with the user's TOML file
    /// if one is provided.
    pub fn load(user_config_filepath: Option<&str>) -> Result<Self, Bike2BooksError> {
        let mut builder = Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));
        if let Some(filepath) = user_config_filepath {
            log::debug!("reading configuration overrides from {filepath}");
            builder = builder.add_source(config::File::new(filepath, config::FileFormat::Toml));
        }
        let config = builder
            .build()
            .map_err(|e| Bike2BooksError::ConfigReadError {
                msg: format!(
                    "failed reading configuration '{}'",
                    user_config_filepath.unwrap_or("<default>")
                ),
                source: e,
            })?;
        let result = config
            .try_deserialize::<Bike2BooksConfig>()
            .map_err(|e| Bike2BooksError::ConfigReadError {
                msg: String::from("failed decoding configuration"),
                source: e,
            })?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), Bike2BooksError> {
        self.location_sampler()?;
        self.speeds.validate()?;
        self.dataset_config().validate()?;
        Ok(())
    }

    pub fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig {
            directory: self.data_directory.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            sources: self.datasets.clone(),
        }
    }

    pub fn libraries_path(&self) -> PathBuf {
        self.data_directory.join(&self.libraries_file)
    }

    pub fn location_sampler(&self) -> Result<LocationSampler, Bike2BooksError> {
        LocationSampler::try_from(&self.sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::DegreeConversion;

    #[test]
    fn test_default_configuration() {
        let config = Bike2BooksConfig::load(None).expect("default config should load");
        assert_eq!(config.sampler.radius_miles, 6.0);
        assert_eq!(
            config.sampler.conversion,
            DegreeConversion::Fixed {
                miles_per_degree: 66.9
            }
        );
        assert_eq!(config.speeds, TravelSpeeds::default());
        assert_eq!(config.datasets.len(), 3);
        assert_eq!(
            config.libraries_path(),
            PathBuf::from("bike2books-data").join("libraries.geojson")
        );
        assert!(config
            .datasets
            .iter()
            .any(|d| d.file_name == config.libraries_file));
    }

    #[test]
    fn test_user_overrides() {
        let directory = std::env::temp_dir().join("bike2books-config-tests");
        std::fs::create_dir_all(&directory).expect("create test directory");
        let filepath = directory.join("overrides.toml");
        std::fs::write(
            &filepath,
            r#"
data_directory = "/tmp/elsewhere"

[sampler]
radius_miles = 2.5

[sampler.conversion]
type = "latitude"

[speeds]
bike_mph = 12.0
drive_mph = 20.0
"#,
        )
        .expect("write test file");

        let config = Bike2BooksConfig::load(filepath.to_str()).expect("config should load");
        assert_eq!(config.data_directory, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.sampler.radius_miles, 2.5);
        assert_eq!(config.sampler.conversion, DegreeConversion::Latitude);
        assert_eq!(config.speeds.bike_mph, 12.0);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let directory = std::env::temp_dir().join("bike2books-config-tests");
        std::fs::create_dir_all(&directory).expect("create test directory");
        let filepath = directory.join("negative-radius.toml");
        std::fs::write(&filepath, "[sampler]\nradius_miles = -3.0\n").expect("write test file");
        let result = Bike2BooksConfig::load(filepath.to_str());
        assert!(matches!(result, Err(Bike2BooksError::InvalidRadius(_))));
    }

    #[test]
    fn test_missing_user_file() {
        let result = Bike2BooksConfig::load(Some("/nonexistent/bike2books.toml"));
        assert!(matches!(
            result,
            Err(Bike2BooksError::ConfigReadError { .. })
        ));
    }
}
