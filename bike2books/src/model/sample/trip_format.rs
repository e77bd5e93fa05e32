use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject};
use serde::{Deserialize, Serialize};

use super::{Trip, TripRow};
use crate::error::Bike2BooksError;

/// how a batch of trips is written out. the trips are the same either way.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripFormat {
    /// `index,lon,lat` rows
    #[default]
    Csv,
    /// a FeatureCollection of Point features
    Geojson,
}

impl Display for TripFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripFormat::Csv => write!(f, "csv"),
            TripFormat::Geojson => write!(f, "geojson"),
        }
    }
}

impl TripFormat {
    pub fn write_trips<W: Write>(
        &self,
        trips: &[Trip],
        mut writer: W,
    ) -> Result<(), Bike2BooksError> {
        match self {
            TripFormat::Csv => {
                let mut csv_writer = csv::Writer::from_writer(&mut writer);
                for trip in trips.iter() {
                    csv_writer.serialize(TripRow::from(trip))?;
                }
                csv_writer.flush()?;
            }
            TripFormat::Geojson => {
                let feature_collection = trips_to_feature_collection(trips);
                serde_json::to_writer_pretty(&mut writer, &feature_collection)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// builds a FeatureCollection with one Point feature per trip. each feature
/// carries the trip index as both its id and an `index` property.
pub fn trips_to_feature_collection(trips: &[Trip]) -> FeatureCollection {
    let features = trips
        .iter()
        .map(|trip| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("index"), serde_json::Value::from(trip.index));
            let geometry = geojson::Geometry::new(geojson::Value::Point(vec![trip.lon(), trip.lat()]));
            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: Some(Id::Number(serde_json::Number::from(trip.index))),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike2books_core::util::geo_utils::lat_lon;

    fn sample_trips() -> Vec<Trip> {
        vec![
            Trip::new(0, lat_lon(32.75, -117.16)),
            Trip::new(1, lat_lon(32.70, -117.10)),
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut buffer: Vec<u8> = Vec::new();
        TripFormat::Csv
            .write_trips(&sample_trips(), &mut buffer)
            .expect("should write");
        let text = String::from_utf8(buffer).expect("valid utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["index,lon,lat", "0,-117.16,32.75", "1,-117.1,32.7"]);
    }

    #[test]
    fn test_write_geojson() {
        let mut buffer: Vec<u8> = Vec::new();
        TripFormat::Geojson
            .write_trips(&sample_trips(), &mut buffer)
            .expect("should write");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().expect("features array");
        assert_eq!(features.len(), 2);
        assert_eq!(features[1]["geometry"]["type"], "Point");
        assert_eq!(
            features[1]["geometry"]["coordinates"],
            serde_json::json!([-117.10, 32.70])
        );
        assert_eq!(features[1]["properties"]["index"], 1);
    }
}
