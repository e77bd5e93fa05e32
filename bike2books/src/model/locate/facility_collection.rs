use std::{path::Path, str::FromStr};

use bike2books_core::util::geo_utils::{self, GeoPoint};
use geojson::GeoJson;

use super::{nearest_facility, Facility, NearestFacility};
use crate::error::Bike2BooksError;

/// property holding the facility name on each GeoJSON feature
pub const NAME_PROPERTY: &str = "name";

/// an ordered, read-only set of facilities
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacilityCollection {
    facilities: Vec<Facility>,
}

impl From<Vec<Facility>> for FacilityCollection {
    fn from(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }
}

impl FacilityCollection {
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Facility> {
        self.facilities.iter()
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// see [`nearest_facility`]
    pub fn nearest(&self, location: &GeoPoint) -> Result<NearestFacility, Bike2BooksError> {
        nearest_facility(location, &self.facilities)
    }

    /// reads a facility collection from a GeoJSON file
    pub fn from_geojson_file<P: AsRef<Path>>(path: P) -> Result<Self, Bike2BooksError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Bike2BooksError::InvalidDataset(format!(
                "unable to load file {}: {e}",
                path.to_string_lossy()
            ))
        })?;
        let collection = Self::from_geojson_str(&contents).map_err(|e| match e {
            Bike2BooksError::InvalidDataset(msg) => {
                Bike2BooksError::InvalidDataset(format!("{}: {msg}", path.to_string_lossy()))
            }
            other => other,
        })?;
        log::debug!(
            "read {} facilities from {}",
            collection.len(),
            path.to_string_lossy()
        );
        Ok(collection)
    }

    /// reads a facility collection from a GeoJSON FeatureCollection. every
    /// feature must have a Point geometry and a string `name` property.
    /// feature order is preserved.
    pub fn from_geojson_str(contents: &str) -> Result<Self, Bike2BooksError> {
        let dataset = GeoJson::from_str(contents).map_err(|e| {
            Bike2BooksError::InvalidDataset(format!("failed to read as GeoJSON: {e}"))
        })?;
        let feature_collection = match dataset {
            GeoJson::Geometry(_) => Err(Bike2BooksError::InvalidDataset(String::from(
                "facilities must be a FeatureCollection but found single 'Geometry'",
            ))),
            GeoJson::Feature(_) => Err(Bike2BooksError::InvalidDataset(String::from(
                "facilities must be a FeatureCollection but found single 'Feature'",
            ))),
            GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
        }?;

        let facilities = feature_collection
            .features
            .into_iter()
            .enumerate()
            .map(|(idx, feature)| feature_to_facility(idx, feature))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { facilities })
    }
}

impl<'a> IntoIterator for &'a FacilityCollection {
    type Item = &'a Facility;
    type IntoIter = std::slice::Iter<'a, Facility>;

    fn into_iter(self) -> Self::IntoIter {
        self.facilities.iter()
    }
}

/// helper to unpack a single feature into a facility
fn feature_to_facility(idx: usize, feature: geojson::Feature) -> Result<Facility, Bike2BooksError> {
    let geometry = feature.geometry.ok_or_else(|| {
        Bike2BooksError::InvalidDataset(format!("feature {idx} has no geometry"))
    })?;
    let location: GeoPoint = match geometry.value {
        geojson::Value::Point(coordinates) => match coordinates.as_slice() {
            [x, y, ..] => Ok(geo_utils::lon_lat(*x, *y)),
            _ => Err(Bike2BooksError::InvalidDataset(format!(
                "feature {idx} has a Point geometry with fewer than two coordinates"
            ))),
        },
        _ => Err(Bike2BooksError::InvalidDataset(format!(
            "feature {idx} must have a Point geometry"
        ))),
    }?;

    let name = feature
        .properties
        .as_ref()
        .and_then(|properties| properties.get(NAME_PROPERTY))
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            Bike2BooksError::InvalidDataset(format!(
                "feature {idx} is missing a string '{NAME_PROPERTY}' property"
            ))
        })?;

    Ok(Facility::new(name, location))
}
