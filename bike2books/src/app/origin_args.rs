use bike2books_core::util::geo_utils::{self, GeoPoint};
use clap::Args;

use crate::{error::Bike2BooksError, model::neighborhood};

/// where a trip starts, either a named neighborhood or a coordinate
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OriginArgs {
    /// neighborhood to start from. run `bike2books neighborhoods` to list them.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub neighborhood: Option<String>,
    /// latitude to start from, in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// longitude to start from, in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl OriginArgs {
    /// the origin point, if one was given
    pub fn resolve(&self) -> Result<Option<GeoPoint>, Bike2BooksError> {
        match (&self.neighborhood, self.lat, self.lon) {
            (Some(name), None, None) => neighborhood::neighborhood(name).map(Some),
            (None, Some(lat), Some(lon)) => Ok(Some(geo_utils::lat_lon(lat, lon))),
            (None, None, None) => Ok(None),
            _ => Err(Bike2BooksError::InvalidConfiguration(String::from(
                "provide either --neighborhood or both --lat and --lon",
            ))),
        }
    }

    /// the origin point, failing if none was given
    pub fn require(&self) -> Result<GeoPoint, Bike2BooksError> {
        self.resolve()?.ok_or_else(|| {
            Bike2BooksError::InvalidConfiguration(String::from(
                "an origin is required, provide --neighborhood or both --lat and --lon",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_neighborhood() {
        let args = OriginArgs {
            neighborhood: Some(String::from("Hillcrest")),
            ..Default::default()
        };
        let point = args.require().expect("should resolve");
        assert_eq!(point, geo_utils::lat_lon(32.75, -117.166667));
    }

    #[test]
    fn test_resolve_coordinates() {
        let args = OriginArgs {
            neighborhood: None,
            lat: Some(32.7157),
            lon: Some(-117.1611),
        };
        let point = args.require().expect("should resolve");
        assert_eq!(geo_utils::lat(&point), 32.7157);
        assert_eq!(geo_utils::lon(&point), -117.1611);
    }

    #[test]
    fn test_missing_origin() {
        let args = OriginArgs::default();
        assert_eq!(args.resolve().expect("should resolve"), None);
        assert!(matches!(
            args.require(),
            Err(Bike2BooksError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_partial_coordinates() {
        let args = OriginArgs {
            neighborhood: None,
            lat: Some(32.7157),
            lon: None,
        };
        assert!(matches!(
            args.resolve(),
            Err(Bike2BooksError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unknown_neighborhood() {
        let args = OriginArgs {
            neighborhood: Some(String::from("Nonexistent")),
            ..Default::default()
        };
        assert!(matches!(
            args.resolve(),
            Err(Bike2BooksError::KeyNotFound(_))
        ));
    }
}
