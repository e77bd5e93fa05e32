use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use bike2books_core::util::geo_utils::GeoPoint;

use super::{FacilityCollection, NearestFacility};
use crate::error::Bike2BooksError;

/// finds the nearest library to a location. the libraries file is read on the
/// first lookup and kept for the lifetime of the locator.
#[derive(Debug)]
pub struct LibraryLocator {
    libraries_file: PathBuf,
    libraries: OnceCell<FacilityCollection>,
}

impl LibraryLocator {
    pub fn new<P: AsRef<Path>>(libraries_file: P) -> Self {
        Self {
            libraries_file: libraries_file.as_ref().to_path_buf(),
            libraries: OnceCell::new(),
        }
    }

    /// creates a locator over an already loaded collection
    pub fn from_collection(libraries: FacilityCollection) -> Self {
        Self {
            libraries_file: PathBuf::new(),
            libraries: OnceCell::from(libraries),
        }
    }

    pub fn libraries_file(&self) -> &Path {
        &self.libraries_file
    }

    pub fn is_loaded(&self) -> bool {
        self.libraries.get().is_some()
    }

    /// the library collection, loading it if this is the first access
    pub fn libraries(&self) -> Result<&FacilityCollection, Bike2BooksError> {
        if let Some(libraries) = self.libraries.get() {
            return Ok(libraries);
        }
        log::info!(
            "loading libraries from {}",
            self.libraries_file.to_string_lossy()
        );
        let loaded = FacilityCollection::from_geojson_file(&self.libraries_file)?;
        Ok(self.libraries.get_or_init(|| loaded))
    }

    pub fn nearest_library(&self, location: &GeoPoint) -> Result<NearestFacility, Bike2BooksError> {
        self.libraries()?.nearest(location)
    }
}
