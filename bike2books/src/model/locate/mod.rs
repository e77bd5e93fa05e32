mod facility;
mod facility_collection;
mod library_locator;
mod nearest_facility;

pub use facility::Facility;
pub use facility_collection::FacilityCollection;
pub use library_locator::LibraryLocator;
pub use nearest_facility::{nearest_facility, NearestFacility};
