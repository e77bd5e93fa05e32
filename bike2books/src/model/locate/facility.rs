use bike2books_core::util::geo_utils::GeoPoint;

/// a named point of interest, such as a library branch
#[derive(Clone, Debug, PartialEq)]
pub struct Facility {
    pub name: String,
    pub location: GeoPoint,
}

impl Facility {
    pub fn new<S: Into<String>>(name: S, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}
