use serde::{Deserialize, Serialize};

/// A named geographic coordinate the user has saved.
///
/// Points are immutable after creation and never deleted; paths embed full
/// copies of their endpoints, so a point record is only ever appended to the
/// collection. Field names match the persisted wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Unique identifier (opaque string)
    pub id: String,

    /// Display name
    pub name: String,

    /// Latitude in degrees (WGS 84)
    pub lat: f64,

    /// Longitude in degrees (WGS 84)
    pub lng: f64,
}

impl Point {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        }
    }
}
