use serde::{Deserialize, Serialize};

use super::point::Point;

/// A named, colored connection between two saved points.
///
/// `start` and `end` are full copies of the endpoint records captured at
/// creation time, not live references. A later change to a point with the
/// same id does not propagate into existing paths; rendering always uses the
/// embedded copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Unique identifier (opaque string)
    pub id: String,

    /// Display name
    pub name: String,

    /// Embedded copy of the start point
    pub start: Point,

    /// Embedded copy of the end point
    pub end: Point,

    /// Line color as a hex-like string (free-form, not validated)
    pub color: String,
}

impl Path {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: Point,
        end: Point,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            color: color.into(),
        }
    }
}
