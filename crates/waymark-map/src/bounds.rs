//! Viewport bounds over the current features.

use geo::algorithm::bounding_rect::BoundingRect;
use geo::{MultiPoint, Point as GeoPoint};

use waymark_core::models::{Path, Point};

/// A latitude/longitude bounding box the viewport should be fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Bounding box of all points plus all path endpoints. Path endpoints
    /// are the embedded copies, so a path whose endpoints no longer match a
    /// live point still participates. Returns `None` when both collections
    /// are empty; the caller leaves the viewport unchanged.
    pub fn from_features(points: &[Point], paths: &[Path]) -> Option<Self> {
        let coords: Vec<GeoPoint<f64>> = points
            .iter()
            .chain(paths.iter().flat_map(|p| [&p.start, &p.end]))
            .map(|p| GeoPoint::new(p.lng, p.lat))
            .collect();

        let rect = MultiPoint::from(coords).bounding_rect()?;
        Some(Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        })
    }

    /// Center of the box as (lat, lng).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }
}
