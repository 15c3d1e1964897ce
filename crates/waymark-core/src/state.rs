//! Domain state holder.
//!
//! `AppState` exclusively owns the authoritative point and path collections
//! plus the active map style. Every mutation replaces the affected
//! collection, persists it, and bumps a revision counter; dependents compare
//! revisions to detect "something changed" instead of deep-comparing the
//! collections.

use std::sync::Arc;

use crate::id::fresh_id;
use crate::models::{MapStyle, Path, Point};
use crate::ports::{load, save, KeyValueStore};
use crate::seed;

/// Storage key for the ordered point collection.
pub const KEY_COORDINATES: &str = "coordinates";

/// Storage key for the ordered path collection.
pub const KEY_PATHS: &str = "paths";

/// Storage key for the active map style.
pub const KEY_MAP_TYPE: &str = "mapType";

/// Authoritative application state.
///
/// Other components hold only read references for the duration of a render
/// pass; all mutation goes through the operations below, each of which
/// follows the ordering mutate -> persist -> (caller reconciles display).
pub struct AppState {
    points: Vec<Point>,
    paths: Vec<Path>,
    style: MapStyle,
    revision: u64,
    store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Load state from the store. An empty point collection is replaced by
    /// the built-in seed set (and persisted); a missing or malformed style
    /// falls back to the default.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut points: Vec<Point> = load(store.as_ref(), KEY_COORDINATES, Vec::new());
        if points.is_empty() {
            tracing::info!("no saved points, seeding built-in set");
            points = seed::default_points();
            save(store.as_ref(), KEY_COORDINATES, &points);
        }
        let paths: Vec<Path> = load(store.as_ref(), KEY_PATHS, Vec::new());
        let style: MapStyle = load(store.as_ref(), KEY_MAP_TYPE, MapStyle::default());

        Self {
            points,
            paths,
            style,
            revision: 0,
            store,
        }
    }

    /// Current point collection, in insertion (= display) order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current path collection, in insertion (= display) order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Active map style. Always a valid member of the enumeration.
    pub fn style(&self) -> MapStyle {
        self.style
    }

    /// Counter bumped on every point/path mutation. Dependents store the
    /// last revision they rendered and reconcile when it differs.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new point and persist the full sequence. No geographic or
    /// duplicate-name validation is performed here; the form layer gates
    /// submission.
    pub fn add_point(&mut self, name: impl Into<String>, lat: f64, lng: f64) -> Point {
        let point = Point::new(fresh_id(), name, lat, lng);
        tracing::debug!(id = %point.id, name = %point.name, "adding point");
        self.points.push(point.clone());
        save(self.store.as_ref(), KEY_COORDINATES, &self.points);
        self.revision += 1;
        point
    }

    /// Append a new path and persist the full sequence. The caller (the
    /// path dialog) guarantees the endpoints are present and distinct; no
    /// revalidation happens here.
    pub fn add_path(
        &mut self,
        name: impl Into<String>,
        start: Point,
        end: Point,
        color: impl Into<String>,
    ) -> Path {
        let path = Path::new(fresh_id(), name, start, end, color);
        tracing::debug!(id = %path.id, name = %path.name, "adding path");
        self.paths.push(path.clone());
        save(self.store.as_ref(), KEY_PATHS, &self.paths);
        self.revision += 1;
        path
    }

    /// Remove the path with the given id, if present. An unknown id leaves
    /// the sequence unchanged; this is not an error.
    pub fn delete_path(&mut self, id: &str) {
        let before = self.paths.len();
        self.paths.retain(|p| p.id != id);
        if self.paths.len() == before {
            tracing::debug!(id, "delete_path: no matching path");
            return;
        }
        save(self.store.as_ref(), KEY_PATHS, &self.paths);
        self.revision += 1;
    }

    /// Replace the active style and persist it. Style changes do not bump
    /// the data revision; the tile layer reconciles on the style value
    /// itself.
    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
        save(self.store.as_ref(), KEY_MAP_TYPE, &self.style);
    }

    /// Look up a point by id in the live collection.
    pub fn find_point(&self, id: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }
}
