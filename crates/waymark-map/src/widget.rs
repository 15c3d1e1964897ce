//! Map widget port and reconciliation driver.
//!
//! The third-party map widget of the original design is a stateful external
//! object mutated imperatively. Here it sits behind an explicit port:
//! [`MapCanvas::new`] acquires the widget, [`MapCanvas::reconcile`] is called
//! at well-defined points (startup and after every state mutation), and
//! dropping the canvas releases the widget. No ambient effect scheduler is
//! involved.

use waymark_core::models::{MapStyle, Path, Point};

use crate::bounds::LatLngBounds;
use crate::tiles::{tile_source, TileSource};

/// Viewport padding, in widget pixels, applied when fitting bounds.
pub const FIT_PADDING: f32 = 50.0;

/// Port over a concrete map widget.
///
/// Implementations own whatever display resources they need (textures,
/// in-flight fetches); the driver only issues layer mutations. A route
/// overlay that fails to resolve geometry degrades inside the widget and
/// must not affect other layers.
pub trait MapWidget {
    /// Replace the background tile layer.
    fn set_tile_layer(&mut self, source: &'static TileSource);

    /// Remove every marker and every route overlay.
    fn clear_features(&mut self);

    /// Add one marker for a saved point, labeled with its name on
    /// interaction.
    fn add_marker(&mut self, point: &Point);

    /// Add one routed overlay for a path, styled with its stored color and
    /// decorated with A/B endpoint badges.
    fn add_route(&mut self, path: &Path);

    /// Adjust the viewport to contain `bounds` with `padding` pixels of
    /// margin.
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: f32);
}

/// Owns one widget and keeps its layers in sync with the domain state.
pub struct MapCanvas<W: MapWidget> {
    widget: W,
    applied_style: Option<MapStyle>,
    applied_revision: Option<u64>,
}

impl<W: MapWidget> MapCanvas<W> {
    /// Acquire the widget. The first `reconcile` call applies both the tile
    /// layer and the feature layers.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            applied_style: None,
            applied_revision: None,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Release the widget.
    pub fn into_widget(self) -> W {
        self.widget
    }

    /// Make the widget match the given state. Two independent triggers:
    /// a style change swaps the tile layer; a revision change rebuilds all
    /// markers and overlays and refits the viewport. When both collections
    /// are empty there are no bounds to fit and the viewport is untouched.
    pub fn reconcile(
        &mut self,
        style: MapStyle,
        revision: u64,
        points: &[Point],
        paths: &[Path],
    ) {
        if self.applied_style != Some(style) {
            tracing::debug!(?style, "swapping tile layer");
            self.widget.set_tile_layer(tile_source(style));
            self.applied_style = Some(style);
        }

        if self.applied_revision != Some(revision) {
            tracing::debug!(revision, points = points.len(), paths = paths.len(), "rebuilding feature layers");
            self.widget.clear_features();
            for point in points {
                self.widget.add_marker(point);
            }
            for path in paths {
                self.widget.add_route(path);
            }
            if let Some(bounds) = LatLngBounds::from_features(points, paths) {
                self.widget.fit_bounds(bounds, FIT_PADDING);
            }
            self.applied_revision = Some(revision);
        }
    }
}
