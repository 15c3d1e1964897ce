//! Operation-recording widget for reconciliation tests.

use waymark_core::models::{Path, Point};

use crate::bounds::LatLngBounds;
use crate::tiles::TileSource;
use crate::widget::MapWidget;

/// One recorded widget mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOp {
    SetTileLayer(&'static str),
    ClearFeatures,
    AddMarker { id: String, name: String },
    AddRoute { id: String, color: String },
    FitBounds { bounds: LatLngBounds, padding: f32 },
}

/// `MapWidget` implementation that records every operation instead of
/// drawing anything.
#[derive(Debug, Default)]
pub struct HeadlessWidget {
    pub ops: Vec<WidgetOp>,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations since the last `take`.
    pub fn take_ops(&mut self) -> Vec<WidgetOp> {
        std::mem::take(&mut self.ops)
    }
}

impl MapWidget for HeadlessWidget {
    fn set_tile_layer(&mut self, source: &'static TileSource) {
        self.ops.push(WidgetOp::SetTileLayer(source.url_template));
    }

    fn clear_features(&mut self) {
        self.ops.push(WidgetOp::ClearFeatures);
    }

    fn add_marker(&mut self, point: &Point) {
        self.ops.push(WidgetOp::AddMarker {
            id: point.id.clone(),
            name: point.name.clone(),
        });
    }

    fn add_route(&mut self, path: &Path) {
        self.ops.push(WidgetOp::AddRoute {
            id: path.id.clone(),
            color: path.color.clone(),
        });
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: f32) {
        self.ops.push(WidgetOp::FitBounds { bounds, padding });
    }
}
