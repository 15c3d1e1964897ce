//! Web-mercator projection and viewport math.
//!
//! World pixel coordinates use the conventional 256px tile grid: at zoom z
//! the world is 256 * 2^z pixels square. Zoom is a float; tiles are drawn at
//! the nearest integer zoom and scaled.

use waymark_map::LatLngBounds;

/// Logical tile edge in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Minimum interactive zoom.
pub const MIN_ZOOM: f64 = 2.0;

/// Maximum interactive zoom.
pub const MAX_ZOOM: f64 = 19.0;

/// Cap applied when fitting bounds, so a single point does not zoom in to
/// the tile limit.
pub const MAX_FIT_ZOOM: f64 = 16.0;

/// Project (lat, lng) to world pixel coordinates at `zoom`.
pub fn project(lat: f64, lng: f64, zoom: f64) -> (f64, f64) {
    let n = TILE_SIZE * zoom.exp2();
    let x = (lng + 180.0) / 360.0 * n;
    let lat_rad = lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> (f64, f64) {
    let n = TILE_SIZE * zoom.exp2();
    let lng = x / n * 360.0 - 180.0;
    let lat_rad = (std::f64::consts::PI * (1.0 - 2.0 * y / n)).sinh().atan();
    (lat_rad.to_degrees(), lng)
}

/// Normalize a longitude into [-180, 180).
pub fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Current view: center coordinate plus zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // Initial view before any bounds are fitted.
        Self {
            center_lat: 51.505,
            center_lng: -0.09,
            zoom: 13.0,
        }
    }
}

impl Viewport {
    /// Screen offset of (lat, lng) relative to the viewport center, in
    /// pixels.
    pub fn screen_offset(&self, lat: f64, lng: f64) -> (f32, f32) {
        let (x, y) = project(lat, lng, self.zoom);
        let (cx, cy) = project(self.center_lat, self.center_lng, self.zoom);
        ((x - cx) as f32, (y - cy) as f32)
    }

    /// Pan by a screen-pixel delta (positive = content dragged right/down).
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (cx, cy) = project(self.center_lat, self.center_lng, self.zoom);
        let (lat, lng) = unproject(cx - dx as f64, cy - dy as f64, self.zoom);
        self.center_lat = lat.clamp(-85.0, 85.0);
        // Latitude stops at the mercator edge; longitude wraps, matching
        // the tile layer, which repeats across the date line.
        self.center_lng = wrap_lng(lng);
    }

    /// Zoom by a delta, clamped to the interactive range.
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Viewport that contains `bounds` inside a `width` x `height` pixel
    /// area, keeping `padding` pixels of margin on every side.
    pub fn fit(bounds: LatLngBounds, width: f32, height: f32, padding: f32) -> Self {
        let avail_w = (width - 2.0 * padding).max(1.0) as f64;
        let avail_h = (height - 2.0 * padding).max(1.0) as f64;

        // Spans in world pixels at zoom 0.
        let (x0, y0) = project(bounds.north, bounds.west, 0.0);
        let (x1, y1) = project(bounds.south, bounds.east, 0.0);
        let span_x = (x1 - x0).abs().max(1e-9);
        let span_y = (y1 - y0).abs().max(1e-9);

        let zoom = (avail_w / span_x)
            .log2()
            .min((avail_h / span_y).log2())
            .clamp(MIN_ZOOM, MAX_FIT_ZOOM);

        let (center_lat, center_lng) = bounds.center();
        Self {
            center_lat,
            center_lng,
            zoom,
        }
    }
}
