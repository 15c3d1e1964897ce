//! Egui slippy-map widget.
//!
//! Implements the `MapWidget` port: a background tile layer per style,
//! one marker per saved point, and one route overlay per path. Tile images
//! and route geometry arrive asynchronously over the fetch channel; until
//! they do, tiles are blank and routes fall back to a straight segment
//! between their endpoints.

use std::collections::HashMap;

use crossbeam_channel::{unbounded, Receiver};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, TextureHandle, Vec2};

use waymark_core::models::{parse_hex_color, Path, Point};
use waymark_core::{Result, WaymarkError};
use waymark_map::routing::RouteLine;
use waymark_map::{tile_url, LatLngBounds, MapWidget, TileSource};

use super::fetch::{FetchResult, Fetcher, TileKey};
use super::mercator::{self, Viewport, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};

const MARKER_RADIUS: f32 = 6.0;
const ROUTE_WIDTH: f32 = 5.0;
const BADGE_RADIUS: f32 = 12.0;

enum TileState {
    Pending,
    Failed,
    Ready(TextureHandle),
}

struct RouteOverlay {
    path: Path,
    line: Option<RouteLine>,
}

pub struct EguiMapWidget {
    viewport: Viewport,
    tile_source: Option<&'static TileSource>,
    markers: Vec<Point>,
    routes: Vec<RouteOverlay>,
    tiles: HashMap<TileKey, TileState>,
    // Bumped on every layer switch; stamped into each TileKey so late
    // results for a replaced layer can be recognized and dropped.
    layer_generation: u64,
    pending_fit: Option<(LatLngBounds, f32)>,
    fetcher: Fetcher,
    rx: Receiver<FetchResult>,
}

impl EguiMapWidget {
    pub fn new(ctx: egui::Context, osrm_url: &str) -> Result<Self> {
        let (tx, rx) = unbounded();
        let fetcher = Fetcher::new(ctx, osrm_url, tx).map_err(WaymarkError::Io)?;
        Ok(Self {
            viewport: Viewport::default(),
            tile_source: None,
            markers: Vec::new(),
            routes: Vec::new(),
            tiles: HashMap::new(),
            layer_generation: 0,
            pending_fit: None,
            fetcher,
            rx,
        })
    }

    /// Drain fetch results delivered since the last frame.
    fn apply_fetch_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.rx.try_recv() {
            match result {
                FetchResult::Tile { key, image } => self.store_tile_result(ctx, key, image),
                FetchResult::Route { path_id, line } => {
                    // An overlay removed while its fetch was in flight is
                    // simply no longer here; the result is detached.
                    if let Some(overlay) = self.routes.iter_mut().find(|r| r.path.id == path_id) {
                        overlay.line = line;
                    }
                }
            }
        }
    }

    /// Store one fetched tile, or drop it when it belongs to a layer
    /// that has since been replaced.
    fn store_tile_result(
        &mut self,
        ctx: &egui::Context,
        key: TileKey,
        image: Option<egui::ColorImage>,
    ) {
        // The generation check catches an in-flight result whose slot was
        // re-created for the new layer after the cache was cleared.
        if key.layer != self.layer_generation {
            return;
        }
        if let Some(state) = self.tiles.get_mut(&key) {
            *state = match image {
                Some(image) => TileState::Ready(ctx.load_texture(
                    format!("tile-{}-{}-{}-{}", key.layer, key.zoom, key.x, key.y),
                    image,
                    egui::TextureOptions::LINEAR,
                )),
                None => TileState::Failed,
            };
        }
    }

    /// Draw the map into the available space and handle pan/zoom input.
    pub fn draw(&mut self, ui: &mut egui::Ui) {
        self.apply_fetch_results(ui.ctx());

        let size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if let Some((bounds, padding)) = self.pending_fit.take() {
            self.viewport = Viewport::fit(bounds, rect.width(), rect.height(), padding);
        }

        if response.dragged() {
            let delta = response.drag_delta();
            self.viewport.pan(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.viewport.zoom_by(scroll as f64 * 0.005);
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_gray(230));

        self.draw_tiles(&painter, rect);
        self.draw_routes(&painter, rect);
        self.draw_markers(&painter, rect, response.hover_pos());

        if let Some(source) = self.tile_source {
            painter.text(
                rect.right_bottom() - Vec2::new(4.0, 2.0),
                Align2::RIGHT_BOTTOM,
                source.attribution,
                FontId::proportional(10.0),
                Color32::DARK_GRAY,
            );
        }
    }

    fn screen_pos(&self, rect: Rect, lat: f64, lng: f64) -> Pos2 {
        let (dx, dy) = self.viewport.screen_offset(lat, lng);
        rect.center() + Vec2::new(dx, dy)
    }

    fn draw_tiles(&mut self, painter: &egui::Painter, rect: Rect) {
        let Some(source) = self.tile_source else {
            return;
        };

        let z = self.viewport.zoom.round().clamp(MIN_ZOOM, MAX_ZOOM) as u8;
        let tiles_across = 2u32.saturating_pow(z as u32);
        // Screen size of one tile at the (possibly fractional) view zoom.
        let ts = (TILE_SIZE * (self.viewport.zoom - z as f64).exp2()) as f32;

        let (cx, cy) = mercator::project(
            self.viewport.center_lat,
            self.viewport.center_lng,
            z as f64,
        );
        let (ct_x, ct_y) = (cx / TILE_SIZE, cy / TILE_SIZE);

        let half_w = rect.width() / 2.0;
        let half_h = rect.height() / 2.0;
        let x_min = (ct_x - (half_w / ts) as f64).floor() as i64;
        let x_max = (ct_x + (half_w / ts) as f64).ceil() as i64;
        let y_min = (ct_y - (half_h / ts) as f64).floor() as i64;
        let y_max = (ct_y + (half_h / ts) as f64).ceil() as i64;

        for ty in y_min..=y_max {
            if ty < 0 || ty >= tiles_across as i64 {
                continue;
            }
            for tx in x_min..=x_max {
                // Wrap longitude so panning across the date line keeps tiles.
                let wrapped_x = tx.rem_euclid(tiles_across as i64) as u32;
                let key = TileKey {
                    layer: self.layer_generation,
                    zoom: z,
                    x: wrapped_x,
                    y: ty as u32,
                };

                let state = self.tiles.entry(key).or_insert_with(|| {
                    self.fetcher
                        .fetch_tile(key, tile_url(source, z, wrapped_x, ty as u32));
                    TileState::Pending
                });

                if let TileState::Ready(texture) = state {
                    let min = rect.center()
                        + Vec2::new(
                            ((tx as f64 - ct_x) * ts as f64) as f32,
                            ((ty as f64 - ct_y) * ts as f64) as f32,
                        );
                    let tile_rect = Rect::from_min_size(min, Vec2::splat(ts));
                    painter.image(
                        texture.id(),
                        tile_rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
        }
    }

    fn draw_routes(&self, painter: &egui::Painter, rect: Rect) {
        for overlay in &self.routes {
            let color = route_color(&overlay.path.color);

            let line: Vec<Pos2> = match &overlay.line {
                Some(line) => line
                    .iter()
                    .map(|&(lat, lng)| self.screen_pos(rect, lat, lng))
                    .collect(),
                // Geometry unavailable (pending or failed): straight segment.
                None => vec![
                    self.screen_pos(rect, overlay.path.start.lat, overlay.path.start.lng),
                    self.screen_pos(rect, overlay.path.end.lat, overlay.path.end.lng),
                ],
            };
            painter.add(Shape::line(line, Stroke::new(ROUTE_WIDTH, color)));

            // A/B endpoint badges.
            for (label, point) in [("A", &overlay.path.start), ("B", &overlay.path.end)] {
                let center = self.screen_pos(rect, point.lat, point.lng);
                painter.circle(
                    center,
                    BADGE_RADIUS,
                    Color32::WHITE,
                    Stroke::new(2.0, color),
                );
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(12.0),
                    color,
                );
            }
        }
    }

    fn draw_markers(&self, painter: &egui::Painter, rect: Rect, hover: Option<Pos2>) {
        for marker in &self.markers {
            let center = self.screen_pos(rect, marker.lat, marker.lng);
            painter.circle(
                center,
                MARKER_RADIUS,
                Color32::from_rgb(0x2b, 0x6c, 0xb0),
                Stroke::new(2.0, Color32::WHITE),
            );

            let hovered = hover
                .map(|pos| pos.distance(center) <= MARKER_RADIUS + 4.0)
                .unwrap_or(false);
            if hovered {
                painter.text(
                    center - Vec2::new(0.0, MARKER_RADIUS + 4.0),
                    Align2::CENTER_BOTTOM,
                    &marker.name,
                    FontId::proportional(13.0),
                    Color32::BLACK,
                );
            }
        }
    }
}

impl MapWidget for EguiMapWidget {
    fn set_tile_layer(&mut self, source: &'static TileSource) {
        if self.tile_source == Some(source) {
            return;
        }
        self.tile_source = Some(source);
        // Old layer's textures are dropped, and the bumped generation
        // invalidates any of its fetches still in flight.
        self.layer_generation += 1;
        self.tiles.clear();
    }

    fn clear_features(&mut self) {
        self.markers.clear();
        self.routes.clear();
    }

    fn add_marker(&mut self, point: &Point) {
        self.markers.push(point.clone());
    }

    fn add_route(&mut self, path: &Path) {
        self.fetcher.fetch_route(
            path.id.clone(),
            (path.start.lat, path.start.lng),
            (path.end.lat, path.end.lng),
        );
        self.routes.push(RouteOverlay {
            path: path.clone(),
            line: None,
        });
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding: f32) {
        // Applied on the next draw, when the widget knows its pixel size.
        self.pending_fit = Some((bounds, padding));
    }
}

fn route_color(hex: &str) -> Color32 {
    match parse_hex_color(hex) {
        // Route lines render at 0.7 opacity.
        Some([r, g, b]) => Color32::from_rgba_unmultiplied(r, g, b, 178),
        None => Color32::from_rgba_unmultiplied(0x3b, 0x82, 0xf6, 178),
    }
}
