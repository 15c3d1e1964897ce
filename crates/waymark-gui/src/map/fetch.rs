//! Background fetches for tile images and route geometry.
//!
//! Network work runs on a small tokio runtime; results come back over a
//! crossbeam channel and are drained by the widget at the start of each
//! frame. A failed fetch is reported as `None` and the widget degrades
//! (blank tile, straight route line); nothing is retried.

use std::sync::Arc;

use crossbeam_channel::Sender;

use waymark_map::routing::{OsrmRouter, RouteLine};

/// Cache key for one background tile.
///
/// `layer` is the widget's tile-layer generation at the time the fetch
/// was issued. Switching layers bumps the generation, so an in-flight
/// result for the previous layer can never be mistaken for a tile of
/// the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub layer: u64,
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

/// Result of one background fetch.
pub enum FetchResult {
    Tile {
        key: TileKey,
        image: Option<egui::ColorImage>,
    },
    Route {
        path_id: String,
        line: Option<RouteLine>,
    },
}

/// Spawns fetches and routes their results back to the UI thread.
pub struct Fetcher {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    router: Arc<OsrmRouter>,
    tx: Sender<FetchResult>,
    ctx: egui::Context,
}

impl Fetcher {
    pub fn new(
        ctx: egui::Context,
        osrm_url: &str,
        tx: Sender<FetchResult>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("waymark/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Ok(Self {
            runtime,
            client,
            router: Arc::new(OsrmRouter::new(osrm_url)),
            tx,
            ctx,
        })
    }

    /// Fetch and decode one tile image.
    pub fn fetch_tile(&self, key: TileKey, url: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let image = fetch_tile_image(&client, &url).await;
            if image.is_none() {
                tracing::debug!(%url, "tile fetch failed");
            }
            let _ = tx.send(FetchResult::Tile { key, image });
            ctx.request_repaint();
        });
    }

    /// Fetch routed geometry for a path's endpoints.
    pub fn fetch_route(&self, path_id: String, start: (f64, f64), end: (f64, f64)) {
        let router = self.router.clone();
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let line = match router.route(start, end).await {
                Ok(line) => Some(line),
                Err(e) => {
                    tracing::debug!(%path_id, error = %e, "route fetch failed");
                    None
                }
            };
            let _ = tx.send(FetchResult::Route { path_id, line });
            ctx.request_repaint();
        });
    }
}

async fn fetch_tile_image(client: &reqwest::Client, url: &str) -> Option<egui::ColorImage> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    let bytes = response.bytes().await.ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_raw(),
    ))
}
