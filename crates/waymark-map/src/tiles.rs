//! Tile sources per map style.
//!
//! Static lookup of {URL template, attribution} per style identifier.
//! Templates use the conventional `{s}`/`{z}`/`{x}`/`{y}` placeholders;
//! `{r}` (retina suffix) is expanded to nothing.

use waymark_core::models::MapStyle;

/// A background tile layer: where its images come from and who to credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSource {
    pub url_template: &'static str,
    pub attribution: &'static str,
}

const OSM: TileSource = TileSource {
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "© OpenStreetMap contributors",
};

const TRANSPORT: TileSource = TileSource {
    url_template: "https://{s}.tile.thunderforest.com/transport/{z}/{x}/{y}.png?apikey=YOUR_API_KEY",
    attribution: "Maps © Thunderforest, Data © OpenStreetMap contributors",
};

const SATELLITE: TileSource = TileSource {
    url_template:
        "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
    attribution: "Tiles © ArcGIS",
};

const CYCLE: TileSource = TileSource {
    url_template: "https://{s}.tile.thunderforest.com/cycle/{z}/{x}/{y}.png?apikey=YOUR_API_KEY",
    attribution: "Maps © Thunderforest, Data © OpenStreetMap contributors",
};

const DARK: TileSource = TileSource {
    url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
    attribution: "© OpenStreetMap contributors © CARTO",
};

/// Tile source for a style.
pub fn tile_source(style: MapStyle) -> &'static TileSource {
    match style {
        MapStyle::Osm => &OSM,
        MapStyle::Transport => &TRANSPORT,
        MapStyle::Satellite => &SATELLITE,
        MapStyle::Cycle => &CYCLE,
        MapStyle::Dark => &DARK,
    }
}

/// Expand a tile URL template for one tile. The `{s}` subdomain rotates over
/// a/b/c keyed on tile position, spreading requests the way slippy-map
/// clients conventionally do.
pub fn tile_url(source: &TileSource, zoom: u8, x: u32, y: u32) -> String {
    const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
    let s = SUBDOMAINS[((x + y) % 3) as usize];
    source
        .url_template
        .replace("{s}", s)
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
        .replace("{r}", "")
}
