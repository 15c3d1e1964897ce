use serde::{Deserialize, Serialize};

/// The visual tile theme used to render the map background.
///
/// Serialized as a lowercase quoted string (`"osm"`, `"dark"`, ...). A
/// persisted value outside the enumeration fails deserialization, which the
/// store adapter recovers by substituting the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    /// Standard OpenStreetMap street tiles
    #[default]
    Osm,
    /// Public-transport overlay tiles
    Transport,
    /// Satellite imagery
    Satellite,
    /// Cycling-oriented tiles
    Cycle,
    /// Dark basemap
    Dark,
}

impl MapStyle {
    /// All styles, in the order the style picker presents them.
    pub const ALL: [MapStyle; 5] = [
        MapStyle::Osm,
        MapStyle::Transport,
        MapStyle::Satellite,
        MapStyle::Cycle,
        MapStyle::Dark,
    ];

    /// Human-readable label for the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            MapStyle::Osm => "OpenStreetMap",
            MapStyle::Transport => "Transport",
            MapStyle::Satellite => "Satellite",
            MapStyle::Cycle => "Cycle",
            MapStyle::Dark => "Dark",
        }
    }
}

/// Swatches offered by the path-creation dialog. The stored color is still a
/// free-form string; this list only drives the picker.
pub const PATH_COLORS: [&str; 8] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // green
    "#f59e0b", // yellow
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f97316", // orange
];

/// Default swatch for a new path.
pub const DEFAULT_PATH_COLOR: &str = PATH_COLORS[0];

/// Parse a `#rrggbb` string into RGB components. Path colors are stored
/// free-form, so anything unparseable yields `None` and the renderer picks
/// its own fallback.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&MapStyle::Osm).unwrap(), "\"osm\"");
        assert_eq!(serde_json::to_string(&MapStyle::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn unknown_identifier_fails_deserialization() {
        let result: Result<MapStyle, _> = serde_json::from_str("\"hybrid\"");
        assert!(result.is_err());
    }

    #[test]
    fn default_is_osm() {
        assert_eq!(MapStyle::default(), MapStyle::Osm);
    }

    #[test]
    fn every_swatch_parses() {
        for swatch in PATH_COLORS {
            assert!(parse_hex_color(swatch).is_some(), "{swatch}");
        }
        assert_eq!(parse_hex_color("#3b82f6"), Some([0x3b, 0x82, 0xf6]));
    }

    #[test]
    fn junk_colors_do_not_parse() {
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
