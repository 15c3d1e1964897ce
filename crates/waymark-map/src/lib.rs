//! Waymark Map - Map canvas reconciliation
//!
//! This crate owns everything between the domain state and a concrete map
//! widget: the tile-source table per style, the widget port and its
//! reconciliation driver, viewport bounds computation, and the OSRM client
//! that fetches routed geometry for path overlays. The widget itself is an
//! adapter (the GUI crate provides the egui one; [`headless`] provides the
//! recording one used in tests).

pub mod bounds;
pub mod headless;
pub mod routing;
pub mod tiles;
pub mod widget;

pub use bounds::LatLngBounds;
pub use tiles::{tile_source, tile_url, TileSource};
pub use widget::{MapCanvas, MapWidget, FIT_PADDING};
