pub mod path;
pub mod point;
pub mod style;

pub use path::Path;
pub use point::Point;
pub use style::{parse_hex_color, MapStyle, DEFAULT_PATH_COLOR, PATH_COLORS};
