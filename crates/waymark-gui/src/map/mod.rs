pub mod fetch;
pub mod mercator;
pub mod widget;

pub use widget::EguiMapWidget;
