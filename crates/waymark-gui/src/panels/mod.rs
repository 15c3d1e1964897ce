pub mod coordinate_panel;
pub mod path_dialog;
pub mod style_dialog;
