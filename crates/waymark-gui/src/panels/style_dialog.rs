//! Map style picker dialog.

use waymark_core::models::MapStyle;

/// Action emitted by the style dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleAction {
    Select(MapStyle),
    Close,
}

/// Draw the style picker. Selecting a style both applies and closes it.
pub fn show_style_dialog(ctx: &egui::Context, current: MapStyle) -> Option<StyleAction> {
    let mut action = None;
    let mut open = true;

    egui::Window::new("Map Style")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            for style in MapStyle::ALL {
                let selected = style == current;
                if ui.selectable_label(selected, style.label()).clicked() {
                    action = Some(StyleAction::Select(style));
                }
            }
        });

    if !open {
        action = Some(StyleAction::Close);
    }
    action
}
