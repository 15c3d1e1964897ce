//! Left side panel: add-point form and the path list.

use waymark_core::models::{Path, Point};

/// Action requested by the panel, applied by the app after the draw pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    AddPoint { name: String, lat: f64, lng: f64 },
    DeletePath(String),
    OpenPathDialog,
    OpenStyleDialog,
}

/// Add-point form fields. Coordinates are kept as raw text until
/// submission; anything that does not parse counts as zero and fails
/// validation, matching the original form's `parseFloat(...) || 0`.
#[derive(Debug, Default)]
pub struct CoordinateForm {
    pub name: String,
    pub lat: String,
    pub lng: String,
}

impl CoordinateForm {
    /// Validate and consume the form. Accepted only when the name is
    /// non-empty and both coordinates are non-zero finite numbers;
    /// acceptance clears the fields. Rejection is a silent no-op: the
    /// fields keep their values and no message is produced.
    pub fn submit(&mut self) -> Option<PanelAction> {
        let lat = self.lat.trim().parse::<f64>().unwrap_or(0.0);
        let lng = self.lng.trim().parse::<f64>().unwrap_or(0.0);
        // A NaN or infinite coordinate would poison every later bounds
        // computation, so the finite check is part of the gate.
        if self.name.is_empty()
            || !lat.is_finite()
            || !lng.is_finite()
            || lat == 0.0
            || lng == 0.0
        {
            return None;
        }

        let action = PanelAction::AddPoint {
            name: std::mem::take(&mut self.name),
            lat,
            lng,
        };
        self.lat.clear();
        self.lng.clear();
        Some(action)
    }
}

/// Draw the panel. Returns at most one action per frame.
pub fn show_coordinate_panel(
    ui: &mut egui::Ui,
    points: &[Point],
    paths: &[Path],
    form: &mut CoordinateForm,
) -> Option<PanelAction> {
    let mut action = None;

    ui.heading("Add New Point");
    ui.add_space(4.0);
    ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Name"));
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.lat)
                .hint_text("Latitude")
                .desired_width(90.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.lng)
                .hint_text("Longitude")
                .desired_width(90.0),
        );
    });
    if ui.button("Add Point").clicked() {
        action = form.submit();
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Create Path").clicked() {
            action = Some(PanelAction::OpenPathDialog);
        }
        if ui.button("Map Style").clicked() {
            action = Some(PanelAction::OpenStyleDialog);
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui.label(format!("{} saved points", points.len()));

    ui.add_space(8.0);
    ui.heading("Paths");
    egui::ScrollArea::vertical().show(ui, |ui| {
        // Holder order: oldest first.
        for path in paths {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(&path.name);
                    ui.label(format!("{} → {}", path.start.name, path.end.name));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Immediate delete, no confirmation step.
                    if ui.button("🗑").clicked() {
                        action = Some(PanelAction::DeletePath(path.id.clone()));
                    }
                });
            });
            ui.separator();
        }
    });

    action
}
