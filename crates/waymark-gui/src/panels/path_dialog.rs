//! Path creation dialog.
//!
//! Collects a name, a start point, an end point (chosen from points
//! excluding the selected start), and a color swatch. The create control is
//! enabled only while the state machine says submission is possible, not
//! just checked at click time.

use waymark_core::models::{parse_hex_color, Point, DEFAULT_PATH_COLOR, PATH_COLORS};

/// Action emitted by the dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Create {
        name: String,
        start: Point,
        end: Point,
        color: String,
    },
    Close,
}

/// Dialog state machine.
#[derive(Debug, Clone)]
pub struct PathDialogState {
    pub name: String,
    pub start_id: Option<String>,
    pub end_id: Option<String>,
    pub color: String,
}

impl Default for PathDialogState {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_id: None,
            end_id: None,
            color: DEFAULT_PATH_COLOR.to_string(),
        }
    }
}

impl PathDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission is possible once name, start, and end are all set.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && self.start_id.is_some() && self.end_id.is_some()
    }

    /// End-point options: every point except the selected start.
    pub fn end_options<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = &'a Point> {
        points
            .iter()
            .filter(move |p| Some(p.id.as_str()) != self.start_id.as_deref())
    }

    /// Whether the end selection equals the start selection. Changing the
    /// start after an end was chosen does not clear the end, so this state
    /// is reachable; the options list merely stops displaying it.
    pub fn has_conflicting_selection(&self) -> bool {
        self.start_id.is_some() && self.start_id == self.end_id
    }

    /// Resolve the selections back to full point records. Returns `None` if
    /// either id no longer resolves, in which case submission is a silent
    /// no-op.
    pub fn resolve(&self, points: &[Point]) -> Option<DialogAction> {
        let start = points.iter().find(|p| Some(p.id.as_str()) == self.start_id.as_deref())?;
        let end = points.iter().find(|p| Some(p.id.as_str()) == self.end_id.as_deref())?;
        if self.name.is_empty() {
            return None;
        }
        Some(DialogAction::Create {
            name: self.name.clone(),
            start: start.clone(),
            end: end.clone(),
            color: self.color.clone(),
        })
    }
}

fn selection_label(points: &[Point], id: &Option<String>, placeholder: &str) -> String {
    id.as_deref()
        .and_then(|id| points.iter().find(|p| p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Draw the modal dialog. Returns at most one action per frame.
pub fn show_path_dialog(
    ctx: &egui::Context,
    state: &mut PathDialogState,
    points: &[Point],
) -> Option<DialogAction> {
    let mut action = None;
    let mut open = true;

    egui::Window::new("Create New Path")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Path Name");
            ui.text_edit_singleline(&mut state.name);

            ui.add_space(6.0);
            ui.label("Start Point");
            egui::ComboBox::from_id_salt("path_start")
                .selected_text(selection_label(points, &state.start_id, "Select start point"))
                .show_ui(ui, |ui| {
                    for point in points {
                        ui.selectable_value(
                            &mut state.start_id,
                            Some(point.id.clone()),
                            &point.name,
                        );
                    }
                });

            ui.add_space(6.0);
            ui.label("End Point");
            ui.add_enabled_ui(state.start_id.is_some(), |ui| {
                egui::ComboBox::from_id_salt("path_end")
                    .selected_text(selection_label(points, &state.end_id, "Select end point"))
                    .show_ui(ui, |ui| {
                        let options: Vec<Point> = state.end_options(points).cloned().collect();
                        for point in options {
                            ui.selectable_value(
                                &mut state.end_id,
                                Some(point.id.clone()),
                                &point.name,
                            );
                        }
                    });
            });

            ui.add_space(6.0);
            ui.label("Path Color");
            ui.horizontal(|ui| {
                for swatch in PATH_COLORS {
                    let color = parse_hex(swatch);
                    let selected = state.color == swatch;
                    let size = egui::Vec2::splat(20.0);
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                    ui.painter().rect_filled(rect, 4.0, color);
                    if selected {
                        ui.painter().rect_stroke(
                            rect,
                            4.0,
                            egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
                            egui::StrokeKind::Outside,
                        );
                    }
                    if response.clicked() {
                        state.color = swatch.to_string();
                    }
                }
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::Close);
                }
                if ui
                    .add_enabled(state.can_submit(), egui::Button::new("Create Path"))
                    .clicked()
                {
                    action = state.resolve(points);
                }
            });
        });

    if !open {
        action = Some(DialogAction::Close);
    }
    action
}

fn parse_hex(hex: &str) -> egui::Color32 {
    match parse_hex_color(hex) {
        Some([r, g, b]) => egui::Color32::from_rgb(r, g, b),
        None => egui::Color32::GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![
            Point::new("a", "Alpha", -1.95, 30.06),
            Point::new("b", "Beta", -1.93, 30.13),
            Point::new("c", "Gamma", -1.90, 30.10),
        ]
    }

    #[test]
    fn new_dialog_defaults_to_first_swatch_and_cannot_submit() {
        let state = PathDialogState::new();
        assert_eq!(state.color, DEFAULT_PATH_COLOR);
        assert!(!state.can_submit());
    }

    #[test]
    fn submit_enabled_only_when_all_fields_set() {
        let mut state = PathDialogState::new();
        state.name = "Commute".to_string();
        assert!(!state.can_submit());
        state.start_id = Some("a".to_string());
        assert!(!state.can_submit());
        state.end_id = Some("b".to_string());
        assert!(state.can_submit());
    }

    #[test]
    fn end_options_exclude_the_selected_start() {
        let pts = points();
        let mut state = PathDialogState::new();
        state.start_id = Some("b".to_string());
        let ids: Vec<&str> = state.end_options(&pts).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn changing_start_does_not_clear_a_now_equal_end() {
        let mut state = PathDialogState::new();
        state.name = "Loop".to_string();
        state.start_id = Some("a".to_string());
        state.end_id = Some("b".to_string());
        assert!(!state.has_conflicting_selection());

        // User moves the start onto the already-chosen end.
        state.start_id = Some("b".to_string());
        assert!(state.has_conflicting_selection());
        // The stale selection is not defensively cleared and can still
        // submit; downstream stores the zero-length path as-is.
        assert!(state.can_submit());
    }

    #[test]
    fn resolve_embeds_full_point_copies() {
        let pts = points();
        let mut state = PathDialogState::new();
        state.name = "Commute".to_string();
        state.start_id = Some("a".to_string());
        state.end_id = Some("c".to_string());
        state.color = "#ef4444".to_string();

        match state.resolve(&pts).unwrap() {
            DialogAction::Create { name, start, end, color } => {
                assert_eq!(name, "Commute");
                assert_eq!(start, pts[0]);
                assert_eq!(end, pts[2]);
                assert_eq!(color, "#ef4444");
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn resolve_of_dangling_selection_is_a_noop() {
        let pts = points();
        let mut state = PathDialogState::new();
        state.name = "Commute".to_string();
        state.start_id = Some("a".to_string());
        state.end_id = Some("missing".to_string());
        assert_eq!(state.resolve(&pts), None);
    }
}
