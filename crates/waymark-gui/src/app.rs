//! Main application: WaymarkApp implements eframe::App.

use std::sync::Arc;

use waymark_core::config::AppConfig;
use waymark_core::state::AppState;
use waymark_core::Result;
use waymark_map::MapCanvas;
use waymark_store::FileStore;

use crate::map::EguiMapWidget;
use crate::panels::coordinate_panel::{show_coordinate_panel, CoordinateForm, PanelAction};
use crate::panels::path_dialog::{show_path_dialog, DialogAction, PathDialogState};
use crate::panels::style_dialog::{show_style_dialog, StyleAction};

/// The main application state.
pub struct WaymarkApp {
    /// Domain state (points, paths, style), persisted on every mutation.
    state: AppState,

    /// The owned map widget behind its reconciliation driver.
    canvas: MapCanvas<EguiMapWidget>,

    /// Add-point form fields.
    form: CoordinateForm,

    /// Path dialog, present while open.
    path_dialog: Option<PathDialogState>,

    /// Whether the style picker is open.
    style_dialog_open: bool,
}

impl WaymarkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self> {
        let store = Arc::new(FileStore::open(&config.data_dir.value)?);
        let state = AppState::load(store);
        tracing::info!(
            points = state.points().len(),
            paths = state.paths().len(),
            "loaded state"
        );

        let widget = EguiMapWidget::new(cc.egui_ctx.clone(), &config.osrm_url.value)?;
        let canvas = MapCanvas::new(widget);

        Ok(Self {
            state,
            canvas,
            form: CoordinateForm::default(),
            path_dialog: None,
            style_dialog_open: false,
        })
    }

    /// Push current state into the widget. No-ops when neither the style
    /// nor the data revision changed since the last call.
    fn reconcile(&mut self) {
        self.canvas.reconcile(
            self.state.style(),
            self.state.revision(),
            self.state.points(),
            self.state.paths(),
        );
    }

    fn apply_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::AddPoint { name, lat, lng } => {
                self.state.add_point(name, lat, lng);
            }
            PanelAction::DeletePath(id) => {
                self.state.delete_path(&id);
            }
            PanelAction::OpenPathDialog => {
                self.path_dialog = Some(PathDialogState::new());
            }
            PanelAction::OpenStyleDialog => {
                self.style_dialog_open = true;
            }
        }
    }
}

impl eframe::App for WaymarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("coordinate_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                if let Some(action) =
                    show_coordinate_panel(ui, self.state.points(), self.state.paths(), &mut self.form)
                {
                    self.apply_panel_action(action);
                }
            });

        if let Some(mut dialog) = self.path_dialog.take() {
            match show_path_dialog(ctx, &mut dialog, self.state.points()) {
                Some(DialogAction::Create { name, start, end, color }) => {
                    self.state.add_path(name, start, end, color);
                }
                Some(DialogAction::Close) => {}
                None => self.path_dialog = Some(dialog),
            }
        }

        if self.style_dialog_open {
            match show_style_dialog(ctx, self.state.style()) {
                Some(StyleAction::Select(style)) => {
                    self.state.set_style(style);
                    self.style_dialog_open = false;
                }
                Some(StyleAction::Close) => self.style_dialog_open = false,
                None => {}
            }
        }

        // Mutate -> persist happened above; reconcile the display last.
        self.reconcile();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.widget_mut().draw(ui);
            });
    }
}
