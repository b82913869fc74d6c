use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One shared filtered view per cycle, refreshed before any panel
        // reads it.  Control edits below take effect on the next frame.
        self.state.ensure_filtered();

        // ---- Top panel: status strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, scatter, data grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &self.state);
            ui.add_space(8.0);

            ui.columns(2, |columns: &mut [egui::Ui]| {
                columns[0].group(|ui: &mut egui::Ui| {
                    ui.strong("Bill length and depth");
                    plot::scatter_plot(ui, &self.state);
                });
                columns[1].group(|ui: &mut egui::Ui| {
                    ui.strong("Penguin data");
                    table::data_grid(ui, &mut self.state);
                });
            });
        });
    }
}
