use eframe::egui::{self, RichText, Slider, Ui};

use crate::data::filter::{MASS_MAX_G, MASS_MIN_G};
use crate::data::model::Species;
use crate::data::stats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter controls");
    ui.separator();

    // ---- Mass threshold ----
    ui.strong("Mass (g)");
    let mut mass = state.controls.mass_threshold;
    if ui
        .add(Slider::new(&mut mass, MASS_MIN_G..=MASS_MAX_G).integer().suffix(" g"))
        .changed()
    {
        state.set_mass_threshold(mass);
    }
    ui.add_space(4.0);
    ui.separator();

    // ---- Species checkboxes ----
    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });

    for species in Species::ALL {
        let mut checked = state.controls.selected_species.contains(&species);
        let label = RichText::new(species.to_string())
            .color(state.species_colors.color_for(species));
        if ui.checkbox(&mut checked, label).changed() {
            state.toggle_species(species);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status strip.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Penguins dashboard");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} shown",
            state.dataset.len(),
            state.visible().len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// Render the three summary value boxes across the top of the central panel.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let count = state.visible().len();
    let mean_length = stats::mean(state.visible_penguins().filter_map(|p| p.bill_length_mm));
    let mean_depth = stats::mean(state.visible_penguins().filter_map(|p| p.bill_depth_mm));

    ui.columns(3, |columns: &mut [Ui]| {
        value_box(&mut columns[0], "Number of penguins", &count.to_string());
        value_box(&mut columns[1], "Average bill length", &stats::format_mm(mean_length));
        value_box(&mut columns[2], "Average bill depth", &stats::format_mm(mean_depth));
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).strong());
        });
    });
}
