use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bill length vs depth scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter of bill length against bill depth, one point per
/// visible record, coloured by species.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in Species::ALL {
                // Visible records always carry both bill measurements; the
                // filter_map keeps the closure total regardless.
                let coords: Vec<[f64; 2]> = state
                    .visible_penguins()
                    .filter(|p| p.species == species)
                    .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
                    .collect();

                if coords.is_empty() {
                    continue;
                }

                let points = Points::new(PlotPoints::new(coords))
                    .name(species.to_string())
                    .color(state.species_colors.color_for(species))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0);

                plot_ui.points(points);
            }
        });
}
