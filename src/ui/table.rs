use eframe::egui::{TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Penguin;
use crate::state::{AppState, GridFilters};

// ---------------------------------------------------------------------------
// Data grid (central panel)
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 44.0;
const ROW_HEIGHT: f32 = 18.0;

/// Render the filtered records as a table with a per-column text filter
/// under each header label.
pub fn data_grid(ui: &mut Ui, state: &mut AppState) {
    let rows: Vec<usize> = state
        .visible()
        .iter()
        .copied()
        .filter(|&i| row_matches(&state.grid_filters, &state.dataset.records[i]))
        .collect();

    let dataset = &state.dataset;
    let filters = &mut state.grid_filters;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(HEADER_HEIGHT, |mut header| {
            header_cell(&mut header, "species", &mut filters.species);
            header_cell(&mut header, "island", &mut filters.island);
            header_cell(&mut header, "bill_length_mm", &mut filters.bill_length);
            header_cell(&mut header, "bill_depth_mm", &mut filters.bill_depth);
            header_cell(&mut header, "body_mass_g", &mut filters.body_mass);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let penguin = &dataset.records[rows[row.index()]];
                row.col(|ui| {
                    ui.label(penguin.species.to_string());
                });
                row.col(|ui| {
                    ui.label(&penguin.island);
                });
                row.col(|ui| {
                    ui.label(format_measurement(penguin.bill_length_mm));
                });
                row.col(|ui| {
                    ui.label(format_measurement(penguin.bill_depth_mm));
                });
                row.col(|ui| {
                    ui.label(format_mass(penguin.body_mass_g));
                });
            });
        });
}

fn header_cell(header: &mut egui_extras::TableRow<'_, '_>, title: &str, query: &mut String) {
    header.col(|ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong(title);
            ui.add(TextEdit::singleline(query).hint_text("filter"));
        });
    });
}

// ---------------------------------------------------------------------------
// Per-column row filtering
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of every non-empty column query against
/// the rendered cell text.
pub fn row_matches(filters: &GridFilters, penguin: &Penguin) -> bool {
    cell_matches(&filters.species, &penguin.species.to_string())
        && cell_matches(&filters.island, &penguin.island)
        && cell_matches(&filters.bill_length, &format_measurement(penguin.bill_length_mm))
        && cell_matches(&filters.bill_depth, &format_measurement(penguin.bill_depth_mm))
        && cell_matches(&filters.body_mass, &format_mass(penguin.body_mass_g))
}

fn cell_matches(query: &str, cell: &str) -> bool {
    let query = query.trim();
    query.is_empty() || cell.to_lowercase().contains(&query.to_lowercase())
}

fn format_measurement(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "NA".to_string(),
    }
}

fn format_mass(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}"),
        None => "NA".to_string(),
    }
}
