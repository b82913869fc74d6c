use crate::color::SpeciesColors;
use crate::data::filter::{filtered_indices, ControlState};
use crate::data::model::{Penguin, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Per-column text queries for the data grid (presentation-level, applied
/// after the filter engine).
#[derive(Debug, Clone, Default)]
pub struct GridFilters {
    pub species: String,
    pub island: String,
    pub bill_length: String,
    pub bill_depth: String,
    pub body_mass: String,
}

/// The full UI state, independent of rendering.
///
/// The filtered view is memoized on a revision counter: every control
/// mutation bumps `revision`, and [`AppState::ensure_filtered`] recomputes
/// the index vector only when it is stale.  It runs once at the top of each
/// update cycle, so every display binding in that cycle reads the identical
/// view.
pub struct AppState {
    /// Loaded at startup, immutable for the process lifetime.
    pub dataset: PenguinDataset,

    /// Live values of the two filter controls.
    pub controls: ControlState,

    /// Species → colour, shared by plot and checkbox labels.
    pub species_colors: SpeciesColors,

    /// Data-grid column queries.
    pub grid_filters: GridFilters,

    revision: u64,
    visible: Vec<usize>,
    visible_revision: u64,
}

impl AppState {
    pub fn new(dataset: PenguinDataset) -> Self {
        let controls = ControlState::default();
        let visible = filtered_indices(&dataset, &controls);
        Self {
            dataset,
            controls,
            species_colors: SpeciesColors::new(),
            grid_filters: GridFilters::default(),
            revision: 0,
            visible,
            visible_revision: 0,
        }
    }

    /// Recompute the visible set iff a control changed since the last cycle.
    pub fn ensure_filtered(&mut self) {
        if self.visible_revision != self.revision {
            self.visible = filtered_indices(&self.dataset, &self.controls);
            self.visible_revision = self.revision;
        }
    }

    /// Indices of records passing the current controls, in dataset order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// The visible records themselves.
    pub fn visible_penguins(&self) -> impl Iterator<Item = &Penguin> + '_ {
        self.visible.iter().map(|&i| &self.dataset.records[i])
    }

    /// Move the mass threshold slider.
    pub fn set_mass_threshold(&mut self, grams: f64) {
        if self.controls.mass_threshold != grams {
            self.controls.mass_threshold = grams;
            self.revision += 1;
        }
    }

    /// Toggle a single species checkbox.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.controls.selected_species.remove(&species) {
            self.controls.selected_species.insert(species);
        }
        self.revision += 1;
    }

    /// Check every species checkbox.
    pub fn select_all_species(&mut self) {
        self.controls.selected_species = Species::ALL.into_iter().collect();
        self.revision += 1;
    }

    /// Clear every species checkbox.  Shows nothing: there is no implicit
    /// select-all fallback.
    pub fn select_no_species(&mut self) {
        self.controls.selected_species.clear();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penguin(species: Species, mass: f64) -> Penguin {
        Penguin {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(195.0),
            body_mass_g: Some(mass),
            sex: None,
            year: 2007,
        }
    }

    fn state() -> AppState {
        AppState::new(PenguinDataset::new(vec![
            penguin(Species::Adelie, 3700.0),
            penguin(Species::Gentoo, 5000.0),
            penguin(Species::Chinstrap, 3800.0),
        ]))
    }

    #[test]
    fn test_defaults_show_everything() {
        let state = state();
        assert_eq!(state.visible(), &[0, 1, 2]);
    }

    #[test]
    fn test_reads_without_change_share_one_view() {
        let mut state = state();
        state.ensure_filtered();
        let before = state.visible().as_ptr();

        state.ensure_filtered();
        state.ensure_filtered();
        // No control changed, so the cached vector was not rebuilt.
        assert_eq!(state.visible().as_ptr(), before);
    }

    #[test]
    fn test_control_change_invalidates_view() {
        let mut state = state();
        state.ensure_filtered();

        state.set_mass_threshold(4000.0);
        state.ensure_filtered();
        assert_eq!(state.visible(), &[0, 2]);

        state.toggle_species(Species::Adelie);
        state.ensure_filtered();
        assert_eq!(state.visible(), &[2]);
    }

    #[test]
    fn test_unchanged_threshold_does_not_invalidate() {
        let mut state = state();
        state.ensure_filtered();
        let before = state.visible().as_ptr();

        state.set_mass_threshold(state.controls.mass_threshold);
        state.ensure_filtered();
        assert_eq!(state.visible().as_ptr(), before);
    }

    #[test]
    fn test_scenario_value_box_contents() {
        let adelie = Penguin {
            bill_length_mm: Some(39.1),
            bill_depth_mm: Some(18.7),
            ..penguin(Species::Adelie, 3700.0)
        };
        let gentoo = Penguin {
            bill_length_mm: Some(46.1),
            bill_depth_mm: Some(13.2),
            ..penguin(Species::Gentoo, 5000.0)
        };
        let mut state = AppState::new(PenguinDataset::new(vec![adelie, gentoo]));

        state.toggle_species(Species::Gentoo);
        state.toggle_species(Species::Chinstrap);
        state.set_mass_threshold(4000.0);
        state.ensure_filtered();

        assert_eq!(state.visible().len(), 1);
        let mean_length =
            crate::data::stats::mean(state.visible_penguins().filter_map(|p| p.bill_length_mm));
        assert_eq!(crate::data::stats::format_mm(mean_length), "39.1 mm");
    }

    #[test]
    fn test_select_none_then_all_round_trips() {
        let mut state = state();

        state.select_no_species();
        state.ensure_filtered();
        assert!(state.visible().is_empty());

        state.select_all_species();
        state.ensure_filtered();
        assert_eq!(state.visible(), &[0, 1, 2]);
    }
}
