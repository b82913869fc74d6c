use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Control state – the live values of the two filter controls
// ---------------------------------------------------------------------------

/// Slider bounds for the mass threshold, in grams.
pub const MASS_MIN_G: f64 = 2000.0;
pub const MASS_MAX_G: f64 = 6000.0;

/// The live values of the two user-facing filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// Species whose records are shown.  An empty set shows nothing;
    /// there is no implicit select-all fallback.
    pub selected_species: BTreeSet<Species>,
    /// Records with `body_mass_g` up to and including this value are shown.
    pub mass_threshold: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            selected_species: Species::ALL.into_iter().collect(),
            mass_threshold: MASS_MAX_G,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records passing the current controls, in dataset order.
///
/// A record passes when all three conditions hold:
/// * its species is in `selected_species`
/// * `bill_length_mm`, `bill_depth_mm` and `body_mass_g` are all present
/// * `body_mass_g <= mass_threshold` (inclusive)
///
/// Total and pure: an empty selection, a threshold below every mass, or an
/// out-of-range threshold all just yield the exact matching set.
pub fn filtered_indices(dataset: &PenguinDataset, controls: &ControlState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            controls.selected_species.contains(&p.species)
                && p.bill_length_mm.is_some()
                && p.bill_depth_mm.is_some()
                && p.body_mass_g.is_some_and(|m| m <= controls.mass_threshold)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Penguin;

    fn penguin(species: Species, mass: Option<f64>, length: Option<f64>, depth: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: "Dream".to_string(),
            bill_length_mm: length,
            bill_depth_mm: depth,
            flipper_length_mm: Some(190.0),
            body_mass_g: mass,
            sex: None,
            year: 2008,
        }
    }

    fn two_record_dataset() -> PenguinDataset {
        PenguinDataset::new(vec![
            penguin(Species::Adelie, Some(3700.0), Some(39.1), Some(18.7)),
            penguin(Species::Gentoo, Some(5000.0), Some(46.1), Some(13.2)),
        ])
    }

    fn controls(species: &[Species], threshold: f64) -> ControlState {
        ControlState {
            selected_species: species.iter().copied().collect(),
            mass_threshold: threshold,
        }
    }

    #[test]
    fn test_result_is_subset_of_dataset() {
        let dataset = two_record_dataset();
        let visible = filtered_indices(&dataset, &ControlState::default());
        assert!(visible.iter().all(|&i| i < dataset.len()));
    }

    #[test]
    fn test_empty_selection_yields_empty_result() {
        let dataset = two_record_dataset();
        for threshold in [MASS_MIN_G, 4000.0, MASS_MAX_G, f64::MAX] {
            assert!(filtered_indices(&dataset, &controls(&[], threshold)).is_empty());
        }
    }

    #[test]
    fn test_every_visible_record_satisfies_all_conditions() {
        let dataset = PenguinDataset::new(vec![
            penguin(Species::Adelie, Some(3700.0), Some(39.1), Some(18.7)),
            penguin(Species::Adelie, Some(4500.0), Some(40.0), Some(18.0)),
            penguin(Species::Gentoo, Some(5000.0), Some(46.1), Some(13.2)),
            penguin(Species::Chinstrap, None, Some(48.0), Some(18.5)),
            penguin(Species::Adelie, Some(3600.0), None, Some(18.1)),
        ]);
        let state = controls(&[Species::Adelie, Species::Chinstrap], 4000.0);

        for &i in &filtered_indices(&dataset, &state) {
            let p = &dataset.records[i];
            assert!(state.selected_species.contains(&p.species));
            assert!(p.body_mass_g.unwrap() <= state.mass_threshold);
            assert!(p.bill_length_mm.is_some() && p.bill_depth_mm.is_some());
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dataset = two_record_dataset();
        let visible = filtered_indices(&dataset, &controls(&[Species::Adelie], 3700.0));
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_raising_threshold_never_shrinks_result() {
        let dataset = PenguinDataset::new(vec![
            penguin(Species::Adelie, Some(3000.0), Some(38.0), Some(18.0)),
            penguin(Species::Adelie, Some(3700.0), Some(39.1), Some(18.7)),
            penguin(Species::Gentoo, Some(5000.0), Some(46.1), Some(13.2)),
            penguin(Species::Gentoo, Some(5700.0), Some(49.0), Some(15.0)),
        ]);
        let species = [Species::Adelie, Species::Gentoo];

        let mut previous = Vec::new();
        for threshold in [2000.0, 3000.0, 3700.0, 5000.0, 5700.0, 9000.0] {
            let current = filtered_indices(&dataset, &controls(&species, threshold));
            assert!(previous.iter().all(|i| current.contains(i)));
            previous = current;
        }
    }

    #[test]
    fn test_identical_inputs_yield_identical_output() {
        let dataset = two_record_dataset();
        let state = controls(&[Species::Adelie, Species::Gentoo], 5000.0);
        assert_eq!(
            filtered_indices(&dataset, &state),
            filtered_indices(&dataset, &state)
        );
    }

    #[test]
    fn test_scenario_adelie_under_4000() {
        let dataset = two_record_dataset();
        let visible = filtered_indices(&dataset, &controls(&[Species::Adelie], 4000.0));

        assert_eq!(visible, vec![0]);
        assert_eq!(dataset.records[visible[0]].species, Species::Adelie);
    }

    #[test]
    fn test_scenario_threshold_below_every_mass() {
        let dataset = two_record_dataset();
        let state = controls(&[Species::Adelie, Species::Gentoo], 3000.0);
        assert!(filtered_indices(&dataset, &state).is_empty());
    }

    #[test]
    fn test_missing_mass_excluded_at_any_threshold() {
        let dataset = PenguinDataset::new(vec![penguin(
            Species::Adelie,
            None,
            Some(39.1),
            Some(18.7),
        )]);
        let state = controls(&[Species::Adelie], 1_000_000.0);
        assert!(filtered_indices(&dataset, &state).is_empty());
    }

    #[test]
    fn test_missing_bill_measurements_excluded() {
        let dataset = PenguinDataset::new(vec![
            penguin(Species::Gentoo, Some(5000.0), None, Some(13.2)),
            penguin(Species::Gentoo, Some(5000.0), Some(46.1), None),
        ]);
        let state = controls(&[Species::Gentoo], MASS_MAX_G);
        assert!(filtered_indices(&dataset, &state).is_empty());
    }
}
