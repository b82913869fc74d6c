use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per species, shared by the scatter plot and the species
/// checkbox labels so both read as one legend.
#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl SpeciesColors {
    pub fn new() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mapping: BTreeMap<Species, Color32> =
            Species::ALL.iter().copied().zip(palette).collect();

        SpeciesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for SpeciesColors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_are_distinct() {
        let palette = generate_palette(Species::ALL.len());
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn test_each_species_gets_a_stable_color() {
        let colors = SpeciesColors::new();
        for species in Species::ALL {
            assert_eq!(colors.color_for(species), SpeciesColors::new().color_for(species));
        }
    }
}
