use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Species – the closed category domain
// ---------------------------------------------------------------------------

/// The three penguin species present in the dataset.
/// Using `BTreeSet` downstream so `Species` must be `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// All species, in the order the filter controls list them.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Adelie => write!(f, "Adelie"),
            Species::Gentoo => write!(f, "Gentoo"),
            Species::Chinstrap => write!(f, "Chinstrap"),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation (one CSV row).
///
/// Measurement columns are explicitly optional: `NA`, an empty cell, an
/// unparseable token, or a non-finite float all deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    #[serde(deserialize_with = "missing_as_none")]
    pub bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "missing_as_none")]
    pub bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "missing_as_none")]
    pub flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "missing_as_none")]
    pub body_mass_g: Option<f64>,
    #[serde(deserialize_with = "na_as_none")]
    pub sex: Option<String>,
    pub year: i32,
}

/// Coerce a numeric cell to `None` when missing or malformed.
fn missing_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    Ok(cell.parse::<f64>().ok().filter(|v| v.is_finite()))
}

/// `NA` / empty text cells become `None`.
fn na_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    Ok(Some(cell.to_string()))
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct PenguinDataset {
    /// All observations, in file order.
    pub records: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(records: Vec<Penguin>) -> Self {
        PenguinDataset { records }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_display_matches_labels() {
        let labels: Vec<String> = Species::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Adelie", "Gentoo", "Chinstrap"]);
    }

    #[test]
    fn test_species_order_is_control_order() {
        assert_eq!(Species::ALL[0], Species::Adelie);
        assert_eq!(Species::ALL[2], Species::Chinstrap);
    }
}
