use std::io::Read;

use thiserror::Error;

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Dataset loading
// ---------------------------------------------------------------------------

/// The bundled measurement data, compiled into the binary so startup needs
/// no filesystem access.
const EMBEDDED_CSV: &str = include_str!("../../assets/penguins.csv");

/// Errors raised while loading the dataset.  Load failure is fatal: the
/// dashboard cannot start without data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no records")]
    Empty,
}

/// Load the bundled penguin dataset.
pub fn load_embedded() -> Result<PenguinDataset, DataError> {
    parse_csv(EMBEDDED_CSV.as_bytes())
}

/// Parse a penguins CSV with the fixed schema
/// `species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year`.
///
/// Missing measurements are the literal `NA` (coerced to `None` per column,
/// see [`Penguin`]).  An unknown species label is an error: the species
/// domain is closed.
pub fn parse_csv<R: Read>(reader: R) -> Result<PenguinDataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: Penguin = result?;
        records.push(record);
    }

    let dataset = PenguinDataset::new(records);
    if dataset.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(dataset)
}
