/// Data layer: core types, loading, filtering, and summary statistics.
///
/// Architecture:
/// ```text
///  assets/penguins.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PenguinDataset │  Vec<Penguin>, immutable after startup
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  ControlState predicate → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
