/// Data layer: the salary sample and its CSV loader.
///
/// Architecture:
/// ```text
///   data1-1.csv (one value per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Sample
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Sample   │  Vec<f64>, never empty
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
