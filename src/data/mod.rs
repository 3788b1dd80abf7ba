/// Data layer: record types, loading, aggregation and filtering.
///
/// Architecture:
/// ```text
///  traffic .csv      stations .csv
///        │                │
///        ▼                ▼
///   ┌──────────────────────────┐
///   │  loader                   │  `;`-delimited rows → datasets
///   └──────────────────────────┘
///        │
///        ▼
///   ┌──────────────────────────┐
///   │  aggregate                │  top-N, first-N, group-by counts
///   └──────────────────────────┘
///        │
///        ▼
///   ┌──────────────────────────┐
///   │  filter                   │  dropdown selection → subset
///   └──────────────────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
