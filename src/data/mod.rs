/// Data layer: core types, loading, the site catalog, and the two chart
/// computations.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (records + catalog)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site catalog, booster categories
///   └───────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌───────────┐         ┌──────────┐
///   │ aggregate  │ site →  │  filter   │ site + payload range →
///   └───────────┘ pie     └──────────┘ scatter points
/// ```

pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
