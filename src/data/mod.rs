/// Data layer: core types, loading, classification, aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Reading>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  annotate rows with Status in place
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ReadingSet  │  rows + sector index
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  bucket counts + needs-review indices
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;
pub mod summary;
