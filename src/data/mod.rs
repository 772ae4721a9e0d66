/// Data layer: row parsing, grouping, statistics and triangulation.
///
/// Architecture:
/// ```text
///   "N T" / "I J N T" text files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fixed-arity rows → TimingData / GridData
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  per-file series, per-N groups
///   └──────────┘
///        │
///        ├──► stats        mean / std-dev per problem size
///        └──► triangulate  (I, J) positions → surface facets
/// ```

pub mod loader;
pub mod model;
pub mod stats;
pub mod triangulate;
