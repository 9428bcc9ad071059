/// Data layer: core types, loading, and the dashboard views.
///
/// Architecture:
/// ```text
///  collisions .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read ≤ N rows → normalize labels → CollisionDataset
///   └──────────┘   (memoized per (path, N))
///        │
///        ▼
///   ┌────────────────┐
///   │ CollisionDataset│  Vec<CollisionRecord>, immutable after load
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  threshold coords · hour narrowing + minute histogram
///   └──────────┘   · top streets per injury category
/// ```
pub mod loader;
pub mod model;
pub mod views;
