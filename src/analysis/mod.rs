/// Analysis layer: headline retrieval, scoring and aggregation.
///
/// Architecture:
/// ```text
///   URL (from the request panel)
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  GET page → h1..h5 texts, in document order
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  truncate → label + score → drop 0.0 → mean → Verdict
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  chart::render or "no headlines" notice
///   └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod source;
