/// Data layer: core types, specialisation, and conversion.
///
/// Architecture:
/// ```text
///  raw JSON / text / pixels
///        │
///        ▼
///   ┌──────────┐
///   │  ingest   │  parse / decode → generic List, nested arrays
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  improve  │  narrow each list/column → TypedList
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ convert / │  coerce lists, zip intervals,
///   │ interval  │  table ↔ row objects
///   └──────────┘
/// ```

pub mod convert;
pub mod improve;
pub mod interval;
pub mod model;
