/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TripTable, derive month/weekday/hour
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TripTable │  Vec<Trip>, optional-column schema
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply (city, month, weekday) triple → retained rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
