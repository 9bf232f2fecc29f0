use chrono::{NaiveDateTime, Weekday};

// ---------------------------------------------------------------------------
// Trip – one row of the source table
// ---------------------------------------------------------------------------

/// A single trip (one row of the city's CSV export).
///
/// The `month` / `weekday` / `hour` fields are derived from `start_time`
/// once at load time and retained for the whole session, mirroring the
/// derived columns of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// Present in the real exports; kept for browsing only.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    /// Categorical; a handful of rows leave it blank.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived: calendar month of `start_time` (1–12).
    pub month: u32,
    /// Derived: weekday of `start_time`.
    pub weekday: Weekday,
    /// Derived: hour of day of `start_time` (0–23).
    pub hour: u32,
}

// ---------------------------------------------------------------------------
// Schema – which optional columns the source file carries
// ---------------------------------------------------------------------------

/// Column capabilities of a loaded file.
///
/// Washington's export has no demographic columns; their absence is a
/// property of the table, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

// ---------------------------------------------------------------------------
// TripTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The in-memory table consumed by the browser and the report generators.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub schema: Schema,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, schema: Schema) -> Self {
        TripTable { trips, schema }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Title-cased weekday name, matching how the source data renders weekdays.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
