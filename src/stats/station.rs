use std::io::{self, Write};
use std::time::Instant;

use super::{mode, write_elapsed};
use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// Most popular stations and trip
// ---------------------------------------------------------------------------

/// Modes of the start-station, end-station, and route columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: String,
    pub end: String,
    /// Start and end names joined with a bare comma, as the source data
    /// renders routes. Ambiguous if a station name itself contains a comma.
    pub route: String,
}

/// `None` when no rows match the current filter.
pub fn compute(table: &TripTable) -> Option<StationStats> {
    let start = mode(table.trips.iter().map(|t| t.start_station.as_str()))?;
    let end = mode(table.trips.iter().map(|t| t.end_station.as_str()))?;
    let route = mode(
        table
            .trips
            .iter()
            .map(|t| format!("{},{}", t.start_station, t.end_station)),
    )?;
    Some(StationStats {
        start: start.to_string(),
        end: end.to_string(),
        route,
    })
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            writeln!(out, "\tMost commonly used start station: {}", stats.start)?;
            writeln!(out, "\tMost commonly used end station: {}", stats.end)?;
            writeln!(
                out,
                "\tMost frequent combination of start station and end station trip: {}",
                stats.route
            )?;
        }
        None => writeln!(out, "\tNo trips match the current filter.")?,
    }

    write_elapsed(out, started)
}
