use std::io::{self, Write};
use std::time::Instant;

use super::write_elapsed;
use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// Trip duration totals
// ---------------------------------------------------------------------------

/// Sum and arithmetic mean of the duration column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
    pub trips: usize,
}

/// `None` when no rows match the current filter; the mean is undefined there.
pub fn compute(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total_secs: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
    let trips = table.len();
    Some(DurationStats {
        total_secs,
        mean_secs: total_secs / trips as f64,
        trips,
    })
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            writeln!(
                out,
                "\tTotal travel time: {:.0} seconds over {} trips",
                stats.total_secs, stats.trips
            )?;
            writeln!(out, "\tMean travel time: {:.1} seconds", stats.mean_secs)?;
        }
        None => writeln!(out, "\tNo trips match the current filter.")?,
    }

    write_elapsed(out, started)
}
