use std::io::{self, Write};
use std::time::Instant;

use chrono::Weekday;

use super::{mode, write_elapsed};
use crate::data::filter::Month;
use crate::data::model::{weekday_name, TripTable};

// ---------------------------------------------------------------------------
// Most frequent times of travel
// ---------------------------------------------------------------------------

/// Modes of the derived month, weekday, and hour columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number (1–12).
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day (0–23).
    pub hour: u32,
}

/// `None` when no rows match the current filter.
pub fn compute(table: &TripTable) -> Option<TimeStats> {
    Some(TimeStats {
        month: mode(table.trips.iter().map(|t| t.month))?,
        weekday: mode(table.trips.iter().map(|t| t.weekday))?,
        hour: mode(table.trips.iter().map(|t| t.hour))?,
    })
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            match Month::from_number(stats.month) {
                Some(month) => writeln!(out, "\tMost common month: {month}")?,
                // Months outside the covered half-year print numerically.
                None => writeln!(out, "\tMost common month: {}", stats.month)?,
            }
            writeln!(out, "\tMost common weekday: {}", weekday_name(stats.weekday))?;
            writeln!(out, "\tMost common start hour: {}", stats.hour)?;
        }
        None => writeln!(out, "\tNo trips match the current filter.")?,
    }

    write_elapsed(out, started)
}
