use std::io::{self, BufRead, Write};

use super::prompt::Prompter;
use crate::data::model::{Schema, Trip, TripTable};

/// Timestamp layout for displayed rows, matching the source files.
const TIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Paged data browser
// ---------------------------------------------------------------------------

/// Offer the table `page_size` rows at a time from a running offset.
///
/// Any answer not starting with `y` stops. Rows are never reprinted, and
/// once the table is exhausted the browser stops on its own instead of
/// prompting for pages that no longer exist.
pub fn browse<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
    page_size: usize,
) -> io::Result<()> {
    let mut offset = 0;
    while offset < table.len() {
        let more = prompter.affirm(
            "Would you like to see the data? Press y for yes, anything else to skip.",
        )?;
        if !more {
            return Ok(());
        }

        let end = (offset + page_size).min(table.len());
        let out = prompter.writer();
        writeln!(out, "Displaying {} lines of data...", end - offset)?;
        for (row, trip) in table.trips[offset..end].iter().enumerate() {
            write_row(out, offset + row, trip, &table.schema)?;
        }
        offset = end;
    }

    writeln!(prompter.writer(), "No more rows to display.")
}

fn write_row<W: Write>(out: &mut W, row: usize, trip: &Trip, schema: &Schema) -> io::Result<()> {
    write!(
        out,
        "{row:>6}  {}  {:>6.0}s  {} -> {}",
        trip.start_time.format(TIME_DISPLAY),
        trip.duration_secs,
        trip.start_station,
        trip.end_station,
    )?;
    write!(out, "  {}", trip.user_type.as_deref().unwrap_or("-"))?;
    if schema.has_gender {
        write!(out, "  {}", trip.gender.as_deref().unwrap_or("-"))?;
    }
    if schema.has_birth_year {
        match trip.birth_year {
            Some(year) => write!(out, "  {year}")?,
            None => write!(out, "  -")?,
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::{Datelike, NaiveDate, Timelike};

    use super::*;

    fn trip(row: usize) -> Trip {
        let start = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Trip {
            start_time: start,
            end_time: None,
            duration_secs: 300.0,
            start_station: format!("Station {row}"),
            end_station: "Terminus".into(),
            user_type: Some("Subscriber".into()),
            gender: None,
            birth_year: None,
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
        }
    }

    fn table(rows: usize) -> TripTable {
        TripTable::new((0..rows).map(trip).collect(), Schema::default())
    }

    #[test]
    fn declining_shows_nothing() {
        let mut prompter =
            Prompter::new(Cursor::new(b"n\n".to_vec()), Vec::<u8>::new());
        browse(&mut prompter, &table(7), 5).unwrap();
        let text = String::from_utf8(std::mem::take(prompter.writer())).unwrap();
        assert!(!text.contains("Station 0"));
    }

    #[test]
    fn pages_advance_without_reprinting() {
        let mut prompter =
            Prompter::new(Cursor::new(b"y\ny\n".to_vec()), Vec::<u8>::new());
        browse(&mut prompter, &table(7), 5).unwrap();
        let text = String::from_utf8(std::mem::take(prompter.writer())).unwrap();

        for row in 0..7 {
            assert_eq!(
                text.matches(&format!("Station {row} ")).count(),
                1,
                "row {row} should appear exactly once"
            );
        }
        assert!(text.contains("Displaying 5 lines of data..."));
        assert!(text.contains("Displaying 2 lines of data..."));
        assert!(text.contains("No more rows to display."));
    }

    #[test]
    fn terminates_after_ceil_n_over_page_size_affirmations() {
        // Seven rows, page size five: exactly two pages. A third prompt
        // would hit EOF and fail the unwrap above.
        let mut prompter =
            Prompter::new(Cursor::new(b"y\ny\n".to_vec()), Vec::<u8>::new());
        browse(&mut prompter, &table(7), 5).unwrap();
    }

    #[test]
    fn empty_table_consumes_no_input() {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::<u8>::new());
        browse(&mut prompter, &table(0), 5).unwrap();
        let text = String::from_utf8(std::mem::take(prompter.writer())).unwrap();
        assert!(text.contains("No more rows to display."));
    }
}
