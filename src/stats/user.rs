use std::io::{self, Write};
use std::time::Instant;

use super::{mode, value_counts, write_elapsed};
use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// User demographics
// ---------------------------------------------------------------------------

/// Earliest, most recent, and most common birth year, as whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Breakdown of who rides. The demographic fields are `None` when the
/// city's export lacks the column or the filtered rows carry no values;
/// [`report`] consults the table schema to word the difference.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Count per user type, most frequent first.
    pub user_types: Vec<(String, usize)>,
    /// Count per gender, most frequent first.
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Defined on every table, including an empty one.
pub fn compute(table: &TripTable) -> UserStats {
    let user_types = value_counts(
        table
            .trips
            .iter()
            .filter_map(|t| t.user_type.as_deref()),
    )
    .into_iter()
    .map(|(value, count)| (value.to_string(), count))
    .collect();

    let genders = table.schema.has_gender.then(|| {
        value_counts(table.trips.iter().filter_map(|t| t.gender.as_deref()))
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect()
    });

    let birth_years = if table.schema.has_birth_year {
        birth_year_stats(table)
    } else {
        None
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let stats = compute(table);

    writeln!(out, "Counts of user types:")?;
    if stats.user_types.is_empty() {
        writeln!(out, "\tNo user type data in the filtered trips.")?;
    }
    for (user_type, count) in &stats.user_types {
        writeln!(out, "\t{user_type}: {count}")?;
    }

    match &stats.genders {
        None => writeln!(
            out,
            "\nGender data is not available for the selected city."
        )?,
        Some(counts) if counts.is_empty() => {
            writeln!(out, "\nNo gender data in the filtered trips.")?
        }
        Some(counts) => {
            writeln!(out, "\nCounts of gender:")?;
            for (gender, count) in counts {
                writeln!(out, "\t{gender}: {count}")?;
            }
        }
    }

    match stats.birth_years {
        Some(years) => {
            writeln!(out, "\nEarliest year of birth: {}", years.earliest)?;
            writeln!(out, "Most recent year of birth: {}", years.most_recent)?;
            writeln!(out, "Most common year of birth: {}", years.most_common)?;
        }
        None if table.schema.has_birth_year => {
            writeln!(out, "\nNo birth year data in the filtered trips.")?
        }
        None => writeln!(
            out,
            "\nBirth year data is not available for the selected city."
        )?,
    }

    write_elapsed(out, started)
}
