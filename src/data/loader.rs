use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use thiserror::Error;

use super::filter::{self, TripFilter};
use super::model::{Schema, Trip, TripTable};
use crate::config::Config;

/// Timestamp layout used by every city export.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns every export must carry.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems in a trip file. Any of these is fatal for the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// One CSV record as it appears on disk. `Birth Year` arrives as a float
/// (`"1992.0"`) because the exports were NaN-padded; blank optional fields
/// deserialize to `None`. The unnamed leading index column is ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the export for the filter's city and drop the rows the month and
/// weekday constraints reject. An empty result is valid.
pub fn load_city(config: &Config, trip_filter: &TripFilter) -> Result<TripTable> {
    let path = config.csv_path(trip_filter.city);
    let file =
        File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let mut table =
        read_trips(file).with_context(|| format!("reading {}", path.display()))?;
    log::info!("loaded {} trips from {}", table.len(), path.display());

    filter::apply(&mut table, trip_filter);
    log::debug!("{} trips match filter [{trip_filter}]", table.len());
    Ok(table)
}

/// Parse a trip table from any reader. Split out from [`load_city`] so the
/// parsing path is testable against in-memory data.
pub fn read_trips<R: Read>(rdr: R) -> Result<TripTable> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }
    let schema = Schema {
        has_end_time: headers.iter().any(|h| h == "End Time"),
        has_gender: headers.iter().any(|h| h == "Gender"),
        has_birth_year: headers.iter().any(|h| h == "Birth Year"),
    };

    let mut trips = Vec::new();
    for (row_no, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let start_time = parse_timestamp(&raw.start_time, row_no)?;
        let end_time = raw
            .end_time
            .as_deref()
            .map(|s| parse_timestamp(s, row_no))
            .transpose()?;

        trips.push(Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration_secs: raw.duration_secs,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            // Whole years; the fractional part is a storage artifact.
            birth_year: raw.birth_year.map(|y| y as i32),
        });
    }

    Ok(TripTable::new(trips, schema))
}

fn parse_timestamp(value: &str, row: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        LoadError::InvalidTimestamp {
            row,
            value: value.to_string(),
        }
        .into()
    })
}
