use std::path::PathBuf;

use crate::data::filter::{City, Month};

// ---------------------------------------------------------------------------
// Immutable session configuration
// ---------------------------------------------------------------------------

/// Token the user types to skip a month or weekday filter.
pub const ALL: &str = "all";

/// Canonical weekday names, Monday first, lowercase for prompt matching.
pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Explorer configuration, passed explicitly into the prompt and data
/// layers instead of living in ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the per-city CSV exports.
    pub data_dir: PathBuf,
    /// Rows shown per data-browser page.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: 5,
        }
    }
}

impl Config {
    /// Resolve the CSV file for a city inside the data directory.
    pub fn csv_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Allowed answers for the city prompt.
    pub fn city_choices(&self) -> Vec<&'static str> {
        City::ALL.iter().map(|c| c.key()).collect()
    }

    /// Allowed answers for the month prompt: the covered months plus "all".
    pub fn month_choices(&self) -> Vec<&'static str> {
        Month::ALL
            .iter()
            .map(|m| m.name())
            .chain(std::iter::once(ALL))
            .collect()
    }

    /// Allowed answers for the weekday prompt: the weekdays plus "all".
    pub fn day_choices(&self) -> Vec<&'static str> {
        DAYS.iter().copied().chain(std::iter::once(ALL)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_path_joins_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            ..Config::default()
        };
        assert_eq!(
            config.csv_path(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
    }

    #[test]
    fn choice_lists_end_with_all() {
        let config = Config::default();
        assert_eq!(config.city_choices().len(), 3);
        assert_eq!(config.month_choices().last(), Some(&ALL));
        assert_eq!(config.day_choices().last(), Some(&ALL));
        assert_eq!(config.month_choices().len(), 7);
        assert_eq!(config.day_choices().len(), 8);
    }
}
