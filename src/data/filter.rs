use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use thiserror::Error;

use super::model::{Trip, TripTable};

// ---------------------------------------------------------------------------
// City – which export file to analyze
// ---------------------------------------------------------------------------

/// Cities with a published trip export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

#[derive(Debug, Error)]
#[error("unknown city '{0}'")]
pub struct ParseCityError(String);

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase key the user types at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's CSV export.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or(ParseCityError(key))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        })
    }
}

// ---------------------------------------------------------------------------
// Month – the half-year the exports cover
// ---------------------------------------------------------------------------

/// Months present in the trip exports (the datasets stop at June).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

#[derive(Debug, Error)]
#[error("unknown month '{0}'")]
pub struct ParseMonthError(String);

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Lowercase name the user types at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Calendar month number (1-based index into the canonical list).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// The month whose calendar number is `n`, if covered by the exports.
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or(ParseMonthError(name))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// TripFilter – the validated (city, month, weekday) triple
// ---------------------------------------------------------------------------

/// The selection governing which rows are analyzed. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFilter {
    pub city: City,
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
}

impl TripFilter {
    /// Whether a trip passes the month and weekday constraints.
    /// The city is not a row predicate; it selects the file.
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(month) = self.month {
            if trip.month != month.number() {
                return false;
            }
        }
        if let Some(weekday) = self.weekday {
            if trip.weekday != weekday {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.city)?;
        match self.month {
            Some(m) => write!(f, ", month = {m}")?,
            None => write!(f, ", all months")?,
        }
        match self.weekday {
            Some(d) => write!(f, ", {}s", super::model::weekday_name(d)),
            None => write!(f, ", all weekdays"),
        }
    }
}

/// Drop every row the filter rejects, in place.
pub fn apply(table: &mut TripTable, filter: &TripFilter) {
    table.trips.retain(|t| filter.matches(t));
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use super::*;
    use crate::data::model::Schema;

    fn trip(month: u32, day: u32) -> Trip {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Trip {
            start_time: start,
            end_time: None,
            duration_secs: 600.0,
            start_station: "A".into(),
            end_station: "B".into(),
            user_type: Some("Subscriber".into()),
            gender: None,
            birth_year: None,
            month: start.month(),
            weekday: start.weekday(),
            hour: 8,
        }
    }

    fn table() -> TripTable {
        // 2017-01-02 is a Monday, 2017-03-07 a Tuesday, 2017-06-05 a Monday.
        TripTable::new(vec![trip(1, 2), trip(3, 7), trip(6, 5)], Schema::default())
    }

    #[test]
    fn city_round_trips_through_from_str() {
        for city in City::ALL {
            assert_eq!(city.key().parse::<City>().unwrap(), city);
        }
        assert_eq!("  New York City ".parse::<City>().unwrap(), City::NewYorkCity);
        assert!("boston".parse::<City>().is_err());
    }

    #[test]
    fn month_numbers_are_one_based() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::June.number(), 6);
        assert_eq!(Month::from_number(3), Some(Month::March));
        assert_eq!(Month::from_number(7), None);
        assert_eq!(Month::from_number(0), None);
    }

    #[test]
    fn month_parses_case_insensitively() {
        assert_eq!("APRIL".parse::<Month>().unwrap(), Month::April);
        assert!("july".parse::<Month>().is_err());
    }

    #[test]
    fn no_filter_keeps_every_row() {
        let mut t = table();
        let filter = TripFilter {
            city: City::Chicago,
            month: None,
            weekday: None,
        };
        apply(&mut t, &filter);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn month_filter_keeps_matching_rows_only() {
        let mut t = table();
        let filter = TripFilter {
            city: City::Chicago,
            month: Some(Month::March),
            weekday: None,
        };
        apply(&mut t, &filter);
        assert_eq!(t.len(), 1);
        assert!(t.trips.iter().all(|trip| trip.month == 3));
    }

    #[test]
    fn weekday_filter_keeps_matching_rows_only() {
        let mut t = table();
        let filter = TripFilter {
            city: City::Chicago,
            month: None,
            weekday: Some(Weekday::Mon),
        };
        apply(&mut t, &filter);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn month_and_weekday_filters_commute() {
        let by_month = TripFilter {
            city: City::Chicago,
            month: Some(Month::June),
            weekday: None,
        };
        let by_day = TripFilter {
            city: City::Chicago,
            month: None,
            weekday: Some(Weekday::Mon),
        };

        let mut month_first = table();
        apply(&mut month_first, &by_month);
        apply(&mut month_first, &by_day);

        let mut day_first = table();
        apply(&mut day_first, &by_day);
        apply(&mut day_first, &by_month);

        assert_eq!(month_first.trips, day_first.trips);
        assert_eq!(month_first.len(), 1);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut t = table();
        let filter = TripFilter {
            city: City::Chicago,
            month: Some(Month::February),
            weekday: None,
        };
        apply(&mut t, &filter);
        assert!(t.is_empty());
    }
}
