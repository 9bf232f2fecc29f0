//! Report generators: four independent, read-only passes over the
//! filtered [`TripTable`](crate::data::model::TripTable), each printing
//! one block of descriptive figures framed by a timing readout.

use std::collections::HashMap;
use std::hash::Hash;
use std::io::{self, Write};
use std::time::Instant;

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

/// Separator printed after every prompt and report block.
pub const RULE: &str = "----------------------------------------";

/// Most frequent value; ties resolve to the first occurrence in row order.
pub(crate) fn mode<T, I>(values: I) -> Option<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in order {
        let count = counts[&value];
        match &best {
            Some((_, top)) if *top >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency of each value, most frequent first; ties keep row order.
pub(crate) fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut result: Vec<(T, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    // Stable sort keeps first-occurrence order within equal counts.
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Close a report block: elapsed time plus the separator rule.
pub(crate) fn write_elapsed<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{RULE}")
}
