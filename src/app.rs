use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::config::{Config, ALL};
use crate::data::filter::{City, Month, TripFilter};
use crate::data::loader;
use crate::stats;
use crate::ui::browser;
use crate::ui::prompt::Prompter;

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Drive full explore cycles until the user declines a restart.
///
/// One cycle: collect the filter triple, load and filter the city's table,
/// offer the data browser, print the four statistics blocks, ask to
/// restart. Nothing survives from one cycle to the next. A load failure is
/// fatal and propagates out.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<()> {
    let mut prompter = Prompter::new(input, output);

    loop {
        let filter = collect_filters(config, &mut prompter)?;
        let table = loader::load_city(config, &filter)?;

        browser::browse(&mut prompter, &table, config.page_size)?;

        let out = prompter.writer();
        stats::time::report(out, &table)?;
        stats::station::report(out, &table)?;
        stats::duration::report(out, &table)?;
        stats::user::report(out, &table)?;

        let again = prompter.line("\nWould you like to restart? Enter yes or no.")?;
        if !again.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

/// Ask for city, month, and weekday, each validated against the configured
/// allowed values and explicitly confirmed.
fn collect_filters<R: BufRead, W: Write>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<TripFilter> {
    writeln!(
        prompter.writer(),
        "Hello! Let's explore some US bikeshare data!"
    )?;

    let city: City = prompter.choose("city", &config.city_choices())?.parse()?;

    let month_key = prompter.choose("month", &config.month_choices())?;
    let month = if month_key == ALL {
        None
    } else {
        Some(month_key.parse::<Month>()?)
    };

    let day_key = prompter.choose("weekday", &config.day_choices())?;
    let weekday = if day_key == ALL {
        None
    } else {
        Some(
            day_key
                .parse::<chrono::Weekday>()
                .map_err(|_| anyhow!("unrecognized weekday '{day_key}'"))?,
        )
    };

    writeln!(prompter.writer(), "{}", stats::RULE)?;
    Ok(TripFilter {
        city,
        month,
        weekday,
    })
}
