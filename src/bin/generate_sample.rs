use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const STATIONS: [&str; 8] = [
    "Canal St & Adams St",
    "Clinton St & Washington Blvd",
    "Lake Shore Dr & Monroe St",
    "Michigan Ave & Oak St",
    "Columbus Dr & Randolph St",
    "State St & Harrison St",
    "Wabash Ave & Grand Ave",
    "Clark St & Elm St",
];

const USER_TYPES: [&str; 2] = ["Subscriber", "Customer"];
const GENDERS: [&str; 2] = ["Male", "Female"];

fn random_start(rng: &mut SimpleRng) -> NaiveDateTime {
    // January through June 2017, the window the real exports cover.
    let month = 1 + (rng.next_u64() % 6) as u32;
    let day = 1 + (rng.next_u64() % 28) as u32;
    // Morning and evening commute hours dominate.
    let hour = match rng.next_u64() % 10 {
        0..=2 => 8,
        3..=5 => 17,
        n => (n * 3 % 24) as u64,
    } as u32;
    let minute = (rng.next_u64() % 60) as u32;
    let second = (rng.next_u64() % 60) as u32;
    NaiveDate::from_ymd_opt(2017, month, day)
        .expect("valid generated date")
        .and_hms_opt(hour, minute, second)
        .expect("valid generated time")
}

fn write_city(path: &str, with_demographics: bool, rows: usize, rng: &mut SimpleRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if with_demographics {
        header.push("Gender");
        header.push("Birth Year");
    }
    writer.write_record(&header)?;

    for row in 0..rows {
        let start = random_start(rng);
        let duration = rng.gauss(900.0, 400.0).max(60.0).round();
        let end = start + Duration::seconds(duration as i64);

        let start_station = rng.pick(&STATIONS);
        let end_station = rng.pick(&STATIONS);
        // Subscribers outnumber customers roughly four to one.
        let user_type = if rng.next_u64() % 5 == 0 {
            USER_TYPES[1]
        } else {
            USER_TYPES[0]
        };

        let mut record = vec![
            row.to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{duration:.0}"),
            start_station.to_string(),
            end_station.to_string(),
            user_type.to_string(),
        ];
        if with_demographics {
            // A few rows carry no demographics, as in the real exports.
            if rng.next_u64() % 20 == 0 {
                record.push(String::new());
                record.push(String::new());
            } else {
                record.push(rng.pick(&GENDERS).to_string());
                let year = 1950 + (rng.next_u64() % 50);
                record.push(format!("{year}.0"));
            }
        }
        writer.write_record(&record)?;
    }

    writer.flush().with_context(|| format!("writing {path}"))?;
    println!("Wrote {rows} trips to {path}");
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    write_city("chicago.csv", true, 600, &mut rng)?;
    write_city("new_york_city.csv", true, 600, &mut rng)?;
    // Washington's export carries no demographic columns.
    write_city("washington.csv", false, 600, &mut rng)?;

    Ok(())
}
