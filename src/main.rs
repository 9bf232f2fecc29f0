mod app;
mod config;
mod data;
mod stats;
mod ui;

use std::io;

use anyhow::Result;

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&config, stdin.lock(), stdout.lock())
}
