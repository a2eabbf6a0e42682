//! Lava Runner entry point
//!
//! Headless runner: parses each map of a level pack and ticks it with the
//! reference driver until it finishes or hits the tick cap.
//!
//! Usage: `lava-runner [levels.json] [config.json]`

use std::process::ExitCode;

use lava_runner::sim::{LevelStatus, run_level};
use lava_runner::{LevelPack, SimConfig, SimError};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lava Runner (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimError> {
    let mut args = std::env::args().skip(1);
    let pack = match args.next() {
        Some(path) => LevelPack::load(path)?,
        None => {
            log::info!("No level pack given, using built-in levels");
            LevelPack::builtin()
        }
    };
    let config = match args.next() {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let parser = config.parser();
    for (index, rows) in pack.levels.iter().enumerate() {
        let mut level = parser.parse(rows.as_slice());
        let report = run_level(&mut level, &config);
        let outcome = match report.status {
            Some(status) => status.to_string(),
            None => "unfinished".to_string(),
        };
        log::info!(
            "Level {}: {} after {} ticks ({} coins)",
            index + 1,
            outcome,
            report.ticks,
            report.coins_collected
        );
        println!("level {}: {outcome} ({} ticks)", index + 1, report.ticks);

        if report.status == Some(LevelStatus::Lost) {
            log::info!("Stopping after lost level");
            break;
        }
    }

    Ok(())
}
