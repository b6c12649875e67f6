//! Line-oriented driver for the luck-crystal device core.
//!
//! Stands in for the host environment's input/presentation layers: each line
//! on stdin is one command against a single device instance.
//!
//! Commands: `toss` (free run), `switch` (enter prediction mode), `heads` /
//! `tails` (predict), `odds`, `status`, `collect`, `quit`.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crystal_core::{Device, DeviceConfig, Outcome, StylePreset, WIN_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "crystal-cli")]
#[command(about = "Interactive driver for the luck-crystal device core", long_about = None)]
struct Args {
    /// Session seed; omit to draw one from OS entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Restrict which path can win the session
    #[arg(long, value_enum)]
    style: Option<Style>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Style {
    /// Only free runs can win
    LuckOnly,
    /// Only predictions can win
    CalculationOnly,
}

impl Style {
    fn preset(self) -> StylePreset {
        match self {
            Self::LuckOnly => StylePreset::LuckOnly,
            Self::CalculationOnly => StylePreset::CalculationOnly,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut device = Device::with_config(DeviceConfig {
        seed: args.seed,
        preset: args.style.map(Style::preset),
    });
    println!(
        "Device ready: {}-bit register, {} consecutive wins to solve. Commands: toss / switch / heads / tails / odds / status / collect / quit.",
        device.degree(),
        WIN_THRESHOLD
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim().to_ascii_lowercase();
        match command.as_str() {
            "" => {}
            "toss" => match device.start_free_run() {
                Ok(report) if report.resolved => {
                    println!(
                        "{} consecutive heads - the crystal appears! ({} tries)",
                        report.streak,
                        device.free_runs()
                    );
                }
                Ok(report) => println!(
                    "{} consecutive heads ({}, odds were {})",
                    report.streak,
                    device.luck_label(),
                    device.odds()
                ),
                Err(err) => println!("error: {err}"),
            },
            "switch" => match device.begin_prediction() {
                Ok(()) => println!("Prediction mode. Call heads or tails. Good luck!"),
                Err(err) => println!("error: {err}"),
            },
            "heads" | "tails" => match device.predict(command == "heads") {
                Ok(Outcome::Continue) => println!(
                    "Correct! Streak {} ({}), next-win odds {}",
                    device.current_streak().unwrap_or(0),
                    device.luck_label(),
                    device.odds()
                ),
                Ok(Outcome::Strike) => println!("Wrong - strike! Streak reset."),
                Ok(Outcome::Resolved) => println!("Correct - the crystal appears!"),
                Err(err) => println!("error: {err}"),
            },
            "odds" => println!("{} ({})", device.odds(), device.luck_label()),
            "status" => println!(
                "status: {:?}, style: {:?}, streak: {:?}, free runs: {}",
                device.status(),
                device.style(),
                device.current_streak(),
                device.free_runs()
            ),
            "collect" => {
                if device.is_resolved() {
                    println!(
                        "Crystal collected ({}). You wasted time successfully!",
                        device.luck_label()
                    );
                    break;
                }
                println!("Nothing to collect yet.");
            }
            "quit" | "exit" => break,
            _ => println!("Invalid command."),
        }
    }

    Ok(())
}
