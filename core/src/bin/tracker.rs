//! Kommandolinje for tracker_core.
//!
//! ```bash
//! tracker day "6000,4h00m00s" --weight 75 --height 1.75
//! tracker training "3456,Running,45m00s" --profile profile.json --json
//! RUST_LOG=debug tracker day "abc,1h" --weight 75 --height 1.75
//! ```
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tracker_core::cli::{run_day, run_training, OutputFormat};
use tracker_core::{load_profile, BodyProfile};

#[derive(Parser)]
#[command(name = "tracker", about = "Distance, speed and calorie reports from step records")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    body: BodyArgs,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Args)]
struct BodyArgs {
    /// Body weight in kg
    #[arg(long, global = true)]
    weight: Option<f64>,

    /// Height in metres
    #[arg(long, global = true)]
    height: Option<f64>,

    /// JSON file with weight_kg and height_m
    #[arg(long, global = true, conflicts_with_all = ["weight", "height"])]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Daily steps: "<steps>,<duration>"
    Day {
        record: String,
        /// Fail with an error instead of printing nothing
        #[arg(long)]
        strict: bool,
    },
    /// Training: "<steps>,<Walking|Running>,<duration>"
    Training { record: String },
}

impl BodyArgs {
    fn resolve(&self) -> anyhow::Result<BodyProfile> {
        let profile = match (&self.profile, self.weight, self.height) {
            (Some(path), _, _) => load_profile(path)?,
            (None, Some(w), Some(h)) => BodyProfile::new(w, h),
            _ => bail!("either --profile or both --weight and --height are required"),
        };
        profile.validate().context("body profile")?;
        Ok(profile)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = cli.body.resolve()?;
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let out = match &cli.command {
        Command::Day { record, strict } => run_day(record, &profile, *strict, format)?,
        Command::Training { record } => run_training(record, &profile, format)?,
    };
    print!("{out}");
    Ok(())
}
