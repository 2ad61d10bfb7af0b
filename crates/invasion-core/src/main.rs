//! Alien Invasion
//!
//! Reads `./inputs/worldmap.txt`, lands the requested number of aliens and
//! prints every destroyed city followed by what is left of the world.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use invasion_core::app::{self, RunOutcome};
use invasion_core::config::{FileConfig, SimConfig};
use invasion_core::error::InvasionError;
use invasion_core::output::banner;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "alien_invasion")]
#[command(about = "Simulate a mad alien invasion of a map of cities")]
struct Args {
    /// Number of aliens to create for the simulation (must be > 0)
    #[arg(long, default_value_t = 0)]
    aliens: usize,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding round_limit, world_file or names_file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write destruction events to this file as JSON lines
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Write the final survivor report to this file as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<SimConfig, InvasionError> {
        let mut config = SimConfig::new(self.aliens);
        if let Some(path) = &self.config {
            config = config.with_file_config(FileConfig::from_file(path)?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.events_out = self.events_out;
        config.report_json = self.report_json;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn try_main(args: Args) -> Result<RunOutcome, InvasionError> {
    let config = args.into_config()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&config, &mut out)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match try_main(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => {
            eprintln!("error validating input: {}", e);
            eprintln!("{}", Args::command().render_help());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprint!("{}", banner(&format!("Error while running simulation: {}", e)));
            ExitCode::FAILURE
        }
    }
}
