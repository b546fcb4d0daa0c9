use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use mystery_mansion::{build_mansion, play, GameConfig, Level, DEFAULT_BUCKETS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mystery-mansion",
    about = "Explore the mansion, collect clues and name the prime suspect"
)]
struct Cli {
    /// Feature level: novice (map only), adventurer (+clues), master (+suspects).
    #[arg(long, value_enum, default_value_t = Level::Master)]
    level: Level,
    /// Number of buckets in the suspect index.
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,
    /// Log state transitions to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig {
        bucket_count: cli.buckets,
        level: cli.level,
    };
    config.validate().context("invalid game configuration")?;

    let mansion = build_mansion().context("failed to build the mansion")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = play(&mansion, &config, stdin.lock(), stdout.lock())
        .context("exploration failed")?;

    let mut out = stdout.lock();
    writeln!(out, "{report}")?;
    out.flush()?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
