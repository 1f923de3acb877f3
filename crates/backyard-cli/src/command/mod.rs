use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{analyze_donations::AnalyzeDonationsArg, play::PlayArg};

mod analyze_donations;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter directive for stderr logging (overrides `RUST_LOG`), e.g. `debug`
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Simulate one at-bat: scout, prepare, perform, analyze
    Play(#[clap(flatten)] PlayArg),
    /// Correlate donor contributions with season wins
    AnalyzeDonations(#[clap(flatten)] AnalyzeDonationsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.log_level.as_deref())?;
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::AnalyzeDonations(arg) => analyze_donations::run(&arg)?,
    }
    Ok(())
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `--log-level` if given, else from `RUST_LOG`, else
/// defaults to `warn`.
fn init_tracing(log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
