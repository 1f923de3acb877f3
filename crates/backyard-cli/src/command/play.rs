use std::{fmt, path::PathBuf};

use anyhow::Context as _;
use backyard_engine::{AtBatReport, AtBatSession, SessionRng, SessionSeed, run_at_bat};
use serde::Serialize;

use crate::{
    roster,
    util::{Output, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Batter roster CSV (`name,contact,power`); the default roster is used if it does not exist
    #[arg(long, default_value = "players.csv")]
    batters: PathBuf,
    /// Pitcher roster CSV (`name,fastball,curve,change,high,middle,low`); the default roster is used if it does not exist
    #[arg(long, default_value = "pitchers.csv")]
    pitchers: PathBuf,
    /// 32-hex-digit seed for a reproducible at-bat; random if omitted
    #[arg(long)]
    seed: Option<SessionSeed>,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            batters: PathBuf::from("players.csv"),
            pitchers: PathBuf::from("pitchers.csv"),
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
struct PlayOutput {
    seed: SessionSeed,
    #[serde(flatten)]
    report: AtBatReport,
}

impl fmt::Display for PlayOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report, f)
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        batters,
        pitchers,
        seed,
        format,
    } = arg;

    let batters = roster::load_batters(batters)?;
    let pitchers = roster::load_pitchers(pitchers)?;
    let rng = match seed {
        Some(seed) => SessionRng::with_seed(*seed),
        None => SessionRng::new(),
    };
    let seed = rng.seed();
    tracing::info!(
        %seed,
        batters = batters.len(),
        pitchers = pitchers.len(),
        "starting at-bat"
    );

    let mut session = AtBatSession::new(batters, pitchers, rng);
    let report = run_at_bat(&mut session).context("At-bat aborted")?;

    Output::stdout().write_report(*format, &PlayOutput { seed, report })
}
