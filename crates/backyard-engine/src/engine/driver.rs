use std::fmt;

use serde::Serialize;

use crate::{AtBatError, Batter};

use super::{
    random::RandomSource,
    scouting::ScoutingReport,
    session::{AtBatSession, BatterProgress, SwingResult},
};

/// Batter announced before the swing, captured before any improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterAnnouncement {
    pub name: String,
    pub contact: u32,
    pub power: u32,
}

impl From<&Batter> for BatterAnnouncement {
    fn from(batter: &Batter) -> Self {
        Self {
            name: batter.name().to_owned(),
            contact: batter.contact(),
            power: batter.power(),
        }
    }
}

/// Everything reported for one Scout -> Prepare -> Perform -> Analyze cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtBatReport {
    pub pitcher: String,
    pub scouting: ScoutingReport,
    pub batter: BatterAnnouncement,
    pub swing: SwingResult,
    pub progress: Option<BatterProgress>,
}

impl fmt::Display for AtBatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            pitcher,
            scouting,
            batter,
            swing,
            progress,
        } = self;
        writeln!(f, "Scouting report for {pitcher}:")?;
        writeln!(f, "{scouting}")?;
        writeln!(
            f,
            "Selected batter: {} (Contact {}, Power {})",
            batter.name, batter.contact, batter.power
        )?;
        write!(f, "{}", swing.outcome)?;
        if let Some(progress) = progress {
            write!(
                f,
                "\nPlayer XP: {}, Contact now {}",
                progress.experience, progress.contact
            )?;
        }
        Ok(())
    }
}

/// Runs one full at-bat cycle on `session`.
///
/// Each step runs exactly once, in order. The first failing step aborts the
/// cycle and its error is returned; selections made by earlier steps remain
/// in the session so the caller can retry just the missing step.
pub fn run_at_bat<R>(session: &mut AtBatSession<R>) -> Result<AtBatReport, AtBatError>
where
    R: RandomSource,
{
    let (pitcher, scouting) = session.scout()?;
    let pitcher = pitcher.name().to_owned();
    let batter = BatterAnnouncement::from(session.prepare()?);
    let swing = session.perform()?;
    let progress = session.analyze();
    tracing::debug!(%pitcher, batter = %batter.name, outcome = ?swing.outcome, "at-bat complete");
    Ok(AtBatReport {
        pitcher,
        scouting,
        batter,
        swing,
        progress,
    })
}
