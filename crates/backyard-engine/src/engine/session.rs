use serde::Serialize;

use crate::{
    Batter, EmptyRosterError, MissingSelection, MissingSelectionError, Pitcher, Role, ScoutError,
};

use super::{random::RandomSource, scouting::ScoutingReport};

/// Skill points a batter gains in contact after a hit.
const HIT_CONTACT_GAIN: u32 = 1;

/// Timing value at which the swing is perfectly on time.
const PERFECT_TIMING: f64 = 0.5;

/// Probability that a swing at `timing` makes contact, for a batter with the
/// given contact skill.
///
/// The chance scales linearly with skill and falls off by the distance from
/// perfect timing: it is exactly `contact / 100` at `timing = 0.5` and half
/// that at `timing = 0` or `timing = 1`.
///
/// # Example
///
/// ```
/// use backyard_engine::contact_chance;
///
/// assert_eq!(contact_chance(80, 0.5), 0.8);
/// assert_eq!(contact_chance(80, 0.0), 0.4);
/// assert_eq!(contact_chance(80, 1.0), 0.4);
/// ```
#[must_use]
pub fn contact_chance(contact: u32, timing: f64) -> f64 {
    let skill = f64::from(contact) / 100.0;
    skill * (1.0 - (PERFECT_TIMING - timing).abs())
}

/// Selections held for the at-bat in progress.
///
/// Indices point into the session's rosters. Each is replaced whenever the
/// corresponding step runs again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtBatState {
    pitcher: Option<usize>,
    batter: Option<usize>,
}

impl AtBatState {
    #[must_use]
    pub const fn pitcher_index(&self) -> Option<usize> {
        self.pitcher
    }

    #[must_use]
    pub const fn batter_index(&self) -> Option<usize> {
        self.batter
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SwingOutcome {
    #[display("Hit! Great swing.")]
    Hit,
    #[display("Missed. Better luck next time.")]
    Miss,
}

/// Everything drawn and decided while resolving one swing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwingResult {
    /// Uniform draw in `[0, 1)`; `0.5` is perfect timing.
    pub timing: f64,
    pub contact_chance: f64,
    /// Uniform draw in `[0, 1)` compared against `contact_chance`.
    pub roll: f64,
    pub outcome: SwingOutcome,
}

/// Post-at-bat snapshot of the active batter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterProgress {
    pub name: String,
    pub experience: u32,
    pub contact: u32,
}

/// Resolves a swing for `batter` from pre-drawn `timing` and `roll` values.
///
/// A roll strictly below the contact chance is a hit, which improves the
/// batter's contact. A miss leaves the batter untouched.
pub fn resolve_swing(batter: &mut Batter, timing: f64, roll: f64) -> SwingResult {
    let contact_chance = contact_chance(batter.contact(), timing);
    let outcome = if roll < contact_chance {
        batter.improve(HIT_CONTACT_GAIN, 0);
        SwingOutcome::Hit
    } else {
        SwingOutcome::Miss
    };
    SwingResult {
        timing,
        contact_chance,
        roll,
        outcome,
    }
}

/// One batter-vs-pitcher session over a pair of rosters.
///
/// A session walks through four steps, each callable on its own:
///
/// 1. [`scout`](Self::scout) picks a pitcher and summarizes it
/// 2. [`prepare`](Self::prepare) picks the batter who steps up
/// 3. [`perform`](Self::perform) resolves the swing, improving the batter on a hit
/// 4. [`analyze`](Self::analyze) reports the batter's progress
///
/// Rerunning a step replaces its earlier selection. All randomness comes from
/// the injected [`RandomSource`].
///
/// # Example
///
/// ```
/// use backyard_engine::{AtBatSession, SessionRng, default_batters, default_pitchers};
///
/// let mut session = AtBatSession::new(default_batters(), default_pitchers(), SessionRng::new());
///
/// let (_, report) = session.scout().unwrap();
/// assert_eq!(report.main_pitch, "fastball");
///
/// session.prepare().unwrap();
/// let swing = session.perform().unwrap();
/// assert!(swing.contact_chance <= 0.5);
///
/// let progress = session.analyze().unwrap();
/// assert_eq!(progress.name, "Default Batter");
/// ```
#[derive(Debug, Clone)]
pub struct AtBatSession<R> {
    batters: Vec<Batter>,
    pitchers: Vec<Pitcher>,
    state: AtBatState,
    rng: R,
}

impl<R> AtBatSession<R>
where
    R: RandomSource,
{
    #[must_use]
    pub fn new(batters: Vec<Batter>, pitchers: Vec<Pitcher>, rng: R) -> Self {
        Self {
            batters,
            pitchers,
            state: AtBatState::default(),
            rng,
        }
    }

    #[must_use]
    pub fn batters(&self) -> &[Batter] {
        &self.batters
    }

    #[must_use]
    pub fn pitchers(&self) -> &[Pitcher] {
        &self.pitchers
    }

    #[must_use]
    pub fn state(&self) -> &AtBatState {
        &self.state
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn selected_pitcher(&self) -> Option<&Pitcher> {
        self.state.pitcher.map(|i| &self.pitchers[i])
    }

    #[must_use]
    pub fn selected_batter(&self) -> Option<&Batter> {
        self.state.batter.map(|i| &self.batters[i])
    }

    /// Picks a pitcher uniformly at random and returns it with its scouting
    /// report.
    ///
    /// The selection is only replaced when the report can be produced; on
    /// error the previous selection is kept.
    pub fn scout(&mut self) -> Result<(&Pitcher, ScoutingReport), ScoutError> {
        let index = pick(&mut self.rng, self.pitchers.len(), Role::Pitcher)?;
        let pitcher = &self.pitchers[index];
        let report = ScoutingReport::from_pitcher(pitcher)?;
        tracing::debug!(
            pitcher = pitcher.name(),
            main_pitch = %report.main_pitch,
            "scouted pitcher"
        );
        self.state.pitcher = Some(index);
        Ok((pitcher, report))
    }

    /// Picks a batter uniformly at random and makes them the active batter.
    pub fn prepare(&mut self) -> Result<&Batter, EmptyRosterError> {
        let index = pick(&mut self.rng, self.batters.len(), Role::Batter)?;
        self.state.batter = Some(index);
        let batter = &self.batters[index];
        tracing::debug!(
            batter = batter.name(),
            contact = batter.contact(),
            power = batter.power(),
            "selected batter"
        );
        Ok(batter)
    }

    /// Resolves a swing for the active batter against the scouted pitcher.
    ///
    /// Draws the timing first and the contact roll second. Fails without
    /// drawing or mutating anything if either selection is missing.
    pub fn perform(&mut self) -> Result<SwingResult, MissingSelectionError> {
        let batter_index = match (self.state.batter, self.state.pitcher) {
            (Some(batter), Some(_)) => batter,
            (None, Some(_)) => return Err(missing(MissingSelection::Batter)),
            (Some(_), None) => return Err(missing(MissingSelection::Pitcher)),
            (None, None) => return Err(missing(MissingSelection::Both)),
        };
        let timing = self.rng.next_unit();
        let roll = self.rng.next_unit();
        let batter = &mut self.batters[batter_index];
        let result = resolve_swing(batter, timing, roll);
        tracing::debug!(
            batter = batter.name(),
            timing,
            contact_chance = result.contact_chance,
            roll,
            outcome = ?result.outcome,
            "resolved swing"
        );
        Ok(result)
    }

    /// Reports the active batter's experience and contact, or `None` if no
    /// batter has been prepared yet.
    #[must_use]
    pub fn analyze(&self) -> Option<BatterProgress> {
        self.selected_batter().map(|batter| BatterProgress {
            name: batter.name().to_owned(),
            experience: batter.experience(),
            contact: batter.contact(),
        })
    }

    /// Clears both selections so the next at-bat starts from scratch.
    pub fn reset_selection(&mut self) {
        self.state = AtBatState::default();
    }

    /// Consumes the session, handing back the (possibly improved) batters.
    #[must_use]
    pub fn into_batters(self) -> Vec<Batter> {
        self.batters
    }
}

fn missing(missing: MissingSelection) -> MissingSelectionError {
    MissingSelectionError { missing }
}

fn pick<R>(rng: &mut R, len: usize, role: Role) -> Result<usize, EmptyRosterError>
where
    R: RandomSource,
{
    if len == 0 {
        return Err(EmptyRosterError { role });
    }
    Ok(rng.pick_index(len))
}
