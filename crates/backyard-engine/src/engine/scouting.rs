use std::fmt;

use serde::Serialize;

use crate::{InvalidInputError, Pitcher};

/// Pre-at-bat summary of a pitcher's tendencies.
///
/// Shows the pitcher's main pitch along with the share of fastballs and
/// curveballs as whole-number percentages. A pitch type the pitcher does not
/// throw is shown as `0%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub main_pitch: String,
    pub fastball: String,
    pub curve: String,
}

impl ScoutingReport {
    /// Summarizes the pitch distribution of `pitcher`.
    ///
    /// The main pitch is the one with the largest weight; ties go to the
    /// lexicographically smallest pitch name.
    ///
    /// # Example
    ///
    /// ```
    /// use backyard_engine::{Pitcher, ScoutingReport, WeightMap};
    ///
    /// let pitches =
    ///     WeightMap::try_from_entries([("fastball", 0.6), ("curve", 0.25), ("change", 0.15)])
    ///         .unwrap();
    /// let pitcher = Pitcher::new("Ace", pitches, WeightMap::default());
    /// let report = ScoutingReport::from_pitcher(&pitcher).unwrap();
    ///
    /// assert_eq!(report.main_pitch, "fastball");
    /// assert_eq!(report.fastball, "60%");
    /// assert_eq!(report.curve, "25%");
    /// ```
    pub fn from_pitcher(pitcher: &Pitcher) -> Result<Self, InvalidInputError> {
        let distribution = pitcher.pitch_distribution();
        let (main_pitch, _) = distribution
            .max_entry()
            .ok_or(InvalidInputError::EmptyDistribution)?;
        Ok(Self {
            main_pitch: main_pitch.to_owned(),
            fastball: format_percent(distribution.get("fastball").unwrap_or(0.0)),
            curve: format_percent(distribution.get("curve").unwrap_or(0.0)),
        })
    }

    /// Report fields as `(label, value)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("mainPitch", self.main_pitch.as_str()),
            ("fastball", self.fastball.as_str()),
            ("curve", self.curve.as_str()),
        ]
    }
}

impl fmt::Display for ScoutingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {label}: {value}")?;
        }
        Ok(())
    }
}

/// Formats a weight as a whole-number percentage, rounding half to even.
fn format_percent(weight: f64) -> String {
    format!("{}%", (weight * 100.0).round_ties_even())
}
