//! Built-in rosters and the defaults applied to incomplete roster rows.

use crate::{Batter, Pitcher, WeightMap};

/// Name given to a roster row without one.
pub const DEFAULT_NAME: &str = "Unknown";

/// Contact or power skill given to a roster row without one.
pub const DEFAULT_SKILL: u32 = 50;

/// Pitch weights used for any pitch column a pitcher row leaves out.
pub const BASELINE_PITCH_WEIGHTS: [(&str, f64); 3] =
    [("fastball", 0.5), ("curve", 0.3), ("change", 0.2)];

/// Zone weights used for any zone column a pitcher row leaves out.
pub const BASELINE_ZONE_WEIGHTS: [(&str, f64); 3] =
    [("high", 0.33), ("middle", 0.33), ("low", 0.34)];

/// Roster used when no batter file is available.
#[must_use]
pub fn default_batters() -> Vec<Batter> {
    vec![Batter::new("Default Batter", DEFAULT_SKILL, DEFAULT_SKILL)]
}

/// Roster used when no pitcher file is available.
#[must_use]
pub fn default_pitchers() -> Vec<Pitcher> {
    vec![Pitcher::new(
        "Default Pitcher",
        WeightMap::from_valid_entries(&BASELINE_PITCH_WEIGHTS),
        WeightMap::from_valid_entries(&[("high", 0.3), ("middle", 0.4), ("low", 0.3)]),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoutingReport;

    #[test]
    fn test_default_rosters() {
        let batters = default_batters();
        assert_eq!(batters.len(), 1);
        assert_eq!(batters[0].contact(), 50);
        assert_eq!(batters[0].power(), 50);
        assert_eq!(batters[0].experience(), 0);

        let pitchers = default_pitchers();
        assert_eq!(pitchers.len(), 1);
        assert_eq!(pitchers[0].hot_zones().get("middle"), Some(0.4));
        let report = ScoutingReport::from_pitcher(&pitchers[0]).unwrap();
        assert_eq!(report.main_pitch, "fastball");
        assert_eq!(report.fastball, "50%");
        assert_eq!(report.curve, "30%");
    }
}
