//! Loading batter and pitcher rosters from CSV files.
//!
//! Missing columns and empty cells fall back to the engine's roster defaults:
//! `"Unknown"` for names, 50 for skills, and the baseline pitch and zone
//! weights for a pitcher's distributions.

use std::{fs::File, io, path::Path};

use anyhow::Context as _;
use backyard_engine::{
    Batter, InvalidInputError, Pitcher, WeightMap,
    roster::{self, BASELINE_PITCH_WEIGHTS, BASELINE_ZONE_WEIGHTS, DEFAULT_NAME, DEFAULT_SKILL},
};
use serde::Deserialize;

use crate::util;

#[derive(Debug, Deserialize)]
struct BatterRow {
    name: Option<String>,
    contact: Option<u32>,
    power: Option<u32>,
}

impl From<BatterRow> for Batter {
    fn from(row: BatterRow) -> Self {
        Batter::new(
            row.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            row.contact.unwrap_or(DEFAULT_SKILL),
            row.power.unwrap_or(DEFAULT_SKILL),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PitcherRow {
    name: Option<String>,
    fastball: Option<f64>,
    curve: Option<f64>,
    change: Option<f64>,
    high: Option<f64>,
    middle: Option<f64>,
    low: Option<f64>,
}

impl TryFrom<PitcherRow> for Pitcher {
    type Error = InvalidInputError;

    fn try_from(row: PitcherRow) -> Result<Self, Self::Error> {
        let pitches =
            with_baseline(&BASELINE_PITCH_WEIGHTS, [row.fastball, row.curve, row.change])?;
        let zones = with_baseline(&BASELINE_ZONE_WEIGHTS, [row.high, row.middle, row.low])?;
        Ok(Pitcher::new(
            row.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            pitches,
            zones,
        ))
    }
}

/// Combines per-row weights with the baseline, key by key.
fn with_baseline(
    baseline: &[(&str, f64); 3],
    values: [Option<f64>; 3],
) -> Result<WeightMap, InvalidInputError> {
    WeightMap::try_from_entries(
        baseline
            .iter()
            .zip(values)
            .map(|(&(key, default), value)| (key, value.unwrap_or(default))),
    )
}

pub fn read_batters<R>(reader: R, source: &str) -> anyhow::Result<Vec<Batter>>
where
    R: io::Read,
{
    let rows: Vec<BatterRow> = util::read_csv_rows(reader, source)?;
    Ok(rows.into_iter().map(Batter::from).collect())
}

pub fn read_pitchers<R>(reader: R, source: &str) -> anyhow::Result<Vec<Pitcher>>
where
    R: io::Read,
{
    let rows: Vec<PitcherRow> = util::read_csv_rows(reader, source)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            // Header occupies line 1
            Pitcher::try_from(row)
                .with_context(|| format!("Invalid pitcher row at line {} in {source}", i + 2))
        })
        .collect()
}

/// Loads the batter roster, or the built-in one if `path` does not exist.
pub fn load_batters(path: &Path) -> anyhow::Result<Vec<Batter>> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "batter file not found, using default roster");
        return Ok(roster::default_batters());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open batter roster file: {}", path.display()))?;
    let batters = read_batters(io::BufReader::new(file), &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = batters.len(), "loaded batters");
    Ok(batters)
}

/// Loads the pitcher roster, or the built-in one if `path` does not exist.
pub fn load_pitchers(path: &Path) -> anyhow::Result<Vec<Pitcher>> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "pitcher file not found, using default roster");
        return Ok(roster::default_pitchers());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open pitcher roster file: {}", path.display()))?;
    let pitchers = read_pitchers(io::BufReader::new(file), &path.display().to_string())?;
    tracing::info!(path = %path.display(), count = pitchers.len(), "loaded pitchers");
    Ok(pitchers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_batters_with_all_columns() {
        let csv = "name,contact,power\nCasey,80,65\nMighty,55,90\n";
        let batters = read_batters(csv.as_bytes(), "test").unwrap();
        assert_eq!(
            batters,
            vec![Batter::new("Casey", 80, 65), Batter::new("Mighty", 55, 90)]
        );
    }

    #[test]
    fn test_batter_defaults_for_missing_columns_and_cells() {
        let csv = "name,contact\nCasey,\n,70\n";
        let batters = read_batters(csv.as_bytes(), "test").unwrap();
        assert_eq!(
            batters,
            vec![Batter::new("Casey", 50, 50), Batter::new("Unknown", 70, 50)]
        );
    }

    #[test]
    fn test_malformed_batter_skill_fails() {
        let csv = "name,contact,power\nCasey,eighty,65\n";
        let err = read_batters(csv.as_bytes(), "players.csv").unwrap_err();
        assert!(format!("{err:#}").contains("players.csv"));
    }

    #[test]
    fn test_negative_batter_skill_fails() {
        let csv = "name,contact,power\nCasey,-5,65\n";
        assert!(read_batters(csv.as_bytes(), "test").is_err());
    }

    #[test]
    fn test_read_pitchers_with_all_columns() {
        let csv = "name,fastball,curve,change,high,middle,low\n\
                   Ace,0.6,0.25,0.15,0.5,0.3,0.2\n";
        let pitchers = read_pitchers(csv.as_bytes(), "test").unwrap();
        assert_eq!(pitchers.len(), 1);
        let ace = &pitchers[0];
        assert_eq!(ace.name(), "Ace");
        assert_eq!(ace.pitch_distribution().get("fastball"), Some(0.6));
        assert_eq!(ace.pitch_distribution().get("change"), Some(0.15));
        assert_eq!(ace.hot_zones().get("high"), Some(0.5));
    }

    #[test]
    fn test_pitcher_defaults_fill_each_missing_weight() {
        let csv = "name,fastball,low\n,0.9,\n";
        let pitchers = read_pitchers(csv.as_bytes(), "test").unwrap();
        let pitcher = &pitchers[0];
        assert_eq!(pitcher.name(), "Unknown");
        assert_eq!(pitcher.pitch_distribution().get("fastball"), Some(0.9));
        assert_eq!(pitcher.pitch_distribution().get("curve"), Some(0.3));
        assert_eq!(pitcher.pitch_distribution().get("change"), Some(0.2));
        assert_eq!(pitcher.hot_zones().get("high"), Some(0.33));
        assert_eq!(pitcher.hot_zones().get("middle"), Some(0.33));
        assert_eq!(pitcher.hot_zones().get("low"), Some(0.34));
    }

    #[test]
    fn test_negative_pitch_weight_fails_row() {
        let csv = "name,fastball\nAce,0.5\nWild,-0.2\n";
        let err = read_pitchers(csv.as_bytes(), "pitchers.csv").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("fastball"), "{message}");
    }

    #[test]
    fn test_empty_roster_file_yields_empty_roster() {
        let batters = read_batters("name,contact,power\n".as_bytes(), "test").unwrap();
        assert!(batters.is_empty());
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let missing = Path::new("definitely/not/a/real/roster.csv");
        assert_eq!(load_batters(missing).unwrap(), roster::default_batters());
        assert_eq!(load_pitchers(missing).unwrap(), roster::default_pitchers());
    }

    #[test]
    fn test_demo_rosters_load() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        let batters = load_batters(&demos.join("players.csv")).unwrap();
        let pitchers = load_pitchers(&demos.join("pitchers.csv")).unwrap();
        assert_eq!(batters.len(), 3);
        assert_eq!(pitchers.len(), 2);
        assert_eq!(pitchers[1].pitch_distribution().max_entry(), Some(("curve", 0.45)));
    }
}
