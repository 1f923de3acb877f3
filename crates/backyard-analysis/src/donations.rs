use std::fmt;

use backyard_stats::{correlation, descriptive::DescriptiveStats, regression::LinearFit};
use serde::{Deserialize, Serialize};

/// One season of one sport.
///
/// Field names match the dataset's column headers (`Year`, `Sport`,
/// `HeadCoach`, ...) when read from or written to tabular data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DonationRecord {
    pub year: u16,
    pub sport: String,
    pub head_coach: String,
    /// Donor contributions in US dollars.
    pub donor_contributions: u64,
    /// State economic index on an arbitrary scale.
    pub state_economic_index: f64,
    pub university_president: String,
    pub athletic_director: String,
    pub record_wins: u32,
    pub record_losses: u32,
}

impl DonationRecord {
    #[expect(clippy::too_many_arguments)]
    fn new(
        year: u16,
        sport: &str,
        head_coach: &str,
        donor_contributions: u64,
        state_economic_index: f64,
        university_president: &str,
        athletic_director: &str,
        record_wins: u32,
        record_losses: u32,
    ) -> Self {
        Self {
            year,
            sport: sport.to_owned(),
            head_coach: head_coach.to_owned(),
            donor_contributions,
            state_economic_index,
            university_president: university_president.to_owned(),
            athletic_director: athletic_director.to_owned(),
            record_wins,
            record_losses,
        }
    }
}

/// The built-in example rows, used when no dataset file is given.
#[must_use]
pub fn example_records() -> Vec<DonationRecord> {
    vec![
        DonationRecord::new(
            2005,
            "football",
            "Mack Brown",
            50_000_000,
            1.7,
            "William Powers",
            "DeLoss Dodds",
            13,
            0,
        ),
        DonationRecord::new(
            2010,
            "football",
            "Mack Brown",
            40_000_000,
            1.4,
            "William Powers",
            "DeLoss Dodds",
            5,
            7,
        ),
        DonationRecord::new(
            1983,
            "baseball",
            "Cliff Gustafson",
            3_000_000,
            1.2,
            "William Cunningham",
            "DeLoss Dodds",
            66,
            14,
        ),
    ]
}

/// Least-squares line `wins = intercept + slope * donations`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinsRegression {
    /// Extra wins per donated dollar.
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Spread of season win totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinsSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Relationship between donor money and wins for a single sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationAnalysis {
    pub sport: String,
    pub sample_size: usize,
    /// Pearson correlation between donations and wins; `None` when undefined.
    pub correlation: Option<f64>,
    pub regression: Option<WinsRegression>,
    pub wins: Option<WinsSummary>,
}

impl DonationAnalysis {
    /// Analyzes the rows whose sport matches `sport` (ignoring ASCII case).
    ///
    /// Correlation and regression need at least two matching rows with
    /// varying donations and wins; otherwise they are `None`. The wins
    /// summary is `None` only when no row matches.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(records: &[DonationRecord], sport: &str) -> Self {
        let (donations, wins): (Vec<f64>, Vec<f64>) = records
            .iter()
            .filter(|r| r.sport.eq_ignore_ascii_case(sport))
            .map(|r| (r.donor_contributions as f64, f64::from(r.record_wins)))
            .unzip();

        let correlation = correlation::pearson(&donations, &wins);
        let regression = LinearFit::fit(&donations, &wins).map(|fit| WinsRegression {
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: fit.r_squared,
        });
        let wins_summary = DescriptiveStats::new(wins.iter().copied()).map(|s| WinsSummary {
            min: s.min,
            max: s.max,
            mean: s.mean,
            median: s.median,
            std_dev: s.std_dev,
        });

        Self {
            sport: sport.to_owned(),
            sample_size: donations.len(),
            correlation,
            regression,
            wins: wins_summary,
        }
    }
}

impl fmt::Display for DonationAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seasons analyzed ({}): {}", self.sport, self.sample_size)?;
        match self.correlation {
            Some(r) => writeln!(f, "Correlation between donations and wins: {r:.2}")?,
            None => writeln!(f, "Correlation between donations and wins: n/a")?,
        }
        match &self.regression {
            Some(fit) => writeln!(
                f,
                "Regression: wins = {:.2} + {:.3} per $1M donated (R^2 = {:.2})",
                fit.intercept,
                fit.slope * 1_000_000.0,
                fit.r_squared
            )?,
            None => writeln!(f, "Regression: n/a")?,
        }
        match &self.wins {
            Some(w) => write!(
                f,
                "Wins: mean {:.1}, median {:.1}, min {}, max {}, std dev {:.2}",
                w.mean, w.median, w.min, w.max, w.std_dev
            ),
            None => write!(f, "Wins: n/a"),
        }
    }
}
