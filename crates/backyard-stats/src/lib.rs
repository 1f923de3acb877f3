//! Statistical helpers for the backyard analyses.
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics (min, max, mean, median, spread)
//! - [`correlation`]: Pearson correlation between two paired series
//! - [`regression`]: Ordinary least-squares fit of a straight line
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use backyard_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Correlating two series
//!
//! ```
//! use backyard_stats::correlation::pearson;
//!
//! let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Fitting a line
//!
//! ```
//! use backyard_stats::regression::LinearFit;
//!
//! let fit = LinearFit::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod regression;
