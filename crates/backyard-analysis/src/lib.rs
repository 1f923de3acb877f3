//! Analysis of the historical sports-donation dataset.
//!
//! - [`donations`]: Dataset rows, the built-in example rows, and the
//!   donations-versus-wins analysis
//!
//! # Example
//!
//! ```
//! use backyard_analysis::donations::{DonationAnalysis, example_records};
//!
//! let analysis = DonationAnalysis::new(&example_records(), "football");
//! assert_eq!(analysis.sample_size, 2);
//! println!("{analysis}");
//! ```

pub mod donations;
