//! At-bat simulation built on the data model in [`crate::core`].
//!
//! - [`ScoutingReport`] - Summary of a pitcher shown before the at-bat
//! - [`AtBatSession`] - Four-step turn engine (scout, prepare, perform, analyze)
//! - [`run_at_bat`] - Session driver producing an [`AtBatReport`]
//! - [`RandomSource`] / [`SessionRng`] - Injectable, seedable randomness
//! - [`roster`] - Built-in rosters and row defaults
//!
//! # Example
//!
//! ```
//! use backyard_engine::{
//!     AtBatSession, SessionRng, SessionSeed, default_batters, default_pitchers, run_at_bat,
//! };
//!
//! let seed: SessionSeed = "00000000000000000000000000000001".parse().unwrap();
//! let mut session =
//!     AtBatSession::new(default_batters(), default_pitchers(), SessionRng::with_seed(seed));
//!
//! let report = run_at_bat(&mut session).unwrap();
//! println!("{report}");
//! ```

pub use self::{driver::*, random::*, roster::*, scouting::*, session::*};

mod driver;
mod random;
pub mod roster;
mod scouting;
mod session;
