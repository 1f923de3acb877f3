//! Data model for the backyard at-bat simulation.
//!
//! - [`Batter`] - Mutable batter record (skills and accumulated experience)
//! - [`Pitcher`] - Immutable pitcher record (pitch mix and hot zones)
//! - [`WeightMap`] - Validated name-to-weight table used for pitch and zone mixes

pub use self::{batter::*, pitcher::*, weights::*};

mod batter;
mod pitcher;
mod weights;
