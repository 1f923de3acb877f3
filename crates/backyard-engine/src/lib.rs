pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Malformed weight table passed where a pitch or zone distribution is expected.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    #[display("distribution has no entries")]
    EmptyDistribution,
    #[display("weight for '{key}' must be finite and non-negative, got {weight}")]
    InvalidWeight {
        key: String,
        weight: f64,
    },
}

/// Which side of the at-bat a roster or selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Role {
    #[display("batter")]
    Batter,
    #[display("pitcher")]
    Pitcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no {role} available to select from")]
pub struct EmptyRosterError {
    pub role: Role,
}

/// Selection that has to be made before a swing can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum MissingSelection {
    #[display("batter")]
    Batter,
    #[display("pitcher")]
    Pitcher,
    #[display("batter and pitcher")]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no {missing} selected; scout and prepare before performing")]
pub struct MissingSelectionError {
    pub missing: MissingSelection,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ScoutError {
    #[display("cannot scout: {_0}")]
    EmptyRoster(#[error(not(source))] EmptyRosterError),
    #[display("cannot scout: {_0}")]
    InvalidInput(#[error(not(source))] InvalidInputError),
}

/// Any failure raised while running a full at-bat cycle.
///
/// Each message includes the failing step's error.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AtBatError {
    #[display("{_0}")]
    Scout(#[error(not(source))] ScoutError),
    #[display("cannot prepare: {_0}")]
    Prepare(#[error(not(source))] EmptyRosterError),
    #[display("cannot perform: {_0}")]
    Perform(#[error(not(source))] MissingSelectionError),
}
