// ---------------------------------------------------------------------------
// FragilityError: failures surfaced to the calling pipeline
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while reading inputs for a fragility evaluation.
///
/// The evaluation itself cannot fail for a well-formed [`crate::Building`];
/// these cover records and configuration handed in by the caller.
#[derive(Debug)]
pub enum FragilityError {
    /// The building record is missing a required attribute or has one of the
    /// wrong type.
    Record(String),
    /// The evaluator configuration could not be parsed.
    Config(String),
    /// Requested rounding precision is beyond what an f64 can carry.
    InvalidDecimals(u32),
}

impl fmt::Display for FragilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragilityError::Record(msg) => write!(f, "Invalid building record: {msg}"),
            FragilityError::Config(msg) => write!(f, "Invalid fragility config: {msg}"),
            FragilityError::InvalidDecimals(decimals) => write!(
                f,
                "Damage ratio rounding to {decimals} decimals exceeds the maximum of {}",
                crate::config::MAX_DR_DECIMALS
            ),
        }
    }
}

impl std::error::Error for FragilityError {}

impl From<serde_json::Error> for FragilityError {
    fn from(e: serde_json::Error) -> Self {
        FragilityError::Record(e.to_string())
    }
}
