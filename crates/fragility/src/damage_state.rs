use serde::{Deserialize, Serialize};

use crate::config::DAMAGE_STATE_COUNT;

/// Ordered tsunami damage states, DS1 (minor) to DS6 (collapse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageState {
    /// Minor damage.
    #[serde(rename = "DS1")]
    Ds1,
    /// Moderate damage.
    #[serde(rename = "DS2")]
    Ds2,
    /// Major damage.
    #[serde(rename = "DS3")]
    Ds3,
    /// Complete damage.
    #[serde(rename = "DS4")]
    Ds4,
    /// Collapse.
    #[serde(rename = "DS5")]
    Ds5,
    /// Washed away.
    #[serde(rename = "DS6")]
    Ds6,
}

impl DamageState {
    /// All states, least to most severe.
    pub const ALL: [DamageState; DAMAGE_STATE_COUNT] = [
        DamageState::Ds1,
        DamageState::Ds2,
        DamageState::Ds3,
        DamageState::Ds4,
        DamageState::Ds5,
        DamageState::Ds6,
    ];

    /// Position in [`DamageState::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            DamageState::Ds1 => "DS1",
            DamageState::Ds2 => "DS2",
            DamageState::Ds3 => "DS3",
            DamageState::Ds4 => "DS4",
            DamageState::Ds5 => "DS5",
            DamageState::Ds6 => "DS6",
        }
    }

    /// Fraction of replacement cost lost when a building ends in this state.
    pub fn damage_ratio(self) -> f64 {
        match self {
            DamageState::Ds1 => 0.01,
            DamageState::Ds2 => 0.2,
            DamageState::Ds3 => 0.5,
            DamageState::Ds4 => 0.9,
            DamageState::Ds5 | DamageState::Ds6 => 1.0,
        }
    }
}
