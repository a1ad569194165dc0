use serde::{Deserialize, Serialize};

use crate::error::FragilityError;

/// Number of ordered damage states (DS1..DS6).
pub const DAMAGE_STATE_COUNT: usize = 6;

/// Values per published fragility row: one (median, beta) pair per damage state.
pub const PARAMS_PER_ROW: usize = DAMAGE_STATE_COUNT * 2;

/// Decimal places kept on the cumulative damage ratio.
pub const DR_DECIMALS: u32 = 3;

/// Largest rounding precision an f64 damage ratio can meaningfully carry.
pub const MAX_DR_DECIMALS: u32 = 15;

/// When the cumulative damage ratio is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DrRounding {
    /// Round the running total after every damage state's contribution (DS6
    /// down to DS1). Rounding error compounds over the six steps; this is the
    /// behaviour existing loss estimates were produced with.
    #[default]
    PerState,
    /// Sum all contributions unrounded and round once at the end.
    FinalOnly,
}

/// Tunables for [`crate::FragilityEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragilityConfig {
    pub rounding: DrRounding,
    pub decimals: u32,
}

impl Default for FragilityConfig {
    fn default() -> Self {
        Self {
            rounding: DrRounding::PerState,
            decimals: DR_DECIMALS,
        }
    }
}

impl FragilityConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, FragilityError> {
        let config: FragilityConfig =
            serde_json::from_str(json).map_err(|e| FragilityError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FragilityError> {
        if self.decimals > MAX_DR_DECIMALS {
            return Err(FragilityError::InvalidDecimals(self.decimals));
        }
        Ok(())
    }

    /// Round `value` to `self.decimals` places, ties to even.
    pub fn round_dr(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(self.decimals as i32);
        (value * scale).round_ties_even() / scale
    }
}
