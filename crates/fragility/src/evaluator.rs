//! Fragility evaluation for a single building.
//!
//! For a building and an inundation depth:
//!   1. Classify the construction type into a material
//!   2. Pick the storey tier from the storey count
//!   3. Look up the six (median, beta) curves for that material and tier
//!   4. Walk the states from DS6 down to DS1, giving each state the exceedance
//!      probability not already claimed by a more severe state
//!   5. Accumulate probability * damage ratio into the expected damage ratio,
//!      rounding according to the configured cadence
//!   6. Loss = damage ratio * replacement cost

use tracing::{debug, trace};

use crate::building::Building;
use crate::config::{DrRounding, FragilityConfig, DAMAGE_STATE_COUNT};
use crate::damage_result::DamageResult;
use crate::damage_state::DamageState;
use crate::error::FragilityError;
use crate::fragility_params::fragility_curves;
use crate::material::Material;
use crate::storey_tier::StoreyTier;

/// Evaluates fragility curves under a fixed configuration. Cheap to copy and
/// safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FragilityEvaluator {
    config: FragilityConfig,
}

impl FragilityEvaluator {
    pub fn new(config: FragilityConfig) -> Result<Self, FragilityError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FragilityConfig {
        &self.config
    }

    /// Damage-state probabilities, expected damage ratio and loss for
    /// `building` at `depth`. An absent depth is no inundation.
    pub fn evaluate(&self, building: &Building, depth: Option<f64>) -> DamageResult {
        let depth = normalize_depth(depth);
        let material = building.material();
        let tier = building.storey_tier();
        let exceedance = self.exceedance_probabilities(material, tier, depth);

        let mut probabilities = [0.0; DAMAGE_STATE_COUNT];
        let mut accumulated_prob = 0.0;
        let mut damage_ratio = 0.0;

        for state in DamageState::ALL.iter().rev() {
            let prob = exceedance[state.index()] - accumulated_prob;
            probabilities[state.index()] = prob;
            accumulated_prob += prob;

            damage_ratio += prob * state.damage_ratio();
            if self.config.rounding == DrRounding::PerState {
                damage_ratio = self.config.round_dr(damage_ratio);
            }
        }
        if self.config.rounding == DrRounding::FinalOnly {
            damage_ratio = self.config.round_dr(damage_ratio);
        }

        let loss = damage_ratio * building.replacement_cost;
        trace!(
            "Fragility {} / {} at {:.3} m: DR={} loss={}",
            material.label(),
            tier.label(),
            depth,
            damage_ratio,
            loss
        );

        DamageResult {
            probabilities,
            damage_ratio,
            loss,
        }
    }

    /// `P(DS >= state | depth)` for DS1..DS6.
    pub fn exceedance_probabilities(
        &self,
        material: Material,
        tier: StoreyTier,
        depth: f64,
    ) -> [f64; DAMAGE_STATE_COUNT] {
        let curves = *fragility_curves(material, tier);
        curves.map(|curve| curve.exceedance(depth))
    }
}

/// Evaluate with the default configuration (per-state rounding to 3 decimals).
pub fn evaluate(building: &Building, depth: Option<f64>) -> DamageResult {
    FragilityEvaluator::default().evaluate(building, depth)
}

/// Absent and NaN depths are treated as no inundation.
fn normalize_depth(depth: Option<f64>) -> f64 {
    match depth {
        Some(d) if d.is_nan() => {
            debug!("NaN inundation depth, treating as 0.0");
            0.0
        }
        Some(d) => d,
        None => 0.0,
    }
}
