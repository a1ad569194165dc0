use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::DAMAGE_STATE_COUNT;
use crate::damage_state::DamageState;

/// Outcome of evaluating one building at one depth.
///
/// Serializes as a flat map `{"DS1": .., .., "DS6": .., "DR": .., "Loss": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DamageResult {
    /// Probability of ending in exactly each state, indexed by
    /// [`DamageState::index`]. Sums to the DS1 exceedance probability.
    pub probabilities: [f64; DAMAGE_STATE_COUNT],
    /// Expected damage ratio (fraction of replacement cost), rounded.
    pub damage_ratio: f64,
    /// `damage_ratio * replacement_cost`.
    pub loss: f64,
}

impl DamageResult {
    pub fn probability(&self, state: DamageState) -> f64 {
        self.probabilities[state.index()]
    }

    /// Probability of any damage at all, i.e. `P(DS >= DS1)`.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// The state with the highest probability mass, or `None` when the
    /// building is undamaged in every state.
    pub fn most_likely_state(&self) -> Option<DamageState> {
        DamageState::ALL
            .iter()
            .copied()
            .filter(|s| self.probability(*s) > 0.0)
            .max_by(|a, b| self.probability(*a).total_cmp(&self.probability(*b)))
    }
}

impl Serialize for DamageResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DAMAGE_STATE_COUNT + 2))?;
        for state in DamageState::ALL {
            map.serialize_entry(state.label(), &self.probability(state))?;
        }
        map.serialize_entry("DR", &self.damage_ratio)?;
        map.serialize_entry("Loss", &self.loss)?;
        map.end()
    }
}
