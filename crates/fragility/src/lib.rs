//! Tsunami building fragility evaluation.
//!
//! Given a building (construction type, replacement cost, storey count) and an
//! inundation depth, computes the probability of each damage state DS1..DS6
//! from the empirical lognormal fragility curves of Suppasri et al. (2013),
//! the expected damage ratio, and the resulting monetary loss.
//!
//! Evaluation is a pure function of its inputs and the embedded parameter
//! tables; it can be called from any number of threads.

pub mod building;
pub mod config;
pub mod damage_result;
pub mod damage_state;
pub mod error;
pub mod evaluator;
pub mod fragility_params;
pub mod lognormal;
pub mod material;
pub mod storey_tier;


pub use building::Building;
pub use config::{DrRounding, FragilityConfig};
pub use damage_result::DamageResult;
pub use damage_state::DamageState;
pub use error::FragilityError;
pub use evaluator::{evaluate, FragilityEvaluator};
pub use fragility_params::{fragility_curve, fragility_curves, FragilityCurve, FragilityCurves};
pub use material::Material;
pub use storey_tier::StoreyTier;
