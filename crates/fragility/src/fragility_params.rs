//! Tsunami fragility curve parameters from Suppasri et al. (2013), Table 3.
//!
//! Each published row holds six (median, beta) pairs, DS1 to DS6, where the
//! median is on the natural-log scale of inundation depth (metres). Timber and
//! RC rows are published per storey tier; Masonry and Steel have a single
//! all-heights row that applies to every tier, so they are stored once.

use serde::{Deserialize, Serialize};

use crate::config::{DAMAGE_STATE_COUNT, PARAMS_PER_ROW};
use crate::damage_state::DamageState;
use crate::lognormal::lognormal_cdf;
use crate::material::Material;
use crate::storey_tier::StoreyTier;

// =============================================================================
// Curve types
// =============================================================================

/// One lognormal fragility curve: `P(DS >= state | depth)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragilityCurve {
    /// Log-scale location (`ln` of the median depth).
    pub median: f64,
    /// Lognormal shape parameter.
    pub beta: f64,
}

/// Curves for DS1..DS6, in that order.
pub type FragilityCurves = [FragilityCurve; DAMAGE_STATE_COUNT];

impl FragilityCurve {
    pub const fn new(median: f64, beta: f64) -> Self {
        Self { median, beta }
    }

    /// Probability of reaching or exceeding this curve's damage state at `depth`.
    pub fn exceedance(&self, depth: f64) -> f64 {
        lognormal_cdf(depth, self.median, self.beta)
    }

    /// Median inundation depth in metres.
    pub fn median_depth(&self) -> f64 {
        self.median.exp()
    }
}

/// Split a published 12-value row into six (median, beta) curves.
pub const fn curves_from_row(row: [f64; PARAMS_PER_ROW]) -> FragilityCurves {
    [
        FragilityCurve::new(row[0], row[1]),
        FragilityCurve::new(row[2], row[3]),
        FragilityCurve::new(row[4], row[5]),
        FragilityCurve::new(row[6], row[7]),
        FragilityCurve::new(row[8], row[9]),
        FragilityCurve::new(row[10], row[11]),
    ]
}

// =============================================================================
// Published rows
// =============================================================================

/// Timber rows indexed by `StoreyTier as usize`.
static TIMBER: [FragilityCurves; 4] = [
    curves_from_row([
        -2.1216, 1.2261, -0.9338, 0.9144, -0.040, 0.7276, 0.6721, 0.4985, 0.7825, 0.5559, 1.2094,
        0.5247,
    ]),
    curves_from_row([
        -1.7268, 1.1462, -0.8580, 0.9395, 0.0481, 0.7115, 0.6872, 0.5288, 0.8134, 0.5941, 1.1733,
        0.5756,
    ]),
    curves_from_row([
        -2.008, 1.1873, -0.8747, 0.9053, 0.035, 0.7387, 0.777, 0.5153, 0.9461, 0.5744, 1.3633,
        0.471,
    ]),
    curves_from_row([
        -2.1900, 1.3198, -0.8617, 1.224, 0.1137, 0.844, 0.7977, 0.4734, 1.2658, 0.6242, 1.7702,
        0.3711,
    ]),
];

/// RC rows indexed by `StoreyTier as usize`.
static RC: [FragilityCurves; 4] = [
    curves_from_row([
        -1.9636, 1.0966, -0.9723, 1.0600, 0.1577, 0.7090, 0.9423, 0.7522, 1.9381, 1.0120, 2.8232,
        0.9635,
    ]),
    curves_from_row([
        -1.8785, 1.1921, -0.82, 1.0585, 0.1590, 0.8196, 0.8881, 0.8391, 1.6578, 0.8948, 2.4155,
        0.869,
    ]),
    curves_from_row([
        -2.2555, 1.2474, -0.9493, 1.0388, 0.1979, 0.745, 0.925, 0.692, 1.7814, 0.7196, 2.4352,
        0.662,
    ]),
    curves_from_row([
        -2.7757, 1.6594, -0.9784, 1.022, 0.1489, 0.66, 1.1408, 0.7981, 2.3491, 0.7898, 2.7121,
        0.4966,
    ]),
];

static MASONRY: FragilityCurves = curves_from_row([
    -2.113, 1.3362, -1.1573, 1.0400, 0.1059, 0.7693, 0.9043, 0.5746, 1.1918, 0.6821, 1.6583,
    0.6913,
]);

static STEEL: FragilityCurves = curves_from_row([
    -1.6956, 1.1013, -0.8982, 0.8835, 0.0662, 0.7171, 0.7061, 0.6680, 1.4575, 0.8938, 2.2790,
    0.7362,
]);

// =============================================================================
// Lookup
// =============================================================================

/// Fragility curves for a material at a storey tier.
///
/// Masonry and Steel ignore the tier.
pub fn fragility_curves(material: Material, tier: StoreyTier) -> &'static FragilityCurves {
    match material {
        Material::Timber => &TIMBER[tier as usize],
        Material::Rc => &RC[tier as usize],
        Material::Masonry => &MASONRY,
        Material::Steel => &STEEL,
    }
}

/// The curve for a single damage state.
pub fn fragility_curve(material: Material, tier: StoreyTier, state: DamageState) -> FragilityCurve {
    fragility_curves(material, tier)[state.index()]
}
