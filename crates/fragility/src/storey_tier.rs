use serde::{Deserialize, Serialize};
use tracing::debug;

/// Building height class used to pick a fragility table.
///
/// Only Timber and RC curves differ between tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoreyTier {
    /// Curves fitted across all building heights. Used when the storey count
    /// is absent or unusable.
    #[default]
    AllHeights,
    One,
    Two,
    ThreeOrMore,
}

impl StoreyTier {
    pub const ALL: [StoreyTier; 4] = [
        StoreyTier::AllHeights,
        StoreyTier::One,
        StoreyTier::Two,
        StoreyTier::ThreeOrMore,
    ];

    /// Select the tier for a storey count.
    ///
    /// Exactly 1 and exactly 2 map to their own tiers, anything above 2 is
    /// three-or-more. Absent, zero, negative, NaN and fractional counts below 2
    /// fall back to [`StoreyTier::AllHeights`].
    pub fn from_storeys(storeys: Option<f64>) -> Self {
        match storeys {
            Some(s) if s == 1.0 => StoreyTier::One,
            Some(s) if s == 2.0 => StoreyTier::Two,
            Some(s) if s > 2.0 => StoreyTier::ThreeOrMore,
            other => {
                if let Some(s) = other {
                    debug!("Storey count {} has no tier, using all-heights curves", s);
                }
                StoreyTier::AllHeights
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StoreyTier::AllHeights => "All heights",
            StoreyTier::One => "1 storey",
            StoreyTier::Two => "2 storeys",
            StoreyTier::ThreeOrMore => "3+ storeys",
        }
    }
}
