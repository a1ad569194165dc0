//! Construction material categories and the construction-type mapping.
//!
//! The fragility tables are published per material, so every inventory
//! construction type is collapsed onto one of four categories. The mapping is
//! a literal lookup; anything not listed falls back to Timber.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Construction types treated as steel frames.
pub const STEEL_TYPES: [&str; 2] = ["Steel Braced Frame", "Steel Moment Resisting Frame"];

/// Construction types treated as masonry.
pub const MASONRY_TYPES: [&str; 2] = ["Brick Masonry", "Concrete Masonry"];

/// Construction types treated as reinforced concrete.
pub const RC_TYPES: [&str; 4] = [
    "Reinforced Concrete Moment Resisting Frame",
    "Reinforced Concrete Shear Wall",
    "Industrial",
    "Tilt Up Panel",
];

/// Material category with its own set of fragility curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Material {
    /// Timber / wood frame. Fallback for unrecognized construction types.
    #[default]
    Timber,
    /// Reinforced concrete.
    #[serde(rename = "RC")]
    Rc,
    Masonry,
    Steel,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::Timber,
        Material::Rc,
        Material::Masonry,
        Material::Steel,
    ];

    /// Classify an inventory construction type. Matching is exact and
    /// case-sensitive.
    pub fn classify(construction_type: &str) -> Self {
        if STEEL_TYPES.contains(&construction_type) {
            Material::Steel
        } else if MASONRY_TYPES.contains(&construction_type) {
            Material::Masonry
        } else if RC_TYPES.contains(&construction_type) {
            Material::Rc
        } else {
            debug!(
                "Unrecognized construction type {:?}, using Timber fragility curves",
                construction_type
            );
            Material::Timber
        }
    }

    /// Whether the published curves for this material differ by storey count.
    pub fn varies_with_height(self) -> bool {
        matches!(self, Material::Timber | Material::Rc)
    }

    pub fn label(self) -> &'static str {
        match self {
            Material::Timber => "Timber",
            Material::Rc => "RC",
            Material::Masonry => "Masonry",
            Material::Steel => "Steel",
        }
    }
}
