//! Building record consumed by the evaluator.
//!
//! Field names on the wire follow the exposure inventory attribute names
//! (`Constructi`, `Rep_Cost`, `Storeys`). All three attributes must be present;
//! `Storeys` may be null or non-numeric, in which case the all-heights curves
//! are used.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::FragilityError;
use crate::material::Material;
use crate::storey_tier::StoreyTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Inventory construction type label, e.g. "Brick Masonry".
    #[serde(rename = "Constructi")]
    pub construction_type: String,
    /// Replacement cost in currency units.
    #[serde(rename = "Rep_Cost")]
    pub replacement_cost: f64,
    /// Storey count, `None` when unspecified or non-numeric.
    #[serde(rename = "Storeys", deserialize_with = "deserialize_storeys")]
    pub storeys: Option<f64>,
}

impl Building {
    pub fn new(
        construction_type: impl Into<String>,
        replacement_cost: f64,
        storeys: Option<u32>,
    ) -> Self {
        Self {
            construction_type: construction_type.into(),
            replacement_cost,
            storeys: storeys.map(f64::from),
        }
    }

    /// Read a building from an inventory record (a JSON object of attributes).
    /// Extra attributes are ignored.
    pub fn from_record(record: &Value) -> Result<Self, FragilityError> {
        Building::deserialize(record).map_err(FragilityError::from)
    }

    pub fn material(&self) -> Material {
        Material::classify(&self.construction_type)
    }

    pub fn storey_tier(&self) -> StoreyTier {
        StoreyTier::from_storeys(self.storeys)
    }
}

/// Storeys may arrive as a number, null, or free text from the inventory.
/// Anything that is not a number becomes `None`. The attribute itself is
/// still required.
fn deserialize_storeys<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::Null => None,
        other => {
            debug!("Non-numeric storey count {}, treating as unspecified", other);
            None
        }
    })
}
