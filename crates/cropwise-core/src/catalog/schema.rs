use crate::model::{Parameter, Season, WaterNeed};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One season's partition of the crop catalog, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPartitionDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub season: Season,
    /// Crops in catalog order. This order breaks ties between equal scores.
    pub crops: Vec<CropProfile>,
}

/// Static agronomic profile of a crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub growing_period: String,
    pub water_need: WaterNeed,
    pub season: Season,
    pub requirements: BTreeMap<Parameter, CropRequirement>,
    /// Expected harvest per acre, in `yield_unit`.
    pub yield_per_acre: Decimal,
    pub yield_unit: String,
    /// Reference market price per `yield_unit`.
    pub price_per_unit: Decimal,
}

/// Acceptable range for one parameter, and how much it matters for the crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequirement {
    pub min: Decimal,
    pub max: Decimal,
    pub weight: Decimal,
}

impl CropRequirement {
    pub fn new(min: Decimal, max: Decimal, weight: Decimal) -> Self {
        Self { min, max, weight }
    }

    pub fn range(&self) -> Decimal {
        self.max - self.min
    }
}
