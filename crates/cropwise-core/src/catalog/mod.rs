pub mod builtin;
pub mod schema;

use crate::error::CropwiseError;
use crate::model::Season;
use rust_decimal::Decimal;
use schema::{CatalogPartitionDef, CropProfile};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Crop catalog, partitioned by season.
///
/// Built once from validated partitions and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    partitions: BTreeMap<Season, CatalogPartitionDef>,
}

impl Catalog {
    /// Assemble a catalog. Each season may appear at most once.
    pub fn from_partitions(
        partitions: impl IntoIterator<Item = CatalogPartitionDef>,
    ) -> Result<Self, CropwiseError> {
        let mut by_season = BTreeMap::new();
        for partition in partitions {
            let season = partition.season;
            if by_season.insert(season, partition).is_some() {
                return Err(CropwiseError::CatalogInvalid(format!(
                    "more than one partition for season '{}'",
                    season
                )));
            }
        }
        Ok(Self {
            partitions: by_season,
        })
    }

    /// Crops for a season, in catalog order. Empty if the season has no partition.
    pub fn season(&self, season: Season) -> &[CropProfile] {
        self.partitions
            .get(&season)
            .map(|p| p.crops.as_slice())
            .unwrap_or(&[])
    }

    pub fn partition(&self, season: Season) -> Option<&CatalogPartitionDef> {
        self.partitions.get(&season)
    }

    pub fn partitions(&self) -> impl Iterator<Item = &CatalogPartitionDef> {
        self.partitions.values()
    }

    /// Look up a crop by id across all seasons.
    pub fn crop(&self, id: &str) -> Option<&CropProfile> {
        self.partitions
            .values()
            .flat_map(|p| p.crops.iter())
            .find(|c| c.id == id)
    }
}

/// Load a catalog partition from a JSON file.
pub fn load_partition(path: &Path) -> Result<CatalogPartitionDef, CropwiseError> {
    let content = std::fs::read_to_string(path).map_err(|e| CropwiseError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_partition(&content, path)
}

/// Parse a catalog partition from a JSON string.
pub fn parse_partition(json: &str, source: &Path) -> Result<CatalogPartitionDef, CropwiseError> {
    let partition: CatalogPartitionDef =
        serde_json::from_str(json).map_err(|e| CropwiseError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_partition(&partition)?;
    tracing::info!(
        season = %partition.season,
        crops = partition.crops.len(),
        source = %source.display(),
        "loaded catalog partition"
    );
    Ok(partition)
}

/// Parse a catalog partition from a JSON string (no file path context).
pub fn parse_partition_str(json: &str) -> Result<CatalogPartitionDef, CropwiseError> {
    let partition: CatalogPartitionDef = serde_json::from_str(json).map_err(CropwiseError::Json)?;
    validate_partition(&partition)?;
    Ok(partition)
}

/// Validate that a partition is well-formed.
pub fn validate_partition(partition: &CatalogPartitionDef) -> Result<(), CropwiseError> {
    if partition.crops.is_empty() {
        return Err(CropwiseError::CatalogInvalid("crops must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for crop in &partition.crops {
        if crop.id.is_empty() {
            return Err(CropwiseError::CatalogInvalid(
                "crop id must not be empty".into(),
            ));
        }

        if !seen.insert(crop.id.as_str()) {
            return Err(CropwiseError::CatalogInvalid(format!(
                "duplicate crop id '{}'",
                crop.id
            )));
        }

        if crop.season != partition.season {
            return Err(CropwiseError::CatalogInvalid(format!(
                "crop '{}' is a {} crop but the partition is for {}",
                crop.id, crop.season, partition.season
            )));
        }

        if crop.requirements.is_empty() {
            return Err(CropwiseError::CatalogInvalid(format!(
                "crop '{}' has no requirements",
                crop.id
            )));
        }

        for (parameter, req) in &crop.requirements {
            if req.min > req.max {
                return Err(CropwiseError::CatalogInvalid(format!(
                    "crop '{}' requirement '{}' has min {} above max {}",
                    crop.id,
                    parameter.key(),
                    req.min,
                    req.max
                )));
            }
            if req.weight < Decimal::ZERO {
                return Err(CropwiseError::CatalogInvalid(format!(
                    "crop '{}' requirement '{}' has negative weight {}",
                    crop.id,
                    parameter.key(),
                    req.weight
                )));
            }
        }

        if crop.yield_per_acre < Decimal::ZERO || crop.price_per_unit < Decimal::ZERO {
            return Err(CropwiseError::CatalogInvalid(format!(
                "crop '{}' has a negative yield or price",
                crop.id
            )));
        }
    }

    Ok(())
}
