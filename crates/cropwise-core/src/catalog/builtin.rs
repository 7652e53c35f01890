use crate::catalog::schema::CatalogPartitionDef;
use crate::catalog::{parse_partition, Catalog};
use crate::error::CropwiseError;
use crate::model::Season;
use std::path::Path;

const KHARIF_JSON: &str = include_str!("../../../../catalogs/kharif.json");
const RABI_JSON: &str = include_str!("../../../../catalogs/rabi.json");
const ZAID_JSON: &str = include_str!("../../../../catalogs/zaid.json");

/// Load the built-in partition for a season.
pub fn load_season(season: Season) -> Result<CatalogPartitionDef, CropwiseError> {
    let (json, source) = match season {
        Season::Kharif => (KHARIF_JSON, "builtin:kharif.json"),
        Season::Rabi => (RABI_JSON, "builtin:rabi.json"),
        Season::Zaid => (ZAID_JSON, "builtin:zaid.json"),
    };
    parse_partition(json, Path::new(source))
}

/// Load the built-in catalog covering every season.
pub fn load_builtin() -> Result<Catalog, CropwiseError> {
    let partitions = Season::ALL
        .iter()
        .map(|&season| load_season(season))
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::from_partitions(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_season() {
        let catalog = load_builtin().unwrap();
        for season in Season::ALL {
            let crops = catalog.season(season);
            assert!(!crops.is_empty(), "{season} has no crops");
            assert!(crops.iter().all(|c| c.season == season));
        }
    }

    #[test]
    fn test_builtin_crop_ids_unique_across_seasons() {
        let catalog = load_builtin().unwrap();
        let mut ids: Vec<&str> = catalog
            .partitions()
            .flat_map(|p| p.crops.iter().map(|c| c.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_builtin_rice_profile() {
        let catalog = load_builtin().unwrap();
        let rice = catalog.crop("rice").unwrap();
        assert_eq!(rice.season, Season::Kharif);
        assert_eq!(catalog.season(Season::Kharif)[0].id, "rice");
    }
}
