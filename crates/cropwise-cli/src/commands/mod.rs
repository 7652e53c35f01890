pub mod catalog;
pub mod plan;
pub mod recommend;
pub mod status;

use cropwise_core::catalog::builtin::load_builtin;
use cropwise_core::catalog::schema::CatalogPartitionDef;
use cropwise_core::catalog::{load_partition, Catalog};
use cropwise_core::config::EngineConfig;
use cropwise_core::error::CropwiseError;
use cropwise_core::model::{Season, SoilSample};
use cropwise_core::parsing::{parse_sheet, ParsedSheet};
use std::path::{Path, PathBuf};

/// Read a soil sample from a JSON file or a plain-text soil sheet.
///
/// JSON input is taken as-is, so it never carries parse warnings. Sheet
/// warnings are logged by the parser and returned, not printed here.
pub fn load_input(path: &Path) -> Result<ParsedSheet, CropwiseError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let bytes = std::fs::read(path)?;
        let sample: SoilSample = serde_json::from_slice(&bytes)?;
        return Ok(ParsedSheet {
            sample,
            warnings: Vec::new(),
            skipped_lines: Vec::new(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let parsed = parse_sheet(&text)?;
    tracing::info!(
        path = %path.display(),
        parameters = parsed.sample.parameters.len(),
        warnings = parsed.warnings.len(),
        skipped = parsed.skipped_lines.len(),
        "parsed soil sheet"
    );
    Ok(parsed)
}

/// Season from the command line, or the configured default.
pub fn resolve_season(arg: Option<&str>, config: &EngineConfig) -> Result<Season, CropwiseError> {
    match arg {
        Some(s) => s.parse(),
        None => Ok(config.default_season),
    }
}

/// Built-in catalog with any custom partitions swapped in for their season.
pub fn load_catalog(custom_files: &[PathBuf]) -> Result<Catalog, CropwiseError> {
    if custom_files.is_empty() {
        return load_builtin();
    }

    let custom = custom_files
        .iter()
        .map(|path| load_partition(path))
        .collect::<Result<Vec<CatalogPartitionDef>, _>>()?;
    for partition in &custom {
        tracing::info!(season = %partition.season, name = %partition.name, "using custom catalog");
    }

    let builtin = load_builtin()?;
    let kept = builtin
        .partitions()
        .filter(|p| custom.iter().all(|c| c.season != p.season))
        .cloned()
        .collect::<Vec<_>>();

    Catalog::from_partitions(custom.into_iter().chain(kept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropwise_core::model::Parameter;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_json_sample() {
        let f = write_temp(
            ".json",
            r#"{"header": {"sample_id": "S1"},
                "parameters": [{"parameter": "ph", "value": "6.8"}]}"#,
        );
        let parsed = load_input(f.path()).unwrap();
        assert_eq!(parsed.sample.header.sample_id.as_deref(), Some("S1"));
        assert_eq!(parsed.sample.parameters[0].parameter, Parameter::Ph);
        assert_eq!(parsed.sample.parameters[0].value, dec!(6.8));
    }

    #[test]
    fn test_load_text_sheet() {
        let f = write_temp(".txt", "Sample: S2\npH    7.1\nNitrogen    300    kg/ha\n");
        let parsed = load_input(f.path()).unwrap();
        assert_eq!(parsed.sample.parameters.len(), 2);
    }

    #[test]
    fn test_load_text_sheet_returns_warnings() {
        let f = write_temp(".txt", "pH    7.1\nPotassium    n.a.\nCalcium    12\n");
        let parsed = load_input(f.path()).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].parameter, Parameter::Potassium);
        assert_eq!(parsed.skipped_lines.len(), 1);
    }

    #[test]
    fn test_resolve_season_falls_back_to_config() {
        let config = EngineConfig {
            default_season: Season::Zaid,
            ..EngineConfig::default()
        };
        assert_eq!(resolve_season(None, &config).unwrap(), Season::Zaid);
        assert_eq!(resolve_season(Some("winter"), &config).unwrap(), Season::Rabi);
        assert!(matches!(
            resolve_season(Some("spring"), &config),
            Err(CropwiseError::UnknownSeason(_))
        ));
    }

    #[test]
    fn test_custom_catalog_replaces_its_season_only() {
        let f = write_temp(
            ".json",
            r#"{
              "name": "Test rabi",
              "version": "1",
              "season": "rabi",
              "crops": [{
                "id": "oats",
                "name": "Oats",
                "growing_period": "110 days",
                "water_need": "low",
                "season": "rabi",
                "requirements": {"ph": {"min": "5.5", "max": "7.0", "weight": "1"}},
                "yield_per_acre": "10",
                "yield_unit": "quintal",
                "price_per_unit": "2000"
              }]
            }"#,
        );
        let catalog = load_catalog(&[f.path().to_path_buf()]).unwrap();
        let rabi: Vec<&str> = catalog.season(Season::Rabi).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(rabi, vec!["oats"]);
        assert!(catalog.crop("rice").is_some());
    }
}
