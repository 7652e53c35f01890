use cropwise_core::catalog::builtin;
use cropwise_core::catalog::schema::CatalogPartitionDef;
use cropwise_core::error::CropwiseError;
use cropwise_core::model::{Parameter, Season};
use rust_decimal::Decimal;
use std::path::Path;

pub fn list() -> Result<(), CropwiseError> {
    println!("Built-in season catalogs:\n");
    for season in Season::ALL {
        let partition = builtin::load_season(season)?;
        println!(
            "  {:<8} {} (v{}), {} crops",
            season.to_string().to_lowercase(),
            partition.name,
            partition.version,
            partition.crops.len()
        );
        if let Some(ref desc) = partition.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(season: &str) -> Result<(), CropwiseError> {
    let season: Season = season.parse()?;
    let partition = builtin::load_season(season)?;

    println!("{} (version {})\n", partition.name, partition.version);
    if let Some(ref desc) = partition.description {
        println!("{}\n", desc);
    }
    println!(
        "{} season ({}), {} crops:\n",
        season,
        season.months(),
        partition.crops.len()
    );

    for crop in &partition.crops {
        println!("  {} [{}]", crop.name, crop.id);
        if !crop.description.is_empty() {
            println!("    {}", crop.description);
        }
        println!(
            "    Growing period: {}, water need: {}",
            crop.growing_period, crop.water_need
        );
        println!(
            "    Yield: {} {}/acre at {} per {}",
            crop.yield_per_acre, crop.yield_unit, crop.price_per_unit, crop.yield_unit
        );

        let max_name_len = crop
            .requirements
            .keys()
            .map(|p| p.to_string().len())
            .max()
            .unwrap_or(10);

        println!(
            "    {:<width$}  {:<14}  {:<6}  Unit",
            "Parameter",
            "Range",
            "Weight",
            width = max_name_len
        );
        for (parameter, req) in &crop.requirements {
            println!(
                "    {:<width$}  {:<14}  {:<6}  {}",
                parameter.to_string(),
                format!("{}-{}", req.min, req.max),
                req.weight,
                parameter.default_unit(),
                width = max_name_len
            );
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), CropwiseError> {
    let keys: Vec<&str> = Parameter::ALL.iter().map(|p| p.key()).collect();
    print!(
        r#"JSON Catalog Schema
===================

A catalog file holds the crops of one season. When you run
`cropwise recommend --catalog FILE`, it replaces the built-in catalog for
that season.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  season        (string, required)  "kharif", "rabi" or "zaid"
  crops         (array, required)   Crop profiles (see below). Their order
                                    decides ties between equal scores.

Each crop in the "crops" array:
  id            (string, required)  Unique id, used by `plan --crop`
  name          (string, required)  Display name
  description   (string, optional)  Short description
  growing_period (string, required) e.g. "120-150 days"
  water_need    (string, required)  "low", "medium" or "high"
  season        (string, required)  Must equal the catalog's season
  requirements  (object, required)  Map of parameter -> {{min, max, weight}}.
                                    min <= max, weight >= 0.
                                    Parameters: {keys}
  yield_per_acre (string, required) Expected yield in yield_unit
  yield_unit    (string, required)  e.g. "quintal"
  price_per_unit (string, required) Reference market price per yield_unit

Example:
{{
  "name": "Rabi crops, dry north",
  "version": "1.0",
  "season": "rabi",
  "crops": [
    {{
      "id": "wheat",
      "name": "Wheat",
      "growing_period": "120-150 days",
      "water_need": "medium",
      "season": "rabi",
      "requirements": {{
        "ph": {{ "min": "6.0", "max": "7.5", "weight": "0.3" }},
        "nitrogen": {{ "min": "280", "max": "560", "weight": "0.4" }},
        "moisture": {{ "min": "20", "max": "40", "weight": "0.3" }}
      }},
      "yield_per_acre": "18",
      "yield_unit": "quintal",
      "price_per_unit": "2275"
    }}
  ]
}}

Note: numbers must be quoted strings, not bare numbers, to preserve exact
decimal precision (e.g., "0.25" not 0.25).
"#,
        keys = keys.join(", ")
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CropwiseError> {
    let partition = cropwise_core::catalog::load_partition(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        partition.name, partition.version
    );
    println!("  Season: {}", partition.season);
    println!("  Crops: {}", partition.crops.len());

    let warnings = lint(&partition);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

/// Checks that don't make a catalog invalid but usually point at a mistake.
fn lint(partition: &CatalogPartitionDef) -> Vec<String> {
    let mut warnings = Vec::new();
    for crop in &partition.crops {
        let weight_sum: Decimal = crop.requirements.values().map(|r| r.weight).sum();
        if weight_sum != Decimal::ONE {
            warnings.push(format!(
                "crop '{}' requirement weights sum to {}, not 1",
                crop.id, weight_sum
            ));
        }
        if crop.requirements.values().all(|r| r.weight.is_zero()) {
            warnings.push(format!(
                "crop '{}' has only zero weights and will always score 50",
                crop.id
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_lint_clean() {
        for season in Season::ALL {
            let partition = builtin::load_season(season).unwrap();
            assert!(lint(&partition).is_empty(), "{season}: {:?}", lint(&partition));
        }
    }

    #[test]
    fn test_lint_flags_unbalanced_weights() {
        let mut partition = builtin::load_season(Season::Zaid).unwrap();
        for req in partition.crops[0].requirements.values_mut() {
            req.weight = Decimal::ZERO;
        }
        let warnings = lint(&partition);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("always score 50"));
    }
}
