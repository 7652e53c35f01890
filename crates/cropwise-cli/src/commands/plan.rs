use cropwise_core::allocate::PriceTable;
use cropwise_core::error::CropwiseError;
use cropwise_core::score::ScoredCrop;
use cropwise_core::{auto_plan, compute_land_plan_with_prices, compute_recommendations, AutoPlan};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::output;

pub struct PlanArgs {
    pub input_file: PathBuf,
    pub area: String,
    pub season: Option<String>,
    pub crops: Vec<String>,
    pub prices: Vec<String>,
    pub catalogs: Vec<PathBuf>,
}

pub fn run(config: &AppConfig, args: PlanArgs, output_format: &str) -> Result<(), CropwiseError> {
    let engine = config.engine()?;
    let season = super::resolve_season(args.season.as_deref(), &engine)?;
    let total_area = parse_area(&args.area)?;
    let prices = parse_prices(&args.prices)?;
    let catalog = super::load_catalog(&args.catalogs)?;
    let parsed = super::load_input(&args.input_file)?;
    let parameters = &parsed.sample.parameters;

    let plan = if args.crops.is_empty() {
        auto_plan(parameters, season, total_area, &catalog, &engine, &prices)?
    } else {
        let recommendations = compute_recommendations(parameters, season, &catalog);
        let selection = pick_crops(&recommendations, &args.crops)?;
        let allocation = compute_land_plan_with_prices(total_area, &selection, &prices)?;
        AutoPlan {
            recommendations,
            allocation,
        }
    };

    match output_format {
        "json" => output::json::print(&plan)?,
        _ => output::table::print_plan(season, total_area, &plan),
    }

    Ok(())
}

fn parse_area(s: &str) -> Result<Decimal, CropwiseError> {
    Decimal::from_str(s.trim())
        .map_err(|e| CropwiseError::InvalidArea(format!("'{}' is not a number: {}", s, e)))
}

/// Parse `id=price` overrides.
fn parse_prices(specs: &[String]) -> Result<PriceTable, CropwiseError> {
    let mut table = PriceTable::new();
    for spec in specs {
        let (id, price) = spec.split_once('=').ok_or_else(|| {
            CropwiseError::ParseError(format!("price override '{}' must be ID=PRICE", spec))
        })?;
        let price = Decimal::from_str(price.trim()).map_err(|e| {
            CropwiseError::ParseError(format!("invalid price for '{}': {}", id.trim(), e))
        })?;
        table.set(id.trim(), price);
    }
    Ok(table)
}

/// Explicitly chosen crops, in the order given, with their scores.
fn pick_crops(
    recommendations: &[ScoredCrop],
    ids: &[String],
) -> Result<Vec<ScoredCrop>, CropwiseError> {
    let mut selection: Vec<ScoredCrop> = Vec::with_capacity(ids.len());
    for id in ids {
        if selection.iter().any(|c| c.id() == id) {
            return Err(CropwiseError::DuplicateCrop(id.clone()));
        }
        let scored = recommendations
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| CropwiseError::UnknownCrop(id.clone()))?;
        selection.push(scored.clone());
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropwise_core::catalog::builtin::load_builtin;
    use cropwise_core::model::Season;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_prices() {
        let table = parse_prices(&["wheat=2400".into(), " rice = 2300.5".into()]).unwrap();
        assert_eq!(table.get("wheat"), Some(dec!(2400)));
        assert_eq!(table.get("rice"), Some(dec!(2300.5)));
        assert!(parse_prices(&["wheat".into()]).is_err());
        assert!(parse_prices(&["wheat=cheap".into()]).is_err());
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("12.5").unwrap(), dec!(12.5));
        assert!(matches!(
            parse_area("ten"),
            Err(CropwiseError::InvalidArea(_))
        ));
    }

    #[test]
    fn test_pick_crops_keeps_given_order() {
        let catalog = load_builtin().unwrap();
        let recs = compute_recommendations(&[], Season::Rabi, &catalog);
        let picked = pick_crops(&recs, &["potato".into(), "wheat".into()]).unwrap();
        let ids: Vec<&str> = picked.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["potato", "wheat"]);

        assert!(matches!(
            pick_crops(&recs, &["rice".into()]),
            Err(CropwiseError::UnknownCrop(_))
        ));
        assert!(matches!(
            pick_crops(&recs, &["wheat".into(), "wheat".into()]),
            Err(CropwiseError::DuplicateCrop(_))
        ));
    }
}
