pub mod allocate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod parsing;
pub mod score;
pub mod status;

use allocate::{AllocationEntry, CatalogPrices, MarketPrices};
use catalog::Catalog;
use config::EngineConfig;
use error::CropwiseError;
use model::{Season, SoilParameter};
use rust_decimal::Decimal;
use score::outcome::ScoredCrop;
use serde::{Deserialize, Serialize};

/// Recommendations plus the automatic land split derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoPlan {
    pub recommendations: Vec<ScoredCrop>,
    pub allocation: Vec<AllocationEntry>,
}

/// Main API entry point: score every crop of a season against the soil.
///
/// The result covers the whole season, best first. Crops with equal scores
/// keep their catalog order.
pub fn compute_recommendations(
    parameters: &[SoilParameter],
    season: Season,
    catalog: &Catalog,
) -> Vec<ScoredCrop> {
    let crops = catalog.season(season);
    tracing::debug!(%season, crops = crops.len(), measurements = parameters.len(), "scoring season");
    score::rank(score::score_crops(parameters, crops))
}

/// Split `total_area` across `selection` by score, priced at catalog reference
/// prices.
pub fn compute_land_plan(
    total_area: Decimal,
    selection: &[ScoredCrop],
) -> Result<Vec<AllocationEntry>, CropwiseError> {
    compute_land_plan_with_prices(total_area, selection, &CatalogPrices)
}

/// [`compute_land_plan`] with caller-supplied market prices.
pub fn compute_land_plan_with_prices(
    total_area: Decimal,
    selection: &[ScoredCrop],
    prices: &dyn MarketPrices,
) -> Result<Vec<AllocationEntry>, CropwiseError> {
    allocate::allocate_proportional(total_area, selection, prices)
}

/// Recommend, pick crops with the configured policy, and allocate the land.
///
/// If no crop passes the policy the allocation is empty.
pub fn auto_plan(
    parameters: &[SoilParameter],
    season: Season,
    total_area: Decimal,
    catalog: &Catalog,
    config: &EngineConfig,
    prices: &dyn MarketPrices,
) -> Result<AutoPlan, CropwiseError> {
    let recommendations = compute_recommendations(parameters, season, catalog);
    let selection = score::select_top(&recommendations, &config.auto_select);
    let allocation = compute_land_plan_with_prices(total_area, &selection, prices)?;
    Ok(AutoPlan {
        recommendations,
        allocation,
    })
}
