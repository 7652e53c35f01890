pub mod plan;
pub mod prices;
pub mod proportional;

pub use plan::LandPlan;
pub use prices::{CatalogPrices, MarketPrices, PriceTable};
pub use proportional::{allocate_proportional, proportional_areas};

use crate::catalog::schema::CropProfile;
use crate::error::CropwiseError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Area and derived estimates assigned to one crop within a land plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub crop_id: String,
    pub crop_name: String,
    pub area_acres: Decimal,
    pub percentage_of_total: Decimal,
    pub estimated_yield: Decimal,
    pub yield_unit: String,
    pub estimated_revenue: Decimal,
}

/// Compute all derived fields for one crop's area in a single pass.
///
/// Fails with [`CropwiseError::InvalidArea`] if a product does not fit in a
/// `Decimal`.
pub fn build_entry(
    crop: &CropProfile,
    area: Decimal,
    total_area: Decimal,
    prices: &dyn MarketPrices,
) -> Result<AllocationEntry, CropwiseError> {
    let percentage_of_total = if total_area.is_zero() {
        Decimal::ZERO
    } else {
        area.checked_div(total_area)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow(&crop.id, "percentage"))?
    };
    let estimated_yield = area
        .checked_mul(crop.yield_per_acre)
        .ok_or_else(|| overflow(&crop.id, "yield"))?;
    let estimated_revenue = estimated_yield
        .checked_mul(prices.price_per_unit(crop))
        .ok_or_else(|| overflow(&crop.id, "revenue"))?;

    Ok(AllocationEntry {
        crop_id: crop.id.clone(),
        crop_name: crop.name.clone(),
        area_acres: area,
        percentage_of_total,
        estimated_yield,
        yield_unit: crop.yield_unit.clone(),
        estimated_revenue,
    })
}

fn overflow(crop_id: &str, field: &str) -> CropwiseError {
    CropwiseError::InvalidArea(format!(
        "{} for '{}' is out of range for this area",
        field, crop_id
    ))
}

/// Sum of allocated areas.
pub fn total_allocated(entries: &[AllocationEntry]) -> Decimal {
    entries.iter().map(|e| e.area_acres).sum()
}

fn ensure_valid_total(total_area: Decimal) -> Result<(), CropwiseError> {
    if total_area < Decimal::ZERO {
        return Err(CropwiseError::InvalidArea(format!(
            "total area must not be negative (got {})",
            total_area
        )));
    }
    Ok(())
}
