use crate::allocate::prices::MarketPrices;
use crate::allocate::{build_entry, ensure_valid_total, AllocationEntry};
use crate::error::CropwiseError;
use crate::score::outcome::ScoredCrop;
use rust_decimal::{Decimal, RoundingStrategy};

/// Split `total_area` across the selection in proportion to score.
///
/// Every crop but the last gets its share rounded to one decimal, capped at
/// what is still unallocated. The last crop takes the exact remainder, so the
/// areas always sum to `total_area`.
pub fn allocate_proportional(
    total_area: Decimal,
    selection: &[ScoredCrop],
    prices: &dyn MarketPrices,
) -> Result<Vec<AllocationEntry>, CropwiseError> {
    ensure_valid_total(total_area)?;

    if selection.is_empty() {
        tracing::debug!("empty selection, nothing to allocate");
        return Ok(Vec::new());
    }

    let scores: Vec<u8> = selection.iter().map(|c| c.score).collect();
    let areas = proportional_areas(total_area, &scores)?;

    selection
        .iter()
        .zip(areas)
        .map(|(scored, area)| {
            tracing::debug!(crop = %scored.crop.id, score = scored.score, %area, "allocated area");
            build_entry(&scored.crop, area, total_area, prices)
        })
        .collect()
}

/// Area per score, in input order. See [`allocate_proportional`].
///
/// If every score is zero the area is split evenly instead. Fails with
/// [`CropwiseError::InvalidArea`] if a share does not fit in a `Decimal`.
pub fn proportional_areas(total_area: Decimal, scores: &[u8]) -> Result<Vec<Decimal>, CropwiseError> {
    let Some(last) = scores.len().checked_sub(1) else {
        return Ok(Vec::new());
    };

    let score_sum: Decimal = scores.iter().map(|&s| Decimal::from(s)).sum();
    let count = Decimal::from(scores.len());
    let mut remaining = total_area;
    let mut areas = Vec::with_capacity(scores.len());

    for (i, &score) in scores.iter().enumerate() {
        let area = if i == last {
            remaining
        } else {
            let share = if score_sum.is_zero() {
                total_area.checked_div(count)
            } else {
                total_area
                    .checked_mul(Decimal::from(score))
                    .and_then(|weighted| weighted.checked_div(score_sum))
            }
            .ok_or_else(|| {
                CropwiseError::InvalidArea(format!(
                    "total area {} is too large to split",
                    total_area
                ))
            })?;
            share
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                .min(remaining)
        };
        remaining -= area;
        areas.push(area);
    }

    Ok(areas)
}
