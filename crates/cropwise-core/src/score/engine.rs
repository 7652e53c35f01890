use crate::catalog::schema::{CropProfile, CropRequirement};
use crate::model::{Parameter, SoilParameter};
use crate::score::outcome::{Fit, ParameterScore, ScoredCrop, Suitability};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

const FULL_SCORE: Decimal = Decimal::ONE_HUNDRED;
/// Penalty per range width of shortfall below `min`.
const DEFICIT_RATE: Decimal = Decimal::ONE_HUNDRED;
/// Penalty per range width of surplus above `max`. Half the deficit rate.
const EXCESS_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Score for a crop none of whose requirements could be evaluated.
pub const NEUTRAL_SCORE: u8 = 50;

/// Score a crop against a set of measurements.
///
/// Requirements without a matching measurement are left out of the weighted
/// average entirely. If nothing can be evaluated the crop gets
/// [`NEUTRAL_SCORE`].
pub fn score_crop(parameters: &[SoilParameter], crop: &CropProfile) -> ScoredCrop {
    let measured = measurement_lookup(parameters);

    let mut total_score = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut unmatched_requirements = Vec::new();

    for (&parameter, requirement) in &crop.requirements {
        let Some(&value) = measured.get(&parameter) else {
            unmatched_requirements.push(parameter);
            continue;
        };

        let (fit, param_score) = parameter_score(value, requirement);
        total_score += param_score * requirement.weight;
        total_weight += requirement.weight;

        breakdown.push(ParameterScore {
            parameter,
            value,
            requirement: *requirement,
            fit,
            score: param_score.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        });
    }

    let score = weighted_score(total_score, total_weight);

    tracing::debug!(
        crop = %crop.id,
        score,
        evaluated = breakdown.len(),
        unmatched = unmatched_requirements.len(),
        "scored crop"
    );

    ScoredCrop {
        crop: crop.clone(),
        score,
        suitability: Suitability::from_score(score),
        breakdown,
        unmatched_requirements,
    }
}

/// Score only, without the breakdown.
pub fn score(parameters: &[SoilParameter], crop: &CropProfile) -> u8 {
    score_crop(parameters, crop).score
}

/// Score one measured value against one requirement, in `[0, 100]`.
///
/// Both bounds are inclusive. A shortfall loses the full score once it equals
/// the requirement's range width; a surplus loses it at half that rate. A
/// zero-width requirement is an exact match test.
pub fn parameter_score(value: Decimal, requirement: &CropRequirement) -> (Fit, Decimal) {
    if value >= requirement.min && value <= requirement.max {
        return (Fit::Within, FULL_SCORE);
    }

    let range = requirement.range();
    if value < requirement.min {
        let deficit = requirement.min - value;
        (Fit::Below, penalized(deficit, range, DEFICIT_RATE))
    } else {
        let excess = value - requirement.max;
        (Fit::Above, penalized(excess, range, EXCESS_RATE))
    }
}

/// A zero-width range (or an inverted one) has no tolerance band.
fn penalized(distance: Decimal, range: Decimal, rate: Decimal) -> Decimal {
    if range <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    distance
        .checked_div(range)
        .and_then(|ratio| ratio.checked_mul(rate))
        .map(|penalty| (FULL_SCORE - penalty).max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

fn weighted_score(total_score: Decimal, total_weight: Decimal) -> u8 {
    if total_weight <= Decimal::ZERO {
        return NEUTRAL_SCORE;
    }
    (total_score / total_weight)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, FULL_SCORE)
        .to_u8()
        .unwrap_or(NEUTRAL_SCORE)
}

/// Later measurements of the same parameter replace earlier ones.
fn measurement_lookup(parameters: &[SoilParameter]) -> HashMap<Parameter, Decimal> {
    parameters.iter().map(|p| (p.parameter, p.value)).collect()
}
