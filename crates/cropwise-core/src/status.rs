use crate::model::SoilParameter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of a measured parameter relative to its optimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Low,
    Deficient,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Optimal => write!(f, "Optimal"),
            Status::Low => write!(f, "Low"),
            Status::Deficient => write!(f, "Deficient"),
        }
    }
}

/// Fraction of `min` below which a low reading counts as deficient.
const LOWER_TOLERANCE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);
/// Multiple of `max` above which a high reading counts as deficient.
const UPPER_TOLERANCE: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Classify a value against an inclusive optimal range.
///
/// Readings within 30% outside the range are `Low`; anything further out is
/// `Deficient`. The 30% band is measured relative to the bound itself
/// (`min * 0.7`, `max * 1.3`), with both band edges inclusive.
pub fn classify(value: Decimal, optimal_min: Decimal, optimal_max: Decimal) -> Status {
    if value >= optimal_min && value <= optimal_max {
        return Status::Optimal;
    }

    if value < optimal_min {
        if value >= optimal_min * LOWER_TOLERANCE {
            Status::Low
        } else {
            Status::Deficient
        }
    } else if value <= optimal_max * UPPER_TOLERANCE {
        Status::Low
    } else {
        Status::Deficient
    }
}

/// Per-status counts over a set of measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub optimal: usize,
    pub low: usize,
    pub deficient: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.optimal + self.low + self.deficient
    }
}

pub fn summarize(parameters: &[SoilParameter]) -> StatusSummary {
    parameters
        .iter()
        .fold(StatusSummary::default(), |mut acc, p| {
            match p.status() {
                Status::Optimal => acc.optimal += 1,
                Status::Low => acc.low += 1,
                Status::Deficient => acc.deficient += 1,
            }
            acc
        })
}
