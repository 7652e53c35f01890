use crate::catalog::schema::{CropProfile, CropRequirement};
use crate::model::Parameter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete label derived from a crop's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Suitability {
    /// Thresholds are checked from the top down.
    pub fn from_score(score: u8) -> Suitability {
        if score >= 85 {
            Suitability::Excellent
        } else if score >= 70 {
            Suitability::Good
        } else if score >= 50 {
            Suitability::Fair
        } else {
            Suitability::Poor
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suitability::Excellent => write!(f, "Excellent"),
            Suitability::Good => write!(f, "Good"),
            Suitability::Fair => write!(f, "Fair"),
            Suitability::Poor => write!(f, "Poor"),
        }
    }
}

/// Where a measured value sits relative to a requirement's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Within,
    Below,
    Above,
}

/// Contribution of one measured parameter to a crop's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterScore {
    pub parameter: Parameter,
    /// Measured value.
    pub value: Decimal,
    pub requirement: CropRequirement,
    pub fit: Fit,
    /// Parameter score in `[0, 100]`, rounded to two decimals.
    pub score: Decimal,
}

impl ParameterScore {
    /// Human-readable explanation of the parameter score.
    pub fn reason(&self) -> String {
        let req = &self.requirement;
        match self.fit {
            Fit::Within => format!(
                "{}: {} within {}-{} -> {}",
                self.parameter, self.value, req.min, req.max, self.score
            ),
            Fit::Below => format!(
                "{}: {} below {} by {} -> {}",
                self.parameter,
                self.value,
                req.min,
                req.min - self.value,
                self.score
            ),
            Fit::Above => format!(
                "{}: {} above {} by {} -> {}",
                self.parameter,
                self.value,
                req.max,
                self.value - req.max,
                self.score
            ),
        }
    }
}

/// A crop profile evaluated against one set of measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop: CropProfile,
    /// Weighted score in `[0, 100]`.
    pub score: u8,
    pub suitability: Suitability,
    /// Per-parameter contributions, in requirement order.
    pub breakdown: Vec<ParameterScore>,
    /// Requirements that had no matching measurement.
    pub unmatched_requirements: Vec<Parameter>,
}

impl ScoredCrop {
    pub fn id(&self) -> &str {
        &self.crop.id
    }
}
