pub mod engine;
pub mod outcome;
pub mod rank;

pub use engine::{score, score_crop};
pub use outcome::{Fit, ParameterScore, ScoredCrop, Suitability};
pub use rank::{rank, select_top};

use crate::catalog::schema::CropProfile;
use crate::model::SoilParameter;

/// Score every crop, keeping the input order.
pub fn score_crops(parameters: &[SoilParameter], crops: &[CropProfile]) -> Vec<ScoredCrop> {
    crops.iter().map(|crop| score_crop(parameters, crop)).collect()
}
