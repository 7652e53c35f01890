use crate::error::CropwiseError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a measured value from a soil sheet.
///
/// Handles formats like:
/// - "6.5" -> Some(6.5)
/// - "0,45" -> Some(0.45) (decimal comma)
/// - "", "-", "*", "n.a.", "N/A", "nd" -> None (not measured)
pub fn parse_value(s: &str) -> Result<Option<Decimal>, CropwiseError> {
    let s = s.trim();

    if is_missing_marker(s) {
        return Ok(None);
    }

    parse_decimal(s).map(Some)
}

fn is_missing_marker(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "" | "*" | "-" | "—" | "n.a." | "na" | "n/a" | "nd" | "not tested"
    )
}

fn parse_decimal(s: &str) -> Result<Decimal, CropwiseError> {
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|e| CropwiseError::ParseError(format!("invalid number '{}': {}", s, e)))
}
