use crate::catalog::schema::CropProfile;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Source of market prices used for revenue estimates.
pub trait MarketPrices {
    /// Price per unit of the crop's `yield_unit`.
    fn price_per_unit(&self, crop: &CropProfile) -> Decimal;
}

/// Uses the reference price stored on each catalog profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPrices;

impl MarketPrices for CatalogPrices {
    fn price_per_unit(&self, crop: &CropProfile) -> Decimal {
        crop.price_per_unit
    }
}

/// Per-crop price overrides, falling back to the catalog reference price.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, crop_id: impl Into<String>, price: Decimal) -> Self {
        self.set(crop_id, price);
        self
    }

    pub fn set(&mut self, crop_id: impl Into<String>, price: Decimal) {
        self.prices.insert(crop_id.into(), price);
    }

    pub fn get(&self, crop_id: &str) -> Option<Decimal> {
        self.prices.get(crop_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl MarketPrices for PriceTable {
    fn price_per_unit(&self, crop: &CropProfile) -> Decimal {
        self.get(&crop.id).unwrap_or(crop.price_per_unit)
    }
}
