use crate::allocate::prices::MarketPrices;
use crate::allocate::proportional::proportional_areas;
use crate::allocate::{build_entry, ensure_valid_total, AllocationEntry};
use crate::catalog::schema::CropProfile;
use crate::error::CropwiseError;
use crate::score::outcome::ScoredCrop;
use rust_decimal::Decimal;

/// Smallest area handed to a newly added crop, pool permitting.
const MIN_INITIAL_AREA: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
/// Share of the available pool handed to a newly added crop.
const INITIAL_POOL_SHARE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

#[derive(Debug, Clone, PartialEq)]
struct PlannedCrop {
    crop: CropProfile,
    area: Decimal,
}

/// A land parcel being divided between crops by hand.
///
/// Only areas are stored. Percentages, yields and revenues are derived on
/// every call to [`LandPlan::entries`], so they always reflect the current
/// areas. Mutations that would push the allocated area past the total fail
/// and leave the plan untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LandPlan {
    total_area: Decimal,
    crops: Vec<PlannedCrop>,
}

impl LandPlan {
    /// An empty plan with the whole parcel available.
    pub fn new(total_area: Decimal) -> Result<Self, CropwiseError> {
        ensure_valid_total(total_area)?;
        Ok(Self {
            total_area,
            crops: Vec::new(),
        })
    }

    /// Seed a plan with the proportional split of `selection`.
    pub fn from_allocation(
        total_area: Decimal,
        selection: &[ScoredCrop],
    ) -> Result<Self, CropwiseError> {
        let mut plan = Self::new(total_area)?;
        let scores: Vec<u8> = selection.iter().map(|c| c.score).collect();
        for (scored, area) in selection.iter().zip(proportional_areas(total_area, &scores)?) {
            if plan.position(&scored.crop.id).is_some() {
                return Err(CropwiseError::DuplicateCrop(scored.crop.id.clone()));
            }
            plan.crops.push(PlannedCrop {
                crop: scored.crop.clone(),
                area,
            });
        }
        Ok(plan)
    }

    pub fn total_area(&self) -> Decimal {
        self.total_area
    }

    pub fn allocated_area(&self) -> Decimal {
        self.crops.iter().map(|c| c.area).sum()
    }

    /// Area not yet assigned to any crop.
    pub fn available_area(&self) -> Decimal {
        self.total_area - self.allocated_area()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn area_of(&self, crop_id: &str) -> Option<Decimal> {
        self.position(crop_id).map(|i| self.crops[i].area)
    }

    pub fn crop_ids(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|c| c.crop.id.as_str())
    }

    /// Add a crop with `min(max(0.5, 20% of available), available)` acres.
    ///
    /// Returns the area assigned.
    pub fn add_crop(&mut self, crop: &CropProfile) -> Result<Decimal, CropwiseError> {
        if self.position(&crop.id).is_some() {
            return Err(CropwiseError::DuplicateCrop(crop.id.clone()));
        }

        let available = self.available_area();
        let area = (available * INITIAL_POOL_SHARE)
            .max(MIN_INITIAL_AREA)
            .min(available);

        self.crops.push(PlannedCrop {
            crop: crop.clone(),
            area,
        });
        tracing::debug!(crop = %crop.id, %area, %available, "added crop to plan");
        Ok(area)
    }

    /// Remove a crop, returning its area to the pool. Returns the freed area.
    pub fn remove_crop(&mut self, crop_id: &str) -> Result<Decimal, CropwiseError> {
        let idx = self
            .position(crop_id)
            .ok_or_else(|| CropwiseError::UnknownCrop(crop_id.to_string()))?;
        let removed = self.crops.remove(idx);
        tracing::debug!(crop = %crop_id, area = %removed.area, "removed crop from plan");
        Ok(removed.area)
    }

    /// Change a crop's area.
    ///
    /// Fails with [`CropwiseError::CapacityExceeded`] if the increase is larger
    /// than the available pool.
    pub fn set_area(&mut self, crop_id: &str, area: Decimal) -> Result<(), CropwiseError> {
        if area < Decimal::ZERO {
            return Err(CropwiseError::InvalidArea(format!(
                "area for '{}' must not be negative (got {})",
                crop_id, area
            )));
        }

        let idx = self
            .position(crop_id)
            .ok_or_else(|| CropwiseError::UnknownCrop(crop_id.to_string()))?;

        let delta = area - self.crops[idx].area;
        let available = self.available_area();
        if delta > available {
            tracing::warn!(crop = %crop_id, %delta, %available, "rejected area change");
            return Err(CropwiseError::CapacityExceeded {
                requested: delta,
                available,
            });
        }

        self.crops[idx].area = area;
        Ok(())
    }

    /// Current allocation with all derived fields.
    pub fn entries(
        &self,
        prices: &dyn MarketPrices,
    ) -> Result<Vec<AllocationEntry>, CropwiseError> {
        self.crops
            .iter()
            .map(|c| build_entry(&c.crop, c.area, self.total_area, prices))
            .collect()
    }

    fn position(&self, crop_id: &str) -> Option<usize> {
        self.crops.iter().position(|c| c.crop.id == crop_id)
    }
}
