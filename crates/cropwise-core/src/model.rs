use crate::error::CropwiseError;
use crate::status::{self, Status};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Soil parameters understood by the engine.
///
/// Shared by measurements and crop requirements, so joining the two never
/// goes through free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicCarbon,
    ElectricalConductivity,
    Moisture,
    Sulfur,
    Zinc,
    Iron,
    Manganese,
    Boron,
}

impl Parameter {
    pub const ALL: [Parameter; 12] = [
        Parameter::Ph,
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::OrganicCarbon,
        Parameter::ElectricalConductivity,
        Parameter::Moisture,
        Parameter::Sulfur,
        Parameter::Zinc,
        Parameter::Iron,
        Parameter::Manganese,
        Parameter::Boron,
    ];

    /// Canonical key, as used in catalog files.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Nitrogen => "nitrogen",
            Parameter::Phosphorus => "phosphorus",
            Parameter::Potassium => "potassium",
            Parameter::OrganicCarbon => "organic_carbon",
            Parameter::ElectricalConductivity => "electrical_conductivity",
            Parameter::Moisture => "moisture",
            Parameter::Sulfur => "sulfur",
            Parameter::Zinc => "zinc",
            Parameter::Iron => "iron",
            Parameter::Manganese => "manganese",
            Parameter::Boron => "boron",
        }
    }

    pub fn default_unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Nitrogen | Parameter::Phosphorus | Parameter::Potassium => "kg/ha",
            Parameter::OrganicCarbon | Parameter::Moisture => "%",
            Parameter::ElectricalConductivity => "dS/m",
            Parameter::Sulfur
            | Parameter::Zinc
            | Parameter::Iron
            | Parameter::Manganese
            | Parameter::Boron => "ppm",
        }
    }

    /// Healthy range used when a measurement does not carry its own.
    pub fn reference_range(&self) -> OptimalRange {
        let (min, max) = match self {
            Parameter::Ph => (Decimal::new(60, 1), Decimal::new(75, 1)),
            Parameter::Nitrogen => (Decimal::new(280, 0), Decimal::new(560, 0)),
            Parameter::Phosphorus => (Decimal::new(10, 0), Decimal::new(25, 0)),
            Parameter::Potassium => (Decimal::new(110, 0), Decimal::new(280, 0)),
            Parameter::OrganicCarbon => (Decimal::new(50, 2), Decimal::new(75, 2)),
            Parameter::ElectricalConductivity => (Decimal::new(1, 1), Decimal::new(10, 1)),
            Parameter::Moisture => (Decimal::new(20, 0), Decimal::new(40, 0)),
            Parameter::Sulfur => (Decimal::new(10, 0), Decimal::new(20, 0)),
            Parameter::Zinc => (Decimal::new(6, 1), Decimal::new(30, 1)),
            Parameter::Iron => (Decimal::new(45, 1), Decimal::new(100, 1)),
            Parameter::Manganese => (Decimal::new(2, 0), Decimal::new(10, 0)),
            Parameter::Boron => (Decimal::new(5, 1), Decimal::new(20, 1)),
        };
        OptimalRange { min, max }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Ph => "pH",
            Parameter::Nitrogen => "Nitrogen",
            Parameter::Phosphorus => "Phosphorus",
            Parameter::Potassium => "Potassium",
            Parameter::OrganicCarbon => "Organic Carbon",
            Parameter::ElectricalConductivity => "Electrical Conductivity",
            Parameter::Moisture => "Moisture",
            Parameter::Sulfur => "Sulfur",
            Parameter::Zinc => "Zinc",
            Parameter::Iron => "Iron",
            Parameter::Manganese => "Manganese",
            Parameter::Boron => "Boron",
        };
        write!(f, "{name}")
    }
}

/// Inclusive `[min, max]` interval considered healthy for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl OptimalRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for OptimalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A single measured soil parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilParameter {
    pub parameter: Parameter,
    pub value: Decimal,
    /// Falls back to the parameter's default unit when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Falls back to the parameter's reference range when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_range: Option<OptimalRange>,
}

impl SoilParameter {
    pub fn new(parameter: Parameter, value: Decimal) -> Self {
        Self {
            parameter,
            value,
            unit: None,
            optimal_range: None,
        }
    }

    pub fn with_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.optimal_range = Some(OptimalRange::new(min, max));
        self
    }

    pub fn unit(&self) -> &str {
        self.unit
            .as_deref()
            .unwrap_or_else(|| self.parameter.default_unit())
    }

    pub fn optimal_range(&self) -> OptimalRange {
        self.optimal_range
            .unwrap_or_else(|| self.parameter.reference_range())
    }

    /// Health tag, derived from the current value on every call.
    pub fn status(&self) -> Status {
        let range = self.optimal_range();
        status::classify(self.value, range.min, range.max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleHeader {
    #[serde(default)]
    pub sample_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    #[serde(default)]
    pub header: SampleHeader,
    pub parameters: Vec<SoilParameter>,
}

/// Cropping seasons. Each one owns a partition of the crop catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn from_str_loose(s: &str) -> Option<Season> {
        match s.trim().to_lowercase().as_str() {
            "kharif" | "monsoon" => Some(Season::Kharif),
            "rabi" | "winter" => Some(Season::Rabi),
            "zaid" | "zayed" | "summer" => Some(Season::Zaid),
            _ => None,
        }
    }

    pub fn months(&self) -> &'static str {
        match self {
            Season::Kharif => "June-October",
            Season::Rabi => "October-March",
            Season::Zaid => "March-June",
        }
    }
}

impl FromStr for Season {
    type Err = CropwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::from_str_loose(s).ok_or_else(|| CropwiseError::UnknownSeason(s.to_string()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif"),
            Season::Rabi => write!(f, "Rabi"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

impl fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterNeed::Low => write!(f, "Low"),
            WaterNeed::Medium => write!(f, "Medium"),
            WaterNeed::High => write!(f, "High"),
        }
    }
}
