//! Shared domain types used across modules
//!
//! Crop families and soil properties are closed sets, so they are modeled
//! as enums rather than string-keyed maps.

use serde::{Deserialize, Serialize};

/// Botanical family of a crop, used to decide rotation compatibility.
///
/// Two crops from the same family should not be planted in succession on
/// the same land.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CropFamily {
    /// Grasses: wheat, maize, rice, barley
    Poaceae,
    /// Legumes: soybean, peanut, lentil, chickpea
    Fabaceae,
    /// Nightshades: potato, tomato
    Solanaceae,
    /// Spurges: cassava
    Euphorbiaceae,
    /// Yams
    Dioscoreaceae,
    /// Umbellifers: carrot
    Apiaceae,
    /// Alliums: onion
    Amaryllidaceae,
    /// Brassicas: cabbage, mustard
    Brassicaceae,
    /// Composites: sunflower
    Asteraceae,
    /// Mallows: cotton
    Malvaceae,
}

impl CropFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropFamily::Poaceae => "Poaceae",
            CropFamily::Fabaceae => "Fabaceae",
            CropFamily::Solanaceae => "Solanaceae",
            CropFamily::Euphorbiaceae => "Euphorbiaceae",
            CropFamily::Dioscoreaceae => "Dioscoreaceae",
            CropFamily::Apiaceae => "Apiaceae",
            CropFamily::Amaryllidaceae => "Amaryllidaceae",
            CropFamily::Brassicaceae => "Brassicaceae",
            CropFamily::Asteraceae => "Asteraceae",
            CropFamily::Malvaceae => "Malvaceae",
        }
    }
}

impl std::fmt::Display for CropFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly water moves through a soil.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Drainage {
    Fast,
    Slow,
    Moderate,
    Good,
    Variable,
}

impl std::fmt::Display for Drainage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Drainage::Fast => "fast",
            Drainage::Slow => "slow",
            Drainage::Moderate => "moderate",
            Drainage::Good => "good",
            Drainage::Variable => "variable",
        };
        f.write_str(s)
    }
}

/// Inherent nutrient status of a soil.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Fertility {
    Low,
    High,
}

impl std::fmt::Display for Fertility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Fertility::Low => "low",
            Fertility::High => "high",
        };
        f.write_str(s)
    }
}

/// Coarse pH classification, recorded only where it matters (e.g. chalky
/// soils are alkaline).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoilPh {
    Acidic,
    Neutral,
    Alkaline,
}

impl std::fmt::Display for SoilPh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SoilPh::Acidic => "acidic",
            SoilPh::Neutral => "neutral",
            SoilPh::Alkaline => "alkaline",
        };
        f.write_str(s)
    }
}

/// A crop known to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub family: CropFamily,
    /// Soil type names this crop grows well in.
    pub recommended_soils: Vec<String>,
}

/// A soil type and its agronomic properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Soil {
    pub soil_type: String,
    pub drainage: Drainage,
    pub fertility: Fertility,
    /// High organic-matter soils (peat).
    #[serde(default)]
    pub organic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<SoilPh>,
}

/// A modern farming technique and the soils it suits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    pub description: String,
    /// Soil type names, or the sentinel "All" for every soil.
    pub suitable_soils: Vec<String>,
}

/// A submission about to be persisted.
///
/// Crop and soil names are free-text copies of catalog names at submission
/// time, not foreign keys: later catalog edits never affect stored entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub farmland_size: f64,
    pub previous_crop: String,
    pub current_crop: String,
    pub soil_type: String,
    pub recommendation: String,
    pub fertilizer: String,
    /// Technique names joined with ", ".
    pub techniques: String,
}

/// A persisted submission, as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub farmland_size: f64,
    pub previous_crop: String,
    pub current_crop: String,
    pub soil_type: String,
    pub recommendation: String,
    pub fertilizer: String,
    pub techniques: String,
}
