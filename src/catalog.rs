//! Reference catalog of crops, soils and farming techniques
//!
//! The catalog is static data: built once, read everywhere. A built-in
//! table set covers the common crops; a TOML file with the same shape can
//! replace it via configuration.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::types::{Crop, CropFamily, Drainage, Fertility, Soil, SoilPh, Technique};

/// Sentinel soil name meaning "applies to all soils".
pub const ALL_SOILS: &str = "All";

/// Process-wide default catalog.
pub static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Immutable reference tables plus a derived crop-name index.
#[derive(Debug, Clone)]
pub struct Catalog {
    crops: Vec<Crop>,
    soils: Vec<Soil>,
    techniques: Vec<Technique>,
    /// Lower-cased crop name -> family, built once at load.
    families: HashMap<String, CropFamily>,
}

/// On-disk catalog shape (TOML).
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    crops: Vec<Crop>,
    #[serde(default)]
    soils: Vec<Soil>,
    #[serde(default)]
    techniques: Vec<Technique>,
}

impl Catalog {
    fn new(crops: Vec<Crop>, soils: Vec<Soil>, techniques: Vec<Technique>) -> Self {
        let families = crops
            .iter()
            .map(|c| (c.name.to_lowercase(), c.family))
            .collect();
        Self { crops, soils, techniques, families }
    }

    /// The built-in reference tables.
    pub fn builtin() -> Self {
        Self::new(builtin_crops(), builtin_soils(), builtin_techniques())
    }

    /// Load a catalog from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents).context("Invalid catalog TOML")?;
        if file.crops.is_empty() {
            bail!("Catalog defines no crops");
        }
        Ok(Self::new(file.crops, file.soils, file.techniques))
    }

    /// All crops, in table order.
    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    /// All soils, in table order.
    pub fn soils(&self) -> &[Soil] {
        &self.soils
    }

    /// All techniques, in table order.
    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    /// Family of a crop by name, case-insensitive. Unknown names are `None`.
    pub fn family_of(&self, crop_name: &str) -> Option<CropFamily> {
        self.families.get(&crop_name.to_lowercase()).copied()
    }

    /// Find a crop by name, case-insensitive.
    pub fn find_crop(&self, name: &str) -> Option<&Crop> {
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a soil by type name, case-insensitive.
    pub fn find_soil(&self, soil_type: &str) -> Option<&Soil> {
        self.soils
            .iter()
            .find(|s| s.soil_type.eq_ignore_ascii_case(soil_type))
    }

    /// Find a technique by name, case-insensitive.
    pub fn find_technique(&self, name: &str) -> Option<&Technique> {
        self.techniques
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

fn crop(name: &str, family: CropFamily, soils: &[&str]) -> Crop {
    Crop {
        name: name.to_string(),
        family,
        recommended_soils: soils.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_crops() -> Vec<Crop> {
    use CropFamily::*;
    vec![
        crop("Wheat", Poaceae, &["Loamy", "Clay"]),
        crop("Maize", Poaceae, &["Loamy", "Sandy"]),
        crop("Rice", Poaceae, &["Clay", "Silty"]),
        crop("Barley", Poaceae, &["Loamy", "Clay"]),
        crop("Soybean", Fabaceae, &["Loamy", "Sandy"]),
        crop("Peanut", Fabaceae, &["Sandy", "Loamy"]),
        crop("Lentil", Fabaceae, &["Loamy", "Sandy"]),
        crop("Chickpea", Fabaceae, &["Loamy", "Sandy"]),
        crop("Potato", Solanaceae, &["Sandy", "Loamy"]),
        crop("Cassava", Euphorbiaceae, &["Sandy", "Loamy"]),
        crop("Yam", Dioscoreaceae, &["Sandy", "Loamy"]),
        crop("Carrot", Apiaceae, &["Sandy", "Loamy"]),
        crop("Tomato", Solanaceae, &["Loamy", "Sandy"]),
        crop("Onion", Amaryllidaceae, &["Sandy", "Loamy"]),
        crop("Cabbage", Brassicaceae, &["Loamy", "Clay"]),
        crop("Mustard", Brassicaceae, &["Loamy", "Clay"]),
        crop("Sunflower", Asteraceae, &["Loamy", "Sandy"]),
        crop("Cotton", Malvaceae, &["Sandy", "Loamy"]),
    ]
}

fn builtin_soils() -> Vec<Soil> {
    fn soil(
        soil_type: &str,
        drainage: Drainage,
        fertility: Fertility,
        organic: bool,
        ph: Option<SoilPh>,
    ) -> Soil {
        Soil { soil_type: soil_type.to_string(), drainage, fertility, organic, ph }
    }

    vec![
        soil("Sandy", Drainage::Fast, Fertility::Low, false, None),
        soil("Clay", Drainage::Slow, Fertility::High, false, None),
        soil("Silty", Drainage::Moderate, Fertility::High, false, None),
        soil("Peaty", Drainage::Variable, Fertility::High, true, None),
        soil("Chalky", Drainage::Fast, Fertility::Low, false, Some(SoilPh::Alkaline)),
        soil("Loamy", Drainage::Good, Fertility::High, false, None),
    ]
}

fn builtin_techniques() -> Vec<Technique> {
    fn technique(name: &str, description: &str, soils: &[&str]) -> Technique {
        Technique {
            name: name.to_string(),
            description: description.to_string(),
            suitable_soils: soils.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        technique(
            "Drip Irrigation",
            "Delivers water directly to roots, reducing waste.",
            &["Sandy", "Loamy", "Clay"],
        ),
        technique(
            "Intercropping",
            "Two or more crops together for yield + pest control.",
            &["Loamy", "Sandy", "Clay"],
        ),
        technique(
            "Precision Farming",
            "Use data/tech to optimize inputs.",
            &[ALL_SOILS],
        ),
        technique(
            "Cover Cropping",
            "Cover soil to add fertility and prevent erosion.",
            &["Loamy", "Sandy", "Peaty"],
        ),
        technique(
            "Mulching",
            "Surface layer to retain moisture and reduce weeds.",
            &["Sandy", "Loamy"],
        ),
        technique(
            "Crop Rotation",
            "Alternate crops to break pest cycles and balance nutrients.",
            &[ALL_SOILS],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.family_of("Wheat"), Some(CropFamily::Poaceae));
        assert_eq!(catalog.family_of("wheat"), Some(CropFamily::Poaceae));
        assert_eq!(catalog.family_of("WHEAT"), Some(CropFamily::Poaceae));
        assert_eq!(catalog.family_of("soybean"), Some(CropFamily::Fabaceae));
    }

    #[test]
    fn unknown_names_yield_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.family_of("Dragonfruit").is_none());
        assert!(catalog.find_crop("Dragonfruit").is_none());
        assert!(catalog.find_soil("Martian").is_none());
        assert!(catalog.find_technique("Terraforming").is_none());
    }

    #[test]
    fn builtin_tables_are_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.crops().len(), 18);
        assert_eq!(catalog.soils().len(), 6);
        assert_eq!(catalog.techniques().len(), 6);
        // Every recommended soil of every crop exists in the soil table.
        for crop in catalog.crops() {
            for soil in &crop.recommended_soils {
                assert!(
                    catalog.find_soil(soil).is_some(),
                    "crop {} recommends unknown soil {}",
                    crop.name,
                    soil
                );
            }
        }
    }

    #[test]
    fn catalog_loads_from_toml() {
        let toml = r#"
            [[crops]]
            name = "Quinoa"
            family = "Amaranthaceae"
            recommended_soils = ["Sandy"]
        "#;
        // Unknown family names are rejected by the enum.
        assert!(Catalog::from_toml_str(toml).is_err());

        let toml = r#"
            [[crops]]
            name = "Teff"
            family = "Poaceae"
            recommended_soils = ["Loamy"]

            [[soils]]
            soil_type = "Loamy"
            drainage = "good"
            fertility = "high"
        "#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.family_of("teff"), Some(CropFamily::Poaceae));
        assert_eq!(catalog.find_soil("loamy").unwrap().drainage, Drainage::Good);
    }

    #[test]
    fn empty_crop_table_is_rejected() {
        assert!(Catalog::from_toml_str("").is_err());
    }
}
