//! Fertilizer, soil management and technique recommendations
//!
//! Rule-of-thumb advice keyed off crop family and soil properties. All
//! functions are total: unknown names fall back to a flagged generic
//! answer, never an error.

use crate::catalog::Catalog;
use crate::types::{CropFamily, Drainage, Fertility, Soil};

/// Fallback when a crop name does not resolve to a family.
pub const NO_FERTILIZER_ADVICE: &str = "No fertilizer recommendation found.";

/// Fallback technique list for unknown crops.
pub const NO_TECHNIQUES: &str = "No specific techniques available.";

/// Fertilizer program for a crop family.
fn fertilizer_for_family(family: CropFamily) -> &'static str {
    match family {
        CropFamily::Poaceae => "NPK 15:15:15 (~200 kg/ha) + Urea top-dress.",
        CropFamily::Fabaceae => "Low N required; apply SSP (P source).",
        CropFamily::Solanaceae => "Balanced NPK 20:10:10 with extra Potassium at tuber/fruit set.",
        CropFamily::Euphorbiaceae
        | CropFamily::Dioscoreaceae
        | CropFamily::Apiaceae => "Higher K demand: MOP + well-decomposed compost.",
        CropFamily::Amaryllidaceae | CropFamily::Brassicaceae => {
            "Balanced NPK 20:10:10 + organic compost."
        }
        CropFamily::Asteraceae => "Balanced NPK + Boron supplement.",
        CropFamily::Malvaceae => "Nitrogen and Potassium priority; moderate Phosphorus.",
    }
}

/// Fertilizer recommendation for a crop, by name.
pub fn recommend_fertilizer(catalog: &Catalog, crop_name: &str) -> String {
    match catalog.family_of(crop_name) {
        Some(family) => fertilizer_for_family(family).to_string(),
        None => NO_FERTILIZER_ADVICE.to_string(),
    }
}

/// Soil management advice from fertility and drainage.
///
/// Fertility and drainage are independent axes; each contributes at most
/// one sentence, fertility first.
pub fn recommend_soil_management(soil: &Soil) -> String {
    let mut tips: Vec<&str> = Vec::new();

    match soil.fertility {
        Fertility::Low => tips.push("Incorporate compost/manure to boost fertility."),
        Fertility::High => tips.push("Maintain fertility with residues/cover crops."),
    }

    match soil.drainage {
        Drainage::Fast => tips.push("Use mulch and drip to reduce water loss."),
        Drainage::Slow => tips.push("Create raised beds/ridges and avoid over-irrigation."),
        Drainage::Moderate | Drainage::Good | Drainage::Variable => {}
    }

    if tips.is_empty() {
        return "General soil care: add organic matter and monitor moisture.".to_string();
    }
    tips.join(" ")
}

/// Technique shortlist for a crop family.
fn techniques_for_family(family: CropFamily) -> &'static [&'static str] {
    match family {
        CropFamily::Poaceae => &["Drip irrigation", "Precision planting"],
        CropFamily::Fabaceae => &["Intercropping with cereals", "Mulching"],
        CropFamily::Solanaceae => &["Fertigation system", "Soil moisture monitoring"],
        CropFamily::Euphorbiaceae
        | CropFamily::Dioscoreaceae
        | CropFamily::Apiaceae => &["Ridging", "Soil moisture monitoring"],
        CropFamily::Amaryllidaceae | CropFamily::Brassicaceae => {
            &["Fertigation system", "Greenhouse/shade-net (if possible)"]
        }
        CropFamily::Asteraceae => &["Integrated pest management", "Rotate with legumes"],
        CropFamily::Malvaceae => &["Irrigation scheduling", "Regular soil testing"],
    }
}

/// Technique suggestions for a crop, by name.
pub fn suggest_for_crop(catalog: &Catalog, crop_name: &str) -> Vec<String> {
    match catalog.family_of(crop_name) {
        Some(family) => techniques_for_family(family)
            .iter()
            .map(|t| t.to_string())
            .collect(),
        None => vec![NO_TECHNIQUES.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SoilPh;

    fn soil(drainage: Drainage, fertility: Fertility) -> Soil {
        Soil {
            soil_type: "Test".to_string(),
            drainage,
            fertility,
            organic: false,
            ph: None,
        }
    }

    #[test]
    fn fertilizer_is_total_over_the_catalog() {
        let catalog = Catalog::builtin();
        for crop in catalog.crops() {
            let advice = recommend_fertilizer(&catalog, &crop.name);
            assert!(!advice.is_empty());
            assert_ne!(advice, NO_FERTILIZER_ADVICE);
        }
    }

    #[test]
    fn unknown_crop_gets_the_generic_fertilizer_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(
            recommend_fertilizer(&catalog, "Durian"),
            NO_FERTILIZER_ADVICE
        );
    }

    #[test]
    fn low_fertility_fast_drainage_gets_both_sentences_in_order() {
        let advice = recommend_soil_management(&soil(Drainage::Fast, Fertility::Low));
        assert_eq!(
            advice,
            "Incorporate compost/manure to boost fertility. \
             Use mulch and drip to reduce water loss."
        );
    }

    #[test]
    fn high_fertility_slow_drainage_gets_both_sentences() {
        let advice = recommend_soil_management(&soil(Drainage::Slow, Fertility::High));
        assert!(advice.starts_with("Maintain fertility with residues/cover crops."));
        assert!(advice.contains("raised beds"));
    }

    #[test]
    fn neutral_drainage_gets_only_the_fertility_sentence() {
        let advice = recommend_soil_management(&soil(Drainage::Good, Fertility::High));
        assert_eq!(advice, "Maintain fertility with residues/cover crops.");
    }

    #[test]
    fn chalky_soil_advice_uses_its_properties() {
        let chalky = Soil {
            soil_type: "Chalky".to_string(),
            drainage: Drainage::Fast,
            fertility: Fertility::Low,
            organic: false,
            ph: Some(SoilPh::Alkaline),
        };
        let advice = recommend_soil_management(&chalky);
        assert!(advice.contains("compost/manure"));
        assert!(advice.contains("mulch"));
    }

    #[test]
    fn techniques_cover_every_catalog_crop() {
        let catalog = Catalog::builtin();
        for crop in catalog.crops() {
            let techs = suggest_for_crop(&catalog, &crop.name);
            assert!(!techs.is_empty());
            assert_ne!(techs[0], NO_TECHNIQUES);
        }
    }

    #[test]
    fn unknown_crop_gets_the_no_techniques_list() {
        let catalog = Catalog::builtin();
        assert_eq!(
            suggest_for_crop(&catalog, "Durian"),
            vec![NO_TECHNIQUES.to_string()]
        );
    }
}
