//! Crop rotation advice
//!
//! Pure functions over the catalog: no state, no side effects.

use crate::catalog::{Catalog, ALL_SOILS};
use crate::types::Technique;

/// How a (previous, current) crop pair was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStatus {
    /// One or both crop names did not resolve in the catalog.
    UnknownCrop,
    /// Both crops share a family; rotation is discouraged.
    SameFamily,
    /// Families differ; rotation is sound.
    Good,
}

/// Result of evaluating a crop rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAdvice {
    pub status: RotationStatus,
    pub message: String,
    /// Cross-family alternatives, only populated for same-family pairs.
    pub alternatives: Vec<String>,
}

/// Classify the transition from `previous_crop` to `current_crop`.
///
/// Unknown names are non-fatal: the advice names the side(s) that failed to
/// resolve and carries no alternatives.
pub fn evaluate(catalog: &Catalog, previous_crop: &str, current_crop: &str) -> RotationAdvice {
    let prev_family = catalog.family_of(previous_crop);
    let curr_family = catalog.family_of(current_crop);

    let (prev_family, curr_family) = match (prev_family, curr_family) {
        (Some(p), Some(c)) => (p, c),
        _ => {
            let mut unknown = Vec::new();
            if prev_family.is_none() {
                unknown.push(previous_crop);
            }
            if curr_family.is_none() {
                unknown.push(current_crop);
            }
            return RotationAdvice {
                status: RotationStatus::UnknownCrop,
                message: format!("Unknown crop: {}", unknown.join(", ")),
                alternatives: Vec::new(),
            };
        }
    };

    if prev_family == curr_family {
        let alternatives = catalog
            .crops()
            .iter()
            .filter(|c| c.family != prev_family)
            .map(|c| c.name.clone())
            .collect();
        RotationAdvice {
            status: RotationStatus::SameFamily,
            message: format!(
                "Avoid planting {} after {} (same family: {}). Choose an alternative.",
                current_crop, previous_crop, prev_family
            ),
            alternatives,
        }
    } else {
        RotationAdvice {
            status: RotationStatus::Good,
            message: format!("Good rotation: {} after {}.", current_crop, previous_crop),
            alternatives: Vec::new(),
        }
    }
}

/// Crops worth planting after `previous_crop` on `soil_type`.
///
/// Prefers cross-family crops whose recommended soils include the given
/// soil (or the all-soils sentinel). If the soil filter leaves nothing,
/// widens to every cross-family crop rather than returning an empty list.
/// Catalog order is preserved. Unknown previous crops yield an empty list.
pub fn suggest_next(catalog: &Catalog, previous_crop: &str, soil_type: &str) -> Vec<String> {
    let prev_family = match catalog.family_of(previous_crop) {
        Some(f) => f,
        None => return Vec::new(),
    };

    let cross_family: Vec<&crate::types::Crop> = catalog
        .crops()
        .iter()
        .filter(|c| c.family != prev_family)
        .collect();

    let soil_matched: Vec<String> = cross_family
        .iter()
        .filter(|c| {
            c.recommended_soils
                .iter()
                .any(|s| s.eq_ignore_ascii_case(soil_type) || s.eq_ignore_ascii_case(ALL_SOILS))
        })
        .map(|c| c.name.clone())
        .collect();

    if soil_matched.is_empty() {
        cross_family.iter().map(|c| c.name.clone()).collect()
    } else {
        soil_matched
    }
}

/// Techniques suitable for `soil_type`, including all-soils techniques.
pub fn techniques_for_soil<'a>(catalog: &'a Catalog, soil_type: &str) -> Vec<&'a Technique> {
    catalog
        .techniques()
        .iter()
        .filter(|t| {
            t.suitable_soils
                .iter()
                .any(|s| s.eq_ignore_ascii_case(soil_type) || s.eq_ignore_ascii_case(ALL_SOILS))
        })
        .collect()
}
