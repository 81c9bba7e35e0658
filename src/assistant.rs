//! Submission handling
//!
//! Ties the catalog, the advisor/recommenders and the entry store
//! together: one submission runs the full advice chain to completion,
//! then logs the result. Persistence is best-effort — a failed write is
//! reported on the outcome, never allowed to swallow the advice.

use anyhow::{bail, Result};
use tracing::warn;

use crate::advisor::{self, RotationAdvice};
use crate::catalog::Catalog;
use crate::recommend;
use crate::store::EntryStore;
use crate::types::{Entry, NewEntry};

/// Everything computed for one submission.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub rotation: RotationAdvice,
    pub soil_management: String,
    pub fertilizer: String,
    /// Techniques for the current crop's family.
    pub crop_techniques: Vec<String>,
    /// Suggested follow-on crops for the previous crop and soil.
    pub next_crops: Vec<String>,
    /// Modern techniques suitable for the submitted soil.
    pub soil_techniques: Vec<String>,
    /// Assigned entry id, or `None` when persistence failed or is absent.
    pub saved: Option<i64>,
}

impl SubmissionReport {
    /// Plain-text rendering of the report. Pure string construction over
    /// already-computed data; cannot fail.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.rotation.message);
        out.push('\n');
        if !self.rotation.alternatives.is_empty() {
            out.push_str(&format!(
                "Alternatives: {}\n",
                self.rotation.alternatives.join(", ")
            ));
        }
        out.push_str(&format!("Soil management: {}\n", self.soil_management));
        out.push_str(&format!("Fertilizer: {}\n", self.fertilizer));
        out.push_str(&format!(
            "Techniques for crop: {}\n",
            self.crop_techniques.join(", ")
        ));
        if !self.next_crops.is_empty() {
            out.push_str(&format!(
                "Suggested next crops: {}\n",
                self.next_crops.join(", ")
            ));
        }
        if !self.soil_techniques.is_empty() {
            out.push_str(&format!(
                "Modern techniques for soil: {}\n",
                self.soil_techniques.join(", ")
            ));
        }
        out
    }
}

/// The core the presentation layer talks to.
pub struct Assistant {
    catalog: Catalog,
    store: Option<EntryStore>,
}

impl Assistant {
    /// Assistant with a persistent entry log.
    pub fn new(catalog: Catalog, store: EntryStore) -> Self {
        Self { catalog, store: Some(store) }
    }

    /// Assistant without persistence: submissions still produce advice,
    /// nothing is logged.
    pub fn without_store(catalog: Catalog) -> Self {
        Self { catalog, store: None }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle one submission: evaluate the rotation, compute all advice,
    /// then append the entry.
    ///
    /// The soil type must resolve in the catalog; crop names are free
    /// text and flow through the advisor's unknown-crop path. The
    /// farmland size must be positive — validating user input is the
    /// caller's job, this is a last-line check.
    pub fn submit(
        &mut self,
        farmland_size: f64,
        previous_crop: &str,
        current_crop: &str,
        soil_type: &str,
    ) -> Result<SubmissionReport> {
        if !(farmland_size.is_finite() && farmland_size > 0.0) {
            bail!("Farmland size must be a positive number");
        }
        let soil = match self.catalog.find_soil(soil_type) {
            Some(s) => s.clone(),
            None => bail!("Unknown soil type: {}", soil_type),
        };

        let rotation = advisor::evaluate(&self.catalog, previous_crop, current_crop);
        let soil_management = recommend::recommend_soil_management(&soil);
        let fertilizer = recommend::recommend_fertilizer(&self.catalog, current_crop);
        let crop_techniques = recommend::suggest_for_crop(&self.catalog, current_crop);
        let next_crops = advisor::suggest_next(&self.catalog, previous_crop, soil_type);
        let soil_techniques = advisor::techniques_for_soil(&self.catalog, soil_type)
            .iter()
            .map(|t| t.name.clone())
            .collect();

        let entry = NewEntry {
            farmland_size,
            previous_crop: previous_crop.to_string(),
            current_crop: current_crop.to_string(),
            soil_type: soil.soil_type.clone(),
            recommendation: rotation.message.clone(),
            fertilizer: fertilizer.clone(),
            techniques: crop_techniques.join(", "),
        };

        // Best-effort logging: the advice is still returned when the
        // write fails.
        let saved = match &self.store {
            Some(store) => match store.append(&entry) {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!(error = %err, "failed to persist entry");
                    None
                }
            },
            None => None,
        };

        Ok(SubmissionReport {
            rotation,
            soil_management,
            fertilizer,
            crop_techniques,
            next_crops,
            soil_techniques,
            saved,
        })
    }

    /// All persisted entries, newest first.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        match &self.store {
            Some(store) => store.list_all(),
            None => bail!("No entry store configured"),
        }
    }
}
