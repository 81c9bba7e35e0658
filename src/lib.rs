//! Crop Advisor - Crop Rotation Assistant Library
//!
//! Recommends crop rotation choices, soil management, fertilizer and
//! farming techniques from static reference tables, and logs every
//! submission to a local SQLite store.
//!
//! # Example
//!
//! ```ignore
//! use crop_advisor::{Assistant, Catalog, EntryStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = EntryStore::open("entries.db")?;
//!     let mut assistant = Assistant::new(Catalog::builtin(), store);
//!     let report = assistant.submit(2.5, "Wheat", "Soybean", "Loamy")?;
//!     println!("{}", report.render());
//!     Ok(())
//! }
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod types;
pub mod catalog; // Must come before advisor/recommend since both read it
pub mod advisor;
pub mod recommend;
pub mod store;
pub mod assistant;
pub mod config;
pub mod cli;

// Re-export commonly used types for convenience
pub use assistant::{Assistant, SubmissionReport};
pub use catalog::{Catalog, ALL_SOILS, DEFAULT_CATALOG};
pub use config::Config;
pub use store::EntryStore;
pub use types::{Crop, CropFamily, Drainage, Entry, Fertility, NewEntry, Soil, SoilPh, Technique};

pub use advisor::{evaluate, suggest_next, techniques_for_soil, RotationAdvice, RotationStatus};
pub use recommend::{recommend_fertilizer, recommend_soil_management, suggest_for_crop};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
