//! CLI interface for crop-advisor
//!
//! The command line stands in for the presentation layer: it validates
//! input, calls the core and formats the results. No domain logic lives
//! here.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::assistant::Assistant;
use crate::catalog::{Catalog, DEFAULT_CATALOG};
use crate::config::Config;
use crate::store::EntryStore;

#[derive(Parser)]
#[command(name = "crop-advisor")]
#[command(about = "Crop rotation assistant with soil, fertilizer and technique recommendations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for a planting decision
    Recommend {
        /// Farmland size in acres/hectares (must be positive)
        #[arg(short, long)]
        size: f64,
        /// Crop planted last season
        #[arg(short, long)]
        previous: String,
        /// Crop planned for this season
        #[arg(short, long)]
        current: String,
        /// Soil type of the field
        #[arg(long)]
        soil: String,
    },
    /// Show all saved recommendations, newest first
    Log,
    /// List the crops in the catalog
    Crops,
    /// List the soil types in the catalog
    Soils,
    /// List the farming techniques in the catalog
    Techniques,
    /// Show or change configuration
    Config {
        /// Set the database path
        #[arg(long)]
        set_db_path: Option<PathBuf>,
    },
}

/// Parse arguments and dispatch.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Recommend { size, previous, current, soil } => {
            recommend(&config, catalog, size, &previous, &current, &soil)
        }
        Commands::Log => show_log(&config, catalog),
        Commands::Crops => list_crops(&catalog),
        Commands::Soils => list_soils(&catalog),
        Commands::Techniques => list_techniques(&catalog),
        Commands::Config { set_db_path } => configure(set_db_path),
    }
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.file {
        Some(path) => Catalog::load(path),
        None => Ok(DEFAULT_CATALOG.clone()),
    }
}

fn recommend(
    config: &Config,
    catalog: Catalog,
    size: f64,
    previous: &str,
    current: &str,
    soil: &str,
) -> Result<()> {
    if !(size.is_finite() && size > 0.0) {
        bail!("Please enter a valid farmland size (a positive number).");
    }

    // Persistence is best-effort: advice is shown even when the store
    // cannot be opened.
    let mut assistant = match EntryStore::open(&config.database.path) {
        Ok(store) => Assistant::new(catalog, store),
        Err(err) => {
            warn!(error = %err, "entry store unavailable, advice will not be logged");
            Assistant::without_store(catalog)
        }
    };

    let report = assistant.submit(size, previous, current, soil)?;
    print!("{}", report.render());
    if report.saved.is_none() {
        eprintln!("Note: this recommendation was not saved to the log.");
    }
    Ok(())
}

fn show_log(config: &Config, catalog: Catalog) -> Result<()> {
    let store = EntryStore::open(&config.database.path)?;
    let assistant = Assistant::new(catalog, store);
    let entries = assistant.list_entries()?;

    if entries.is_empty() {
        println!("No saved recommendations yet.");
        return Ok(());
    }

    for entry in entries {
        println!("#{} | {} | {} -> {} on {}",
            entry.id, entry.farmland_size, entry.previous_crop, entry.current_crop, entry.soil_type);
        if !entry.recommendation.is_empty() {
            println!("    {}", entry.recommendation);
        }
        if !entry.fertilizer.is_empty() {
            println!("    Fertilizer: {}", entry.fertilizer);
        }
        if !entry.techniques.is_empty() {
            println!("    Techniques: {}", entry.techniques);
        }
    }
    Ok(())
}

fn list_crops(catalog: &Catalog) -> Result<()> {
    println!("{:<12} {:<16} Recommended soils", "Crop", "Family");
    for crop in catalog.crops() {
        println!(
            "{:<12} {:<16} {}",
            crop.name,
            crop.family,
            crop.recommended_soils.join(", ")
        );
    }
    Ok(())
}

fn list_soils(catalog: &Catalog) -> Result<()> {
    println!("{:<8} {:<10} {:<10} Notes", "Soil", "Drainage", "Fertility");
    for soil in catalog.soils() {
        let mut notes = Vec::new();
        if soil.organic {
            notes.push("organic".to_string());
        }
        if let Some(ph) = soil.ph {
            notes.push(format!("{} pH", ph));
        }
        println!(
            "{:<8} {:<10} {:<10} {}",
            soil.soil_type,
            soil.drainage,
            soil.fertility,
            notes.join(", ")
        );
    }
    Ok(())
}

fn list_techniques(catalog: &Catalog) -> Result<()> {
    for technique in catalog.techniques() {
        println!("{} ({})", technique.name, technique.suitable_soils.join(", "));
        println!("    {}", technique.description);
    }
    Ok(())
}

fn configure(set_db_path: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(path) = set_db_path {
        config.database.path = path;
        config.save()?;
        println!("Database path updated.");
    }

    println!("Config file: {}", crate::config::config_path()?.display());
    println!("Database:    {}", config.database.path.display());
    match &config.catalog.file {
        Some(path) => println!("Catalog:     {}", path.display()),
        None => println!("Catalog:     built-in"),
    }
    Ok(())
}
