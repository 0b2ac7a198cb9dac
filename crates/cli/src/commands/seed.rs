//! Seed the sandwich catalog from a YAML file.
//!
//! Reads catalog entries from a YAML file, validates them, and inserts
//! them into the `sandwiches` table. Entries whose name already exists
//! are skipped so the command can be re-run safely.
//!
//! # File Format
//!
//! ```yaml
//! sandwiches:
//!   - name: Reuben
//!     price: "7.50"
//!   - name: Caprese
//!     price: "6.00"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use lunchbox_core::Money;
use lunchbox_server::db::{RepositoryError, SandwichRepository};

/// One catalog entry in the seed file.
#[derive(Debug, Deserialize)]
pub struct SeedSandwich {
    pub name: String,
    pub price: String,
}

/// The seed file layout.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub sandwiches: Vec<SeedSandwich>,
}

/// Seed the catalog from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file
/// cannot be read or fails validation, or database operations fail.
pub async fn catalog(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("LUNCHBOX_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| "LUNCHBOX_DATABASE_URL not set")?;

    // Verify file exists
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading catalog from file");

    // Read and validate YAML before connecting to database
    let content = tokio::fs::read_to_string(path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;

    info!(sandwiches = seed.sandwiches.len(), "Parsed seed file");

    let mut parsed = Vec::with_capacity(seed.sandwiches.len());
    let mut errors = Vec::new();
    for entry in &seed.sandwiches {
        let name = entry.name.trim();
        if name.is_empty() {
            errors.push("entry with empty name".to_string());
            continue;
        }
        match Money::parse(&entry.price) {
            Ok(price) => parsed.push((name, price)),
            Err(e) => errors.push(format!("{name}: {e}")),
        }
    }

    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    info!("Seed file validated successfully");

    // Connect to database
    let pool = sqlx::PgPool::connect(&database_url).await?;
    info!("Connected to database");

    let repo = SandwichRepository::new(&pool);
    let mut inserted = 0_u32;
    let mut skipped = 0_u32;

    for (name, price) in parsed {
        match repo.create(name, price).await {
            Ok(_) => inserted += 1,
            Err(RepositoryError::Conflict(_)) => skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    // Print summary
    info!("Seeding complete!");
    info!("  Inserted: {inserted}");
    info!("  Skipped (already exist): {skipped}");

    Ok(())
}
