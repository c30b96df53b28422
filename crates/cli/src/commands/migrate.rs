//! Database migration command.
//!
//! Runs the storefront schema migrations embedded in the storefront crate.
//! The session store's table is managed separately by the services at
//! startup.

use tracing::info;

use super::CommandError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    info!("Running storefront migrations...");
    amrita_storefront::db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    Ok(())
}
