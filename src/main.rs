//! Libris - Library Catalog Manager
//!
//! An interactive catalog session over a JSON-file-backed store.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::config::AppConfig;
use libris::repository::CatalogRepository;
use libris::services::Library;
use libris::shell;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing; logs go to stderr so the menu on stdout stays clean
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    let repository = CatalogRepository::new(config.storage.data_file.clone());
    let mut library = Library::open(repository);

    tracing::info!(
        "Catalog loaded from {}: {} books, {} members",
        config.storage.data_file.display(),
        library.books().len(),
        library.members().len()
    );

    shell::run(&mut library)?;

    Ok(())
}
