//! # Shopfront Console Library
//!
//! Thin orchestration layer around `shopfront-core`: loads configuration,
//! sets up logging, seeds the catalog and runs one console session on
//! stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! shopfront_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── SHOPFRONT_* environment configuration
//! ├── error.rs        ◄─── InputError / AppError
//! ├── seed.rs         ◄─── Built-in product range
//! ├── render.rs       ◄─── Stock table, banner, receipt formatting
//! └── session.rs      ◄─── Prompt/answer flow
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod seed;
pub mod session;

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::ShopConfig;
use error::AppResult;
use session::Session;

/// Runs one console session.
///
/// ## Startup Sequence
/// 1. Load configuration from `SHOPFRONT_*` variables (defaults if any is bad)
/// 2. Initialize tracing (stderr, so the stdout protocol stays clean)
/// 3. Seed the catalog
/// 4. Run the session on locked stdin/stdout
pub fn run() -> AppResult<()> {
    let (config, config_error) = ShopConfig::from_env_or_default();
    init_tracing(&config.log_filter);
    if let Some(err) = config_error {
        warn!(error = %err, "Invalid configuration, using defaults");
    }

    info!(store = %config.store_name, rule_width = config.rule_width, "Starting Shopfront console session");

    let catalog = seed::seed_catalog()?;
    info!(products = catalog.len(), "Catalog seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, &config, stdin.lock(), stdout.lock());
    let outcome = session.run()?;

    info!(
        customer = %outcome.customer_name,
        total = %outcome.checkout.total(),
        "Session finished"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show lookups and seed rows
/// - `RUST_LOG=shopfront=trace` - Trace for shopfront crates only
/// - Default: `fallback` (from `SHOPFRONT_LOG`, else `warn,shopfront=info`)
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
