//! Repair-shop POS bootstrap
//!
//! Opens the local store, runs migrations, seeds the starter catalog and
//! logs an opening summary. Reads configuration from TOML file
//! (~/.config/repairshop-pos/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use repairshop_pos::config::AppConfig;
use repairshop_pos::infrastructure::database::migrator::Migrator;
use repairshop_pos::{
    default_config_path, init_database, seed_sample_products, DatabaseConfig, DatabaseMedium,
    ProductService, RecordStore, SalesService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("POS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting repair-shop POS store...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    let db = init_database(&db_config).await?;
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    // ── Store and services ─────────────────────────────────────
    let store = Arc::new(RecordStore::new(Arc::new(DatabaseMedium::new(db))));
    let products = ProductService::new(store.clone());
    let sales = SalesService::with_tax_rate(store.clone(), app_cfg.sales.tax_rate());

    seed_sample_products(&products).await?;

    // ── Opening summary ────────────────────────────────────────
    let catalog = products.get_all().await;
    info!("Catalog: {} products", catalog.len());

    let low = products.get_low_stock().await;
    for product in &low {
        warn!(
            "Low stock: {} ({}) at {} (min {})",
            product.name, product.sku, product.stock, product.min_stock
        );
    }
    if low.is_empty() {
        info!("No products below minimum stock");
    }

    info!("Today's takings so far: {}", sales.get_today_total().await);

    Ok(())
}
