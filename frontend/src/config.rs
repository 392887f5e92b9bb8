//! Host configuration embedded in the bundle.

use anyhow::Context;
use common::catalog_config::CatalogConfig;

const CATALOG_CONFIG_JSON: &str = include_str!("../assets/catalog_config.json");

pub fn load_catalog_config() -> anyhow::Result<CatalogConfig> {
    CatalogConfig::from_json(CATALOG_CONFIG_JSON).context("failed to load the embedded catalog configuration")
}
