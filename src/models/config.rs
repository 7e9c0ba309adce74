use serde::Deserialize;

use crate::domain::patch::DirtyCheck;

/// Configuration options for the catalog service.
///
/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml` and
/// `APP_*` environment variables, in that order of precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Clear and re-populate sample data before serving.
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,
    /// Answer `404 Not Found` for unknown ids instead of an empty `200 OK`.
    #[serde(default)]
    pub missing_as_not_found: bool,
    /// Which fields decide whether a PATCH is written back.
    #[serde(default)]
    pub patch_dirty_check: DirtyCheck,
}

fn default_seed_on_startup() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "app.db".to_string(),
            seed_on_startup: default_seed_on_startup(),
            missing_as_not_found: false,
            patch_dirty_check: DirtyCheck::default(),
        }
    }
}
