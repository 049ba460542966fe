use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_SHEET_NAME: &str = "Data";
pub const DEFAULT_DB_PATH: &str = "moldmatch.db";
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Worksheet holding the machine rows.
    pub sheet_name: String,
    /// SQLite file backing the share store.
    pub db_path: String,
    /// Origin used when printing share links.
    pub share_origin: String,
    /// Persist the representative view after every comparison.
    pub auto_share: bool,
    /// Manufacturers shown first, in this order, when rendering tables.
    pub manufacturer_order: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            auto_share: true,
            manufacturer_order: Vec::new(),
        }
    }
}

/// Load `Config.{toml,json,yaml}` if present, then `MOLDMATCH_*` environment overrides.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("MOLDMATCH")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("manufacturer_order"),
        )
        .build()?;
    let mut config = builder.try_deserialize::<AppConfig>()?;
    config.manufacturer_order = distinct_manufacturers(config.manufacturer_order);
    Ok(config)
}

/// Drop blank and repeated (case-insensitive) manufacturer names, keeping the first spelling.
pub fn distinct_manufacturers(names: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if result.iter().any(|seen| seen.eq_ignore_ascii_case(trimmed)) {
            continue;
        }
        result.push(trimmed.to_string());
    }

    result
}
