use std::{
    fs,
    path::PathBuf,
    sync::{LazyLock, RwLock},
};

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::{debug, info};
use wpq_utils::{
    ident::{is_valid_field, is_valid_prefix},
    path::{resolve_path, xdg_config_home},
};

use crate::{
    annotations::annotate_toml_table,
    display::DisplaySettings,
    error::{ConfigError, Result},
    utils::default_post_fields,
};

/// wpq configuration
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Config {
    /// Path to the WordPress SQLite database.
    /// `~`, `$VAR` and `${VAR}` are expanded; WPQ_DB overrides it.
    pub database: Option<String>,

    /// Table prefix of the WordPress installation.
    /// Default: "wp_"
    pub table_prefix: Option<String>,

    /// Columns selected for posts when a command names none.
    /// Default: ["id", "guid", "post_title", "post_content", "post_excerpt", "post_date"]
    pub post_fields: Option<Vec<String>>,

    /// Output formatting
    pub display: Option<DisplaySettings>,
}

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("WPQ_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("wpq").join("config.toml"),
    })
});

/// Current value of [`CONFIG_PATH`].
pub fn config_path() -> PathBuf {
    CONFIG_PATH
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replaces [`CONFIG_PATH`], e.g. from a `--config` flag.
pub fn set_config_path(path: PathBuf) {
    *CONFIG_PATH
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = path;
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            database: Some("~/wordpress.sqlite".to_string()),
            table_prefix: Some("wp_".to_string()),
            post_fields: Some(default_post_fields()),
            display: Some(DisplaySettings::default_filled()),
        }
    }

    /// Loads the config file at [`CONFIG_PATH`], falling back to the default
    /// config if the file does not exist.
    pub fn new() -> Result<Self> {
        let config_path = config_path();

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", config_path.display());
                Self::default_config()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;

        Ok(config)
    }

    /// Validates the config and fills every unset value with its default.
    pub fn resolve(&mut self) -> Result<()> {
        let prefix = self.table_prefix.get_or_insert_with(|| "wp_".to_string());
        if !is_valid_prefix(prefix) {
            return Err(ConfigError::InvalidTablePrefix(prefix.clone()));
        }

        let fields = self.post_fields.get_or_insert_with(default_post_fields);
        if fields.is_empty() {
            return Err(ConfigError::EmptyPostFields);
        }
        if let Some(field) = fields.iter().find(|field| !is_valid_field(field.trim())) {
            return Err(ConfigError::InvalidPostField(field.clone()));
        }
        for field in fields.iter_mut() {
            *field = field.trim().to_string();
        }

        self.display.get_or_insert_with(DisplaySettings::default_filled);

        Ok(())
    }

    /// Resolves the database path; WPQ_DB takes precedence over the file.
    pub fn get_db_path(&self) -> Result<PathBuf> {
        if let Ok(env_path) = std::env::var("WPQ_DB") {
            return Ok(resolve_path(&env_path)?);
        }
        match &self.database {
            Some(database) => Ok(resolve_path(database)?),
            None => Err(ConfigError::MissingDatabase),
        }
    }

    pub fn table_prefix(&self) -> &str {
        self.table_prefix.as_deref().unwrap_or("wp_")
    }

    pub fn post_fields(&self) -> Vec<String> {
        self.post_fields
            .clone()
            .unwrap_or_else(default_post_fields)
    }

    pub fn display(&self) -> DisplaySettings {
        self.display.clone().unwrap_or_default()
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        if let Some(display_table) = doc.get_mut("display").and_then(|item| item.as_table_mut()) {
            annotate_toml_table::<DisplaySettings>(display_table, false)?;
        }

        Ok(doc)
    }
}

/// Writes the annotated default config to [`CONFIG_PATH`].
pub fn generate_default_config() -> Result<PathBuf> {
    let config_path = config_path();

    if config_path.exists() {
        return Err(ConfigError::ConfigAlreadyExists);
    }

    let annotated_doc = Config::default_config().to_annotated_document()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        config_path.display()
    );
    Ok(config_path)
}
