use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub state: StateSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub url: String,
    #[serde(default = "default_dashboards_path")]
    pub dashboards_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    #[serde(default = "default_source_id")]
    pub id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StateSettings {
    #[serde(default = "default_ranges_file")]
    pub ranges_file: PathBuf,
}

fn default_dashboards_path() -> String {
    "/v2/dashboards".to_string()
}

fn default_source_id() -> String {
    "1".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_ranges_file() -> PathBuf {
    PathBuf::from(".dashboard-ranges.json")
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            id: default_source_id(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            ranges_file: default_ranges_file(),
        }
    }
}

impl AppConfig {
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.server.url.trim_end_matches('/'),
            self.server.dashboards_path.trim_start_matches('/')
        )
    }
}

/// Layered config: `config/dashboards.*`, then `extra`, then `DASHBOARDS__*` env vars.
pub fn load_app_config(extra: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboards").required(false));

    if let Some(path) = extra {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("DASHBOARDS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
