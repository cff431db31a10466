use crate::events::AppEvent;
use crate::gui::theme::ColorValue;
use crate::labels::Labels;
use crate::speed::{FanSpeed, LabelKey};
use async_channel::Sender;
use config::ConfigBuilder;
use config::builder::DefaultState;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "WindowConfig::default_width")]
    pub width: i32,
    #[serde(default = "WindowConfig::default_height")]
    pub height: i32,
    #[serde(default = "WindowConfig::default_title")]
    pub title: String,
}

impl WindowConfig {
    fn default_width() -> i32 {
        400
    }

    fn default_height() -> i32 {
        400
    }

    fn default_title() -> String {
        "Fan Control".to_string()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            title: Self::default_title(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "Config::default_colors")]
    pub colors: HashMap<FanSpeed, ColorValue>,
    #[serde(default)]
    pub labels: HashMap<LabelKey, String>,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    fn default_colors() -> HashMap<FanSpeed, ColorValue> {
        [
            (FanSpeed::Low, "#FFEB3B"),
            (FanSpeed::Medium, "#CDDC39"),
            (FanSpeed::High, "#009688"),
        ]
        .into_iter()
        .filter_map(|(speed, hex)| hex.parse().ok().map(|color| (speed, color)))
        .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: Self::default_colors(),
            labels: Labels::builtin(),
            window: WindowConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No color configured for speed '{0}'")]
    MissingColor(FanSpeed),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fandial", "fandial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("FANDIAL").separator("__")
}

/// Optional config file at `path`, then `FANDIAL__*` variables on top.
fn load_from(path: Option<PathBuf>, env: config::Environment) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(false));
    }
    finish(builder.add_source(env))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    let mut config: Config = builder.build()?.try_deserialize()?;
    for (key, text) in Labels::builtin() {
        config.labels.entry(key).or_insert(text);
    }
    Ok(config)
}

/// Loads the dial config. A missing file means built-in defaults, still
/// subject to environment overrides. A file that exists but does not parse is
/// an error.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = match get_config_path() {
        Ok(path) => {
            if !path.exists() {
                log::info!("No config at {}, using defaults", path.display());
            }
            Some(path)
        }
        Err(e) => {
            log::warn!("{e}, using defaults and environment only");
            None
        }
    };
    load_from(path, environment())
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// True when `event` created, changed or removed the config file itself
/// rather than a neighbour in the same directory.
fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    relevant_kind && event.paths.iter().any(|p| p == config_path)
}

// Watching the directory survives editors that replace the file on save.
fn watch_config_dir(
    config_dir: &Path,
    bridge_tx: Sender<notify::Result<notify::Event>>,
) -> Result<RecommendedWatcher, ConfigError> {
    fs_err::create_dir_all(config_dir)?;
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Asks the dial to reload whenever its config file changes on disk.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Dial config will not hot-reload: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent() else {
        return;
    };

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let _watcher = match watch_config_dir(config_dir, bridge_tx) {
        Ok(watcher) => watcher,
        Err(e) => {
            log::error!(
                "Cannot watch {} for dial config changes: {}",
                config_dir.display(),
                e
            );
            return;
        }
    };
    log::info!("Watching {} for dial config changes", config_path.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                log::debug!("Dial config changed ({:?}), requesting reload", event.kind);
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("Config watch error: {}", e),
        }
    }
}
