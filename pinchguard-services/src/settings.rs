// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

use crate::surface::{LayoutAlgorithm, SurfaceProfile};

/// Prefix of the configuration directories.
const XDG_PREFIX: &str = "pinchguard-0";

/// The main configuration structure for the shell.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Rendering surface layout settings
    #[serde(default)]
    pub surface: SurfaceSection,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// The `[general]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Selects `Debug` logging unless `log_level` is set.
    pub debug: Option<bool>,
    /// Explicit log level filter, e.g. `"trace"`.
    pub log_level: Option<String>,
}

/// The `[surface]` section. Unset keys fall back to [SurfaceProfile::default].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurfaceSection {
    /// Layout strategy, in kebab-case (`"text-autosizing"`).
    pub layout_algorithm: Option<LayoutAlgorithm>,
    /// Whether pages load zoomed out to fit the screen width.
    pub load_with_overview_mode: Option<bool>,
}

/// Registry for managing shell settings.
pub struct SettingsRegistry {
    config: Config,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::with_defaults();
        registry.load().await?;
        Ok(registry)
    }

    /// Create a registry holding only the built-in defaults.
    pub fn with_defaults() -> Self {
        Self {
            config: Config {
                general: GeneralSettings {
                    debug: Some(false),
                    log_level: None,
                },
                surface: SurfaceSection::default(),
                other: HashMap::new(),
            },
        }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/pinchguard-0/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/pinchguard-0/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/pinchguard-0/config.toml (XDG_CONFIG_HOME)
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        let filename = "config.toml";

        for path in xdg_dirs.find_data_files(filename).rev() {
            self.load_file(&path).await;
        }

        for path in xdg_dirs.find_config_files(filename).rev() {
            self.load_file(&path).await;
        }

        if let Some(user_config_path) = xdg_dirs.find_config_file(filename) {
            self.load_file(&user_config_path).await;
        }

        Ok(())
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: Config) {
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        if let Some(algorithm) = other.surface.layout_algorithm {
            self.config.surface.layout_algorithm = Some(algorithm);
        }
        if let Some(overview) = other.surface.load_with_overview_mode {
            self.config.surface.load_with_overview_mode = Some(overview);
        }

        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// The surface profile, with defaults for anything not configured.
    pub fn surface_profile(&self) -> SurfaceProfile {
        let defaults = SurfaceProfile::default();
        SurfaceProfile {
            layout_algorithm: self
                .config
                .surface
                .layout_algorithm
                .unwrap_or(defaults.layout_algorithm),
            load_with_overview_mode: self
                .config
                .surface
                .load_with_overview_mode
                .unwrap_or(defaults.load_with_overview_mode),
        }
    }

    /// The configured log level.
    ///
    /// An explicit `log_level` wins; otherwise `debug = true` selects `Debug`
    /// and everything else `Info`. The host installs the logger.
    pub fn log_level(&self) -> log::LevelFilter {
        if let Some(level) = &self.config.general.log_level {
            match level.parse() {
                Ok(filter) => return filter,
                Err(_) => log::warn!("Unknown log level '{}', ignoring", level),
            }
        }

        if self.config.general.debug == Some(true) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Load configuration from multiple custom paths asynchronously.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

                let loaded_config: Config = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))?;

                self.merge(loaded_config);
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Reload configuration asynchronously (re-runs the full load process).
    pub async fn reload_async(&mut self) -> Result<()> {
        *self = Self::with_defaults();
        self.load().await
    }
}
