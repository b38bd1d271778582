//! Startup configuration loaded from `assets/config/scenes.ron`.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scenes::SceneId;

/// Default location of the scene configuration file.
pub const CONFIG_PATH: &str = "assets/config/scenes.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Scene policy and timing. Every field is optional in the file.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Scenes that finalize without waiting for the confirmation key.
    pub auto_activate: Vec<SceneId>,
    /// Scenes that need `GameUi` loaded alongside them.
    pub needs_shared_ui: Vec<SceneId>,
    /// Seconds between startup and the first request for the main menu.
    pub bootstrap_delay_secs: f32,
    /// Load progress gained per second.
    pub load_rate: f32,
    /// Seconds to wait after the fade-in before the target becomes the active container.
    pub settle_delay_secs: f32,
    /// Fade duration used by scene buttons.
    pub default_fade_secs: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            auto_activate: vec![SceneId::MainMenu],
            needs_shared_ui: SceneId::LEVELS.to_vec(),
            bootstrap_delay_secs: 1.0,
            load_rate: 1.5,
            settle_delay_secs: 0.02,
            default_fade_secs: 0.5,
        }
    }
}

impl SceneConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, falling back to defaults and handing back the error.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_from_file(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Human-readable problems with the values. Empty when the config is sane.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.auto_activate.contains(&SceneId::Init) {
            warnings.push("auto_activate lists Init, which is never loaded".to_string());
        }
        if self.needs_shared_ui.contains(&SceneId::Init) {
            warnings.push("needs_shared_ui lists Init, which is never loaded".to_string());
        }
        if !self.auto_activate.contains(&SceneId::MainMenu) {
            warnings.push("auto_activate is missing MainMenu; menus will wait for confirmation".to_string());
        }
        if self.load_rate.is_nan() || self.load_rate <= 0.0 {
            warnings.push(format!(
                "load_rate {} must be > 0, using {}",
                self.load_rate,
                Self::default().load_rate
            ));
        }
        for (name, value) in [
            ("bootstrap_delay_secs", self.bootstrap_delay_secs),
            ("settle_delay_secs", self.settle_delay_secs),
            ("default_fade_secs", self.default_fade_secs),
        ] {
            if value.is_nan() || value < 0.0 {
                warnings.push(format!("{name} {value} negative, treated as 0"));
            }
        }
        warnings
    }

    /// Load rate with invalid values replaced by the default.
    #[must_use]
    pub fn effective_load_rate(&self) -> f32 {
        if self.load_rate.is_nan() || self.load_rate <= 0.0 {
            Self::default().load_rate
        } else {
            self.load_rate
        }
    }
}

/// Inserts `SceneConfig` from [`CONFIG_PATH`] unless one is already present.
pub fn plugin(app: &mut App) {
    app.register_type::<SceneId>();

    if app.world().contains_resource::<SceneConfig>() {
        return;
    }
    let (config, err) = SceneConfig::load_or_default(CONFIG_PATH);
    if let Some(err) = err {
        warn!("Using default scene config: {err}");
    }
    for warning in config.validate() {
        warn!("Scene config: {warning}");
    }
    app.insert_resource(config);
}
