//! Presentation and host preferences
//!
//! Gameplay tuning lives in `consts`; this file only covers how a run is
//! drawn and hosted. Persisted as JSON next to the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::ambience::DEFAULT_SNOWFLAKES;

/// Environment variable naming an alternative settings file
pub const SETTINGS_ENV: &str = "CATCHER_SETTINGS";
pub const DEFAULT_SETTINGS_FILE: &str = "catcher_settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings parse error for {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Settings encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments used for large circles (sun, tree crowns)
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 30,
            QualityPreset::High => 60,
        }
    }

    /// Number of winter snowflakes
    pub fn snowflake_count(&self) -> usize {
        match self {
            QualityPreset::Low => DEFAULT_SNOWFLAKES / 4,
            QualityPreset::Medium | QualityPreset::High => DEFAULT_SNOWFLAKES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    /// Freeze fire flicker
    pub reduced_motion: bool,

    /// Fixed run seed; `None` picks one from the clock
    pub seed: Option<u64>,

    /// Length of the headless demo run in seconds
    pub demo_seconds: f32,

    /// Game overs before the demo stops early
    pub demo_runs: u32,

    /// Try to draw the final demo frame on the GPU
    pub offscreen_render: bool,
}

/// Command-line values that win over the settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub quality: Option<QualityPreset>,
    pub seed: Option<u64>,
    pub demo_seconds: Option<f32>,
    pub demo_runs: Option<u32>,
    pub no_render: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            reduced_motion: false,
            seed: None,
            demo_seconds: 30.0,
            demo_runs: 3,
            offscreen_render: true,
        }
    }
}

impl Settings {
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(quality) = overrides.quality {
            self.quality = quality;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(seconds) = overrides.demo_seconds {
            self.demo_seconds = seconds;
        }
        if let Some(runs) = overrides.demo_runs {
            self.demo_runs = runs;
        }
        if overrides.no_render {
            self.offscreen_render = false;
        }
    }

    /// Whether the fires animate (respects reduced_motion)
    pub fn effective_fire_flicker(&self) -> bool {
        !self.reduced_motion
    }

    pub fn circle_segments(&self) -> u32 {
        self.quality.circle_segments()
    }

    pub fn snowflake_count(&self) -> usize {
        self.quality.snowflake_count()
    }

    /// Settings file path: `$CATCHER_SETTINGS` or the default file name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
