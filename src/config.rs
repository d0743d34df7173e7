use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sampler::DEFAULT_PERIOD;
use crate::status::Thresholds;

pub const MIN_INTERVAL_SECS: u64 = 1;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub thresholds: Thresholds,
    pub monitor: MonitorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub interval_secs: u64,
    /// Unset means the platform default source.
    pub source_path: Option<PathBuf>,
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            interval_secs: DEFAULT_PERIOD.as_secs(),
            source_path: None,
            output: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Executables tried in order when opening a system monitor.
    pub apps: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            apps: vec!["gnome-system-monitor".to_string(), "gnome-usage".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl Config {
    /// Clamps values the sampler cannot run with.
    pub fn sanitize(&mut self) {
        if self.general.interval_secs < MIN_INTERVAL_SECS {
            tracing::warn!(
                interval_secs = self.general.interval_secs,
                "interval too short, using {MIN_INTERVAL_SECS}s"
            );
            self.general.interval_secs = MIN_INTERVAL_SECS;
        }
        if self.thresholds.sanitize() {
            tracing::warn!(
                thresholds = ?self.thresholds,
                "threshold not a finite ratio in [0, 1], using defaults for that metric"
            );
        }
        let t = &self.thresholds;
        if t.mem_warn > t.mem_critical || t.swap_warn > t.swap_critical {
            tracing::warn!(thresholds = ?t, "warn threshold above critical threshold");
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.general.output).unwrap_or_else(|| {
            tracing::warn!(output = %self.general.output, "unknown output format, using text");
            OutputFormat::Text
        })
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ramswap").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "config not readable, using defaults");
            Config::default()
        }
    }
}
