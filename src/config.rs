use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::timer::DEFAULT_DURATION_MILLIS;

/// Application configuration, loaded from the XDG config location.
///
/// serde's `default` attribute means a field missing from the TOML file
/// falls back to the Default implementation instead of failing to parse,
/// so the config file is optional and may be partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown length in milliseconds.
    pub duration_millis: u64,
}

/// Presentation knobs for the terminal surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the progress bar portion of the widget.
    pub bar_visible: bool,
    /// Show the numeric seconds readout next to the bar.
    pub timer_visible: bool,
    /// Initial widget width in terminal cells.
    pub width: u16,
    /// Animation tick interval in milliseconds (~30 fps by default).
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_millis: DEFAULT_DURATION_MILLIS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_visible: true,
            timer_visible: true,
            width: 36,
            tick_rate_ms: 33,
        }
    }
}

/// Load the config from `<config_dir>/timerbar/config.toml`.
/// If the file doesn't exist, returns defaults.
pub fn load_config() -> Result<AppConfig> {
    load_from(&paths::config_file())
}

fn load_from(path: &std::path::Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.timer.duration_millis, 10_000);
        assert!(cfg.display.bar_visible);
        assert!(cfg.display.timer_visible);
        assert_eq!(cfg.display.tick_rate_ms, 33);
    }

    #[test]
    fn parse_partial_toml() {
        // A user specifying only some fields gets defaults for the rest
        let toml_str = r#"
[timer]
duration_millis = 30000
"#;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.timer.duration_millis, 30_000);
        assert_eq!(cfg.display.width, 36);
        assert!(cfg.display.bar_visible);
    }

    #[test]
    fn parse_display_section() {
        let toml_str = r#"
[display]
bar_visible = false
width = 60
"#;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!cfg.display.bar_visible);
        assert!(cfg.display.timer_visible);
        assert_eq!(cfg.display.width, 60);
        assert_eq!(cfg.timer.duration_millis, 10_000);
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cfg = load_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(cfg.timer.duration_millis, 10_000);
    }

    #[test]
    fn load_config_file_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[timer]\nduration_millis = 5000\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.timer.duration_millis, 5_000);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn roundtrip_toml() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let loaded: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.timer.duration_millis, cfg.timer.duration_millis);
        assert_eq!(loaded.display.width, cfg.display.width);
    }
}
