use std::path::PathBuf;
use std::sync::OnceLock;

/// XDG-compliant config location for timerbar.
///
/// On Linux: $XDG_CONFIG_HOME/timerbar (~/.config/timerbar).
/// On macOS: ~/Library/Application Support/timerbar.
///
/// The `dirs` crate handles platform detection; the resolved base path is
/// cached in a static OnceLock so the lookup only happens once.

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Root config directory: $XDG_CONFIG_HOME/timerbar
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timerbar")
    })
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
