// SPDX-License-Identifier: MPL-2.0
//! Location of the configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` from the command line, or a
//!    temporary directory in tests
//! 2. **Environment variable** (`ICED_ALERT_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedAlert";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_ALERT_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/IcedAlert/`
/// - macOS: `~/Library/Application Support/IcedAlert/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedAlert\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/explicit");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/iced_alert_env");

        let dir = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(dir, Some(PathBuf::from("/tmp/iced_alert_env")));
    }

    #[test]
    fn platform_default_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(dir) = get_app_config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
