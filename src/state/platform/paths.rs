//! Locations of the configuration and log files.
//!
//! | Platform | Directory |
//! |----------|-----------|
//! | Linux | `~/.config/blockdrill` |
//! | macOS | `~/Library/Application Support/blockdrill` |
//! | Windows | `%APPDATA%/blockdrill` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "blockdrill";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log file name.
pub const LOG_FILE_NAME: &str = "blockdrill.log";

// ============================================================================
// AppPaths
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Path of the JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of the tracing log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(LOG_FILE_NAME))
    }
}
