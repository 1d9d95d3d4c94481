//! Configuration for mnbuild
//!
//! Settings come from environment variables with sensible defaults:
//!
//! - `MNBUILD_JAVA_HOME`: Java toolchain used for native-image probing and
//!   the build session environment; falls back to `GRAALVM_HOME`, then
//!   `JAVA_HOME`. Optional — without it no toolchain is probed or exported.
//! - `MNBUILD_LOG_LEVEL`: logging level - default: "info" (CLI flags take
//!   precedence).

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured Java home does not point at a directory.
    #[error("Java home is not a directory: {0}")]
    BadJavaHome(PathBuf),
}

#[derive(Debug, Clone)]
pub struct MnbuildConfig {
    pub java_home: Option<PathBuf>,
    pub log_level: String,
}

impl Default for MnbuildConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl MnbuildConfig {
    /// Loads configuration from the environment.
    pub fn from_env() -> Self {
        let java_home = ["MNBUILD_JAVA_HOME", "GRAALVM_HOME", "JAVA_HOME"]
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
            .map(PathBuf::from);
        let log_level =
            env::var("MNBUILD_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Self {
            java_home,
            log_level,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(home) = &self.java_home {
            if !home.is_dir() {
                return Err(ConfigError::BadJavaHome(home.clone()));
            }
        }
        Ok(())
    }

    /// The Java home, provided it actually exists on disk.
    pub fn effective_java_home(&self) -> Option<&PathBuf> {
        self.java_home.as_ref().filter(|home| home.is_dir())
    }
}
