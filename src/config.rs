//! Host configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IcsError, IcsResult};

fn default_enabled() -> bool {
    true
}

fn default_server_name() -> String {
    "localhost".to_string()
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Settings for a config-backed host.
///
/// Deployments that implement [`Host`](crate::host::Host) against their own
/// infrastructure don't need this; it exists for standalone use where a
/// toml file is configuration enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Master toggle for ICS generation
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Remove written files when the exporter is dropped
    #[serde(default)]
    pub cleanup_on_drop: bool,

    /// Server identity embedded in the PRODID line
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Directory that receives generated .ics files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            enabled: default_enabled(),
            cleanup_on_drop: false,
            server_name: default_server_name(),
            output_dir: default_output_dir(),
        }
    }
}

impl HostConfig {
    /// Default config location (~/.config/ics-export/config.toml)
    pub fn default_path() -> IcsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsError::Config("Could not determine config directory".into()))?
            .join("ics-export");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from a toml file. A missing file yields the defaults.
    pub fn load(path: &Path) -> IcsResult<Self> {
        if !path.exists() {
            return Ok(HostConfig::default());
        }

        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| {
            IcsError::Config(format!("Could not parse config at {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert!(config.enabled);
        assert!(!config.cleanup_on_drop);
        assert_eq!(config.server_name, "localhost");
        assert_eq!(config.output_dir, std::env::temp_dir());
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: HostConfig = toml::from_str(
            "enabled = false\ncleanup_on_drop = true\nserver_name = \"cal.example.org\"\n",
        )
        .unwrap();
        assert!(!config.enabled);
        assert!(config.cleanup_on_drop);
        assert_eq!(config.server_name, "cal.example.org");
    }
}
