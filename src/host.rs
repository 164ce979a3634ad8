//! Capability interface to the host application.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::HostConfig;

/// What the export layer needs from the application embedding it.
///
/// User lookups, feature toggles, and the output directory all belong to
/// the host; the exporter only ever calls through this trait.
pub trait Host {
    /// Whether ICS generation is switched on at all.
    fn ics_enabled(&self) -> bool;

    /// Whether written files should be removed when the exporter goes away.
    fn cleanup_enabled(&self) -> bool;

    /// Email address for a host user id. `None` when the user is unknown.
    fn user_email(&self, user_id: &str) -> Option<String>;

    /// Display name for a host user id. `None` when the user is unknown.
    fn user_display_name(&self, user_id: &str) -> Option<String>;

    /// Server identity embedded in the PRODID line.
    fn server_name(&self) -> String;

    /// Directory that receives generated .ics files.
    fn output_dir(&self) -> PathBuf;
}

/// A user known to a [`StaticHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub email: String,
    pub display_name: String,
}

/// A [`Host`] backed by a [`HostConfig`] and a fixed user directory.
///
/// Covers standalone use and tests; real deployments implement [`Host`]
/// against their own session and user stores.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    config: HostConfig,
    users: HashMap<String, DirectoryUser>,
}

impl StaticHost {
    pub fn new(config: HostConfig) -> Self {
        StaticHost {
            config,
            users: HashMap::new(),
        }
    }

    /// Register a user the organizer lookup can resolve.
    pub fn with_user(mut self, id: &str, email: &str, display_name: &str) -> Self {
        self.users.insert(
            id.to_string(),
            DirectoryUser {
                email: email.to_string(),
                display_name: display_name.to_string(),
            },
        );
        self
    }
}

impl Host for StaticHost {
    fn ics_enabled(&self) -> bool {
        self.config.enabled
    }

    fn cleanup_enabled(&self) -> bool {
        self.config.cleanup_on_drop
    }

    fn user_email(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).map(|u| u.email.clone())
    }

    fn user_display_name(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).map(|u| u.display_name.clone())
    }

    fn server_name(&self) -> String {
        self.config.server_name.clone()
    }

    fn output_dir(&self) -> PathBuf {
        self.config.output_dir.clone()
    }
}
