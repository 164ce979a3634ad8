//! Source-side records handed to the exporter by the host application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A host-application calendar event, before translation to RFC 5545 form.
///
/// Timestamps are normalized to UTC here; the exporter never consults the
/// event's native timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Host-side identifier; used as the UID unless `uid` overrides it
    pub id: String,
    /// Becomes the SUMMARY
    pub display_name: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Host user id of the creator; empty when unknown
    pub creator: String,
    /// Explicit UID override
    #[serde(default)]
    pub uid: Option<String>,
    /// Explicit revision counter; absent means "never set", not zero
    #[serde(default)]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A host user invited to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub display_name: String,
}
