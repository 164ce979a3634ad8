//! VEVENT-shaped entities.
//!
//! These are plain owned values: the exporter builds them, the caller keeps
//! them, and nothing below the `ics` module ever sees the underlying
//! icalendar library types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event ready to be wrapped into a [`Calendar`](crate::calendar::Calendar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identity across revisions; never reassigned once set
    pub uid: String,
    /// Revision counter (SEQUENCE); `None` means "never explicitly set"
    pub sequence: Option<i64>,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub organizer: Option<Organizer>,
    pub attendees: Vec<Attendee>,
    /// At most one STATUS at any time, by construction
    pub status: Option<EventStatus>,
    pub url: Option<String>,
}

impl Event {
    /// Attendees that can actually be addressed by mail.
    ///
    /// Email-less attendees stay in the attendee sequence but are skipped
    /// here.
    pub fn mail_recipients(&self) -> impl Iterator<Item = &Attendee> {
        self.attendees.iter().filter(|a| !a.email.is_empty())
    }
}

/// The ORGANIZER of an event, with an optional CN display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub email: String,
    pub name: Option<String>,
}

/// An event attendee (one ATTENDEE line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// May be empty; such attendees are representable but not mailable
    pub email: String,
    pub name: String,
    pub role: Role,
    pub partstat: PartStat,
    pub rsvp: bool,
}

/// Attendee participation role (ROLE parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    RequiredParticipant,
    Chair,
}

impl Role {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Role::RequiredParticipant => "REQ-PARTICIPANT",
            Role::Chair => "CHAIR",
        }
    }
}

/// Attendee participation status (PARTSTAT parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartStat {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
}

impl PartStat {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            PartStat::Accepted => "ACCEPTED",
            PartStat::Declined => "DECLINED",
            PartStat::Tentative => "TENTATIVE",
            PartStat::NeedsAction => "NEEDS-ACTION",
        }
    }
}

/// Event STATUS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
}

impl EventStatus {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::Tentative => "TENTATIVE",
            EventStatus::Cancelled => "CANCELLED",
        }
    }
}
