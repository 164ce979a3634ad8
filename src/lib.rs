//! Translation layer from host calendar events to RFC 5545 files.
//!
//! The host application hands us its own event records; we build VEVENT
//! entities, manage attendee/organizer/status/sequence semantics across
//! their lifecycle, wrap them into a validated VCALENDAR, and write the
//! result as an .ics file other calendar clients can parse.
//!
//! The host's side of the contract (user lookups, feature toggles, server
//! identity, output directory) is the [`Host`] trait; everything else
//! happens on an [`IcsExporter`] constructed around it.

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod exporter;
pub mod host;
pub mod ics;
pub mod record;
pub mod timezone;

pub use calendar::{Calendar, Method};
pub use config::HostConfig;
pub use error::{IcsError, IcsResult};
pub use event::{Attendee, Event, EventStatus, Organizer, PartStat, Role};
pub use exporter::IcsExporter;
pub use host::{Host, StaticHost};
pub use record::{EventRecord, User};
