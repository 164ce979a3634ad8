//! The export service: translation, attendee assignment, lifecycle,
//! assembly, and serialization.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::calendar::{Calendar, Method};
use crate::error::IcsResult;
use crate::event::{Attendee, Event, EventStatus, Organizer, PartStat, Role};
use crate::host::Host;
use crate::ics::generate_ics;
use crate::record::{EventRecord, User};

/// Translates host events into RFC 5545 calendars and writes them to disk.
///
/// Every operation short-circuits to "no result" while the host has ICS
/// generation switched off; nothing is partially built in that case.
pub struct IcsExporter<H: Host> {
    host: H,
    /// Files to remove when the exporter is dropped (host cleanup policy)
    cleanup: Mutex<Vec<PathBuf>>,
}

impl<H: Host> IcsExporter<H> {
    pub fn new(host: H) -> Self {
        IcsExporter {
            host,
            cleanup: Mutex::new(Vec::new()),
        }
    }

    /// Whether the host has ICS generation switched on.
    pub fn is_enabled(&self) -> bool {
        self.host.ics_enabled()
    }

    /// Build an [`Event`] from a host record.
    ///
    /// The UID is the record's explicit override when present, the record
    /// id otherwise, and is stable from here on. Attendees are added with
    /// the required-participant role. An unresolvable creator or a
    /// malformed URL is recovered by omission.
    pub fn create_event(&self, record: &EventRecord, attendees: &[User]) -> Option<Event> {
        if !self.host.ics_enabled() {
            debug!("ICS generation is disabled, skipping event creation");
            return None;
        }

        let uid = record.uid.clone().unwrap_or_else(|| record.id.clone());

        let mut event = Event {
            uid,
            sequence: record.sequence,
            summary: record.display_name.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            start: record.start,
            end: record.end,
            organizer: self.resolve_organizer(&record.creator),
            attendees: Vec::new(),
            status: None,
            url: None,
        };

        push_attendees(&mut event, attendees, Role::RequiredParticipant);

        // A URL that does not parse is dropped; the event stays valid
        if let Some(ref raw) = record.url {
            match Url::parse(raw) {
                Ok(_) => event.url = Some(raw.clone()),
                Err(e) => warn!("Dropping malformed URL {raw:?} on event {}: {e}", event.uid),
            }
        }

        debug!(uid = %event.uid, "built event");
        Some(event)
    }

    /// Append attendees with the required-participant role.
    pub fn add_attendees(&self, event: Event, users: &[User]) -> Option<Event> {
        self.add_attendees_with_role(event, users, Role::RequiredParticipant)
    }

    /// Append attendees with the chair role.
    pub fn add_chair_attendees(&self, event: Event, users: &[User]) -> Option<Event> {
        self.add_attendees_with_role(event, users, Role::Chair)
    }

    fn add_attendees_with_role(
        &self,
        mut event: Event,
        users: &[User],
        role: Role,
    ) -> Option<Event> {
        if !self.host.ics_enabled() {
            debug!("ICS generation is disabled, skipping attendee assignment");
            return None;
        }

        push_attendees(&mut event, users, role);

        debug!(uid = %event.uid, attendees = event.attendees.len(), "assigned attendees");
        Some(event)
    }

    /// Mark an event cancelled.
    ///
    /// Cancellations must carry a SEQUENCE: an event that never had one
    /// gets 1, an explicit one is left unchanged.
    pub fn cancel_event(&self, mut event: Event) -> Option<Event> {
        if !self.host.ics_enabled() {
            debug!("ICS generation is disabled, skipping cancellation");
            return None;
        }

        event.status = Some(EventStatus::Cancelled);
        if event.sequence.is_none() {
            event.sequence = Some(1);
        }

        debug!(uid = %event.uid, "cancelled event");
        Some(event)
    }

    /// Wrap finished events into a validated [`Calendar`].
    ///
    /// Returns `Ok(None)` when generation is disabled or `events` is
    /// empty; a broken structural rule or a METHOD:REQUEST calendar
    /// without attendees is a hard validation error.
    pub fn create_calendar(
        &self,
        events: Vec<Event>,
        method: Option<Method>,
    ) -> IcsResult<Option<Calendar>> {
        if !self.host.ics_enabled() {
            debug!("ICS generation is disabled, skipping calendar creation");
            return Ok(None);
        }

        if events.is_empty() {
            warn!("List of events was empty, no calendar will be created");
            return Ok(None);
        }

        let calendar = Calendar {
            prod_id: format!("-//{}//ICS Export//EN", self.host.server_name()),
            events,
            method,
        };
        calendar.validate()?;

        debug!(events = calendar.events.len(), "assembled calendar");
        Ok(Some(calendar))
    }

    /// Write the rendered calendar to `<output_dir>/<uuid>.ics`.
    ///
    /// Every call picks a fresh random name, so identical calendars land
    /// in distinct files and concurrent writers never collide. I/O
    /// failures surface as errors.
    pub fn write_to_file(&self, calendar: &Calendar) -> IcsResult<Option<PathBuf>> {
        if !self.host.ics_enabled() {
            debug!("ICS generation is disabled, skipping file write");
            return Ok(None);
        }

        let path = self
            .host
            .output_dir()
            .join(format!("{}.ics", Uuid::new_v4()));

        let content = generate_ics(calendar)?;
        fs::write(&path, content)?;

        if self.host.cleanup_enabled() {
            if let Ok(mut cleanup) = self.cleanup.lock() {
                cleanup.push(path.clone());
            }
        }

        debug!(path = %path.display(), "wrote calendar file");
        Ok(Some(path))
    }

    // Organizer only when the creator resolves to a usable email; lookup
    // misses are recovered by omission.
    fn resolve_organizer(&self, creator: &str) -> Option<Organizer> {
        if creator.is_empty() {
            return None;
        }

        match self.host.user_email(creator) {
            Some(email) if !email.is_empty() => Some(Organizer {
                email,
                name: self.host.user_display_name(creator),
            }),
            _ => {
                warn!("No email for creator {creator:?}, omitting ORGANIZER");
                None
            }
        }
    }
}

impl<H: Host> Drop for IcsExporter<H> {
    fn drop(&mut self) {
        // Best-effort removal of the files the host asked us to clean up
        if let Ok(cleanup) = self.cleanup.get_mut() {
            for path in cleanup.drain(..) {
                let _ = fs::remove_file(path);
            }
        }
    }
}

/// Attendees arrive pre-confirmed: PARTSTAT=ACCEPTED, RSVP=FALSE.
/// Duplicates are appended as-is; deduplication belongs to the caller.
fn push_attendees(event: &mut Event, users: &[User], role: Role) {
    for user in users {
        event.attendees.push(Attendee {
            email: user.email.clone(),
            name: user.display_name.clone(),
            role,
            partstat: PartStat::Accepted,
            rsvp: false,
        });
    }
}
