//! Calendar container and structural validation.

use serde::{Deserialize, Serialize};

use crate::error::{IcsError, IcsResult};
use crate::event::Event;

/// VERSION property value, fixed by RFC 5545.
pub const VERSION: &str = "2.0";

/// CALSCALE property value; only the Gregorian scale is supported.
pub const CALSCALE: &str = "GREGORIAN";

/// iTIP method carried on a calendar (METHOD property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Publish,
    Request,
    Cancel,
    Reply,
}

impl Method {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Method::Publish => "PUBLISH",
            Method::Request => "REQUEST",
            Method::Cancel => "CANCEL",
            Method::Reply => "REPLY",
        }
    }
}

/// A validated, immutable collection of events plus protocol metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    /// PRODID value, e.g. `-//server//ICS Export//EN`
    pub prod_id: String,
    pub events: Vec<Event>,
    pub method: Option<Method>,
}

impl Calendar {
    /// Check the structural rules a calendar client would reject us for.
    ///
    /// METHOD:REQUEST signals an invitation, so every event must name at
    /// least one attendee to respond.
    pub fn validate(&self) -> IcsResult<()> {
        for event in &self.events {
            if event.uid.is_empty() {
                return Err(IcsError::Validation("event has an empty UID".to_string()));
            }

            if event.end < event.start {
                return Err(IcsError::Validation(format!(
                    "event {} ends before it starts",
                    event.uid
                )));
            }
        }

        if self.method == Some(Method::Request) {
            for event in &self.events {
                if event.attendees.is_empty() {
                    return Err(IcsError::Validation(format!(
                        "METHOD:REQUEST requires at least one attendee on event {}",
                        event.uid
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Attendee, PartStat, Role};
    use chrono::{TimeZone, Utc};

    fn make_event(uid: &str) -> Event {
        Event {
            uid: uid.to_string(),
            sequence: None,
            summary: "Team meeting".to_string(),
            description: "Weekly sync".to_string(),
            location: "Room 2".to_string(),
            start: Utc.with_ymd_and_hms(2012, 5, 4, 13, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2012, 5, 4, 14, 0, 0).unwrap(),
            organizer: None,
            attendees: vec![],
            status: None,
            url: None,
        }
    }

    fn make_attendee(email: &str) -> Attendee {
        Attendee {
            email: email.to_string(),
            name: "Someone".to_string(),
            role: Role::RequiredParticipant,
            partstat: PartStat::Accepted,
            rsvp: false,
        }
    }

    fn make_calendar(events: Vec<Event>, method: Option<Method>) -> Calendar {
        Calendar {
            prod_id: "-//test//ICS Export//EN".to_string(),
            events,
            method,
        }
    }

    #[test]
    fn plain_calendar_validates() {
        let calendar = make_calendar(vec![make_event("a")], None);
        assert!(calendar.validate().is_ok());
    }

    #[test]
    fn request_without_attendees_is_invalid() {
        let calendar = make_calendar(vec![make_event("a")], Some(Method::Request));
        assert!(matches!(
            calendar.validate(),
            Err(IcsError::Validation(_))
        ));
    }

    #[test]
    fn request_with_one_attendee_validates() {
        let mut event = make_event("a");
        event.attendees.push(make_attendee("alice@example.com"));

        let calendar = make_calendar(vec![event], Some(Method::Request));
        assert!(calendar.validate().is_ok());
    }

    #[test]
    fn request_checks_every_event() {
        let mut with_attendee = make_event("a");
        with_attendee.attendees.push(make_attendee("alice@example.com"));
        let without = make_event("b");

        let calendar = make_calendar(vec![with_attendee, without], Some(Method::Request));
        assert!(calendar.validate().is_err());
    }

    #[test]
    fn inverted_time_range_is_invalid() {
        let mut event = make_event("a");
        std::mem::swap(&mut event.start, &mut event.end);

        let calendar = make_calendar(vec![event], None);
        assert!(matches!(
            calendar.validate(),
            Err(IcsError::Validation(_))
        ));
    }

    #[test]
    fn empty_uid_is_invalid() {
        let calendar = make_calendar(vec![make_event("")], None);
        assert!(calendar.validate().is_err());
    }
}
