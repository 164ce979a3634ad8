//! ICS rendering.
//!
//! The icalendar crate handles property encoding, line folding, and CRLF
//! output; a small text post-pass stamps our PRODID and embeds the UTC
//! VTIMEZONE component.

use icalendar::{Component, EventLike, Property};

use crate::calendar::Calendar;
use crate::error::IcsResult;
use crate::event::{Attendee, Event};
use crate::timezone;

/// Render a calendar to RFC 5545 text.
pub fn generate_ics(calendar: &Calendar) -> IcsResult<String> {
    let mut cal = icalendar::Calendar::new();

    if let Some(method) = calendar.method {
        cal.append_property(Property::new("METHOD", method.as_ics_str()));
    }

    for event in &calendar.events {
        cal.push(to_ics_event(event));
    }

    let cal = cal.done();

    Ok(rewrite_calendar_text(&cal.to_string(), &calendar.prod_id))
}

fn to_ics_event(event: &Event) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);

    // DTSTAMP - required by RFC 5545
    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // SEQUENCE only when a revision was ever set
    if let Some(seq) = event.sequence {
        ics_event.add_property("SEQUENCE", seq.to_string());
    }

    ics_event.add_property("DTSTART", event.start.format("%Y%m%dT%H%M%SZ").to_string());
    ics_event.add_property("DTEND", event.end.format("%Y%m%dT%H%M%SZ").to_string());

    ics_event.description(&event.description);
    ics_event.location(&event.location);

    // Every event references the embedded UTC timezone
    ics_event.add_property("TZID", timezone::TZID);

    if let Some(status) = event.status {
        ics_event.add_property("STATUS", status.as_ics_str());
    }

    // ORGANIZER with CN parameter
    if let Some(ref org) = event.organizer {
        let mut prop = Property::new("ORGANIZER", mail_uri(&org.email));
        if let Some(ref name) = org.name {
            prop.add_parameter("CN", name);
        }
        ics_event.append_property(prop);
    }

    // ATTENDEE (multi-property - can appear multiple times)
    for attendee in &event.attendees {
        ics_event.append_multi_property(attendee_property(attendee));
    }

    if let Some(ref url) = event.url {
        ics_event.add_property("URL", url);
    }

    ics_event.done()
}

fn attendee_property(attendee: &Attendee) -> Property {
    let mut prop = Property::new("ATTENDEE", mail_uri(&attendee.email));
    prop.add_parameter("ROLE", attendee.role.as_ics_str());
    prop.add_parameter("CN", &attendee.name);
    prop.add_parameter("PARTSTAT", attendee.partstat.as_ics_str());
    prop.add_parameter("RSVP", if attendee.rsvp { "TRUE" } else { "FALSE" });
    prop
}

/// CAL-ADDRESS value for an email address.
///
/// Email-less entries keep the literal `noemail` so the line stays
/// parsable; such attendees are never mail-addressed anyway.
fn mail_uri(email: &str) -> String {
    if email.is_empty() {
        "noemail".to_string()
    } else {
        format!("mailto:{email}")
    }
}

/// Rewrite the icalendar crate's output:
/// - Replace its default PRODID with the calendar's own
/// - Insert the UTC VTIMEZONE component before the first VEVENT
fn rewrite_calendar_text(ics: &str, prod_id: &str) -> String {
    let mut result = String::with_capacity(ics.len() + 256);
    let mut timezone_written = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(prod_id);
            result.push_str("\r\n");
            continue;
        }

        if line == "BEGIN:VEVENT" && !timezone_written {
            for tz_line in timezone::VTIMEZONE_LINES {
                result.push_str(tz_line);
                result.push_str("\r\n");
            }
            timezone_written = true;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
