//! Fixed UTC timezone descriptor.
//!
//! All generated events are pinned to UTC regardless of the source event's
//! native zone. This module supplies the TZID value referenced by each
//! VEVENT and the VTIMEZONE component embedded in the calendar; there is
//! no timezone database behind it.

/// TZID value referenced by every generated event.
pub const TZID: &str = "Etc/UTC";

/// The VTIMEZONE component for [`TZID`], one line per entry (unterminated).
pub const VTIMEZONE_LINES: &[&str] = &[
    "BEGIN:VTIMEZONE",
    "TZID:Etc/UTC",
    "BEGIN:STANDARD",
    "DTSTART:19700101T000000",
    "TZOFFSETFROM:+0000",
    "TZOFFSETTO:+0000",
    "TZNAME:UTC",
    "END:STANDARD",
    "END:VTIMEZONE",
];
