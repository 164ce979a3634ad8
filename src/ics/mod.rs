//! RFC 5545 rendering.

mod generate;

pub use generate::generate_ics;
