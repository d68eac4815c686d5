//! Lockfile text parsing.
//!
//! The game client writes a single line:
//!
//! ```text
//! processName:pid:port:password:protocol
//! ```
//!
//! Segments past the fifth are ignored. There is no escaping, so a colon inside
//! the process name or password corrupts the record; we do not try to recover.

use super::types::LockfileRecord;

const FIELD_COUNT: usize = 5;

/// Parses lockfile contents into a record.
///
/// Returns `None` for empty or missing input, fewer than five segments, or any
/// empty segment. Non-numeric `pid`/`port` segments do not reject the record;
/// the field is `None` instead.
pub fn parse_lockfile<'a>(content: impl Into<Option<&'a str>>) -> Option<LockfileRecord> {
    let content = content.into()?.trim();
    if content.is_empty() {
        return None;
    }

    let parts: Vec<&str> = content.split(':').take(FIELD_COUNT).collect();
    if parts.len() < FIELD_COUNT || parts.iter().any(|part| part.is_empty()) {
        return None;
    }

    Some(LockfileRecord {
        process_name: parts[0].to_string(),
        pid: parse_int_prefix(parts[1]),
        port: parse_int_prefix(parts[2]),
        password: parts[3].to_string(),
        protocol: parts[4].to_string(),
        source_path: None,
    })
}

/// Lenient base-10 parse: skips leading whitespace and one `+`, then reads
/// the leading run of digits, so `"1234abc"` is 1234 and `"+5"` is 5. No
/// digits, a `-`, or overflow give `None`.
fn parse_int_prefix<T: std::str::FromStr>(segment: &str) -> Option<T> {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    unsigned[..digits_end].parse().ok()
}
