//! # SOA serial lifecycle management
//!
//! Secondary name servers decide whether to transfer a zone by comparing
//! SOA serial numbers, so every zone edit must advance the serial in a way
//! the secondaries recognize as "newer". This crate computes the next
//! serial for a zone being modified and rewrites the serial field of an
//! SOA record's text representation, honoring the common `YYYYMMDDnn`
//! date-plus-revision convention while leaving autoserials and plain
//! monotonic counters alone.
//!
//! All operations are pure functions over in-memory values. Malformed
//! input never raises an error: the zone editor sits on the display path
//! and must degrade to empty or unchanged output instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use zoneward_serial::SerialManager;
//!
//! let manager = SerialManager::new();
//! let soa = "ns1.example.org admin.example.org 2022082600 28800 7200 604800 86400";
//! let updated = manager.updated_soa_record(soa);
//! assert_ne!(updated, soa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

/// An SOA serial number as an unsigned decimal value.
///
/// The `YYYYMMDDnn` convention produces values wider than `u32` for
/// far-future dates, so the wider type is used throughout.
pub type Serial = u64;

/// Number of whitespace-separated fields in a well-formed SOA record:
/// primary nameserver, responsible email, serial, refresh, retry,
/// expire, minimum.
pub const SOA_FIELD_COUNT: usize = 7;

/// Position of the serial field within an SOA record.
const SERIAL_FIELD: usize = 2;

/// Highest serial treated as a plain monotonic counter.
///
/// Anything below encodes no plausible `YYYYMMDD` date: BIND was written
/// in the early 1980s, so date-based serials start at `1980000000`.
const BIND_EPOCH_CUTOVER: Serial = 1_979_999_999;

/// Maximum per-day revision in the `YYYYMMDDnn` convention.
const MAX_REVISION: u32 = 99;

// ============================================================================
// Clock
// ============================================================================

/// Source of the current calendar date.
///
/// The date branch of serial generation depends on "today"; injecting it
/// keeps the manager deterministic under test.
pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Production clock reading the UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ============================================================================
// Record field access
// ============================================================================

/// Extracts the serial field from an SOA record's text representation.
///
/// Returns the third whitespace-separated token exactly as found, or
/// `None` when the record has fewer than three tokens. Absence is an
/// expected outcome for unset or placeholder records, not an error.
pub fn extract_serial(soa_record: &str) -> Option<&str> {
    soa_record.split_whitespace().nth(SERIAL_FIELD)
}

/// Returns the SOA record with the serial field replaced by `serial`.
///
/// Every other byte of the input, tokens and separators alike, is
/// preserved. Empty input yields an empty string; a record without
/// exactly seven fields is never mutated and also yields an empty
/// string.
pub fn set_serial(soa_record: &str, serial: Serial) -> String {
    if soa_record.trim().is_empty() {
        return String::new();
    }
    if soa_record.split_whitespace().count() != SOA_FIELD_COUNT {
        debug!("SOA record does not have exactly seven fields, refusing to rewrite it");
        return String::new();
    }
    match token_span(soa_record, SERIAL_FIELD) {
        Some((start, end)) => {
            let mut updated = String::with_capacity(soa_record.len() + 4);
            updated.push_str(&soa_record[..start]);
            updated.push_str(&serial.to_string());
            updated.push_str(&soa_record[end..]);
            updated
        }
        None => String::new(),
    }
}

/// Byte span of the `index`-th whitespace-separated token.
fn token_span(text: &str, index: usize) -> Option<(usize, usize)> {
    let mut seen = 0;
    let mut start = None;
    for (pos, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                if seen == index {
                    return Some((begin, pos));
                }
                seen += 1;
            }
        } else if start.is_none() {
            start = Some(pos);
        }
    }
    match start {
        Some(begin) if seen == index => Some((begin, text.len())),
        _ => None,
    }
}

// ============================================================================
// Serial manager
// ============================================================================

/// Computes successor serials for zones being modified.
///
/// Stateless apart from the injected [`Clock`]; safe to share freely
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct SerialManager<C = SystemClock> {
    clock: C,
}

impl SerialManager<SystemClock> {
    /// Creates a manager using the UTC calendar date.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for SerialManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SerialManager<C> {
    /// Creates a manager with an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Computes the next serial for a zone being modified.
    ///
    /// Per RFC 1982 a zone transfer only occurs when the new serial is
    /// arithmetically greater than the previous one. The policy:
    ///
    /// - `0` is an autoserial and passes through unchanged; the storage
    ///   layer numbers those itself.
    /// - Values that cannot encode a `YYYYMMDD` date are plain counters
    ///   and increment by one. At the `1979999999` cutover the counter
    ///   resets to `1`.
    /// - Date-based serials reset to today with revision `00` when
    ///   stale, bump the two-digit revision on the same day, and roll to
    ///   the next day once the revision reaches `99`. A serial staged in
    ///   the future advances relative to its own encoded date rather
    ///   than collapsing back to the present.
    pub fn next_serial(&self, current: Serial) -> Serial {
        if current == 0 {
            return 0;
        }
        if current < BIND_EPOCH_CUTOVER {
            return current + 1;
        }
        if current == BIND_EPOCH_CUTOVER {
            return 1;
        }

        let today = self.clock.today();
        let revision = (current % 100) as u32;

        let Some(encoded) = decode_date(current / 100) else {
            debug!(serial = current, "serial encodes no valid calendar date, resetting to today");
            return date_serial(today, 0);
        };

        if encoded < today {
            date_serial(today, 0)
        } else if revision < MAX_REVISION {
            date_serial(encoded, revision + 1)
        } else {
            date_serial(next_date(encoded), 0)
        }
    }

    /// Returns the SOA record with its serial advanced to the next value.
    ///
    /// Empty input yields an empty string, as does a record without
    /// exactly seven fields. A serial field that is not an unsigned
    /// decimal leaves the record untouched. Everything other than the
    /// serial token is preserved byte for byte.
    pub fn updated_soa_record(&self, soa_record: &str) -> String {
        if soa_record.trim().is_empty() {
            return String::new();
        }
        if soa_record.split_whitespace().count() != SOA_FIELD_COUNT {
            debug!("SOA record does not have exactly seven fields, leaving serial alone");
            return String::new();
        }
        let Some(serial_text) = extract_serial(soa_record) else {
            return String::new();
        };
        let Ok(current) = serial_text.parse::<Serial>() else {
            debug!(serial = serial_text, "SOA serial is not an unsigned decimal, keeping record as is");
            return soa_record.to_string();
        };
        set_serial(soa_record, self.next_serial(current))
    }
}

/// Returns the calendar day after `date`.
pub fn next_date(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Interprets an eight-digit `YYYYMMDD` value as a calendar date.
fn decode_date(value: u64) -> Option<NaiveDate> {
    let year = i32::try_from(value / 10_000).ok()?;
    let month = ((value / 100) % 100) as u32;
    let day = (value % 100) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Packs a date and revision into a `YYYYMMDDnn` serial.
fn date_serial(date: NaiveDate, revision: u32) -> Serial {
    let encoded =
        date.year() as u64 * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day());
    encoded * 100 + u64::from(revision)
}

// ============================================================================
// Tests
// ============================================================================
