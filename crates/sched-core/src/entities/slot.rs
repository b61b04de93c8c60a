//! Availability slot entity - a recruiter-defined bookable UTC time interval

use chrono::{NaiveDate, NaiveTime};

/// A bookable time slot, stored entirely in UTC.
///
/// Invariant: `start_time < end_time` on the same UTC calendar date; the
/// model has no cross-midnight slots. `booked` is true iff exactly one
/// booking references this slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub id: i64,
    pub recruiter_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booked: bool,
}

/// Slot data prior to insertion (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub recruiter_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Half-open interval intersection: `[a_start, a_end)` meets `[b_start, b_end)`.
///
/// Back-to-back slots (one ending exactly where the next starts) do not
/// overlap.
pub fn intervals_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Generate a fallback meeting link when the external provisioner is
/// unavailable: `https://<domain>/<random 10 lowercase alphanumerics>`.
pub fn generate_fallback_link(domain: &str) -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LEN: usize = 10;

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("https://{domain}/{suffix}")
}
