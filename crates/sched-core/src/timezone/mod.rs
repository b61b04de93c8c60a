//! Timezone normalization between recruiter-local wall-clock time and the
//! canonical UTC storage form.
//!
//! Slots are stored as `(date, start_time, end_time)` where the date is the
//! UTC calendar date of the *start* instant. Conversions roll the date
//! across midnight when the zone offset demands it instead of truncating.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::DomainError;

/// A slot's date/time triple, in either local or UTC form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTimes {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Parse an IANA zone name.
///
/// Callers fall back to "UTC" only at the recruiter-default level, never
/// here.
pub fn parse_zone(name: &str) -> Result<Tz, DomainError> {
    name.parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Convert recruiter-local wall-clock date/times to the UTC storage form.
///
/// The storage form carries a single date, so an interval whose UTC
/// start and end fall on different calendar dates cannot be represented
/// and is rejected.
pub fn to_utc(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    tz: Tz,
) -> Result<SlotTimes, DomainError> {
    if start_time >= end_time {
        return Err(DomainError::ValidationError(
            "start_time must be before end_time".to_string(),
        ));
    }

    let start_utc = resolve_local(date.and_time(start_time), tz)?;
    let end_utc = resolve_local(date.and_time(end_time), tz)?;

    if start_utc.date() != end_utc.date() {
        return Err(DomainError::ValidationError(
            "slot crosses UTC midnight and cannot be stored".to_string(),
        ));
    }

    Ok(SlotTimes {
        date: start_utc.date(),
        start_time: start_utc.time(),
        end_time: end_utc.time(),
    })
}

/// Convert a stored UTC triple back to the recruiter's local zone.
pub fn to_local(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    tz: Tz,
) -> Result<SlotTimes, DomainError> {
    let start_local = Utc
        .from_utc_datetime(&date.and_time(start_time))
        .with_timezone(&tz);
    let end_local = Utc
        .from_utc_datetime(&date.and_time(end_time))
        .with_timezone(&tz);

    Ok(SlotTimes {
        date: start_local.date_naive(),
        start_time: start_local.time(),
        end_time: end_local.time(),
    })
}

/// Resolve a naive local datetime in `tz` to a UTC naive datetime.
///
/// Ambiguous wall-clock times (DST fall-back) take the earlier instant;
/// nonexistent ones (spring-forward gap) are rejected.
fn resolve_local(local: NaiveDateTime, tz: Tz) -> Result<NaiveDateTime, DomainError> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .ok_or_else(|| {
            DomainError::ValidationError(format!(
                "local time {local} does not exist in zone {tz}"
            ))
        })
}
