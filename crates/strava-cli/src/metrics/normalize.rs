//! Normalization of raw activity records into the canonical dataset shape

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, StravaError};
use crate::models::{ActivityRecord, NormalizedActivity};

/// Normalize a batch of raw records.
///
/// Derives `distance_km` and `moving_hours` when their source fields are
/// present, resolves the sport category, and decomposes `start_date_local`
/// into calendar date plus ISO week-year and week number.
///
/// A record without `start_date_local` fails the whole batch with
/// [`StravaError::MissingField`]; an unparseable timestamp fails it with
/// [`StravaError::Parse`]. Failing the batch keeps ingest problems visible
/// instead of silently dropping rows.
pub fn normalize(records: &[ActivityRecord]) -> Result<Vec<NormalizedActivity>> {
    records.iter().map(normalize_record).collect()
}

/// Recompute the derived fields of an already-normalized batch.
///
/// Idempotent: the raw records are embedded untouched, so the output equals
/// the input for any batch produced by [`normalize`].
pub fn renormalize(activities: &[NormalizedActivity]) -> Result<Vec<NormalizedActivity>> {
    activities.iter().map(|a| normalize_record(&a.record)).collect()
}

fn normalize_record(record: &ActivityRecord) -> Result<NormalizedActivity> {
    let raw = record
        .start_date_local
        .as_deref()
        .ok_or_else(|| StravaError::missing_field("start_date_local"))?;
    let start_time = parse_local_timestamp(raw)?;
    let iso = start_time.date().iso_week();

    Ok(NormalizedActivity {
        record: record.clone(),
        sport_type: record.sport(),
        start_time,
        distance_km: record.distance_km(),
        moving_hours: record.moving_hours(),
        date: start_time.date(),
        year: iso.year(),
        week: iso.week(),
    })
}

/// Parse a local civil timestamp.
///
/// Values are already in the athlete's local time; a trailing `Z` or UTC
/// offset is ignored rather than converted. Accepts `YYYY-MM-DDTHH:MM:SS`,
/// the space-separated variant, and a bare `YYYY-MM-DD` (midnight).
pub(crate) fn parse_local_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Some(prefix) = raw.get(..19) {
        if let Ok(ts) = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M:%S") {
            return Ok(ts);
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%d %H:%M:%S") {
            return Ok(ts);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(StravaError::parse(format!("invalid timestamp: {raw}")))
}
