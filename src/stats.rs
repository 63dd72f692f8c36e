use crate::models::{HabitStatus, Statistics, WindowCounts};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// Earliest instant counted by each window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub weekly: DateTime<Utc>,
    pub monthly: DateTime<Utc>,
    pub annually: DateTime<Utc>,
}

impl WindowBounds {
    /// Weekly is 168 hours of elapsed time before `now`. Monthly and annual
    /// start at midnight, in `now`'s zone, of the same day one month or year back.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let zone = now.timezone();
        let today = now.date_naive();
        Self {
            weekly: now.with_timezone(&Utc) - Duration::days(7),
            monthly: zone_midnight(&zone, months_before(today, 1)),
            annually: zone_midnight(&zone, months_before(today, 12)),
        }
    }
}

pub fn calculate_statistics(entries: &BTreeMap<String, HabitStatus>) -> Statistics {
    calculate_statistics_at(&Local::now(), entries)
}

/// Windows are cumulative: an entry on or after a boundary counts toward
/// that window regardless of the others.
pub fn calculate_statistics_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    entries: &BTreeMap<String, HabitStatus>,
) -> Statistics {
    let bounds = WindowBounds::at(now);
    let zone = now.timezone();
    let mut stats = Statistics::default();

    for (key, status) in entries {
        let Some(at) = parse_entry_date(key, &zone) else {
            debug!(key = %key, "skipping calendar entry with unparseable date");
            continue;
        };

        record_since(&mut stats.weekly, at, bounds.weekly, *status);
        record_since(&mut stats.monthly, at, bounds.monthly, *status);
        record_since(&mut stats.annually, at, bounds.annually, *status);
    }

    stats
}

fn record_since(
    counts: &mut WindowCounts,
    at: DateTime<Utc>,
    boundary: DateTime<Utc>,
    status: HabitStatus,
) {
    if at >= boundary {
        counts.record(status);
    }
}

/// Same day of month `months` earlier. A day past the end of the target
/// month rolls over into the next one (31 March -> 3 March in 2026).
fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 - months as i32;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
        .and_then(|first| first.checked_add_signed(Duration::days(i64::from(date.day()) - 1)))
        .unwrap_or(NaiveDate::MIN)
}

fn zone_midnight<Tz: TimeZone>(zone: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    zone.from_local_datetime(&midnight)
        .earliest()
        // midnight skipped by a clock change
        .or_else(|| zone.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Reads a calendar key as an instant. Plain dates are UTC midnight,
/// offset-less date-times are wall-clock time in `zone`.
pub fn parse_entry_date<Tz: TimeZone>(key: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let key = key.trim();
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(key) {
        return Some(stamp.with_timezone(&Utc));
    }
    let local = NaiveDateTime::parse_from_str(key, "%Y-%m-%dT%H:%M:%S").ok()?;
    zone.from_local_datetime(&local)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}
