use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

static OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

static NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

/// Parses a `postime` value.
///
/// Values carrying an offset keep it, naive values are interpreted in `timezone` and get the
/// offset in effect there at that time. Returns `None` for anything unparseable, including local times that do not
/// exist in `timezone`.
pub fn parse_timestamp(value: &str, timezone: Tz) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(v) = DateTime::parse_from_rfc3339(value) {
        return Some(v);
    }
    if let Some(v) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(value, f).ok())
    {
        return Some(v);
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::None => None,
        LocalResult::Single(v) => Some(v.fixed_offset()),
        // No way of knowing which side of the daylight saving shift was meant, so we pick the
        // later one.
        LocalResult::Ambiguous(_, max) => Some(max.fixed_offset()),
    }
}
