use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

pub fn day_span(first: NaiveDate, last: NaiveDate) -> DateRange {
    let start = first.and_time(NaiveTime::MIN);
    let end = last.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1);
    DateRange { start, end }
}

pub fn today_range(today: NaiveDate) -> DateRange {
    day_span(today, today)
}

pub fn week_range(today: NaiveDate) -> DateRange {
    let start = week_start(today);
    day_span(start, start + Duration::days(6))
}

pub fn month_range(today: NaiveDate) -> DateRange {
    let first = month_start(today);
    let next = month_start(first + Duration::days(31));
    day_span(first, next - Duration::days(1))
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Local).naive_local());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(instant);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

pub fn filter_by_range<'a, T, F>(items: &'a [T], field: F, range: &DateRange) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut matches = Vec::new();
    for item in items {
        let Some(value) = field(item) else { continue };
        let Some(instant) = parse_timestamp(value) else { continue };
        if range.contains(instant) {
            matches.push(item);
        }
    }
    matches
}
