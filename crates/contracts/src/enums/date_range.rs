use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Creation-date filter of the tickets page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn code(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
        }
    }

    pub fn all() -> Vec<DateRange> {
        vec![DateRange::Today, DateRange::Week, DateRange::Month]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }

    /// Inclusive lower bound relative to `now`: start of today, seven days
    /// back, or the first day of the current month.
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt))
            .unwrap_or(now);
        match self {
            DateRange::Today => midnight,
            DateRange::Week => now - Duration::days(7),
            DateRange::Month => midnight - Duration::days(i64::from(now.day0())),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        at >= self.start(now) && at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_range_bounds() {
        let now = at("2025-03-18T15:30:00Z");
        assert_eq!(DateRange::Today.start(now), at("2025-03-18T00:00:00Z"));
        assert_eq!(DateRange::Week.start(now), at("2025-03-11T15:30:00Z"));
        assert_eq!(DateRange::Month.start(now), at("2025-03-01T00:00:00Z"));

        assert!(DateRange::Today.contains(at("2025-03-18T01:00:00Z"), now));
        assert!(!DateRange::Today.contains(at("2025-03-17T23:59:00Z"), now));
        assert!(DateRange::Month.contains(at("2025-03-01T00:00:00Z"), now));
        assert!(!DateRange::Week.contains(at("2025-03-10T00:00:00Z"), now));
    }
}
