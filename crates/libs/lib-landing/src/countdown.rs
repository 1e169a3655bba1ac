//! Countdown to the event start

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time left from `now` until `target`, zero once the target has passed.
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// `(value, label)` pairs for display, values zero-padded to two digits.
    pub fn segments(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "DAYS"),
            (format!("{:02}", self.hours), "HRS"),
            (format!("{:02}", self.minutes), "MIN"),
            (format!("{:02}", self.seconds), "SEC"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_until() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2026, 10, 18, 15, 30, 45).unwrap();
        let c = Countdown::until(now, target);
        assert_eq!(
            c,
            Countdown {
                days: 2,
                hours: 3,
                minutes: 30,
                seconds: 45
            }
        );
        assert!(!c.is_over());
        assert_eq!(c.segments()[0], ("02".to_string(), "DAYS"));
        assert_eq!(c.segments()[3], ("45".to_string(), "SEC"));
    }

    #[test]
    fn test_past_target_saturates() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let c = Countdown::until(now, target);
        assert!(c.is_over());
        assert_eq!(c, Countdown::default());
    }

    #[test]
    fn test_large_day_count_keeps_digits() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();
        let c = Countdown::until(now, target);
        assert_eq!(c.days, 364);
        assert_eq!(c.segments()[0].0, "364");
    }
}
