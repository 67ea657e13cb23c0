use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{VitalsReading, WalkTestResult};

/// History period offered by the history screen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeRange {
    /// Inclusive span of local dates covered when `today` is the current date.
    /// Weeks run Monday to Sunday.
    pub fn date_span(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            TimeRange::Day => (today, today),
            TimeRange::Week => {
                let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
                (monday, monday + Duration::days(6))
            }
            TimeRange::Month => {
                let first = today.with_day(1).unwrap_or(today);
                let next_month = if first.month() == 12 {
                    NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
                };
                let last = next_month
                    .and_then(|d| d.pred_opt())
                    .unwrap_or(today);
                (first, last)
            }
        }
    }

    /// Whether `timestamp`, seen in the timezone of `now`, falls in the span.
    pub fn contains<Tz: TimeZone>(&self, now: &DateTime<Tz>, timestamp: DateTime<Utc>) -> bool {
        let (first, last) = self.date_span(now.date_naive());
        let local = timestamp.with_timezone(&now.timezone()).date_naive();
        local >= first && local <= last
    }

    pub fn filter_readings<Tz: TimeZone>(
        &self,
        readings: &[VitalsReading],
        now: &DateTime<Tz>,
    ) -> Vec<VitalsReading> {
        let mut selected: Vec<VitalsReading> = readings
            .iter()
            .filter(|r| self.contains(now, r.timestamp))
            .cloned()
            .collect();
        selected.sort_by_key(|r| r.timestamp);
        selected
    }

    pub fn filter_walk_tests<Tz: TimeZone>(
        &self,
        tests: &[WalkTestResult],
        now: &DateTime<Tz>,
    ) -> Vec<WalkTestResult> {
        let mut selected: Vec<WalkTestResult> = tests
            .iter()
            .filter(|t| self.contains(now, t.test_timestamp))
            .cloned()
            .collect();
        selected.sort_by_key(|t| t.test_timestamp);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-05-15 is a Wednesday
        assert_eq!(
            TimeRange::Week.date_span(date(2024, 5, 15)),
            (date(2024, 5, 13), date(2024, 5, 19))
        );
        // Sunday belongs to the week that started six days earlier
        assert_eq!(
            TimeRange::Week.date_span(date(2024, 5, 19)),
            (date(2024, 5, 13), date(2024, 5, 19))
        );
    }

    #[test]
    fn month_span_handles_year_end_and_leap_years() {
        assert_eq!(
            TimeRange::Month.date_span(date(2024, 12, 9)),
            (date(2024, 12, 1), date(2024, 12, 31))
        );
        assert_eq!(
            TimeRange::Month.date_span(date(2024, 2, 10)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(TimeRange::Day.date_span(date(2024, 2, 10)), (date(2024, 2, 10), date(2024, 2, 10)));
    }

    #[test]
    fn filtering_uses_local_dates() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();

        // 03:00 UTC on the 15th is still the 14th at UTC-5
        let late_evening = VitalsReading::new(Utc.with_ymd_and_hms(2024, 5, 15, 3, 0, 0).unwrap()).with_spo2(93.0);
        let morning = VitalsReading::new(Utc.with_ymd_and_hms(2024, 5, 15, 14, 0, 0).unwrap()).with_spo2(95.0);

        let day = TimeRange::Day.filter_readings(&[morning.clone(), late_evening.clone()], &now);
        assert_eq!(day, vec![morning.clone()]);

        let week = TimeRange::Week.filter_readings(&[morning.clone(), late_evening.clone()], &now);
        assert_eq!(week, vec![late_evening, morning]);
    }

    #[test]
    fn walk_tests_are_filtered_and_sorted() {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
        let recent = WalkTestResult::new(Utc.with_ymd_and_hms(2024, 5, 14, 9, 0, 0).unwrap());
        let earlier = WalkTestResult::new(Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap());
        let old = WalkTestResult::new(Utc.with_ymd_and_hms(2024, 4, 20, 9, 0, 0).unwrap());

        let month = TimeRange::Month.filter_walk_tests(&[recent.clone(), old, earlier.clone()], &now);
        assert_eq!(month, vec![earlier, recent]);
    }
}
