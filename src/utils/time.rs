// ABOUTME: Local calendar-day helpers used for dated keys and step counting windows
// ABOUTME: Resolves local midnight safely across DST transitions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

/// Start of the local calendar day containing `now`
///
/// When local midnight does not exist (a DST gap starting at 00:00), the
/// earliest valid instant of the day is used.
#[must_use]
pub fn start_of_local_day(now: DateTime<Local>) -> DateTime<Local> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            (1..=2)
                .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
                .find_map(|time| {
                    Local
                        .from_local_datetime(&now.date_naive().and_time(time))
                        .earliest()
                })
        })
        .unwrap_or(now)
}

/// Local calendar date of `now`
#[must_use]
pub fn local_date(now: DateTime<Local>) -> NaiveDate {
    now.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_day_is_same_date_and_not_after_now() {
        let now = Local::now();
        let start = start_of_local_day(now);
        assert_eq!(start.date_naive(), now.date_naive());
        assert!(start <= now);
    }
}
