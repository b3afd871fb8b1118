/// Gregorian Date Calculations
///
/// This module contains the proleptic Gregorian calculations used for
/// day-of-week and week numbering.
///
/// Weeks follow the ISO 8601 convention: a week starts on Monday and
/// belongs to the month (or year) that contains its Thursday.
pub mod neri_schneider;

pub use neri_schneider::{epoch_days_from_ymd, ymd_from_epoch_days};

/// ISO weekday of 1970-01-01 (Thursday).
const EPOCH_WEEKDAY: i64 = 4;

/// Returns whether `year` is a leap year.
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the one-based ordinal day of the year.
pub const fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    (epoch_days_from_ymd(year, month, day) - epoch_days_from_ymd(year, 1, 1) + 1) as u16
}

/// Returns the ISO weekday, Monday = 1 through Sunday = 7.
pub const fn iso_weekday(epoch_days: i64) -> u8 {
    ((epoch_days + EPOCH_WEEKDAY - 1).rem_euclid(7) + 1) as u8
}

/// A date expressed as an ISO week of a week-based year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoWeekDate {
    /// The week-based year, which may differ from the calendar year
    /// for the first and last days of a year.
    pub year: i64,
    pub week: u8,
    pub weekday: u8,
}

/// A week of a month, numbered like ISO weeks inside the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWeek {
    pub year: i64,
    /// The month the week belongs to, which may be the previous or next month.
    pub month: u8,
    pub week: u8,
}

/// Returns the Thursday of the Monday-based week that contains the date.
const fn thursday_of_week(year: i64, month: u8, day: u8) -> (i64, (i64, u8, u8), u8) {
    let days = epoch_days_from_ymd(year, month, day);
    let weekday = iso_weekday(days);
    let thursday = days + 4 - weekday as i64;
    (thursday, ymd_from_epoch_days(thursday), weekday)
}

/// Returns the ISO week date for a Gregorian date.
pub const fn iso_week_date(year: i64, month: u8, day: u8) -> IsoWeekDate {
    let (thursday, (thursday_year, _, _), weekday) = thursday_of_week(year, month, day);
    let ordinal = thursday - epoch_days_from_ymd(thursday_year, 1, 1);
    IsoWeekDate {
        year: thursday_year,
        week: (ordinal / 7 + 1) as u8,
        weekday,
    }
}

/// Returns the week of the month for a Gregorian date.
///
/// Week 1 of a month is the week containing the first Thursday of that
/// month, so the first days of a month may belong to the last week of the
/// previous month and the last days to the first week of the next.
pub const fn week_of_month(year: i64, month: u8, day: u8) -> MonthWeek {
    let (_, (thursday_year, thursday_month, thursday_day), _) = thursday_of_week(year, month, day);
    MonthWeek {
        year: thursday_year,
        month: thursday_month,
        week: (thursday_day - 1) / 7 + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2003));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 11), 30);
    }

    #[test]
    fn weekdays() {
        assert_eq!(iso_weekday(0), 4);
        assert_eq!(iso_weekday(-1), 3);
        assert_eq!(iso_weekday(epoch_days_from_ymd(2003, 9, 7)), 7);
        assert_eq!(iso_weekday(epoch_days_from_ymd(2003, 9, 8)), 1);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(2003, 1, 1), 1);
        assert_eq!(day_of_year(2003, 9, 7), 250);
        assert_eq!(day_of_year(2004, 12, 31), 366);
    }

    #[test]
    fn iso_weeks() {
        let week = iso_week_date(2003, 9, 7);
        assert_eq!((week.year, week.week, week.weekday), (2003, 36, 7));

        // 2005-01-01 is a Saturday in the last week of 2004.
        let week = iso_week_date(2005, 1, 1);
        assert_eq!((week.year, week.week), (2004, 53));

        // 2008-12-29 is a Monday in the first week of 2009.
        let week = iso_week_date(2008, 12, 29);
        assert_eq!((week.year, week.week), (2009, 1));
    }

    #[test]
    fn month_weeks() {
        // September 2003 starts on a Monday.
        assert_eq!(week_of_month(2003, 9, 7).week, 1);
        assert_eq!(week_of_month(2003, 9, 8).week, 2);

        // 2005-01-01 belongs to the last week of December 2004.
        let week = week_of_month(2005, 1, 1);
        assert_eq!((week.year, week.month, week.week), (2004, 12, 5));

        // 2003-12-29 (Monday) belongs to the first week of January 2004.
        let week = week_of_month(2003, 12, 29);
        assert_eq!((week.year, week.month, week.week), (2004, 1, 1));
    }
}
