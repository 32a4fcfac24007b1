//! Pure proleptic Gregorian calendar math.
//!
//! Every date maps onto a single day count, the Modified Julian Day number
//! (day 0 is 1858-11-17). All date arithmetic in this crate goes through
//! that count, so month lengths and leap days never need special cases
//! outside this module.

/// Smallest supported year (astronomical numbering, year 0 is 1 BCE).
pub const MIN_YEAR: i32 = -9999;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Day count of 1970-01-01.
const UNIX_EPOCH_DAY_COUNT: i64 = 40_587;

/// Day count of the weekday anchor, 2000-01-01.
pub const ANCHOR_DAY_COUNT: i64 = 51_544;

/// Weekday of the anchor date: 2000-01-01 was a Saturday.
pub const ANCHOR_WEEKDAY: u8 = SATURDAY;

/// Weekday numbers (1 = Sunday through 7 = Saturday).
pub const SUNDAY: u8 = 1;
/// Monday.
pub const MONDAY: u8 = 2;
/// Tuesday.
pub const TUESDAY: u8 = 3;
/// Wednesday.
pub const WEDNESDAY: u8 = 4;
/// Thursday.
pub const THURSDAY: u8 = 5;
/// Friday.
pub const FRIDAY: u8 = 6;
/// Saturday.
pub const SATURDAY: u8 = 7;

/// Days before the first of each month in a common year (index 0 = January).
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Day count of `MIN_YEAR`-01-01.
pub const MIN_DAY_COUNT: i64 = to_day_count(MIN_YEAR, 1, 1);

/// Day count of `MAX_YEAR`-12-31.
pub const MAX_DAY_COUNT: i64 = to_day_count(MAX_YEAR, 12, 31);

/// Returns true if `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Callers are expected to pass a month in 1..=12; anything else is
/// treated as a 31-day month.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Converts a calendar date to its day count.
pub const fn to_day_count(year: i32, month: u8, day: u8) -> i64 {
    // Shift the year so it starts in March; the leap day then falls last.
    let y = if month <= 2 {
        year as i64 - 1
    } else {
        year as i64
    };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let month_from_march = (month as i64 + 9) % 12;
    let day_of_era_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_era_year;
    era * 146_097 + day_of_era - 719_468 + UNIX_EPOCH_DAY_COUNT
}

/// Converts a day count back to `(year, month, day)`.
pub const fn from_day_count(day_count: i64) -> (i32, u8, u8) {
    let z = day_count - UNIX_EPOCH_DAY_COUNT + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_era_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_era_year + 2) / 153;
    let day = day_of_era_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

/// Returns the weekday of a day count (1 = Sunday ... 7 = Saturday).
pub const fn weekday_from_day_count(day_count: i64) -> u8 {
    let offset = (day_count - ANCHOR_DAY_COUNT).rem_euclid(7);
    ((offset + ANCHOR_WEEKDAY as i64 - 1) % 7 + 1) as u8
}

/// Returns the weekday of a date (1 = Sunday ... 7 = Saturday).
pub const fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    weekday_from_day_count(to_day_count(year, month, day))
}

/// Returns the 1-based ordinal day within the year (1..=366).
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let leap_day = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + day as u16 + leap_day
}

/// Converts a weekday in this crate's numbering to ISO numbering
/// (1 = Monday ... 7 = Sunday).
const fn iso_weekday(weekday: u8) -> u8 {
    (weekday + 5) % 7 + 1
}

/// Returns the number of ISO weeks (52 or 53) in the ISO year `year`.
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub const fn iso_weeks_in_year(year: i32) -> u8 {
    let jan1 = day_of_week(year, 1, 1);
    if jan1 == THURSDAY || (jan1 == WEDNESDAY && is_leap_year(year)) {
        53
    } else {
        52
    }
}

/// Returns the ISO-8601 `(week-year, week)` of a date.
///
/// Late December days can belong to week 1 of the following year and
/// early January days to the last week of the previous year.
pub const fn iso_week(year: i32, month: u8, day: u8) -> (i32, u8) {
    let ordinal = day_of_year(year, month, day) as i32;
    let weekday = iso_weekday(day_of_week(year, month, day)) as i32;
    let week = (ordinal - weekday + 10) / 7;
    if week < 1 {
        (year - 1, iso_weeks_in_year(year - 1))
    } else if week > iso_weeks_in_year(year) as i32 {
        (year + 1, 1)
    } else {
        (year, week as u8)
    }
}

/// Returns the ISO-8601 week number of a date (1..=53).
pub const fn iso_week_index(year: i32, month: u8, day: u8) -> u8 {
    iso_week(year, month, day).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_law() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        let total: u16 = (1..=12).map(|m| u16::from(days_in_month(2023, m))).sum();
        assert_eq!(total, days_in_year(2023));
    }

    #[test]
    fn known_day_counts() {
        assert_eq!(to_day_count(1858, 11, 17), 0);
        assert_eq!(to_day_count(1970, 1, 1), 40_587);
        assert_eq!(to_day_count(2000, 1, 1), ANCHOR_DAY_COUNT);
        assert_eq!(from_day_count(0), (1858, 11, 17));
        assert_eq!(from_day_count(-1), (1858, 11, 16));
    }

    #[test]
    fn roundtrip_around_leap_days() {
        for year in [-401, -400, -1, 0, 1, 1600, 1900, 2000, 2024] {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let count = to_day_count(year, month, day);
                    assert_eq!(
                        from_day_count(count),
                        (year, month, day),
                        "roundtrip failed for {year}-{month}-{day}"
                    );
                }
            }
        }
    }

    #[test]
    fn weekday_anchor() {
        assert_eq!(day_of_week(2000, 1, 1), SATURDAY);
        assert_eq!(day_of_week(2000, 1, 2), SUNDAY);
        assert_eq!(day_of_week(1999, 12, 31), FRIDAY);
        assert_eq!(day_of_week(2024, 1, 31), WEDNESDAY);
        assert_eq!(day_of_week(1970, 1, 1), THURSDAY);
        assert_eq!(day_of_week(2018, 12, 31), MONDAY);
        assert_eq!(day_of_week(2024, 10, 1), TUESDAY);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(2023, 1, 1), 1);
        assert_eq!(day_of_year(2023, 3, 1), 60);
        assert_eq!(day_of_year(2024, 3, 1), 61);
        assert_eq!(day_of_year(2024, 12, 31), 366);
        assert_eq!(day_of_year(2023, 12, 31), 365);
    }

    #[test]
    fn iso_week_boundaries() {
        assert_eq!(iso_week(2018, 12, 31), (2019, 1));
        assert_eq!(iso_week(2021, 1, 1), (2020, 53));
        assert_eq!(iso_week(2021, 1, 4), (2021, 1));
        assert_eq!(iso_week(2016, 1, 3), (2015, 53));
        assert_eq!(iso_week(2024, 12, 30), (2025, 1));
        assert_eq!(iso_week(2020, 12, 31), (2020, 53));
        assert_eq!(iso_week_index(2024, 6, 15), 24);
    }

    #[test]
    fn weeks_in_year() {
        assert_eq!(iso_weeks_in_year(2015), 53);
        assert_eq!(iso_weeks_in_year(2020), 53);
        assert_eq!(iso_weeks_in_year(2019), 52);
        assert_eq!(iso_weeks_in_year(2026), 53);
    }
}
