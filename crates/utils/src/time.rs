use chrono::{Datelike, Local, NaiveDate};

/// Current date in the server's local timezone.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Days remaining until the next anniversary of `birthdate`.
///
/// Returns 0 when the anniversary is today. A Feb 29 birthdate
/// is celebrated on Mar 1 in non-leap years.
pub fn days_until_next_birthday(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    let current_year_birthday = anniversary(birthdate, today.year());

    if current_year_birthday < today {
        // Birthday already passed this year
        (anniversary(birthdate, today.year() + 1) - today).num_days()
    } else {
        (current_year_birthday - today).num_days()
    }
}

fn anniversary(birthdate: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day()) {
        Some(date) => date,
        // Feb 29 birthdate and the year is not a leap year
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birthdate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn birthday_later_this_year() {
        assert_eq!(
            days_until_next_birthday(date(1999, 10, 25), date(2025, 10, 15)),
            10
        );
    }

    #[test]
    fn birthday_today() {
        assert_eq!(
            days_until_next_birthday(date(1999, 10, 29), date(2025, 10, 29)),
            0
        );
    }

    #[test]
    fn birthday_already_passed_this_year() {
        assert_eq!(
            days_until_next_birthday(date(1999, 10, 28), date(2025, 10, 29)),
            364
        );
    }

    #[test]
    fn next_birthday_after_leap_day() {
        // 2028 is a leap year so the wait is one day longer
        assert_eq!(
            days_until_next_birthday(date(1999, 10, 28), date(2027, 10, 29)),
            365
        );
    }

    #[test]
    fn leap_day_birthdate_in_leap_year() {
        assert_eq!(
            days_until_next_birthday(date(2000, 2, 29), date(2024, 2, 29)),
            0
        );
        assert_eq!(
            days_until_next_birthday(date(2000, 2, 29), date(2024, 2, 1)),
            28
        );
    }

    #[test]
    fn leap_day_birthdate_in_non_leap_year() {
        // Celebrated on Mar 1
        assert_eq!(
            days_until_next_birthday(date(2000, 2, 29), date(2025, 2, 28)),
            1
        );
        assert_eq!(
            days_until_next_birthday(date(2000, 2, 29), date(2025, 3, 1)),
            0
        );
    }

    #[test]
    fn leap_day_birthdate_after_celebration_day() {
        // Next occurrence is the real Feb 29 in 2024
        assert_eq!(
            days_until_next_birthday(date(2000, 2, 29), date(2023, 3, 2)),
            364
        );
    }
}
