use chrono::{Datelike, NaiveDate};

/// whole calendar months between two dates
///
/// Only year and month take part: 2024-01-31 to 2024-02-01 is one month,
/// 2024-01-01 to 2024-01-31 is zero. Reversed ranges give zero.
pub fn elapsed_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(0) as u32
}
