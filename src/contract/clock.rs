//! Date source for the header stamp.

use chrono::{Local, NaiveDate};

/// Supplies the calendar date printed in the document header.
pub trait DateSource: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl DateSource for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_german_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_german_date_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_german_date(date), "07.03.2025");
    }

    #[test]
    fn test_fixed_date_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let clock = FixedDate(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }
}
