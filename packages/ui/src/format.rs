//! Display and form-value formatting helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";
const DATETIME_LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a timestamp as a `datetime-local` input value.
pub fn datetime_local(value: &DateTime<Utc>) -> String {
    value.format(DATETIME_LOCAL).to_string()
}

/// Parse a `datetime-local` input value. Browsers emit minutes precision
/// by default but may include seconds; both are accepted. Returns `None`
/// for anything incomplete.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_SECONDS))
        .ok()
        .map(|naive| naive.and_utc())
}

/// `dd/mm/yyyy hh:mm` for display.
pub fn display_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// `dd/mm/yyyy` for display.
pub fn display_date(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Pretty-print a phone number when it has the expected 10 or 11 digits;
/// anything else is shown as typed.
pub fn display_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_local_round_trip() {
        let value = Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap();
        let formatted = datetime_local(&value);
        assert_eq!(formatted, "2024-06-10T14:30");
        assert_eq!(parse_datetime_local(&formatted), Some(value));
    }

    #[test]
    fn parse_accepts_seconds_precision() {
        let parsed = parse_datetime_local("2024-06-10T14:30:45").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 45).unwrap()
        );
    }

    #[test]
    fn parse_rejects_incomplete_input() {
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("2024-06-10").is_none());
    }

    #[test]
    fn phone_formatting() {
        assert_eq!(display_phone("11999990000"), "(11) 99999-0000");
        assert_eq!(display_phone("1144440000"), "(11) 4444-0000");
        assert_eq!(display_phone("123"), "123");
    }
}
