use crate::calendar::CalendarDateTime;
use crate::constants::{CALENDAR_TIMESTAMP_DIGITS, MAX_TIMESTAMP_DIGITS};
use crate::{TimeError, TimeResult};

/// Parses a `YYYYMMDDHHMMSS[fffffffff]` timestamp.
///
/// Up to nine fraction digits follow the seconds and are right-padded to
/// nanoseconds, so `"20000101120000123"` is 12:00:00.123. The length check
/// counts characters and runs before any digit check.
pub fn parse_timestamp(s: &str) -> TimeResult<CalendarDateTime> {
    let len = s.chars().count();
    if len > MAX_TIMESTAMP_DIGITS {
        return Err(TimeError::InputFormat(format!(
            "over {} digits",
            MAX_TIMESTAMP_DIGITS
        )));
    }
    if len < CALENDAR_TIMESTAMP_DIGITS {
        return Err(TimeError::InputFormat(format!(
            "expected at least {} digits, found {}",
            CALENDAR_TIMESTAMP_DIGITS,
            len
        )));
    }
    if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
        return Err(TimeError::InputFormat(format!(
            "non-digit character '{}' in '{}'",
            bad, s
        )));
    }

    let field = |range: std::ops::Range<usize>| -> u32 {
        s.as_bytes()[range]
            .iter()
            .fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
    };

    let fraction = &s[CALENDAR_TIMESTAMP_DIGITS..];
    let nanosecond = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);

    CalendarDateTime::new(
        field(0..4) as i32,
        field(4..6) as u8,
        field(6..8) as u8,
        field(8..10) as u8,
        field(10..12) as u8,
        field(12..14) as u8,
        nanosecond,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_only() {
        let dt = parse_timestamp("20000101120000").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2000, 1, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 0, 0));
        assert_eq!(dt.nanosecond(), 0);
    }

    #[test]
    fn test_fraction_is_right_padded() {
        let dt = parse_timestamp("20201110123456123").unwrap();
        assert_eq!(dt.nanosecond(), 123_000_000);
        let dt = parse_timestamp("202011101234565").unwrap();
        assert_eq!(dt.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_twenty_three_digits_accepted() {
        let dt = parse_timestamp("20201110123456123456789").unwrap();
        assert_eq!(dt.nanosecond(), 123_456_789);
        assert_eq!(dt.to_string(), "2020-11-10 12:34:56.123");
    }

    #[test]
    fn test_twenty_four_digits_rejected() {
        let err = parse_timestamp("202011101234561234567890").unwrap_err();
        assert_eq!(err, TimeError::InputFormat("over 23 digits".to_string()));
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(matches!(
            parse_timestamp("2020111012345"),
            Err(TimeError::InputFormat(_))
        ));
        assert!(matches!(parse_timestamp(""), Err(TimeError::InputFormat(_))));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            parse_timestamp("2020-11-10T12:34"),
            Err(TimeError::InputFormat(_))
        ));
        assert!(matches!(
            parse_timestamp("20201110123456x"),
            Err(TimeError::InputFormat(_))
        ));
    }

    #[test]
    fn test_length_checked_before_digits() {
        let err = parse_timestamp("abcdefghijklmnopqrstuvwxyz").unwrap_err();
        assert_eq!(err, TimeError::InputFormat("over 23 digits".to_string()));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 24 bytes
        let err = parse_timestamp("日本日本日本日本").unwrap_err();
        assert_eq!(
            err,
            TimeError::InputFormat("expected at least 14 digits, found 8".to_string())
        );

        // full-width digits: 14 characters, 42 bytes
        let err = parse_timestamp("２０２０１１１０１２３４５６").unwrap_err();
        assert_eq!(
            err,
            TimeError::InputFormat(
                "non-digit character '２' in '２０２０１１１０１２３４５６'".to_string()
            )
        );
    }

    #[test]
    fn test_out_of_range_fields() {
        for bad in ["20201310000000", "20200230000000", "20201110240000", "20201110006000"] {
            assert!(
                matches!(parse_timestamp(bad), Err(TimeError::InvalidCalendarValue { .. })),
                "{}",
                bad
            );
        }
    }
}
