//! Date helper functions

use chrono::NaiveDateTime;

/// Moment.js tokens and their chrono equivalents, longest first per family
const TOKENS: [(&str, &str); 17] = [
    // Year
    ("YYYY", "%Y"),
    ("YY", "%y"),
    // Month (uppercase M)
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    // Day of year / day of month (uppercase D)
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    // Day of week
    ("dddd", "%A"),
    ("ddd", "%a"),
    // Hour 24h
    ("HH", "%H"),
    ("H", "%-H"),
    // Hour 12h
    ("hh", "%I"),
    // Minute
    ("mm", "%M"),
    // Milliseconds before seconds
    ("SSS", "%3f"),
    // Second
    ("ss", "%S"),
];

/// Format a date using Moment.js-compatible format string
///
/// Text in `[brackets]` is copied as-is. Anything that is not a token,
/// including `%`, is literal, so any format string is safe to render.
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut result, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            result.push_str(spec);
            rest = &rest[token.len()..];
            continue;
        }

        push_literal(&mut result, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    result
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(9, 7, 3)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        let date = sample();
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2023-01-05");
        assert_eq!(format_date(&date, "DD.MM.YYYY"), "05.01.2023");
        assert_eq!(format_date(&date, "HH:mm:ss"), "09:07:03");
        assert_eq!(format_date(&date, "MMMM D, YYYY"), "January 5, 2023");
        assert_eq!(format_date(&date, "D.M.YY H:mm"), "5.1.23 9:07");
        assert_eq!(format_date(&date, "MMmm"), "0107");
    }

    #[test]
    fn test_literal_text_is_safe() {
        let date = sample();
        assert_eq!(format_date(&date, "DD% MM"), "05% 01");
        assert_eq!(format_date(&date, "%Q %z"), "%Q %z");
        assert_eq!(format_date(&date, "[Day] DD [of] MMM"), "Day 05 of Jan");
        assert_eq!(format_date(&date, "[unclosed DD"), "[unclosed 05");
    }

    #[test]
    fn test_list_item_months_are_one_based() {
        let december = NaiveDate::from_ymd_opt(2022, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&december, "DD.MM.YYYY"), "31.12.2022");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("100%"), "100%%");
    }
}
