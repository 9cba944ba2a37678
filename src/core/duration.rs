//! Parsing of free-form duration strings such as "5 days" or "2.5 hours".

use crate::error::{Result, TourError};

/// Leading integer token of a tour duration, e.g. "5 days" -> 5.
///
/// Only the first whitespace-separated token is considered, and it must
/// start with at least one ASCII digit.
pub fn duration_days(duration: &str) -> Result<u32> {
    let token = duration.split_whitespace().next().unwrap_or("");
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(TourError::MalformedDuration(format!(
            "no leading day count in `{}`",
            duration
        )));
    }

    digits.parse::<u32>().map_err(|err| {
        TourError::MalformedDuration(format!("day count in `{}`: {}", duration, err))
    })
}

/// Leading floating-point number of a stop duration, in hours.
///
/// Missing, unparseable and zero values all read as 1.0.
pub fn stop_hours(duration: &str) -> f64 {
    match leading_float(duration) {
        Some(hours) if hours != 0.0 && hours.is_finite() => hours,
        _ => 1.0,
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '+' | '-' if idx == 0 => {}
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_days_reads_leading_integer() {
        assert_eq!(duration_days("5 days").unwrap(), 5);
        assert_eq!(duration_days("  12 days of trekking").unwrap(), 12);
        assert_eq!(duration_days("3-day loop").unwrap(), 3);
        assert_eq!(duration_days("0 days").unwrap(), 0);
    }

    #[test]
    fn test_duration_days_rejects_missing_integer() {
        for input in ["Multi-day", "", "about 5 days", "-2 days"] {
            let err = duration_days(input).unwrap_err();
            assert!(
                matches!(err, TourError::MalformedDuration(_)),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_stop_hours() {
        assert_eq!(stop_hours("2 hours"), 2.0);
        assert_eq!(stop_hours("1.5h"), 1.5);
        assert_eq!(stop_hours(".5 hours"), 0.5);
        assert_eq!(stop_hours("half a day"), 1.0);
        assert_eq!(stop_hours(""), 1.0);
        assert_eq!(stop_hours("0 hours"), 1.0);
    }
}
