// Helpers shared between startup and the timer component.

/// Render whole seconds as `mm:ss`, both parts zero-padded to at least
/// two digits. Minute counts of 100+ simply widen.
pub fn format_mm_ss(secs: u32) -> String {
    let m = secs / 60;
    let s = secs % 60;
    format!("{:02}:{:02}", m, s)
}

/// Read the initial seconds count out of the host element's attribute
/// value. Missing, negative or otherwise malformed input counts as an
/// already-expired session.
pub fn parse_seconds(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(0)
}

pub fn clog(msg: &str) {
    // Debug logging disabled to reduce console spam
    let _ = msg; // keep param to avoid warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(3661), "61:01");
    }

    #[test]
    fn widens_past_hundred_minutes() {
        assert_eq!(format_mm_ss(5999), "99:59");
        assert_eq!(format_mm_ss(6000), "100:00");
        assert_eq!(format_mm_ss(6061), "101:01");
    }

    #[test]
    fn format_round_trips_minutes_and_seconds() {
        for s in 0..=7200u32 {
            let text = format_mm_ss(s);
            let (m, r) = text.split_once(':').expect("missing separator");
            assert!(m.len() >= 2, "minutes too narrow in {:?}", text);
            assert_eq!(r.len(), 2, "seconds not two digits in {:?}", text);
            assert_eq!(m.parse::<u32>().unwrap(), s / 60);
            assert_eq!(r.parse::<u32>().unwrap(), s % 60);
        }
    }

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_seconds(Some("600".into())), 600);
        assert_eq!(parse_seconds(Some(" 90 ".into())), 90);
        assert_eq!(parse_seconds(Some("0".into())), 0);
    }

    #[test]
    fn malformed_values_default_to_zero() {
        assert_eq!(parse_seconds(None), 0);
        assert_eq!(parse_seconds(Some(String::new())), 0);
        assert_eq!(parse_seconds(Some("abc".into())), 0);
        assert_eq!(parse_seconds(Some("-5".into())), 0);
        assert_eq!(parse_seconds(Some("12.5".into())), 0);
        assert_eq!(parse_seconds(Some("30s".into())), 0);
    }
}
