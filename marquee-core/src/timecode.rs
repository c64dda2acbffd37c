/// Format a time in seconds the way the player clock shows it:
/// `m:ss` under an hour, `h:mm:ss` from then on. Non-finite or
/// negative input renders as `0:00` (duration is NaN before metadata
/// has loaded).
pub fn format_seconds(time: f64) -> String {
    if !time.is_finite() || time < 0.0 {
        return "0:00".to_string();
    }
    let total = time as u64;
    let sec = total % 60;
    let min = (total / 60) % 60;
    let hr = total / 3600;
    if hr == 0 {
        format!("{}:{:02}", min, sec)
    } else {
        format!("{}:{:02}:{:02}", hr, min, sec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_sub_hour_format() {
        assert_eq!(format_seconds(0.0), "0:00");
        assert_eq!(format_seconds(62.5), "1:02");
        assert_eq!(format_seconds(599.9), "9:59");
    }

    #[test]
    fn check_hour_format() {
        assert_eq!(format_seconds(3600.0), "1:00:00");
        assert_eq!(format_seconds(3725.0), "1:02:05");
    }

    #[test]
    fn check_nan_renders_as_zero() {
        assert_eq!(format_seconds(f64::NAN), "0:00");
        assert_eq!(format_seconds(-5.0), "0:00");
    }
}
