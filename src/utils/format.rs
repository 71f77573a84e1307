//! Timer readout formatting

/// Format milliseconds as "MM:SS.cc"
///
/// Minutes wrap at the hour, so the readout is always eight characters.
/// Centiseconds are truncated, never rounded.
pub fn format_interval(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = (total_secs / 60) % 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "00:00.00");
        assert_eq!(format_interval(250), "00:00.25");
        assert_eq!(format_interval(60_500), "01:00.50");
        assert_eq!(format_interval(12_340), "00:12.34");
    }

    #[test]
    fn test_centiseconds_truncate() {
        assert_eq!(format_interval(9), "00:00.00");
        assert_eq!(format_interval(1_999), "00:01.99");
    }

    #[test]
    fn test_minutes_wrap_at_the_hour() {
        assert_eq!(format_interval(3_599_990), "59:59.99");
        assert_eq!(format_interval(3_661_000), "01:01.00");
        assert_eq!(format_interval(100 * 60_000), "40:00.00");
    }

    #[test]
    fn test_readout_width_is_fixed() {
        for ms in [0, 250, 60_500, 3_599_999, 3_661_000, 36_000_000, u64::MAX / 2] {
            assert_eq!(format_interval(ms).len(), 8, "{ms}");
        }
    }
}
