/// Format a number of seconds as `m:ss` (minutes are not padded).
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Parse an `m:ss` duration such as `"3:45"` into seconds.
///
/// Both parts must be plain digits and the seconds part exactly two digits
/// below 60. Returns `None` for anything else.
pub fn parse_duration(s: &str) -> Option<u32> {
    let (minutes, seconds) = s.trim().split_once(':')?;

    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }

    minutes.checked_mul(60)?.checked_add(seconds)
}
