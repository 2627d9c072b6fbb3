/// Coerce a raw hit-flag cell to 0/1
///
/// Accepts `True`/`False` in any case, `1`/`0` and their float spellings.
///
/// # Returns
/// * `Some(true | false)` for a recognised flag
/// * `None` for anything else, including an empty cell
pub fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(false);
    }

    match raw.parse::<f64>() {
        Ok(v) if v == 1.0 => Some(true),
        Ok(v) if v == 0.0 => Some(false),
        _ => None,
    }
}

/// Coerce a raw feature cell to `f64`
///
/// An empty cell is a missing value and comes back as NaN.
pub fn parse_feature(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(f64::NAN);
    }
    raw.parse().ok()
}

/// Coerce a raw cell to an integer, truncating integral floats like `55.0`
pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v.trunc() as i64),
        _ => None,
    }
}
