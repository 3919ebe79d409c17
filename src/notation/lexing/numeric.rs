//! Lenient integer reading
//!
//! Stock counts, label bounds and placeholder indexes are all read with the same rule: skip
//! leading whitespace, accept an optional sign, then take as many decimal digits as follow.
//! Anything after the digits is ignored. No digits means no number.

/// Read the integer at the start of `text`, ignoring trailing garbage
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
