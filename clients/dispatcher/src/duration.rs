/// Parses the leading integer of `raw` the way a browser's `parseInt` does
/// without an explicit radix.
///
/// Leading whitespace is skipped, one sign is accepted, a `0x`/`0X` prefix
/// switches to hexadecimal and anything after the digits is ignored.
/// Returns `None` when no digits are found or the value overflows `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    i64::from_str_radix(&format!("{}{}", sign, &digits[..end]), radix).ok()
}
