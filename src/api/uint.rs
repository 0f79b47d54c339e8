use crate::api::capture::UintError;

/// Parse an unsigned 32-bit integer, inferring the base from the token's prefix.
///
/// * `0x`/`0X`: hexadecimal.
/// * `0o`/`0O`: octal.
/// * `0b`/`0B`: binary.
/// * Any other leading `0`: octal.
/// * Otherwise: decimal.
///
/// A `_` may separate successive digits, or follow a base prefix.
///
/// ### Example
/// ```
/// use column_report::parse_uint;
///
/// assert_eq!(parse_uint("42"), Ok(42));
/// assert_eq!(parse_uint("0x2a"), Ok(42));
/// assert_eq!(parse_uint("052"), Ok(42));
/// assert!(parse_uint("-1").is_err());
/// ```
pub fn parse_uint(token: &str) -> Result<u32, UintError> {
    if token.is_empty() {
        return Err(UintError::Empty);
    }

    if token.starts_with('-') {
        return Err(UintError::Negative);
    }

    let (radix, digits) = split_radix(token);
    let mut separated = false;
    let mut value: u32 = 0;

    for c in digits.chars() {
        if c == '_' {
            separated = true;
            continue;
        }

        let digit = c.to_digit(radix).ok_or(UintError::InvalidDigit)?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(UintError::Overflow)?;
    }

    if separated && !separators_ok(token) {
        return Err(UintError::InvalidDigit);
    }

    Ok(value)
}

fn split_radix(token: &str) -> (u32, &str) {
    let bytes = token.as_bytes();

    match bytes {
        [b'0', prefix, _, ..] => match prefix.to_ascii_lowercase() {
            b'b' => (2, &token[2..]),
            b'o' => (8, &token[2..]),
            b'x' => (16, &token[2..]),
            _ => (8, &token[1..]),
        },
        [b'0', ..] => (8, &token[1..]),
        _ => (10, token),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Seen {
    Start,
    Digit,
    Separator,
    Other,
}

// A base prefix counts as a digit, so "0x_1f" is accepted.
fn separators_ok(token: &str) -> bool {
    let bytes = token.as_bytes();
    let (start, hex) = match bytes {
        [b'0', prefix, ..] if matches!(prefix.to_ascii_lowercase(), b'b' | b'o' | b'x') => {
            (2, prefix.to_ascii_lowercase() == b'x')
        }
        _ => (0, false),
    };
    let mut seen = if start == 0 { Seen::Start } else { Seen::Digit };

    for b in &bytes[start..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            seen = Seen::Digit;
        } else if *b == b'_' {
            if seen != Seen::Digit {
                return false;
            }

            seen = Seen::Separator;
        } else {
            if seen == Seen::Separator {
                return false;
            }

            seen = Seen::Other;
        }
    }

    seen != Seen::Separator
}
