//! Lowercase base-36 digits for the compact form.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in base 36 without padding.
pub(crate) fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Renders `value` left-padded with zeros to `width` characters.
pub(crate) fn encode_padded(value: u64, width: usize) -> String {
    format!("{:0>width$}", encode(value), width = width)
}

/// Parses base-36 digits (either case). Signs and empty input are rejected.
pub(crate) fn decode(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    u64::from_str_radix(digits, 36).ok()
}
