//! Lowercase hex helpers shared by the command encoder and decoder.

use alloc::{format, string::String};

/// Returns the lowercase hex representation of the number without the `0x` prefix.
///
/// The output is as wide as the value needs: numbers up to `15` take one
/// digit, up to `255` two digits and so on. Callers that rely on fixed-width
/// fields must keep the value in range themselves.
pub fn to_hex(number: u32) -> String {
    format!("{number:x}")
}

/// Decodes a single ASCII hex digit, accepting both letter cases.
pub(crate) fn hex_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
