//! Percent-encoding for emoji image lookups

use std::fmt::Write;

/// Escape `input` the way browsers escape a URI component.
///
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through; every other
/// byte of the UTF-8 encoding becomes `%XX` with uppercase hex digits.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            // Writing into a String cannot fail
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}
