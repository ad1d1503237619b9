//! Hex formatting for frame dumps in logs and error messages.

use std::fmt;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x55, 0xaa]` -> `"55aa"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexBytes(bytes).to_string().replace(' ', "")
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte, the layout used when logging frames.
///
/// Example: `&[0x55, 0xaa, 0x11]` -> `"55 aa 11"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexBytes(bytes).to_string()
}

/// Lazy `Display` adapter so `log` macros only format frames when the
/// level is enabled.
#[derive(Clone, Copy)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
