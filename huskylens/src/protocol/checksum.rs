// huskylens/src/protocol/checksum.rs

//! Frame checksum.

/// Frame checksum: low 8 bits of the sum of every byte before the
/// checksum position (prefix, length, command and payload).
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Check the trailing checksum byte of a complete frame. Returns the
/// expected and actual values on mismatch. Covers the same byte range as
/// `checksum` on the encode side.
pub fn verify(frame: &[u8]) -> Result<(), (u8, u8)> {
    let Some((&actual, body)) = frame.split_last() else {
        return Err((0, 0));
    };
    let expected = checksum(body);
    if expected == actual {
        Ok(())
    } else {
        Err((expected, actual))
    }
}
