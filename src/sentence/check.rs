//! Helper for computing sentence checksums.

/// Accumulate a slice of bytes into a checksum value.
///
/// The NMEA 0183 checksum is the exclusive-or of every byte between the
/// leading `!` and the trailing `*`, exclusive of both.
pub fn compute_checksum(init: u8, r: &[u8]) -> u8 {
    r.iter().fold(init, |acc, b| acc ^ b)
}
