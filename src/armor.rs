//! Un-armoring of payload text into a packed bitstream.
//!
//! AIS payloads are transmitted as printable characters, each carrying six
//! bits of the broadcast message. Two alphabets are valid: `0` through `W`
//! for the values 0–39, and `` ` `` through `w` for the values 40–63.
//! [`decode`] maps each character back to its six bits and packs them,
//! most-significant first, into whole bytes.
//!
//! Decoding is all or nothing: a character outside both alphabets abandons
//! the payload entirely, so a caller can never observe a truncated
//! bitstream.

pub mod packer;

use thiserror::Error;

use crate::payload::Payload;

use self::packer::Packer;

/// An error un-armoring a payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside both armor alphabets.
    #[error("Invalid character (0x{0:02X}) in armored payload.")]
    InvalidCharacter(u8),
}

/// Un-armor a payload string into its packed bitstream.
///
/// The fill bit count is accepted alongside the payload as the envelope
/// carries it, but the trailing padding it describes is left in place; the
/// unused low bits of the final byte are zero.
pub fn decode(symbols: &str, fill_bits: u8) -> Result<Payload, Error> {
    let _ = fill_bits;

    let mut packer = Packer::with_capacity(symbols.len());

    for symbol in symbols.bytes() {
        let value = value(symbol).ok_or(Error::InvalidCharacter(symbol))?;
        packer.push(value);
    }

    Ok(packer.finish())
}

/// Map an armor character to the six bits it carries.
fn value(symbol: u8) -> Option<u8> {
    match symbol {
        b'0'..=b'W' => Some(symbol - b'0'),
        b'`'..=b'w' => Some(symbol - b'`' + 40),
        _ => None,
    }
}
