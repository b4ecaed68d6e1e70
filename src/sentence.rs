//! Parsing of the sentence envelope.
//!
//! An AIS broadcast arrives as one or more NMEA 0183 sentences of the form
//!
//! ```text
//! !AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*11
//! ```
//!
//! where the leading `!` and the trailing `*` delimit the body covered by the
//! two-digit hexadecimal checksum. [`parse`] verifies the checksum and splits
//! the body into a [`Sentence`] borrowing from the raw line; no envelope is
//! produced for a line that fails verification.
//!
//! Parsing is pure and deterministic. A malformed sentence is simply
//! rejected, leaving the caller to skip or escalate.

pub mod check;

use thiserror::Error;
use zerocopy::FromBytes;

use crate::armor;
use crate::payload::Payload;

use self::check::compute_checksum;

/// Errors occurring while parsing a sentence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sentence is empty.
    #[error("The sentence is empty.")]
    Empty,
    /// Missing the leading `!` delimiter.
    #[error("Missing the leading `!` delimiter.")]
    Prefix,
    /// Missing the trailing `*XX` checksum.
    #[error("Missing the trailing checksum.")]
    MissingChecksum,
    /// Computed and declared checksum values do not match.
    #[error("Computed ({computed:02X}) and declared ({declared:02X}) checksum values do not match.")]
    Checksum { declared: u8, computed: u8 },
    /// Structurally malformed sentence body.
    #[error("Malformed sentence body.")]
    Malformed,
}

/// One parsed sentence of an AIS feed, borrowing from the raw line.
///
/// A sentence carries a single fragment of a broadcast. Fragments of a
/// multi-sentence broadcast share a `sequence_id` and are numbered
/// `fragment_index` of `fragment_count`; reassembly is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Two-character source identifier (e.g. `AI`).
    pub talker: &'a str,
    /// Sentence formatter (e.g. `VDM`).
    pub formatter: &'a str,
    /// Number of sentences carrying this broadcast.
    pub fragment_count: u32,
    /// One-based position of this sentence within the broadcast.
    pub fragment_index: u32,
    /// Grouping token shared by fragments of one broadcast. May be empty.
    pub sequence_id: &'a str,
    /// Radio channel the broadcast was received on. May be empty.
    pub channel: &'a str,
    /// Armored payload text.
    pub payload: &'a str,
    /// Padding bits appended to the final payload symbol.
    pub fill_bits: u8,
}

impl Sentence<'_> {
    /// Un-armor the sentence's payload into its packed bitstream.
    pub fn unarmor(&self) -> Result<Payload, armor::Error> {
        armor::decode(self.payload, self.fill_bits)
    }
}

/// Parse one line of an AIS feed into a sentence.
pub fn parse(raw: &str) -> Result<Sentence<'_>, Error> {
    if raw.is_empty() {
        Err(Error::Empty)?;
    }

    if raw.as_bytes()[0] != b'!' {
        Err(Error::Prefix)?;
    }

    let declared = declared_checksum(raw.as_bytes())?;

    // The delimiters and the checksum trailer are all ASCII, so slicing them
    // off cannot split a code point.
    let body = &raw[1..raw.len() - 3];

    let computed = compute_checksum(0, body.as_bytes());
    if declared != computed {
        Err(Error::Checksum { declared, computed })?;
    }

    let mut fields = body.split(',');

    let identifier = fields.next().ok_or(Error::Malformed)?;
    let fragment_count = number(fields.next())?;
    let fragment_index = number(fields.next())?;
    let sequence_id = fields.next().ok_or(Error::Malformed)?;
    let channel = fields.next().ok_or(Error::Malformed)?;
    let payload = fields.next().ok_or(Error::Malformed)?;
    let fill_bits = number(fields.next())?;

    if fields.next().is_some() {
        Err(Error::Malformed)?;
    }

    let talker = identifier.get(..2).ok_or(Error::Malformed)?;
    let formatter = identifier.get(2..).ok_or(Error::Malformed)?;

    Ok(Sentence {
        talker,
        formatter,
        fragment_count,
        fragment_index,
        sequence_id,
        channel,
        payload,
        fill_bits,
    })
}

/// Read the checksum declared in a sentence's trailer.
fn declared_checksum(raw: &[u8]) -> Result<u8, Error> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct Trailer {
        delimiter: u8,
        value: [u8; 2],
    }

    let tail: [u8; 3] = raw
        .len()
        .checked_sub(3)
        .and_then(|s| raw.get(s..))
        .ok_or(Error::MissingChecksum)?
        .try_into()
        .unwrap();

    let Trailer { delimiter, value } = zerocopy::transmute!(tail);

    if delimiter != b'*' {
        Err(Error::MissingChecksum)?;
    }

    let value = core::str::from_utf8(&value).map_err(|_| Error::Malformed)?;
    u8::from_str_radix(value, 16).map_err(|_| Error::Malformed)
}

/// Parse a numeric field, rejecting a missing or non-integer value.
fn number<T: core::str::FromStr>(field: Option<&str>) -> Result<T, Error> {
    field.and_then(|f| f.parse().ok()).ok_or(Error::Malformed)
}
