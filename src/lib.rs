#![no_std]

//! An efficient decoder for the NMEA 0183 framing of marine Automatic
//! Identification System broadcasts.
//!
//! Pelorus handles the transport envelope of an AIS feed: it validates and
//! splits `!`-prefixed sentences, verifies their checksums, and un-armors the
//! printable payload into the packed bitstream that message-level decoders
//! consume. Reading lines from a receiver, reassembling multi-fragment
//! messages, and interpreting message fields are left to the application.
//!
//! Most users should begin with [`sentence::parse`], un-armor the result with
//! [`Sentence::unarmor`](sentence::Sentence::unarmor), and slice fields out of
//! the returned [`Payload`](payload::Payload) with
//! [`Payload::bits`](payload::Payload::bits):
//!
//! ```
//! let line = "!AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*11";
//!
//! let sentence = pelorus::sentence::parse(line)?;
//! let payload = sentence.unarmor()?;
//!
//! let message_type = payload.bits(0, 6);
//! ```
//!
//! The packing internals in [`armor::packer`] are exposed for applications
//! feeding six-bit values from another source.

extern crate alloc;

pub mod armor;
pub mod payload;
pub mod sentence;
