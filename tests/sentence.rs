use pelorus::sentence::{self, Error, Sentence, check::compute_checksum};

const PACKET: &str = "!AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*11";

/// Frame a body with its computed checksum trailer.
fn frame(body: &str) -> String {
    format!("!{body}*{:02X}", compute_checksum(0, body.as_bytes()))
}

#[test]
fn parse_position_report() {
    let expected = Sentence {
        talker: "AI",
        formatter: "VDM",
        fragment_count: 1,
        fragment_index: 1,
        sequence_id: "",
        channel: "B",
        payload: "13@nocPP0427vl<`JO2``gwj08RD",
        fill_bits: 0,
    };

    assert_eq!(sentence::parse(PACKET).unwrap(), expected);
}

#[test]
fn parse_is_idempotent() {
    assert_eq!(
        sentence::parse(PACKET).unwrap(),
        sentence::parse(PACKET).unwrap(),
    );
}

#[test]
fn parse_fragment_metadata() {
    let raw = frame("AIVDM,2,2,3,B,1@0000000000000,2");
    let sentence = sentence::parse(&raw).unwrap();

    assert_eq!(sentence.fragment_count, 2);
    assert_eq!(sentence.fragment_index, 2);
    assert_eq!(sentence.sequence_id, "3");
    assert_eq!(sentence.fill_bits, 2);
}

#[test]
fn parse_empty_formatter() {
    let raw = frame("AI,1,1,,B,0,0");
    let sentence = sentence::parse(&raw).unwrap();

    assert_eq!(sentence.talker, "AI");
    assert_eq!(sentence.formatter, "");
}

#[test]
fn reject_empty_input() {
    assert_eq!(sentence::parse(""), Err(Error::Empty));
}

#[test]
fn reject_missing_prefix() {
    let raw = "AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*11";
    assert_eq!(sentence::parse(raw), Err(Error::Prefix));

    let raw = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
    assert_eq!(sentence::parse(raw), Err(Error::Prefix));
}

#[test]
fn reject_missing_checksum() {
    let raw = "!AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0";
    assert_eq!(sentence::parse(raw), Err(Error::MissingChecksum));

    // Too short to hold a trailer at all.
    assert_eq!(sentence::parse("!"), Err(Error::MissingChecksum));
    assert_eq!(sentence::parse("!*"), Err(Error::MissingChecksum));
}

#[test]
fn reject_incorrect_checksum() {
    let raw = "!AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*12";

    assert_eq!(
        sentence::parse(raw),
        Err(Error::Checksum {
            declared: 0x12,
            computed: 0x11,
        }),
    );
}

#[test]
fn reject_malformed_checksum_digits() {
    let raw = "!AIVDM,1,1,,B,13@nocPP0427vl<`JO2``gwj08RD,0*GG";
    assert_eq!(sentence::parse(raw), Err(Error::Malformed));
}

#[test]
fn reject_wrong_field_count() {
    // A field short, and a field over.
    let raw = frame("AIVDM,1,1,,B,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));

    let raw = frame("AIVDM,1,1,,B,0,0,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));
}

#[test]
fn reject_non_numeric_fields() {
    let raw = frame("AIVDM,one,1,,B,0,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));

    let raw = frame("AIVDM,1,one,,B,0,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));

    let raw = frame("AIVDM,1,1,,B,0,none");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));

    let raw = frame("AIVDM,-1,1,,B,0,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));
}

#[test]
fn reject_short_identifier() {
    let raw = frame("A,1,1,,B,0,0");
    assert_eq!(sentence::parse(&raw), Err(Error::Malformed));
}

#[test]
fn unarmor_parsed_payload() {
    let sentence = sentence::parse(PACKET).unwrap();
    let payload = sentence.unarmor().unwrap();

    assert_eq!(
        payload.bytes(),
        [
            0x04, 0x34, 0x36, 0xDE, 0xB8, 0x20, 0x00, 0x40, 0x87, 0xFB, 0x43,
            0x28, 0x69, 0xF0, 0xA8, 0xA2, 0xFF, 0xF2, 0x00, 0x88, 0x94,
        ],
    );
}
