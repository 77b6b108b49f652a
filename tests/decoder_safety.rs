//! Malformed-container matrix: every field is validated eagerly and decode
//! never panics or partially succeeds.

use chesscloud::{decode, peek_stats, ChesscloudError};

/// Assemble a container by hand so each field can be corrupted on its own.
fn build(
    format: u8,
    sessions: u32,
    shortest: u32,
    longest: u32,
    blob: &[u8],
    declared_blob_len: u32,
    padding: Option<u8>,
    region: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(format);
    out.extend_from_slice(&sessions.to_be_bytes());
    out.extend_from_slice(&shortest.to_be_bytes());
    out.extend_from_slice(&longest.to_be_bytes());
    out.extend_from_slice(&declared_blob_len.to_be_bytes());
    out.extend_from_slice(blob);
    if let Some(p) = padding {
        out.push(p);
    }
    out.extend_from_slice(region);
    out
}

fn valid() -> Vec<u8> {
    build(1, 2, 1, 3, b"a1b1 h1g1", 9, Some(0), &[0x41, 0x42])
}

#[test]
fn valid_container_decodes() {
    let decoded = decode(&valid()).unwrap();
    assert_eq!(decoded.payload, vec![0x41, 0x42]);
    assert_eq!(decoded.stats.sessions, 2);
    assert_eq!(decoded.stats.shortest_labels, vec!["a1b1", "h1g1"]);
}

#[test]
fn truncated_header_at_every_prefix() {
    let container = valid();
    for len in 0..13 {
        assert!(
            matches!(
                decode(&container[..len]),
                Err(ChesscloudError::TruncatedHeader)
            ),
            "prefix of {len} bytes"
        );
    }
}

#[test]
fn missing_blob_length_is_a_truncated_header() {
    // 13 bytes of fixed fields, no label-blob length prefix.
    let container = valid();
    for len in 13..17 {
        assert!(matches!(
            decode(&container[..len]),
            Err(ChesscloudError::TruncatedHeader)
        ));
    }
}

#[test]
fn unknown_format_codes_rejected() {
    for code in [0u8, 5, 9, 255] {
        let container = build(code, 1, 1, 1, b"", 0, Some(0), &[0x41]);
        assert!(matches!(
            decode(&container),
            Err(ChesscloudError::UnknownFormat(c)) if c == code
        ));
    }
}

#[test]
fn short_label_blob_rejected() {
    let container = build(1, 1, 1, 1, b"a1b1", 10, None, &[]);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::TruncatedLabelBlob)
    ));
}

#[test]
fn invalid_utf8_label_blob_rejected() {
    let container = build(1, 1, 1, 1, &[0xFF, 0xFE, 0x20], 3, Some(0), &[0x41]);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::InvalidLabelBlob)
    ));
}

#[test]
fn missing_padding_byte_rejected() {
    let container = build(1, 1, 1, 1, b"a1b1", 4, None, &[]);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::MissingPaddingByte)
    ));
}

#[test]
fn padding_above_seven_rejected() {
    for padding in [8u8, 9, 200] {
        let container = build(1, 1, 1, 1, b"", 0, Some(padding), &[0x41]);
        assert!(matches!(
            decode(&container),
            Err(ChesscloudError::CorruptPadding(p)) if p == padding
        ));
    }
}

#[test]
fn empty_bit_region_rejected() {
    let container = build(1, 1, 1, 1, b"", 0, Some(0), &[]);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::EmptyPayload)
    ));
}

#[test]
fn misaligned_after_padding_strip() {
    // One region byte minus three declared padding bits leaves five bits.
    let container = build(1, 1, 1, 1, b"", 0, Some(3), &[0b1010_0000]);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::Alignment(5))
    ));
}

#[test]
fn metadata_readable_even_when_region_is_empty() {
    // The header-only path mirrors a metadata probe: it never touches the
    // bit-region, so it succeeds where a full decode fails.
    let container = build(3, 7, 2, 5, b"a1a2 h1g2", 9, Some(0), &[]);
    let (format, stats, padding) = peek_stats(&container).unwrap();
    assert_eq!(format.extension(), "png");
    assert_eq!(stats.sessions, 7);
    assert_eq!(stats.shortest, 2);
    assert_eq!(stats.longest, 5);
    assert_eq!(stats.shortest_labels.len(), 2);
    assert_eq!(padding, 0);
    assert!(matches!(
        decode(&container),
        Err(ChesscloudError::EmptyPayload)
    ));
}

#[test]
fn label_blob_splits_on_runs_of_whitespace() {
    let container = build(2, 1, 3, 3, b"  e2e4   e7e5 g1f3 ", 19, Some(0), &[0x00]);
    let decoded = decode(&container).unwrap();
    assert_eq!(decoded.stats.shortest_labels, vec!["e2e4", "e7e5", "g1f3"]);
}
