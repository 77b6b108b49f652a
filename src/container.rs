//! The `.chesscloud` container: fixed big-endian header, shortest-session
//! record, padding descriptor, payload bit-region.
//!
//! ```text
//! [0]        format code
//! [1..5]     session count
//! [5..9]     shortest-session move count
//! [9..13]    longest-session move count
//! [13..17]   label blob byte length L
//! [17..17+L] shortest-session label blob, space separated UTF-8
//! [17+L]     trailing padding bit count (0..=7)
//! [18+L..]   payload bit-region
//! ```
//!
//! Every field is validated eagerly at its point of appearance; a malformed
//! container is a terminal condition, never a best-effort decode.

use crate::bits;
use crate::error::ChesscloudError;
use crate::stats::EncodeStats;

/// Byte length of the fixed-width fields before the label blob length.
pub const HEADER_LEN: usize = 13;

/// Container file extension used at the I/O boundary.
pub const EXTENSION: &str = "chesscloud";

/// Payload type tag carried in the first header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FormatCode {
    PlainText = 1,
    StructuredText = 2,
    RasterA = 3,
    RasterB = 4,
}

impl FormatCode {
    /// Validate a raw header byte.
    pub fn from_code(code: u8) -> Result<Self, ChesscloudError> {
        match code {
            1 => Ok(Self::PlainText),
            2 => Ok(Self::StructuredText),
            3 => Ok(Self::RasterA),
            4 => Ok(Self::RasterB),
            other => Err(ChesscloudError::UnknownFormat(other)),
        }
    }

    /// Map a file extension to its type tag. I/O boundary only; the codec
    /// itself never looks at file names.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "json" => Some(Self::StructuredText),
            "png" => Some(Self::RasterA),
            "jpg" => Some(Self::RasterB),
            _ => None,
        }
    }

    /// File extension used when materializing a recovered payload.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::StructuredText => "json",
            Self::RasterA => "png",
            Self::RasterB => "jpg",
        }
    }
}

/// Everything recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub payload: Vec<u8>,
    pub format: FormatCode,
    pub stats: EncodeStats,
}

/// Serialize an emitted bit sequence and its stats into container bytes.
pub fn serialize(format: FormatCode, stream: &[bool], stats: &EncodeStats) -> Vec<u8> {
    let (region, padding) = bits::pack_padded(stream);
    let blob = stats.shortest_labels.join(" ");
    let mut out = Vec::with_capacity(HEADER_LEN + 4 + blob.len() + 1 + region.len());
    out.push(format as u8);
    out.extend_from_slice(&stats.sessions.to_be_bytes());
    out.extend_from_slice(&stats.shortest.to_be_bytes());
    out.extend_from_slice(&stats.longest.to_be_bytes());
    out.extend_from_slice(&(blob.len() as u32).to_be_bytes());
    out.extend_from_slice(blob.as_bytes());
    out.push(padding);
    out.extend_from_slice(&region);
    out
}

/// Deserialize a container, recovering the payload. The move oracle plays no
/// part here: the bit-region already is the payload plus declared padding.
pub fn deserialize(data: &[u8]) -> Result<Decoded, ChesscloudError> {
    let (format, stats, padding, region_start) = parse_prefix(data)?;
    let region = &data[region_start..];
    if region.is_empty() {
        return Err(ChesscloudError::EmptyPayload);
    }
    let mut stream = bits::bytes_to_bits(region);
    if padding > 7 || padding as usize > stream.len() {
        return Err(ChesscloudError::CorruptPadding(padding));
    }
    stream.truncate(stream.len() - padding as usize);
    let payload = bits::bits_to_bytes(&stream)?;
    Ok(Decoded {
        payload,
        format,
        stats,
    })
}

/// Header-only parse: format code, stats, and the declared padding count,
/// without touching the payload bit-region.
pub fn peek_stats(data: &[u8]) -> Result<(FormatCode, EncodeStats, u8), ChesscloudError> {
    let (format, stats, padding, _) = parse_prefix(data)?;
    Ok((format, stats, padding))
}

fn parse_prefix(data: &[u8]) -> Result<(FormatCode, EncodeStats, u8, usize), ChesscloudError> {
    if data.len() < HEADER_LEN {
        return Err(ChesscloudError::TruncatedHeader);
    }
    let format = FormatCode::from_code(data[0])?;
    let sessions = be_u32(&data[1..5]);
    let shortest = be_u32(&data[5..9]);
    let longest = be_u32(&data[9..13]);
    let blob_len = be_u32(
        data.get(HEADER_LEN..HEADER_LEN + 4)
            .ok_or(ChesscloudError::TruncatedHeader)?,
    ) as usize;
    let blob_start = HEADER_LEN + 4;
    let blob_end = blob_start
        .checked_add(blob_len)
        .ok_or(ChesscloudError::TruncatedLabelBlob)?;
    let blob = data
        .get(blob_start..blob_end)
        .ok_or(ChesscloudError::TruncatedLabelBlob)?;
    let blob = std::str::from_utf8(blob).map_err(|_| ChesscloudError::InvalidLabelBlob)?;
    let shortest_labels: Vec<String> = blob.split_whitespace().map(str::to_owned).collect();
    let padding = *data
        .get(blob_end)
        .ok_or(ChesscloudError::MissingPaddingByte)?;
    let stats = EncodeStats {
        sessions,
        shortest,
        longest,
        shortest_labels,
    };
    Ok((format, stats, padding, blob_end + 1))
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
