use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChesscloudError {
    /// A fixed-width header field could not be read in full.
    #[error("container truncated: header too short")]
    TruncatedHeader,

    /// Format code outside the enumerated set.
    #[error("unknown format code {0}")]
    UnknownFormat(u8),

    /// Shortest-session label blob shorter than its declared length.
    #[error("container truncated: shortest-session record cut off")]
    TruncatedLabelBlob,

    /// Shortest-session label blob is not valid UTF-8.
    #[error("shortest-session record is not valid UTF-8")]
    InvalidLabelBlob,

    /// Padding byte absent after the shortest-session record.
    #[error("container truncated: missing padding byte")]
    MissingPaddingByte,

    /// Padding count above 7 or larger than the available bit-region.
    #[error("corrupt padding count {0}")]
    CorruptPadding(u8),

    /// Bit count not a multiple of 8 after padding removal.
    #[error("bitstream of {0} bits is not byte-aligned")]
    Alignment(usize),

    /// Zero-length payload or payload bit-region.
    #[error("payload is empty")]
    EmptyPayload,

    /// Bit read past the end of the stream.
    #[error("bit read out of range: {width} bits at offset {offset} of {len}")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// The move oracle never offers a usable choice from its initial state.
    #[error("move oracle cannot consume input from its initial state")]
    UnproductiveOracle,

    /// Payload exceeds the configured size limit.
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
