//! Payload / move-sequence container codec.
//!
//! `chesscloud` maps a binary payload onto a walk of a move-generating state
//! machine and packages the result as a self-describing `.chesscloud`
//! container. Encoding consumes the payload in variable-width bit chunks
//! sized by the number of moves currently available and always plays the move
//! whose index equals the chunk value; decoding reverses only the container
//! layer and never consults the move source.

pub mod bits;
pub mod board;
pub mod config;
pub mod container;
pub mod encode;
pub mod error;
pub mod io_utils;
pub mod oracle;
pub mod stats;

pub use board::BareKings;
pub use config::Limits;
pub use container::{peek_stats, Decoded, FormatCode, EXTENSION};
pub use error::ChesscloudError;
pub use oracle::MoveOracle;
pub use stats::EncodeStats;

/// Encode `payload` by walking `oracle`, producing container bytes.
pub fn encode_with<O: MoveOracle>(
    oracle: &O,
    payload: &[u8],
    format: FormatCode,
) -> Result<Vec<u8>, ChesscloudError> {
    let (stream, stats) = encode::drive(oracle, payload)?;
    Ok(container::serialize(format, &stream, &stats))
}

/// Encode with the built-in bare-kings move source.
pub fn encode(payload: &[u8], format: FormatCode) -> Result<Vec<u8>, ChesscloudError> {
    encode_with(&BareKings, payload, format)
}

/// Decode container bytes back into the original payload, its format code,
/// and the encode-time session statistics.
pub fn decode(data: &[u8]) -> Result<Decoded, ChesscloudError> {
    container::deserialize(data)
}
