//! Encode driver: walks a move oracle while consuming payload bits.
//!
//! Each step reads a chunk whose width is the floor base-2 logarithm of the
//! number of moves currently on offer, clamped to the bits remaining, and
//! plays the move whose index equals the chunk value. The emitted bit pattern
//! therefore equals the consumed chunk, and the accumulated output reproduces
//! the payload bit-for-bit; the traversal contributes session statistics only.

use crate::bits;
use crate::error::ChesscloudError;
use crate::oracle::MoveOracle;
use crate::stats::{EncodeStats, SessionLog};

/// Walk `oracle` over the whole payload, returning the emitted bit sequence
/// and the session statistics.
///
/// The oracle state is reset to its canonical start whenever a session ends:
/// either the current state is terminal, or it offers fewer than two moves
/// and so cannot encode even a single bit.
pub fn drive<O: MoveOracle>(
    oracle: &O,
    payload: &[u8],
) -> Result<(Vec<bool>, EncodeStats), ChesscloudError> {
    if payload.is_empty() {
        return Err(ChesscloudError::EmptyPayload);
    }

    let input = bits::bytes_to_bits(payload);
    let total = input.len();
    let mut bit_index = 0usize;

    let mut state = oracle.initial_state();
    let mut log = SessionLog::new();
    let mut output = Vec::with_capacity(total);

    while bit_index < total {
        let options = oracle.options(&state);

        let width = if options.is_empty() {
            0
        } else {
            floor_log2(options.len()).min(total - bit_index).min(32)
        };

        if width == 0 {
            // Terminal or single-option state: close the session and restart.
            // A boundary with no moves since the last restart means the
            // canonical state itself cannot consume input, ever.
            if log.current_len() == 0 {
                return Err(ChesscloudError::UnproductiveOracle);
            }
            log.boundary();
            state = oracle.initial_state();
            continue;
        }

        let value = bits::take_chunk(&input, bit_index, width)?;
        // value < 2^width <= options.len(), so the index is always in range.
        let mv = &options[value as usize];
        bits::push_chunk(&mut output, value, width);
        bit_index += width;
        log.record(oracle.label(mv));
        state = oracle.apply(&state, mv);
    }

    Ok((output, log.finish()))
}

fn floor_log2(n: usize) -> usize {
    debug_assert!(n > 0);
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_log2_values() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(4), 2);
        assert_eq!(floor_log2(7), 2);
        assert_eq!(floor_log2(8), 3);
        assert_eq!(floor_log2(9), 3);
    }
}
