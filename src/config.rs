use crate::error::ChesscloudError;

/// Limits enforced at the I/O boundary before encoding.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Largest payload accepted for encoding, in bytes.
    pub max_payload: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_payload: 2 * 1024 * 1024,
        }
    }
}

impl Limits {
    pub fn check_payload(&self, size: usize) -> Result<(), ChesscloudError> {
        if size > self.max_payload {
            return Err(ChesscloudError::PayloadTooLarge {
                size,
                limit: self.max_payload,
            });
        }
        Ok(())
    }
}
