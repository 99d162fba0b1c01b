use thiserror::Error;

// Unified error type for dynmat

#[derive(Error, Debug)]
pub enum DmError {
    #[error("size {requested} is out of range (expected 1..={max})")]
    OutOfRange { requested: usize, max: usize },
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("cannot parse element {index} from token {token:?}")]
    Parse { index: usize, token: String },
    #[error("unexpected end of input: expected {expected} elements, read {read}")]
    UnexpectedEof { expected: usize, read: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DmError>;

impl DmError {
    /// Size check shared by every binary operation.
    pub(crate) fn ensure_same_size(expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            log::debug!("rejecting operands of sizes {} and {}", expected, actual);
            return Err(DmError::SizeMismatch { expected, actual });
        }
        Ok(())
    }
}
