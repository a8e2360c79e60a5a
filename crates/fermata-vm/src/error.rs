//! VM error types

use thiserror::Error;

/// VM execution errors.
///
/// The arithmetic core raises exactly one of these kinds, [`VmError::Overflow`].
/// The remaining variants are the halt conditions the surrounding
/// interpreter loop produces; they live in the same closed enum so the
/// loop's handling of a failed opcode is exhaustive and an overflow can
/// never be confused with, say, running out of gas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    /// Arithmetic result outside the representable 256-bit range
    #[error("integer overflow")]
    Overflow,

    /// Out of gas
    #[error("out of gas")]
    OutOfGas,

    /// Stack underflow
    #[error("stack underflow")]
    StackUnderflow,

    /// Stack overflow
    #[error("stack overflow (max 1024)")]
    StackOverflow,

    /// Invalid opcode
    #[error("invalid opcode: 0x{0:02x}")]
    InvalidOpcode(u8),
}

/// Result type for VM operations
pub type VmResult<T> = Result<T, VmError>;
