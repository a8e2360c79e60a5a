//! # fermata-vm
//!
//! The arithmetic and privileged-opcode core of the Fermata VM.
//!
//! This crate provides:
//! - Overflow-checked 256-bit integer operations, unsigned and signed
//! - Decimal fixed-point multiply/divide with an explicit scale operand
//! - The three state-dependent opcodes: randomness, validator membership,
//!   gas-fee waiver
//! - The shared per-execution [`RunState`] and the [`VmError`] taxonomy
//!
//! The bytecode fetch/decode loop, operand stack, memory, and gas
//! scheduling live in the surrounding interpreter. That loop pops
//! well-formed [`Word`] operands, calls the operation functions here, and
//! pushes the result or converts a [`VmError`] into a halted execution.
//! Every arithmetic function computes the exact mathematical result in
//! 512-bit precision and range-checks it before re-encoding, so no host
//! wraparound can leak into a result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod error;
pub mod fixed_point;
pub mod opcode;
mod overflow;
pub mod privileged;
pub mod state;

pub use error::{VmError, VmResult};
pub use opcode::Opcode;
pub use state::RunState;

// Re-export the operand type so interpreter-side callers need one import.
pub use fermata_primitives::{Address, Word};
