//! # fermata-primitives
//!
//! Primitive types for the Fermata VM.
//!
//! This crate provides the two value types every opcode reads and writes:
//! - [`Word`]: a 256-bit value with both an unsigned-magnitude and a
//!   two's-complement signed reading
//! - [`Address`]: a 20-byte account identifier

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod word;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use word::{Word, WordError};

// Re-export the underlying integer types for callers that compute with them.
pub use primitive_types::{U256, U512};
