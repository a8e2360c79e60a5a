//! Overflow-checked 256-bit integer operations.
//!
//! The unsigned operations read their operands as magnitudes in
//! `[0, 2^256 - 1]`; the signed operations read them as two's-complement
//! values in `[-2^255, 2^255 - 1]`. Each computes the exact result in
//! 512-bit precision, then applies the overflow policy. Operands are never
//! mutated and a failing operation has no effect.

use crate::error::{VmError, VmResult};
use crate::overflow;
use fermata_primitives::Word;
use primitive_types::U512;

/// Unsigned addition: `a + b`, failing with overflow when the sum exceeds
/// `2^256 - 1`.
pub fn uadd(a: Word, b: Word) -> VmResult<Word> {
    let sum = U512::from(a.as_u256()) + U512::from(b.as_u256());
    overflow::fit_unsigned(sum)
}

/// Unsigned subtraction: `a - b`, failing with overflow whenever `b > a`
/// (a negative difference has no unsigned representation).
pub fn usub(a: Word, b: Word) -> VmResult<Word> {
    if b.as_u256() > a.as_u256() {
        return Err(VmError::Overflow);
    }
    Ok(Word::new(a.as_u256() - b.as_u256()))
}

/// Unsigned multiplication: `a * b`, failing with overflow when the exact
/// product exceeds `2^256 - 1`.
pub fn umul(a: Word, b: Word) -> VmResult<Word> {
    let product = a.as_u256().full_mul(b.as_u256());
    overflow::fit_unsigned(product)
}

/// Signed addition: `a + b` under the two's-complement reading, failing
/// with overflow when the sum escapes `[-2^255, 2^255 - 1]`.
pub fn sadd(a: Word, b: Word) -> VmResult<Word> {
    let (an, am) = widen(a);
    let (bn, bm) = widen(b);
    let (negative, magnitude) = add_parts(an, am, bn, bm);
    overflow::fit_signed(negative, magnitude)
}

/// Signed subtraction: `a - b` under the two's-complement reading, failing
/// with overflow when the difference escapes `[-2^255, 2^255 - 1]`.
pub fn ssub(a: Word, b: Word) -> VmResult<Word> {
    let (an, am) = widen(a);
    let (bn, bm) = widen(b);
    // a - b is a + (-b); a zero magnitude carries no sign.
    let (negative, magnitude) = add_parts(an, am, !bn, bm);
    overflow::fit_signed(negative, magnitude)
}

/// Signed multiplication: `a * b` under the two's-complement reading,
/// failing with overflow when the product escapes `[-2^255, 2^255 - 1]`.
/// In particular `SIGNED_MIN * -1` overflows: its negation `2^255` is one
/// past the positive bound.
pub fn smul(a: Word, b: Word) -> VmResult<Word> {
    let (an, am) = a.to_sign_magnitude();
    let (bn, bm) = b.to_sign_magnitude();
    let magnitude = am.full_mul(bm);
    overflow::fit_signed(an != bn, magnitude)
}

/// Decode a word's signed reading with the magnitude widened to 512 bits.
fn widen(w: Word) -> (bool, U512) {
    let (negative, magnitude) = w.to_sign_magnitude();
    (negative, U512::from(magnitude))
}

/// Sign-magnitude addition over exact 512-bit magnitudes.
fn add_parts(an: bool, am: U512, bn: bool, bm: U512) -> (bool, U512) {
    if an == bn {
        (an, am + bm)
    } else if am >= bm {
        (an, am - bm)
    } else {
        (bn, bm - am)
    }
}
