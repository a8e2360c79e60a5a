//! Decimal fixed-point multiply and divide.
//!
//! Each operation takes a third `scale` operand selecting a decimal
//! precision: with scale N the factor is 10^N. Multiply computes
//! `trunc(x * y / 10^N)` and divide computes `trunc(x * 10^N / y)`, both
//! truncating toward zero, so a contract can carry N decimal places
//! through a multiplication or recover them through a division without
//! floating point. Scale 0 degenerates to the plain multiply/divide
//! contract. Results are overflow-checked against the applicable
//! (unsigned or signed) 256-bit range after scaling.
//!
//! Division by zero yields the zero word, the same convention the
//! interpreter applies to plain DIV; it is not an error.

use crate::error::{VmError, VmResult};
use crate::overflow;
use fermata_primitives::Word;
use primitive_types::{U256, U512};

/// Unsigned fixed-point multiply: `trunc(x * y / 10^scale)`.
pub fn ufmul(x: Word, y: Word, scale: Word) -> VmResult<Word> {
    let product = x.as_u256().full_mul(y.as_u256());
    overflow::fit_unsigned(scale_down(product, scale))
}

/// Signed fixed-point multiply: `trunc(x * y / 10^scale)` under the
/// two's-complement reading, truncating toward zero.
pub fn sfmul(x: Word, y: Word, scale: Word) -> VmResult<Word> {
    let (xn, xm) = x.to_sign_magnitude();
    let (yn, ym) = y.to_sign_magnitude();
    let product = xm.full_mul(ym);
    overflow::fit_signed(xn != yn, scale_down(product, scale))
}

/// Unsigned fixed-point divide: `trunc(x * 10^scale / y)`.
/// Returns zero when `y` is zero.
pub fn ufdiv(x: Word, y: Word, scale: Word) -> VmResult<Word> {
    if y.is_zero() {
        return Ok(Word::ZERO);
    }
    let dividend = scale_up(x.as_u256(), scale)?;
    overflow::fit_unsigned(dividend / U512::from(y.as_u256()))
}

/// Signed fixed-point divide: `trunc(x * 10^scale / y)` under the
/// two's-complement reading, truncating toward zero.
/// Returns zero when `y` is zero.
pub fn sfdiv(x: Word, y: Word, scale: Word) -> VmResult<Word> {
    let (yn, ym) = y.to_sign_magnitude();
    if ym.is_zero() {
        return Ok(Word::ZERO);
    }
    let (xn, xm) = x.to_sign_magnitude();
    let dividend = scale_up(xm, scale)?;
    overflow::fit_signed(xn != yn, dividend / U512::from(ym))
}

/// 10^scale in 512-bit precision, or `None` when it exceeds 512 bits
/// (scale >= 155, including scales too large for a machine word).
fn pow10(scale: Word) -> Option<U512> {
    if scale.as_u256() > U256::from(512u64) {
        return None;
    }
    U512::from(10u64).checked_pow(U512::from(scale.as_u256().low_u64()))
}

/// Divide an exact 512-bit product by 10^scale, truncating.
///
/// A product is always below 2^512, so once 10^scale exceeds 512 bits the
/// quotient is zero without computing the factor.
fn scale_down(product: U512, scale: Word) -> U512 {
    match pow10(scale) {
        Some(factor) => product / factor,
        None => U512::zero(),
    }
}

/// Multiply a dividend magnitude by 10^scale exactly.
///
/// When the scaled dividend needs more than 512 bits the eventual
/// quotient cannot fit either signedness range (the divisor is below
/// 2^256, so the quotient stays above 2^256), hence overflow is signaled
/// here. A zero dividend scales to zero at any scale.
fn scale_up(magnitude: U256, scale: Word) -> VmResult<U512> {
    if magnitude.is_zero() {
        return Ok(U512::zero());
    }
    let factor = pow10(scale).ok_or(VmError::Overflow)?;
    U512::from(magnitude)
        .checked_mul(factor)
        .ok_or(VmError::Overflow)
}
