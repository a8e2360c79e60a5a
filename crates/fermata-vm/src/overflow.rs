//! The overflow policy shared by every arithmetic operation.
//!
//! Operations compute their exact mathematical result in 512-bit
//! precision and hand it to one of the two checks below. A result is
//! either re-encoded into a [`Word`] or rejected with
//! [`VmError::Overflow`]; it is never truncated.

use crate::error::{VmError, VmResult};
use fermata_primitives::Word;
use primitive_types::{U256, U512};
use tracing::trace;

/// Fit an exact unsigned result into a word.
///
/// Valid iff `value <= 2^256 - 1`.
pub(crate) fn fit_unsigned(value: U512) -> VmResult<Word> {
    match U256::try_from(value) {
        Ok(v) => Ok(Word::new(v)),
        Err(_) => {
            trace!(target: "fermata_vm", "unsigned result exceeds 256 bits");
            Err(VmError::Overflow)
        }
    }
}

/// Fit an exact signed result, given as sign and magnitude, into a word.
///
/// Valid iff the value lies in `[-2^255, 2^255 - 1]`: magnitude at most
/// `2^255 - 1` when non-negative, at most `2^255` when negative. Two's
/// complement re-encoding happens only after the check passes.
pub(crate) fn fit_signed(negative: bool, magnitude: U512) -> VmResult<Word> {
    let limit = if negative {
        U512::one() << 255
    } else {
        (U512::one() << 255) - 1
    };
    if magnitude > limit {
        trace!(target: "fermata_vm", negative, "signed result outside 256-bit range");
        return Err(VmError::Overflow);
    }
    // Magnitude fits 256 bits once the check has passed.
    let magnitude = U256::try_from(magnitude).map_err(|_| VmError::Overflow)?;
    Ok(Word::from_sign_magnitude(negative, magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_unsigned_in_range() {
        assert_eq!(fit_unsigned(U512::zero()).unwrap(), Word::ZERO);
        assert_eq!(
            fit_unsigned(U512::from(U256::MAX)).unwrap(),
            Word::MAX
        );
    }

    #[test]
    fn test_fit_unsigned_overflow() {
        // 2^256 is one past the unsigned maximum
        let two_pow_256 = U512::one() << 256;
        assert_eq!(fit_unsigned(two_pow_256), Err(VmError::Overflow));
        assert_eq!(fit_unsigned(U512::MAX), Err(VmError::Overflow));
    }

    #[test]
    fn test_fit_signed_positive_bound() {
        let max = (U512::one() << 255) - 1;
        assert_eq!(fit_signed(false, max).unwrap(), Word::SIGNED_MAX);
        assert_eq!(fit_signed(false, max + 1), Err(VmError::Overflow));
    }

    #[test]
    fn test_fit_signed_negative_bound() {
        let min_mag = U512::one() << 255;
        assert_eq!(fit_signed(true, min_mag).unwrap(), Word::SIGNED_MIN);
        assert_eq!(fit_signed(true, min_mag + 1), Err(VmError::Overflow));
    }

    #[test]
    fn test_fit_signed_zero() {
        assert_eq!(fit_signed(false, U512::zero()).unwrap(), Word::ZERO);
        assert_eq!(fit_signed(true, U512::zero()).unwrap(), Word::ZERO);
    }

    #[test]
    fn test_fit_signed_small_values() {
        let one = fit_signed(false, U512::one()).unwrap();
        assert_eq!(one, Word::ONE);

        let minus_one = fit_signed(true, U512::one()).unwrap();
        assert_eq!(minus_one, Word::MAX); // all-ones pattern reads as -1
    }
}
