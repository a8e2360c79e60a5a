//! The three state-dependent privileged opcodes.
//!
//! None of these can fail: absence from the validator set is an ordinary
//! `false`, the fee toggle is unconditional, and randomness draws from the
//! process RNG.

use crate::state::RunState;
use fermata_primitives::Word;
use rand::RngCore;
use tracing::debug;

/// Produce a fresh 256-bit word from the thread RNG.
///
/// Each call returns an effectively unique value; across any realistic
/// number of calls two draws never collide. The source is NOT seeded per
/// execution, so independent replicas of the interpreter will diverge the
/// moment they execute this opcode. Any consensus-sensitive deployment
/// must replace the entropy source with one keyed identically on every
/// replica.
pub fn rand() -> Word {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    Word::from_be_bytes(bytes)
}

/// Test whether `candidate` is one of the configured validators.
///
/// Membership is exact bitwise equality on the full 256-bit word; a
/// candidate with any stray bit set, including above the 160-bit address
/// part, is not a member. Pure read of the run state.
pub fn is_validator(candidate: Word, state: &RunState) -> bool {
    state.validators().contains(&candidate)
}

/// Switch on the fee-waiver flag for the current execution.
///
/// Unconditional and idempotent; the effect is observed only by the gas
/// accounting layer when it later reads the flag.
pub fn free_gas(state: &mut RunState) {
    debug!(target: "fermata_vm", "fee waiver enabled for current execution");
    state.set_fee_waived();
}

#[cfg(test)]
mod tests {
    use super::*;
    use fermata_primitives::Address;

    #[test]
    fn test_rand_nonzero_and_fresh() {
        let a = rand();
        let b = rand();
        // A 256-bit draw repeating (or landing on zero) does not happen
        assert_ne!(a, b);
        assert!(!a.is_zero());
    }

    #[test]
    fn test_is_validator_member() {
        let addr = Address::from_bytes([0x42; 20]);
        let state = RunState::new(&[addr]);
        assert!(is_validator(Word::from(addr), &state));
    }

    #[test]
    fn test_is_validator_non_member() {
        let state = RunState::new(&[Address::from_bytes([0x42; 20])]);
        assert!(!is_validator(Word::from(Address::from_bytes([0x43; 20])), &state));
        assert!(!is_validator(Word::ZERO, &state));
    }

    #[test]
    fn test_is_validator_stray_high_bit() {
        let addr = Address::from_bytes([0x42; 20]);
        let state = RunState::new(&[addr]);

        // Same low 160 bits, one bit set above the address part
        let mut bytes = Word::from(addr).to_be_bytes();
        bytes[0] = 0x01;
        assert!(!is_validator(Word::from_be_bytes(bytes), &state));
    }

    #[test]
    fn test_is_validator_empty_set() {
        let state = RunState::new(&[]);
        assert!(!is_validator(Word::ZERO, &state));
    }

    #[test]
    fn test_free_gas_sets_flag() {
        let mut state = RunState::new(&[]);
        assert!(!state.fee_waived());
        free_gas(&mut state);
        assert!(state.fee_waived());
    }

    #[test]
    fn test_free_gas_idempotent() {
        let mut state = RunState::new(&[]);
        free_gas(&mut state);
        free_gas(&mut state);
        assert!(state.fee_waived());
    }
}
