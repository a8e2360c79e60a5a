//! Opcode identifiers for the extension instruction range

/// Opcodes implemented by this core, occupying the 0xB0 extension range
/// left free by the base instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    // Overflow-checked integer arithmetic
    UADD = 0xB0,
    USUB = 0xB1,
    UMUL = 0xB2,
    SADD = 0xB3,
    SSUB = 0xB4,
    SMUL = 0xB5,

    // Decimal fixed-point arithmetic
    UFMUL = 0xB6,
    SFMUL = 0xB7,
    UFDIV = 0xB8,
    SFDIV = 0xB9,

    // Privileged, state-dependent operations
    RAND = 0xBA,
    ISVALIDATOR = 0xBB,
    FREEGAS = 0xBC,
}

impl Opcode {
    /// Try to convert from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0xB0 => Some(Self::UADD),
            0xB1 => Some(Self::USUB),
            0xB2 => Some(Self::UMUL),
            0xB3 => Some(Self::SADD),
            0xB4 => Some(Self::SSUB),
            0xB5 => Some(Self::SMUL),
            0xB6 => Some(Self::UFMUL),
            0xB7 => Some(Self::SFMUL),
            0xB8 => Some(Self::UFDIV),
            0xB9 => Some(Self::SFDIV),
            0xBA => Some(Self::RAND),
            0xBB => Some(Self::ISVALIDATOR),
            0xBC => Some(Self::FREEGAS),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::UADD => "UADD",
            Self::USUB => "USUB",
            Self::UMUL => "UMUL",
            Self::SADD => "SADD",
            Self::SSUB => "SSUB",
            Self::SMUL => "SMUL",
            Self::UFMUL => "UFMUL",
            Self::SFMUL => "SFMUL",
            Self::UFDIV => "UFDIV",
            Self::SFDIV => "SFDIV",
            Self::RAND => "RAND",
            Self::ISVALIDATOR => "ISVALIDATOR",
            Self::FREEGAS => "FREEGAS",
        }
    }

    /// Number of words the dispatch loop pops for this opcode
    pub fn stack_inputs(self) -> usize {
        match self {
            Self::UADD | Self::USUB | Self::UMUL | Self::SADD | Self::SSUB | Self::SMUL => 2,
            Self::UFMUL | Self::SFMUL | Self::UFDIV | Self::SFDIV => 3,
            Self::ISVALIDATOR => 1,
            Self::RAND | Self::FREEGAS => 0,
        }
    }

    /// Number of words the dispatch loop pushes for this opcode
    pub fn stack_outputs(self) -> usize {
        match self {
            Self::FREEGAS => 0,
            _ => 1,
        }
    }

    /// Whether this opcode reads or writes the run state
    pub fn touches_state(self) -> bool {
        matches!(self, Self::ISVALIDATOR | Self::FREEGAS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Opcode; 13] = [
        Opcode::UADD,
        Opcode::USUB,
        Opcode::UMUL,
        Opcode::SADD,
        Opcode::SSUB,
        Opcode::SMUL,
        Opcode::UFMUL,
        Opcode::SFMUL,
        Opcode::UFDIV,
        Opcode::SFDIV,
        Opcode::RAND,
        Opcode::ISVALIDATOR,
        Opcode::FREEGAS,
    ];

    #[test]
    fn test_from_byte_roundtrip() {
        for op in ALL {
            assert_eq!(Opcode::from_byte(op as u8), Some(op));
        }
    }

    #[test]
    fn test_from_byte_invalid() {
        assert_eq!(Opcode::from_byte(0xAF), None);
        assert_eq!(Opcode::from_byte(0xBD), None);
        assert_eq!(Opcode::from_byte(0x01), None);
        assert_eq!(Opcode::from_byte(0xFF), None);
    }

    #[test]
    fn test_byte_values() {
        assert_eq!(Opcode::UADD as u8, 0xB0);
        assert_eq!(Opcode::SMUL as u8, 0xB5);
        assert_eq!(Opcode::SFDIV as u8, 0xB9);
        assert_eq!(Opcode::FREEGAS as u8, 0xBC);
    }

    #[test]
    fn test_stack_arity() {
        assert_eq!(Opcode::UADD.stack_inputs(), 2);
        assert_eq!(Opcode::UFMUL.stack_inputs(), 3);
        assert_eq!(Opcode::ISVALIDATOR.stack_inputs(), 1);
        assert_eq!(Opcode::RAND.stack_inputs(), 0);
        assert_eq!(Opcode::FREEGAS.stack_inputs(), 0);

        assert_eq!(Opcode::UADD.stack_outputs(), 1);
        assert_eq!(Opcode::RAND.stack_outputs(), 1);
        assert_eq!(Opcode::FREEGAS.stack_outputs(), 0);
    }

    #[test]
    fn test_touches_state() {
        assert!(Opcode::ISVALIDATOR.touches_state());
        assert!(Opcode::FREEGAS.touches_state());
        assert!(!Opcode::RAND.touches_state());
        assert!(!Opcode::UADD.touches_state());
    }

    #[test]
    fn test_mnemonics_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.mnemonic(), b.mnemonic());
            }
        }
    }
}
