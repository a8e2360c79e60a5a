//! Per-execution run state shared by opcode invocations

use fermata_primitives::{Address, Word};

/// Mutable state shared across all opcode invocations within one
/// interpreter run.
///
/// Created once per top-level execution and owned by the interpreter
/// loop; operations receive a reference. The validator list is fixed at
/// construction, the fee-waiver flag starts false and is only ever set by
/// the waiver opcode. Each execution gets its own `RunState`, so
/// concurrent executions never share mutable state.
#[derive(Clone, Debug, Default)]
pub struct RunState {
    /// Validator identifiers, widened to words at construction so
    /// membership tests are exact 256-bit comparisons
    validators: Vec<Word>,
    /// Whether gas charging has been waived for this execution
    fee_waived: bool,
}

impl RunState {
    /// Create a run state with the configured validator set
    pub fn new(validators: &[Address]) -> Self {
        Self {
            validators: validators.iter().copied().map(Word::from).collect(),
            fee_waived: false,
        }
    }

    /// The configured validator words
    pub fn validators(&self) -> &[Word] {
        &self.validators
    }

    /// Whether the fee waiver has been switched on
    pub fn fee_waived(&self) -> bool {
        self.fee_waived
    }

    /// Switch the fee waiver on. Only the waiver opcode calls this.
    pub(crate) fn set_fee_waived(&mut self) {
        self.fee_waived = true;
    }
}
