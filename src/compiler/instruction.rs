use std::fmt::{self, Display};

/// One operation of the tape machine. Carries no operand and no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Plus,
    Minus,
    MoveLeft,
    MoveRight,
    LoopBegin,
    LoopEnd,
    Output,
    /// Recognized but has no effect on the machine.
    Input,
    /// Pops a saved address off the reference stack into the pointer.
    Reference,
    /// Pushes the pointer onto the reference stack, then follows the current cell.
    Dereference,
    Allocate,
}

/// Instructions in execution order, exactly as scanned.
pub type Program = Vec<Instruction>;

const ALL_INSTRUCTION: [Instruction; 11] = [
    Instruction::Plus,
    Instruction::Minus,
    Instruction::MoveLeft,
    Instruction::MoveRight,
    Instruction::LoopBegin,
    Instruction::LoopEnd,
    Instruction::Output,
    Instruction::Input,
    Instruction::Reference,
    Instruction::Dereference,
    Instruction::Allocate,
];

impl Instruction {
    #[must_use]
    pub fn all() -> &'static [Instruction] {
        &ALL_INSTRUCTION
    }

    /// The source character this instruction is written as.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Instruction::Plus => '+',
            Instruction::Minus => '-',
            Instruction::MoveLeft => '<',
            Instruction::MoveRight => '>',
            Instruction::LoopBegin => '[',
            Instruction::LoopEnd => ']',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::Reference => '&',
            Instruction::Dereference => '*',
            Instruction::Allocate => '?',
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
