use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::compiler::instruction::Instruction;
use crate::compiler::instruction::Program;

use super::text::Reader;

static INSTRUCTION_MAP: Lazy<HashMap<char, Instruction>> = Lazy::new(|| {
    Instruction::all()
        .iter()
        .map(|instruction| (instruction.symbol(), *instruction))
        .collect()
});

impl Instruction {
    #[must_use]
    pub fn of(c: char) -> Option<Instruction> {
        INSTRUCTION_MAP.get(&c).copied()
    }
}

/// Turns source text into a [`Program`]. Any character outside the
/// instruction table is a comment and is dropped without complaint.
pub struct Scanner {
    reader: Reader,
}

impl Scanner {
    #[must_use]
    pub fn new(code: &str) -> Scanner {
        Scanner {
            reader: Reader::new(code),
        }
    }

    #[must_use]
    pub fn scan(mut self) -> Program {
        let mut program = Program::new();
        while let Some(c) = self.reader.peek() {
            if let Some(instruction) = Instruction::of(c) {
                program.push(instruction);
            }
            self.reader.forward();
        }
        debug!(
            "scanned {} instructions from {} characters",
            program.len(),
            self.reader.position()
        );
        program
    }
}
