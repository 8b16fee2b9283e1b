use crate::CompileResult;
use crate::compiler::err::CompileError;

use super::instruction::Instruction;

/// Verifies that every `[` has a matching `]`.
///
/// Never run by [`crate::compile`]; unbalanced programs still emit, and the
/// target toolchain is the one to reject them.
///
/// # Errors
/// The first `]` with nothing open, otherwise the earliest `[` left open.
pub fn check_structure(program: &[Instruction]) -> CompileResult<()> {
    let mut open = Vec::new();
    for (index, instruction) in program.iter().enumerate() {
        match instruction {
            Instruction::LoopBegin => open.push(index),
            Instruction::LoopEnd => {
                if open.pop().is_none() {
                    return Err(CompileError::UnmatchedLoopEnd { index });
                }
            }
            _ => (),
        }
    }
    match open.first() {
        Some(&index) => Err(CompileError::UnclosedLoopBegin {
            index,
            count: open.len(),
        }),
        None => Ok(()),
    }
}
