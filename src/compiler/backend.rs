use std::fmt::{self, Display};
use std::process::Command;

use crate::constants::common::PTR;
use crate::constants::common::REF_PTR;
use crate::constants::common::REF_TAPE;
use crate::constants::common::REF_TAPE_SIZE;
use crate::constants::common::TAPE;
use crate::constants::common::TAPE_SIZE;

use super::instruction::Instruction;

pub mod c;
pub mod go;

/// Names and sizes of the machine resources, shared by every backend so that
/// generated programs behave the same whichever target they are written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub tape: &'static str,
    pub ptr: &'static str,
    pub ref_tape: &'static str,
    pub ref_ptr: &'static str,
    pub tape_size: usize,
    pub ref_tape_size: usize,
}

impl Layout {
    #[must_use]
    pub fn new() -> Layout {
        Layout {
            tape: TAPE,
            ptr: PTR,
            ref_tape: REF_TAPE,
            ref_ptr: REF_PTR,
            tape_size: TAPE_SIZE,
            ref_tape_size: REF_TAPE_SIZE,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

/// Text templates realizing the machine in one target language.
///
/// Each method is a pure function of the layout (and instruction); a new
/// target only needs a new implementation of this trait.
pub trait Descriptor {
    /// Resource declarations, the `allocate` function and the opening of the
    /// entry point.
    fn preamble(&self, layout: &Layout) -> String;

    /// Tape dump followed by the closing of the entry point.
    fn postamble(&self, layout: &Layout) -> String;

    fn translate(&self, layout: &Layout, instruction: Instruction) -> String;

    /// File extension the target's toolchain expects, without the dot.
    fn extension(&self) -> &'static str;

    /// Host command that turns `source` into an executable at `output`.
    fn toolchain(&self, source: &str, output: &str) -> Command;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    C,
    Go,
}

const ALL_BACKEND: [Backend; 2] = [Backend::C, Backend::Go];

impl Backend {
    #[must_use]
    pub fn all() -> &'static [Backend] {
        &ALL_BACKEND
    }

    #[must_use]
    pub fn descriptor(self) -> &'static dyn Descriptor {
        match self {
            Backend::C => &c::CDescriptor,
            Backend::Go => &go::GoDescriptor,
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::C => write!(f, "c"),
            Backend::Go => write!(f, "go"),
        }
    }
}
