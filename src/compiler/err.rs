use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    // Structure Errors
    #[error("unmatched `]` at instruction {index}")]
    UnmatchedLoopEnd { index: usize },
    #[error("{count} unclosed `[`, the first at instruction {index}")]
    UnclosedLoopBegin { index: usize, count: usize },

    // Io Errors
    #[error("failed to read source file {path}")]
    ReadSource {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write generated program to {path}")]
    WriteSource {
        path: String,
        #[source]
        source: io::Error,
    },

    // Toolchain Errors
    #[error("failed to launch `{program}`")]
    ToolchainLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` rejected the generated program:\n{stderr}")]
    ToolchainFailed { program: String, stderr: String },
}
