use std::fs;

use compiler::backend::Backend;
use compiler::backend::Layout;
use compiler::emitter::Emitter;
use compiler::err::CompileError;
use compiler::instruction::Instruction;
use compiler::instruction::Program;
use compiler::lexis::scanner::Scanner;
use constants::common::TMP;
use log::info;
use util::file::gen_tmp_source_path;

pub use compiler::structure::check_structure;

pub mod compiler;
pub mod constants;
pub mod util;

pub type CompileResult<T> = Result<T, CompileError>;

#[must_use]
pub fn scan(code: &str) -> Program {
    Scanner::new(code).scan()
}

#[must_use]
pub fn compile(program: &[Instruction], backend: Backend) -> String {
    compile_with(program, backend, &Layout::default())
}

#[must_use]
pub fn compile_with(
    program: &[Instruction],
    backend: Backend,
    layout: &Layout,
) -> String {
    Emitter::new(backend.descriptor(), layout).emit(program)
}

#[must_use]
pub fn compile_source(code: &str, backend: Backend) -> String {
    compile(&scan(code), backend)
}

/// # Errors
pub fn read_source(path: &str) -> CompileResult<String> {
    fs::read_to_string(path).map_err(|source| CompileError::ReadSource {
        path: path.to_string(),
        source,
    })
}

/// Builds generated program text into an executable with the backend's host
/// toolchain. The executable is not run.
///
/// # Errors
pub fn assemble(code: &str, backend: Backend, output_path: &str) -> CompileResult<()> {
    let descriptor = backend.descriptor();
    let source_path =
        gen_tmp_source_path(descriptor.extension()).map_err(|source| CompileError::WriteSource {
            path: TMP.to_string(),
            source,
        })?;
    fs::write(&source_path, code).map_err(|source| CompileError::WriteSource {
        path: source_path.clone(),
        source,
    })?;

    let mut command = descriptor.toolchain(&source_path, output_path);
    let program = command.get_program().to_string_lossy().into_owned();
    info!("assembling {source_path} into {output_path} with `{program}`");
    let output = command
        .output()
        .map_err(|source| CompileError::ToolchainLaunch {
            program: program.clone(),
            source,
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(CompileError::ToolchainFailed { program, stderr });
    }
    Ok(())
}
