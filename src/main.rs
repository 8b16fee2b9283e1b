use std::io::{self, Read};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use env_logger::Env;
use log::warn;

use smpl::compiler::backend::Backend;
use smpl::{assemble, check_structure, compile, read_source, scan};

/// Compiler for the smpl assembly language
#[derive(Parser)]
#[command(name = "smpl", version)]
#[command(group(ArgGroup::new("backend").args(["c", "go"])))]
struct Cli {
    /// Compile to C
    #[arg(short = 'c')]
    c: bool,

    /// Compile to Golang
    #[arg(short = 'g', long = "go")]
    go: bool,

    /// Pass a file into the compiler
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<String>,

    /// Reject programs with unbalanced `[` / `]`
    #[arg(long)]
    check: bool,

    /// Build an executable at PATH instead of printing the program
    #[arg(short = 'o', long = "build", value_name = "PATH")]
    build: Option<String>,
}

impl Cli {
    fn backend(&self) -> Option<Backend> {
        if self.c {
            Some(Backend::C)
        } else if self.go {
            Some(Backend::Go)
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            warn!("unrecognized argument, showing help");
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(e) => e.exit(),
    };
    let Some(backend) = cli.backend() else {
        warn!("no backend selected");
        Cli::command().print_help()?;
        return Ok(());
    };

    let code = match &cli.file {
        Some(path) => read_source(path)?,
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("failed to read standard input")?;
            code
        }
    };

    let program = scan(&code);
    if cli.check {
        check_structure(&program)?;
    }
    let generated = compile(&program, backend);

    match &cli.build {
        Some(output_path) => assemble(&generated, backend, output_path)
            .with_context(|| format!("failed to build {backend} program {output_path}"))?,
        None => println!("{generated}"),
    }
    Ok(())
}
