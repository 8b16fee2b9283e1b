use std::process::Command;

use indoc::formatdoc;

use crate::compiler::instruction::Instruction;

use super::Descriptor;
use super::Layout;

pub struct GoDescriptor;

impl Descriptor for GoDescriptor {
    fn preamble(&self, layout: &Layout) -> String {
        let Layout {
            tape,
            ptr,
            ref_tape,
            ref_ptr,
            tape_size,
            ref_tape_size,
        } = layout;
        formatdoc! {r#"
            package main

            import "fmt"

            var {tape} = [{tape_size}]uint32{{}}
            var {ref_tape} = [{ref_tape_size}]uint32{{}}
            var {ptr} uint32 = 0
            var {ref_ptr} uint32 = 0

            func allocate() uint32 {{
                var size uint32 = {tape}[{ptr}]
                var cons_empty_spaces uint32 = 0
                for i := uint32({tape_size} - 1); i > 0; i-- {{
                    if {tape}[i] == 0 {{
                        cons_empty_spaces++
                    }} else {{
                        cons_empty_spaces = 0
                    }}
                    if cons_empty_spaces == size {{
                        return i
                    }}
                }}
                return 0
            }}

            func main() {{
        "#}
    }

    fn postamble(&self, layout: &Layout) -> String {
        let Layout { tape, tape_size, .. } = layout;
        formatdoc! {r#"
                for i := 0; i < {tape_size}; i++ {{
                    fmt.Printf("%d ", {tape}[i])
                }}
                fmt.Println()
            }}"#}
    }

    fn translate(&self, layout: &Layout, instruction: Instruction) -> String {
        let Layout {
            tape,
            ptr,
            ref_tape,
            ref_ptr,
            ref_tape_size,
            ..
        } = layout;
        let statements = match instruction {
            Instruction::Plus => vec![format!("{tape}[{ptr}]++")],
            Instruction::Minus => vec![format!("{tape}[{ptr}]--")],
            Instruction::MoveLeft => vec![format!("{ptr}--")],
            Instruction::MoveRight => vec![format!("{ptr}++")],
            Instruction::LoopBegin => vec![format!("for {tape}[{ptr}] != 0 {{")],
            Instruction::LoopEnd => vec![String::from("}")],
            // raw byte, so values above 127 print like C's `%c`
            Instruction::Output => vec![format!(
                "fmt.Print(string([]byte{{byte({tape}[{ptr}] % 256)}}))"
            )],
            Instruction::Input => vec![],
            Instruction::Reference => vec![
                format!("{ref_ptr}--"),
                format!("{ptr} = {ref_tape}[{ref_ptr}%{ref_tape_size}]"),
            ],
            Instruction::Dereference => vec![
                format!("{ref_tape}[{ref_ptr}%{ref_tape_size}] = {ptr}"),
                format!("{ptr} = {tape}[{ptr}]"),
                format!("{ref_ptr}++"),
            ],
            Instruction::Allocate => vec![format!("{tape}[{ptr}] = allocate()")],
        };
        statements
            .iter()
            .map(|statement| format!("    {statement}\n"))
            .collect()
    }

    fn extension(&self) -> &'static str {
        "go"
    }

    fn toolchain(&self, source: &str, output: &str) -> Command {
        let mut command = Command::new("go");
        command.arg("build").arg("-o").arg(output).arg(source);
        command
    }
}
