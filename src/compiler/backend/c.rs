use std::process::Command;

use indoc::formatdoc;

use crate::compiler::instruction::Instruction;

use super::Descriptor;
use super::Layout;

pub struct CDescriptor;

impl Descriptor for CDescriptor {
    fn preamble(&self, layout: &Layout) -> String {
        let Layout {
            tape,
            ptr,
            ref_tape,
            ref_ptr,
            tape_size,
            ref_tape_size,
        } = layout;
        formatdoc! {"
            #include <stdio.h>

            unsigned int {tape}[{tape_size}];
            unsigned int {ref_tape}[{ref_tape_size}];
            unsigned int {ptr} = 0;
            unsigned int {ref_ptr} = 0;

            unsigned int allocate(void) {{
                unsigned int size = {tape}[{ptr}];
                unsigned int cons_empty_spaces = 0;
                for (int i = {tape_size} - 1; i > 0; i--) {{
                    if ({tape}[i] == 0) {{ cons_empty_spaces++; }}
                    else {{ cons_empty_spaces = 0; }}
                    if (cons_empty_spaces == size) {{ return i; }}
                }}
                return 0;
            }}

            int main(void) {{
        "}
    }

    fn postamble(&self, layout: &Layout) -> String {
        let Layout { tape, tape_size, .. } = layout;
        formatdoc! {r#"
                for (int i = 0; i < {tape_size}; i++) {{
                    printf("%u ", {tape}[i]);
                }}
                printf("\n");
                return 0;
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
        match instruction {
            Instruction::Plus => format!("    {tape}[{ptr}]++;\n"),
            Instruction::Minus => format!("    {tape}[{ptr}]--;\n"),
            Instruction::MoveLeft => format!("    {ptr}--;\n"),
            Instruction::MoveRight => format!("    {ptr}++;\n"),
            Instruction::LoopBegin => format!("    while ({tape}[{ptr}]) {{\n"),
            Instruction::LoopEnd => String::from("    }\n"),
            Instruction::Output => {
                format!("    printf(\"%c\", (char)({tape}[{ptr}] % 256));\n")
            }
            Instruction::Input => String::new(),
            Instruction::Reference => {
                format!("    {ptr} = {ref_tape}[--{ref_ptr} % {ref_tape_size}];\n")
            }
            Instruction::Dereference => format!(
                "    {ref_tape}[{ref_ptr}++ % {ref_tape_size}] = {ptr};\n    {ptr} = {tape}[{ptr}];\n"
            ),
            Instruction::Allocate => format!("    {tape}[{ptr}] = allocate();\n"),
        }
    }

    fn extension(&self) -> &'static str {
        "c"
    }

    fn toolchain(&self, source: &str, output: &str) -> Command {
        let mut command = Command::new("cc");
        command.arg(source).arg("-o").arg(output);
        command
    }
}
