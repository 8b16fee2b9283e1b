use log::debug;

use super::backend::Descriptor;
use super::backend::Layout;
use super::instruction::Instruction;

pub struct Emitter<'a> {
    descriptor: &'a dyn Descriptor,
    layout: &'a Layout,
}

impl<'a> Emitter<'a> {
    #[must_use]
    pub fn new(descriptor: &'a dyn Descriptor, layout: &'a Layout) -> Emitter<'a> {
        Emitter { descriptor, layout }
    }

    /// Preamble, then one translation per instruction in program order, then
    /// postamble. Nothing is validated or reformatted.
    #[must_use]
    pub fn emit(&self, program: &[Instruction]) -> String {
        let mut code_builder = self.descriptor.preamble(self.layout);
        for instruction in program {
            code_builder.push_str(&self.descriptor.translate(self.layout, *instruction));
        }
        code_builder.push_str(&self.descriptor.postamble(self.layout));
        debug!(
            "emitted {} bytes for {} instructions",
            code_builder.len(),
            program.len()
        );
        code_builder
    }
}
