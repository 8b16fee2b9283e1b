pub mod backend;
pub mod emitter;
pub mod err;
pub mod instruction;
pub mod lexis;
pub mod structure;
