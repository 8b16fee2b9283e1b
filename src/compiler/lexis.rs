pub mod scanner;
pub mod text;
