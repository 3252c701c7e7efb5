mod interpret;

pub use interpret::Interpreter;
