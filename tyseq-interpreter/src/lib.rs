pub mod algorithm;
pub mod atomic;
pub mod container;
pub mod context;
pub mod error;
pub mod function;
pub mod interpreter;
mod library;
pub mod sequence;
pub mod variadic;

#[cfg(test)]
mod test_util;

pub use tyseq_name::Token;
