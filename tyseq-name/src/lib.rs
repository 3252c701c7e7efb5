mod interner;
mod token;

pub use token::Token;
