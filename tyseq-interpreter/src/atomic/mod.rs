mod arithmetic;
mod compare;
mod types;

pub use arithmetic::{divides, minus, modulus, multiplies, negate, plus, rational};
pub use compare::{compare, equal};
pub use types::{Atomic, AtomicType};
