//! A deterministic sequence algebra over immutable values.
//!
//! Sequences are ordered immutable lists of items: atomic values (tokens,
//! integers, rationals, booleans, characters), pairs, nested sequences and
//! functions. Every operation returns a new value and leaves its input
//! untouched.
//!
//! Algorithms come in two forms. The [`variadic`] suite works on a bare
//! pack of items; the [`algorithm`] suite works on any container shape and
//! hands back the same shape it was given. Higher-order algorithms take a
//! [`function::Function`], which may be a builtin, a registered closure or a
//! [`function::Bind`] expression with placeholders.
//!
//! ```
//! use tyseq::prelude::*;
//!
//! let context = StaticContext::default();
//! let interpreter = Interpreter::new(&context);
//!
//! let sorted = algorithm::sort(&interpreter, &Builtin::Less.into(), &vector![3, 1, 2]).unwrap();
//! assert_eq!(sorted, vector![1, 2, 3]);
//!
//! let below_three = bind!(Builtin::Less, ARG1, 3);
//! assert_eq!(algorithm::count_if(&interpreter, &below_three, &sorted).unwrap(), 2);
//! ```

pub use tyseq_interpreter::{
    algorithm, atomic, container, context, error, function, interpreter, sequence, variadic,
};
pub use tyseq_name::Token;

pub use tyseq_interpreter::container::{BasicString, Map, Tuple, ValueMap, Vector};
pub use tyseq_interpreter::context::{StaticContext, StaticContextBuilder};
pub use tyseq_interpreter::error::{Error, ErrorKind};
pub use tyseq_interpreter::function::{Bind, Builtin, Function};
pub use tyseq_interpreter::interpreter::Interpreter;
pub use tyseq_interpreter::sequence::{Item, Pack, Pair};

pub mod prelude {
    pub use crate::{bind, pack, tuple, vector};

    pub use tyseq_interpreter::algorithm;
    pub use tyseq_interpreter::atomic::{Atomic, AtomicType};
    pub use tyseq_interpreter::container::{BasicString, Map, Tuple, ValueMap, Vector};
    pub use tyseq_interpreter::context::{StaticContext, StaticContextBuilder};
    pub use tyseq_interpreter::error::{Error, ErrorKind};
    pub use tyseq_interpreter::function::{
        Argument, Arity, Bind, Builtin, Function, Placeholder, ARG1, ARG2, ARG3, ARG4, ARG5,
        ARG6, ARG7, ARG8,
    };
    pub use tyseq_interpreter::interpreter::Interpreter;
    pub use tyseq_interpreter::sequence::{
        Container, FromPack, Item, Pack, Pair, SequenceCore, SequenceExt,
    };
    pub use tyseq_interpreter::variadic;
    pub use tyseq_name::Token;
}

/// Build a [`Pack`] from values convertible into items.
#[macro_export]
macro_rules! pack {
    ($($item:expr),* $(,)?) => {
        $crate::sequence::Pack::new(vec![$($crate::sequence::Item::from($item)),*])
    };
}

/// Build a [`Vector`] from values convertible into items.
#[macro_export]
macro_rules! vector {
    ($($item:expr),* $(,)?) => {
        $crate::container::Vector::new(vec![$($crate::sequence::Item::from($item)),*])
    };
}

/// Build a [`Tuple`] from values convertible into items.
#[macro_export]
macro_rules! tuple {
    ($($item:expr),* $(,)?) => {
        $crate::container::Tuple::new(vec![$($crate::sequence::Item::from($item)),*])
    };
}

/// Bind a function to arguments, some of which may be placeholders.
///
/// `bind!(Builtin::Less, ARG1, 3)` is the predicate "first argument is
/// less than 3". Functions in argument position are passed as values; use
/// a nested [`Bind`] to have them evaluated instead.
#[macro_export]
macro_rules! bind {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $crate::function::Function::from($function)
            .bind(vec![$($crate::function::Argument::from($argument)),*])
    };
}
