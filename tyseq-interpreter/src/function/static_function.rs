use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use ahash::{HashMap, HashMapExt};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use tyseq_name::Token;

use crate::error;
use crate::interpreter::Interpreter;
use crate::library::static_function_descriptions;
use crate::sequence::Item;

/// The functions shipped with the library.
///
/// Each one can be called directly through the interpreter or used as the
/// function of a bind expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Builtin {
    // comparison
    IsSame,
    EqualTo,
    NotEqualTo,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    // arithmetic
    Plus,
    Minus,
    Multiplies,
    Divides,
    Modulus,
    Negate,
    // logic
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Identity,
    If,
    // pairs
    MakePair,
    First,
    Second,
    IsPair,
    // sequences
    Size,
    Front,
    Back,
    At,
    Count,
    Reverse,
    PushBack,
    PushFront,
    Join,
    // higher-order
    Transform,
    CopyIf,
    Sort,
    LeftFold,
    RightFold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, found: usize) -> bool {
        match self {
            Arity::Exact(n) => found == *n,
            Arity::AtLeast(n) => found >= *n,
        }
    }

    pub(crate) fn check(&self, function: impl fmt::Display, found: usize) -> error::Result<()> {
        if self.accepts(found) {
            Ok(())
        } else {
            Err(error::Error::ArityMismatch {
                function: function.to_string(),
                expected: self.to_string(),
                found,
            })
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

// Builtins come in a few fixed shapes; the interpreter destructures the
// argument slice accordingly, so the arity follows from the shape.
#[derive(Clone, Copy)]
pub(crate) enum StaticFunctionType {
    Unary(fn(&Interpreter, &Item) -> error::Result<Item>),
    Binary(fn(&Interpreter, &Item, &Item) -> error::Result<Item>),
    Ternary(fn(&Interpreter, &Item, &Item, &Item) -> error::Result<Item>),
    Variadic(usize, fn(&Interpreter, &[Item]) -> error::Result<Item>),
}

impl StaticFunctionType {
    pub(crate) fn arity(&self) -> Arity {
        match self {
            StaticFunctionType::Unary(_) => Arity::Exact(1),
            StaticFunctionType::Binary(_) => Arity::Exact(2),
            StaticFunctionType::Ternary(_) => Arity::Exact(3),
            StaticFunctionType::Variadic(min, _) => Arity::AtLeast(*min),
        }
    }
}

pub(crate) struct StaticFunctionDescription {
    pub(crate) builtin: Builtin,
    pub(crate) func: StaticFunctionType,
}

impl StaticFunctionDescription {
    pub(crate) fn unary(builtin: Builtin, func: fn(&Interpreter, &Item) -> error::Result<Item>) -> Self {
        Self {
            builtin,
            func: StaticFunctionType::Unary(func),
        }
    }

    pub(crate) fn binary(
        builtin: Builtin,
        func: fn(&Interpreter, &Item, &Item) -> error::Result<Item>,
    ) -> Self {
        Self {
            builtin,
            func: StaticFunctionType::Binary(func),
        }
    }

    pub(crate) fn ternary(
        builtin: Builtin,
        func: fn(&Interpreter, &Item, &Item, &Item) -> error::Result<Item>,
    ) -> Self {
        Self {
            builtin,
            func: StaticFunctionType::Ternary(func),
        }
    }

    pub(crate) fn variadic(
        builtin: Builtin,
        min: usize,
        func: fn(&Interpreter, &[Item]) -> error::Result<Item>,
    ) -> Self {
        Self {
            builtin,
            func: StaticFunctionType::Variadic(min, func),
        }
    }
}

impl Debug for StaticFunctionDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticFunctionDescription")
            .field("builtin", &self.builtin)
            .field("arity", &self.func.arity())
            .finish()
    }
}

/// The registry of builtins, shared by every static context.
#[derive(Debug)]
pub(crate) struct StaticFunctions {
    by_builtin: HashMap<Builtin, StaticFunctionDescription>,
}

impl StaticFunctions {
    pub(crate) fn new() -> Self {
        let mut by_builtin = HashMap::new();
        for description in static_function_descriptions() {
            by_builtin.insert(description.builtin, description);
        }
        Self { by_builtin }
    }

    pub(crate) fn get(&self, builtin: Builtin) -> error::Result<&StaticFunctionDescription> {
        self.by_builtin
            .get(&builtin)
            .ok_or_else(|| error::Error::UnknownFunction {
                name: builtin.to_string(),
            })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.by_builtin.len()
    }
}

/// The signature of a closure registered on the static context.
pub type ExternalFunctionType = Rc<dyn Fn(&[Item]) -> error::Result<Item>>;

#[derive(Clone)]
pub(crate) struct ExternalFunction {
    pub(crate) name: Token,
    pub(crate) arity: Arity,
    pub(crate) func: ExternalFunctionType,
}

impl Debug for ExternalFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Identifies a function registered on a static context.
///
/// Only meaningful together with the context that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalFunctionId {
    index: usize,
    name: Token,
}

impl ExternalFunctionId {
    pub(crate) fn new(index: usize, name: Token) -> Self {
        Self { index, name }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> Token {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_builtin_is_registered() {
        let functions = StaticFunctions::new();
        for builtin in Builtin::iter() {
            assert!(functions.get(builtin).is_ok(), "{} missing", builtin);
        }
        assert_eq!(functions.len(), Builtin::iter().count());
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(Builtin::LogicalNot.to_string(), "logical_not");
        assert_eq!(Builtin::from_str("push_back"), Ok(Builtin::PushBack));
        assert_eq!(Builtin::If.to_string(), "if");
    }

    #[test]
    fn test_arity() {
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
        assert!(Arity::AtLeast(1).accepts(3));
        assert_eq!(
            Arity::Exact(2).check(Builtin::Less, 1),
            Err(error::Error::ArityMismatch {
                function: "less".to_string(),
                expected: "2".to_string(),
                found: 1
            })
        );
    }
}
