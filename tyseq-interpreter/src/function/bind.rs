use std::fmt;

use num::rational::Ratio;

use tyseq_name::Token;

use crate::error;
use crate::sequence::Item;

use super::Function;

/// A positional placeholder, `arg1`, `arg2` and so on.
///
/// Placeholders are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placeholder(usize);

pub const ARG1: Placeholder = Placeholder(1);
pub const ARG2: Placeholder = Placeholder(2);
pub const ARG3: Placeholder = Placeholder(3);
pub const ARG4: Placeholder = Placeholder(4);
pub const ARG5: Placeholder = Placeholder(5);
pub const ARG6: Placeholder = Placeholder(6);
pub const ARG7: Placeholder = Placeholder(7);
pub const ARG8: Placeholder = Placeholder(8);

impl Placeholder {
    pub fn new(index: usize) -> error::Result<Self> {
        if index == 0 {
            Err(error::Error::InvalidPlaceholder)
        } else {
            Ok(Placeholder(index))
        }
    }

    /// The 1-based position this placeholder stands for.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arg{}", self.0)
    }
}

/// One slot in a bind expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Passed through unchanged.
    Value(Item),
    /// Replaced by the actual argument at that position.
    Placeholder(Placeholder),
    /// Evaluated with the same actual arguments; its result fills the slot.
    Bind(Bind),
    /// A function passed as a value rather than evaluated.
    Protect(Function),
}

impl Argument {
    fn max_placeholder(&self) -> usize {
        match self {
            Argument::Placeholder(placeholder) => placeholder.index(),
            Argument::Bind(bind) => bind.max_placeholder(),
            Argument::Value(_) | Argument::Protect(_) => 0,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value(item) => write!(f, "{}", item),
            Argument::Placeholder(placeholder) => write!(f, "{}", placeholder),
            Argument::Bind(bind) => write!(f, "{}", bind),
            Argument::Protect(function) => write!(f, "protect<{}>", function),
        }
    }
}

impl From<Placeholder> for Argument {
    fn from(placeholder: Placeholder) -> Self {
        Argument::Placeholder(placeholder)
    }
}

impl From<Bind> for Argument {
    fn from(bind: Bind) -> Self {
        Argument::Bind(bind)
    }
}

impl From<Function> for Argument {
    fn from(function: Function) -> Self {
        Argument::Protect(function)
    }
}

impl From<Item> for Argument {
    fn from(item: Item) -> Self {
        Argument::Value(item)
    }
}

macro_rules! argument_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Argument::Value(value.into())
                }
            }
        )*
    };
}

argument_from_value!(i64, i32, bool, char, Token, Ratio<i64>);

/// A deferred application of a function to a list of arguments, some of
/// which may be placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bind {
    function: Function,
    arguments: Vec<Argument>,
}

impl Bind {
    pub fn new(function: Function, arguments: Vec<Argument>) -> Self {
        Self {
            function,
            arguments,
        }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The highest placeholder referenced, including nested binds, or 0 if
    /// there is none.
    pub fn max_placeholder(&self) -> usize {
        self.arguments
            .iter()
            .map(Argument::max_placeholder)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind<{}", self.function)?;
        for argument in &self.arguments {
            write!(f, ", {}", argument)?;
        }
        write!(f, ">")
    }
}
