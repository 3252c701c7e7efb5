use std::fmt;
use std::rc::Rc;

use num::rational::Ratio;

use tyseq_name::Token;

use crate::atomic::Atomic;
use crate::container::{BasicString, Map, Tuple, ValueMap, Vector};
use crate::error;
use crate::function::Function;

use super::{Container, Pack};

/// An element of a sequence.
///
/// Items are immutable and cheap to clone; composite items share their
/// contents through reference counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Atomic(Atomic),
    Pair(Pair),
    Sequence(Container),
    Function(Function),
}

/// A key/value pair, the element type of maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair(Rc<(Item, Item)>);

impl Pair {
    pub fn new(first: impl Into<Item>, second: impl Into<Item>) -> Self {
        Pair(Rc::new((first.into(), second.into())))
    }

    pub fn first(&self) -> &Item {
        &self.0 .0
    }

    pub fn second(&self) -> &Item {
        &self.0 .1
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pair<{}, {}>", self.first(), self.second())
    }
}

impl Item {
    /// A short name for the kind of this item, used in error messages.
    pub fn kind_name(&self) -> String {
        match self {
            Item::Atomic(atomic) => atomic.atomic_type().to_string(),
            Item::Pair(_) => "pair".to_string(),
            Item::Sequence(container) => container.shape_name().to_string(),
            Item::Function(_) => "function".to_string(),
        }
    }

    pub fn to_atomic(&self) -> error::Result<&Atomic> {
        match self {
            Item::Atomic(atomic) => Ok(atomic),
            _ => Err(error::Error::type_mismatch("atomic", self.kind_name())),
        }
    }

    pub fn to_integer(&self) -> error::Result<i64> {
        self.to_atomic()?.to_integer()
    }

    pub fn to_boolean(&self) -> error::Result<bool> {
        self.to_atomic()?.to_boolean()
    }

    pub fn to_char(&self) -> error::Result<char> {
        self.to_atomic()?.to_char()
    }

    pub fn to_token(&self) -> error::Result<Token> {
        self.to_atomic()?.to_token()
    }

    /// Read a non-negative integer as an index or count.
    pub fn to_index(&self) -> error::Result<usize> {
        let i = self.to_integer()?;
        usize::try_from(i).map_err(|_| error::Error::type_mismatch("non-negative integer", i))
    }

    pub fn to_pair(&self) -> error::Result<&Pair> {
        match self {
            Item::Pair(pair) => Ok(pair),
            _ => Err(error::Error::type_mismatch("pair", self.kind_name())),
        }
    }

    pub fn to_sequence(&self) -> error::Result<&Container> {
        match self {
            Item::Sequence(container) => Ok(container),
            _ => Err(error::Error::type_mismatch("sequence", self.kind_name())),
        }
    }

    pub fn to_function(&self) -> error::Result<&Function> {
        match self {
            Item::Function(function) => Ok(function),
            _ => Err(error::Error::type_mismatch("function", self.kind_name())),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Item::Pair(_))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Atomic(atomic) => write!(f, "{}", atomic),
            Item::Pair(pair) => write!(f, "{}", pair),
            Item::Sequence(container) => write!(f, "{}", container),
            Item::Function(function) => write!(f, "{}", function),
        }
    }
}

impl From<Atomic> for Item {
    fn from(atomic: Atomic) -> Self {
        Item::Atomic(atomic)
    }
}

impl From<Token> for Item {
    fn from(token: Token) -> Self {
        Item::Atomic(token.into())
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Item::Atomic(i.into())
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Item::Atomic(i.into())
    }
}

impl From<usize> for Item {
    // sizes and indexes always fit; saturate rather than wrap if they ever don't
    fn from(i: usize) -> Self {
        Item::Atomic(Atomic::Integer(i64::try_from(i).unwrap_or(i64::MAX)))
    }
}

impl From<Ratio<i64>> for Item {
    fn from(r: Ratio<i64>) -> Self {
        Item::Atomic(r.into())
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Atomic(b.into())
    }
}

impl From<char> for Item {
    fn from(c: char) -> Self {
        Item::Atomic(c.into())
    }
}

impl From<Pair> for Item {
    fn from(pair: Pair) -> Self {
        Item::Pair(pair)
    }
}

impl From<Container> for Item {
    fn from(container: Container) -> Self {
        Item::Sequence(container)
    }
}

impl From<Pack> for Item {
    fn from(pack: Pack) -> Self {
        Item::Sequence(Container::Pack(pack))
    }
}

impl From<Vector> for Item {
    fn from(vector: Vector) -> Self {
        Item::Sequence(Container::Vector(vector))
    }
}

impl From<Tuple> for Item {
    fn from(tuple: Tuple) -> Self {
        Item::Sequence(Container::Tuple(tuple))
    }
}

impl From<Map> for Item {
    fn from(map: Map) -> Self {
        Item::Sequence(Container::Map(map))
    }
}

impl From<ValueMap> for Item {
    fn from(map: ValueMap) -> Self {
        Item::Sequence(Container::ValueMap(map))
    }
}

impl From<BasicString> for Item {
    fn from(string: BasicString) -> Self {
        Item::Sequence(Container::String(string))
    }
}

impl From<Function> for Item {
    fn from(function: Function) -> Self {
        Item::Function(function)
    }
}
