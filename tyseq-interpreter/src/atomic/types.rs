use std::fmt;

use num::rational::Ratio;
use strum_macros::{Display, EnumIter};

use tyseq_name::Token;

use crate::error;

/// A scalar value that can be placed in a sequence.
///
/// Equality is identity: `Integer(1)` and `Rational(1/1)` are different
/// atomics. Numeric comparison with promotion lives in [`super::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atomic {
    Token(Token),
    Integer(i64),
    Rational(Ratio<i64>),
    Boolean(bool),
    Char(char),
}

static_assertions::assert_eq_size!(Atomic, [u8; 24]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AtomicType {
    Token,
    Integer,
    Rational,
    Boolean,
    Char,
}

impl Atomic {
    pub fn atomic_type(&self) -> AtomicType {
        match self {
            Atomic::Token(_) => AtomicType::Token,
            Atomic::Integer(_) => AtomicType::Integer,
            Atomic::Rational(_) => AtomicType::Rational,
            Atomic::Boolean(_) => AtomicType::Boolean,
            Atomic::Char(_) => AtomicType::Char,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Atomic::Integer(_) | Atomic::Rational(_))
    }

    pub fn to_token(&self) -> error::Result<Token> {
        match self {
            Atomic::Token(t) => Ok(*t),
            _ => Err(self.mismatch(AtomicType::Token)),
        }
    }

    pub fn to_integer(&self) -> error::Result<i64> {
        match self {
            Atomic::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(AtomicType::Integer)),
        }
    }

    /// Integers are promoted; other kinds are a type error.
    pub fn to_rational(&self) -> error::Result<Ratio<i64>> {
        match self {
            Atomic::Integer(i) => Ok(Ratio::from_integer(*i)),
            Atomic::Rational(r) => Ok(*r),
            _ => Err(self.mismatch(AtomicType::Rational)),
        }
    }

    pub fn to_boolean(&self) -> error::Result<bool> {
        match self {
            Atomic::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(AtomicType::Boolean)),
        }
    }

    pub fn to_char(&self) -> error::Result<char> {
        match self {
            Atomic::Char(c) => Ok(*c),
            _ => Err(self.mismatch(AtomicType::Char)),
        }
    }

    fn mismatch(&self, expected: AtomicType) -> error::Error {
        error::Error::type_mismatch(expected, self.atomic_type())
    }
}

impl fmt::Display for Atomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atomic::Token(t) => write!(f, "{}", t),
            Atomic::Integer(i) => write!(f, "{}", i),
            Atomic::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Atomic::Boolean(b) => write!(f, "{}", b),
            Atomic::Char(c) => write!(f, "{:?}", c),
        }
    }
}

impl From<Token> for Atomic {
    fn from(t: Token) -> Self {
        Atomic::Token(t)
    }
}

impl From<i64> for Atomic {
    fn from(i: i64) -> Self {
        Atomic::Integer(i)
    }
}

impl From<i32> for Atomic {
    fn from(i: i32) -> Self {
        Atomic::Integer(i as i64)
    }
}

impl From<Ratio<i64>> for Atomic {
    fn from(r: Ratio<i64>) -> Self {
        Atomic::Rational(r)
    }
}

impl From<bool> for Atomic {
    fn from(b: bool) -> Self {
        Atomic::Boolean(b)
    }
}

impl From<char> for Atomic {
    fn from(c: char) -> Self {
        Atomic::Char(c)
    }
}
