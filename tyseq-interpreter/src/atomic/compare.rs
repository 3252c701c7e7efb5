use std::cmp::Ordering;

use num::rational::Ratio;

use crate::error;

use super::Atomic;

/// Value equality: numbers compare by value across integer and rational,
/// everything else by identity.
pub fn equal(a: &Atomic, b: &Atomic) -> bool {
    match (a, b) {
        (Atomic::Integer(a), Atomic::Rational(b)) | (Atomic::Rational(b), Atomic::Integer(a)) => {
            Ratio::from_integer(*a) == *b
        }
        _ => a == b,
    }
}

/// Total order within each comparable family.
///
/// Numbers (with integer promotion), chars, booleans and tokens are each
/// ordered among themselves. Mixing families is an error.
pub fn compare(a: &Atomic, b: &Atomic) -> error::Result<Ordering> {
    match (a, b) {
        (Atomic::Integer(a), Atomic::Integer(b)) => Ok(a.cmp(b)),
        (Atomic::Rational(a), Atomic::Rational(b)) => Ok(a.cmp(b)),
        (Atomic::Integer(a), Atomic::Rational(b)) => Ok(Ratio::from_integer(*a).cmp(b)),
        (Atomic::Rational(a), Atomic::Integer(b)) => Ok(a.cmp(&Ratio::from_integer(*b))),
        (Atomic::Char(a), Atomic::Char(b)) => Ok(a.cmp(b)),
        (Atomic::Boolean(a), Atomic::Boolean(b)) => Ok(a.cmp(b)),
        (Atomic::Token(a), Atomic::Token(b)) => Ok(a.cmp(b)),
        _ => Err(error::Error::NotComparable {
            left: a.atomic_type().to_string(),
            right: b.atomic_type().to_string(),
        }),
    }
}
