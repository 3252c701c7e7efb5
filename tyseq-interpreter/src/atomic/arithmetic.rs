use num::rational::Ratio;
use num::traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::error;

use super::Atomic;

// Integer op integer stays integer; anything involving a rational is
// computed over rationals.
enum Operands {
    Integer(i64, i64),
    Rational(Ratio<i64>, Ratio<i64>),
}

fn operands(a: &Atomic, b: &Atomic) -> error::Result<Operands> {
    match (a, b) {
        (Atomic::Integer(a), Atomic::Integer(b)) => Ok(Operands::Integer(*a, *b)),
        _ => Ok(Operands::Rational(a.to_rational()?, b.to_rational()?)),
    }
}

/// Build a rational atomic, reduced to lowest terms.
pub fn rational(numerator: i64, denominator: i64) -> error::Result<Atomic> {
    if denominator == 0 {
        return Err(error::Error::DivisionByZero);
    }
    if numerator == i64::MIN || denominator == i64::MIN {
        return Err(error::Error::Overflow);
    }
    Ok(Atomic::Rational(Ratio::new(numerator, denominator)))
}

pub fn plus(a: &Atomic, b: &Atomic) -> error::Result<Atomic> {
    match operands(a, b)? {
        Operands::Integer(a, b) => a.checked_add(b).map(Atomic::Integer),
        Operands::Rational(a, b) => CheckedAdd::checked_add(&a, &b).map(Atomic::Rational),
    }
    .ok_or(error::Error::Overflow)
}

pub fn minus(a: &Atomic, b: &Atomic) -> error::Result<Atomic> {
    match operands(a, b)? {
        Operands::Integer(a, b) => a.checked_sub(b).map(Atomic::Integer),
        Operands::Rational(a, b) => CheckedSub::checked_sub(&a, &b).map(Atomic::Rational),
    }
    .ok_or(error::Error::Overflow)
}

pub fn multiplies(a: &Atomic, b: &Atomic) -> error::Result<Atomic> {
    match operands(a, b)? {
        Operands::Integer(a, b) => a.checked_mul(b).map(Atomic::Integer),
        Operands::Rational(a, b) => CheckedMul::checked_mul(&a, &b).map(Atomic::Rational),
    }
    .ok_or(error::Error::Overflow)
}

/// Integer division truncates toward zero.
pub fn divides(a: &Atomic, b: &Atomic) -> error::Result<Atomic> {
    match operands(a, b)? {
        Operands::Integer(_, 0) => Err(error::Error::DivisionByZero),
        Operands::Integer(a, b) => a
            .checked_div(b)
            .map(Atomic::Integer)
            .ok_or(error::Error::Overflow),
        Operands::Rational(_, b) if b.is_zero() => Err(error::Error::DivisionByZero),
        Operands::Rational(a, b) => CheckedDiv::checked_div(&a, &b)
            .map(Atomic::Rational)
            .ok_or(error::Error::Overflow),
    }
}

pub fn modulus(a: &Atomic, b: &Atomic) -> error::Result<Atomic> {
    let a = a.to_integer()?;
    let b = b.to_integer()?;
    if b == 0 {
        return Err(error::Error::DivisionByZero);
    }
    a.checked_rem(b)
        .map(Atomic::Integer)
        .ok_or(error::Error::Overflow)
}

pub fn negate(a: &Atomic) -> error::Result<Atomic> {
    match a {
        Atomic::Integer(i) => i.checked_neg().map(Atomic::Integer),
        Atomic::Rational(r) => r
            .numer()
            .checked_neg()
            .map(|numer| Atomic::Rational(Ratio::new_raw(numer, *r.denom()))),
        _ => return Err(error::Error::type_mismatch("number", a.atomic_type())),
    }
    .ok_or(error::Error::Overflow)
}
