use crate::atomic;
use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::Item;

fn fold_atomic(
    arguments: &[Item],
    op: fn(&atomic::Atomic, &atomic::Atomic) -> error::Result<atomic::Atomic>,
) -> error::Result<Item> {
    let (first, rest) = arguments
        .split_first()
        .ok_or(error::Error::EmptySequence { operation: "fold" })?;
    let mut acc = first.to_atomic()?.clone();
    for item in rest {
        acc = op(&acc, item.to_atomic()?)?;
    }
    Ok(acc.into())
}

fn plus(_: &Interpreter, arguments: &[Item]) -> error::Result<Item> {
    fold_atomic(arguments, atomic::plus)
}

fn multiplies(_: &Interpreter, arguments: &[Item]) -> error::Result<Item> {
    fold_atomic(arguments, atomic::multiplies)
}

fn minus(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok(atomic::minus(a.to_atomic()?, b.to_atomic()?)?.into())
}

fn divides(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok(atomic::divides(a.to_atomic()?, b.to_atomic()?)?.into())
}

fn modulus(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok(atomic::modulus(a.to_atomic()?, b.to_atomic()?)?.into())
}

fn negate(_: &Interpreter, a: &Item) -> error::Result<Item> {
    Ok(atomic::negate(a.to_atomic()?)?.into())
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::variadic(Builtin::Plus, 1, plus),
        StaticFunctionDescription::binary(Builtin::Minus, minus),
        StaticFunctionDescription::variadic(Builtin::Multiplies, 1, multiplies),
        StaticFunctionDescription::binary(Builtin::Divides, divides),
        StaticFunctionDescription::binary(Builtin::Modulus, modulus),
        StaticFunctionDescription::unary(Builtin::Negate, negate),
    ]
}
