use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::Item;

// Every operand is checked, so a non-boolean is an error even after the
// result is already known.
fn logical_and(_: &Interpreter, arguments: &[Item]) -> error::Result<Item> {
    let mut result = true;
    for item in arguments {
        result &= item.to_boolean()?;
    }
    Ok(result.into())
}

fn logical_or(_: &Interpreter, arguments: &[Item]) -> error::Result<Item> {
    let mut result = false;
    for item in arguments {
        result |= item.to_boolean()?;
    }
    Ok(result.into())
}

fn logical_not(_: &Interpreter, a: &Item) -> error::Result<Item> {
    Ok((!a.to_boolean()?).into())
}

fn identity(_: &Interpreter, a: &Item) -> error::Result<Item> {
    Ok(a.clone())
}

fn if_(_: &Interpreter, condition: &Item, then: &Item, otherwise: &Item) -> error::Result<Item> {
    if condition.to_boolean()? {
        Ok(then.clone())
    } else {
        Ok(otherwise.clone())
    }
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::variadic(Builtin::LogicalAnd, 1, logical_and),
        StaticFunctionDescription::variadic(Builtin::LogicalOr, 1, logical_or),
        StaticFunctionDescription::unary(Builtin::LogicalNot, logical_not),
        StaticFunctionDescription::unary(Builtin::Identity, identity),
        StaticFunctionDescription::ternary(Builtin::If, if_),
    ]
}
