// Algorithms as builtins, so they can themselves be bound and nested, for
// instance transforming a vector of vectors with a bound `sort`.

use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::{Item, SequenceCore};
use crate::variadic;

fn transform(interpreter: &Interpreter, sequence: &Item, function: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    let items = variadic::transform(interpreter, function.to_function()?, container.items())?;
    Ok(container.rebuild(items)?.into())
}

fn copy_if(interpreter: &Interpreter, sequence: &Item, predicate: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    let items = variadic::copy_if(interpreter, predicate.to_function()?, container.items())?;
    Ok(container.rebuild(items)?.into())
}

fn sort(interpreter: &Interpreter, sequence: &Item, cmp: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    let items = variadic::sort(interpreter, cmp.to_function()?, container.items())?;
    Ok(container.rebuild(items)?.into())
}

fn left_fold(interpreter: &Interpreter, sequence: &Item, op: &Item) -> error::Result<Item> {
    variadic::left_fold(interpreter, op.to_function()?, sequence.to_sequence()?.items())
}

fn right_fold(interpreter: &Interpreter, sequence: &Item, op: &Item) -> error::Result<Item> {
    variadic::right_fold(interpreter, op.to_function()?, sequence.to_sequence()?.items())
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::binary(Builtin::Transform, transform),
        StaticFunctionDescription::binary(Builtin::CopyIf, copy_if),
        StaticFunctionDescription::binary(Builtin::Sort, sort),
        StaticFunctionDescription::binary(Builtin::LeftFold, left_fold),
        StaticFunctionDescription::binary(Builtin::RightFold, right_fold),
    ]
}
