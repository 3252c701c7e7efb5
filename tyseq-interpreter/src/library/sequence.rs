use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::{Item, SequenceCore};
use crate::variadic;

fn size(_: &Interpreter, sequence: &Item) -> error::Result<Item> {
    Ok(sequence.to_sequence()?.items().len().into())
}

fn front(_: &Interpreter, sequence: &Item) -> error::Result<Item> {
    sequence
        .to_sequence()?
        .items()
        .first()
        .cloned()
        .ok_or(error::Error::EmptySequence { operation: "front" })
}

fn back(_: &Interpreter, sequence: &Item) -> error::Result<Item> {
    sequence
        .to_sequence()?
        .items()
        .last()
        .cloned()
        .ok_or(error::Error::EmptySequence { operation: "back" })
}

fn at(_: &Interpreter, sequence: &Item, index: &Item) -> error::Result<Item> {
    variadic::at(index.to_index()?, sequence.to_sequence()?.items()).cloned()
}

fn count(_: &Interpreter, sequence: &Item, value: &Item) -> error::Result<Item> {
    Ok(variadic::count(value, sequence.to_sequence()?.items()).into())
}

fn reverse(_: &Interpreter, sequence: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    Ok(container.rebuild(variadic::reverse(container.items())?)?.into())
}

fn push_back(_: &Interpreter, sequence: &Item, item: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    let items = variadic::insert(container.items().len(), item.clone(), container.items())?;
    Ok(container.rebuild(items)?.into())
}

fn push_front(_: &Interpreter, sequence: &Item, item: &Item) -> error::Result<Item> {
    let container = sequence.to_sequence()?;
    let items = variadic::insert(0, item.clone(), container.items())?;
    Ok(container.rebuild(items)?.into())
}

// The result has the shape of the first sequence.
fn join(_: &Interpreter, arguments: &[Item]) -> error::Result<Item> {
    let (head, tails) = arguments
        .split_first()
        .ok_or(error::Error::EmptySequence { operation: "join" })?;
    let head = head.to_sequence()?;
    let mut items = head.items().to_vec();
    for tail in tails {
        items.extend_from_slice(tail.to_sequence()?.items());
    }
    Ok(head.rebuild(items)?.into())
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::unary(Builtin::Size, size),
        StaticFunctionDescription::unary(Builtin::Front, front),
        StaticFunctionDescription::unary(Builtin::Back, back),
        StaticFunctionDescription::binary(Builtin::At, at),
        StaticFunctionDescription::binary(Builtin::Count, count),
        StaticFunctionDescription::unary(Builtin::Reverse, reverse),
        StaticFunctionDescription::binary(Builtin::PushBack, push_back),
        StaticFunctionDescription::binary(Builtin::PushFront, push_front),
        StaticFunctionDescription::variadic(Builtin::Join, 1, join),
    ]
}
