use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::Item;

/// `op(...op(op(init, x1), x2)..., xn)`; `init` for an empty pack.
pub fn accumulate(
    interpreter: &Interpreter,
    op: &Function,
    init: Item,
    items: &[Item],
) -> error::Result<Item> {
    items.iter().try_fold(init, |acc, item| {
        interpreter.apply(op, &[acc, item.clone()])
    })
}

/// `op(...op(op(x1, x2), x3)..., xn)`.
///
/// There is no identity element, so an empty pack is an error.
pub fn left_fold(interpreter: &Interpreter, op: &Function, items: &[Item]) -> error::Result<Item> {
    let (first, rest) = items.split_first().ok_or(error::Error::EmptySequence {
        operation: "left_fold",
    })?;
    accumulate(interpreter, op, first.clone(), rest)
}

/// `op(x1, op(x2, ...op(xn-1, xn)...))`.
pub fn right_fold(interpreter: &Interpreter, op: &Function, items: &[Item]) -> error::Result<Item> {
    let (last, rest) = items.split_last().ok_or(error::Error::EmptySequence {
        operation: "right_fold",
    })?;
    rest.iter()
        .rev()
        .try_fold(last.clone(), |acc, item| {
            interpreter.apply(op, &[item.clone(), acc])
        })
}
