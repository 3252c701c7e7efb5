use crate::container::{Tuple, Vector};
use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::{FromPack, Item, SequenceCore};

/// Concatenate `head` with every sequence in `tails`, whatever their
/// shapes. The result has the shape of `head`.
pub fn join<S: SequenceCore>(head: &S, tails: &[&dyn SequenceCore]) -> error::Result<S> {
    let mut items = head.items().to_vec();
    for tail in tails {
        items.extend_from_slice(tail.items());
    }
    head.rebuild(items)
}

fn common_len(sequences: &[&dyn SequenceCore]) -> error::Result<usize> {
    let Some((first, rest)) = sequences.split_first() else {
        return Ok(0);
    };
    let expected = first.items().len();
    for sequence in rest {
        let found = sequence.items().len();
        if found != expected {
            return Err(error::Error::LengthMismatch { expected, found });
        }
    }
    Ok(expected)
}

/// Apply `function` across several equal-length sequences at once: the
/// i-th result is `function(s1[i], s2[i], ...)`.
pub fn transform_many<O: FromPack>(
    interpreter: &Interpreter,
    function: &Function,
    sequences: &[&dyn SequenceCore],
) -> error::Result<O> {
    let len = common_len(sequences)?;
    let result = (0..len)
        .map(|i| {
            let arguments: Vec<Item> = sequences.iter().map(|s| s.items()[i].clone()).collect();
            interpreter.apply(function, &arguments)
        })
        .collect::<error::Result<Vec<_>>>()?;
    O::from_pack(result)
}

/// Combine equal-length sequences element-wise into a vector of tuples.
///
/// Sequences of different lengths are rejected rather than truncated.
pub fn zip(sequences: &[&dyn SequenceCore]) -> error::Result<Vector> {
    let len = common_len(sequences)?;
    Ok((0..len)
        .map(|i| {
            Tuple::new(sequences.iter().map(|s| s.items()[i].clone()).collect()).into()
        })
        .collect())
}

/// Split a sequence of equal-length sequences into one vector per
/// position. The inverse of [`zip`].
pub fn unzip<S: SequenceCore + ?Sized>(sequence: &S) -> error::Result<Vec<Vector>> {
    let rows = sequence
        .items()
        .iter()
        .map(|item| item.to_sequence().map(|c| c as &dyn SequenceCore))
        .collect::<error::Result<Vec<_>>>()?;
    let width = common_len(&rows)?;
    Ok((0..width)
        .map(|i| rows.iter().map(|row| row.items()[i].clone()).collect())
        .collect())
}

/// Swap rows and columns of a non-empty sequence of equal-length
/// sequences.
///
/// The outer result has the shape of `sequence`; each row of the result
/// has the shape of the first row of the input.
pub fn transpose<S: SequenceCore>(sequence: &S) -> error::Result<S> {
    let rows = sequence
        .items()
        .iter()
        .map(|item| item.to_sequence())
        .collect::<error::Result<Vec<_>>>()?;
    let Some(first) = rows.first() else {
        return Err(error::Error::EmptySequence {
            operation: "transpose",
        });
    };
    let views: Vec<&dyn SequenceCore> = rows.iter().map(|c| *c as &dyn SequenceCore).collect();
    let width = common_len(&views)?;
    let columns = (0..width)
        .map(|i| {
            let column = rows.iter().map(|row| row.items()[i].clone()).collect();
            first.rebuild(column).map(Item::from)
        })
        .collect::<error::Result<Vec<_>>>()?;
    sequence.rebuild(columns)
}
