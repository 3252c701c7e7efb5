use std::cmp::Ordering;

use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::{Item, SequenceCore};
use crate::variadic;

pub fn size<S: SequenceCore + ?Sized>(sequence: &S) -> usize {
    variadic::size(sequence.items())
}

pub fn at<S: SequenceCore + ?Sized>(index: usize, sequence: &S) -> error::Result<&Item> {
    variadic::at(index, sequence.items())
}

pub fn insert<S: SequenceCore>(pos: usize, item: impl Into<Item>, sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::insert(pos, item.into(), sequence.items())?)
}

/// Insert the elements of `new` before `pos` in `sequence`.
pub fn insert_range<S: SequenceCore, T: SequenceCore + ?Sized>(
    pos: usize,
    new: &T,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::insert_range(pos, new.items(), sequence.items())?)
}

pub fn erase<S: SequenceCore>(first: usize, last: usize, sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::erase(first, last, sequence.items())?)
}

pub fn count<S: SequenceCore + ?Sized>(value: &Item, sequence: &S) -> usize {
    variadic::count(value, sequence.items())
}

pub fn count_if<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<usize> {
    variadic::count_if(interpreter, predicate, sequence.items())
}

pub fn find<S: SequenceCore + ?Sized>(value: &Item, sequence: &S) -> usize {
    variadic::find(value, sequence.items())
}

pub fn find_if<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<usize> {
    variadic::find_if(interpreter, predicate, sequence.items())
}

pub fn copy_if<S: SequenceCore>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::copy_if(interpreter, predicate, sequence.items())?)
}

pub fn copy<S: SequenceCore>(sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::copy(sequence.items())?)
}

pub fn copy_n<S: SequenceCore>(n: usize, sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::copy_n(n, sequence.items())?)
}

pub fn remove_if<S: SequenceCore>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::remove_if(interpreter, predicate, sequence.items())?)
}

pub fn remove<S: SequenceCore>(
    interpreter: &Interpreter,
    value: &Item,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::remove(interpreter, value, sequence.items())?)
}

pub fn transform<S: SequenceCore>(
    interpreter: &Interpreter,
    function: &Function,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::transform(interpreter, function, sequence.items())?)
}

pub fn replace_if<S: SequenceCore>(
    interpreter: &Interpreter,
    predicate: &Function,
    new: &Item,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::replace_if(
        interpreter,
        predicate,
        new,
        sequence.items(),
    )?)
}

pub fn replace<S: SequenceCore>(
    interpreter: &Interpreter,
    old: &Item,
    new: &Item,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::replace(interpreter, old, new, sequence.items())?)
}

pub fn min_element<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    sequence: &S,
) -> error::Result<usize> {
    variadic::min_element(interpreter, cmp, sequence.items())
}

pub fn max_element<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    sequence: &S,
) -> error::Result<usize> {
    variadic::max_element(interpreter, cmp, sequence.items())
}

pub fn sort<S: SequenceCore>(
    interpreter: &Interpreter,
    cmp: &Function,
    sequence: &S,
) -> error::Result<S> {
    sequence.rebuild(variadic::sort(interpreter, cmp, sequence.items())?)
}

pub fn is_sorted<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    sequence: &S,
) -> error::Result<bool> {
    variadic::is_sorted(interpreter, cmp, sequence.items())
}

pub fn reverse<S: SequenceCore>(sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::reverse(sequence.items())?)
}

pub fn is_unique<S: SequenceCore + ?Sized>(sequence: &S) -> bool {
    variadic::is_unique(sequence.items())
}

pub fn unique<S: SequenceCore>(sequence: &S) -> error::Result<S> {
    sequence.rebuild(variadic::unique(sequence.items())?)
}

pub fn accumulate<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    op: &Function,
    init: impl Into<Item>,
    sequence: &S,
) -> error::Result<Item> {
    variadic::accumulate(interpreter, op, init.into(), sequence.items())
}

pub fn left_fold<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    op: &Function,
    sequence: &S,
) -> error::Result<Item> {
    variadic::left_fold(interpreter, op, sequence.items())
}

pub fn right_fold<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    op: &Function,
    sequence: &S,
) -> error::Result<Item> {
    variadic::right_fold(interpreter, op, sequence.items())
}

pub fn all_of<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<bool> {
    variadic::all_of(interpreter, predicate, sequence.items())
}

pub fn any_of<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<bool> {
    variadic::any_of(interpreter, predicate, sequence.items())
}

pub fn none_of<S: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    predicate: &Function,
    sequence: &S,
) -> error::Result<bool> {
    variadic::none_of(interpreter, predicate, sequence.items())
}

pub fn lexicographical_compare<A: SequenceCore + ?Sized, B: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &A,
    b: &B,
) -> error::Result<Ordering> {
    variadic::lexicographical_compare(interpreter, cmp, a.items(), b.items())
}

pub fn unordered_equal<A: SequenceCore + ?Sized, B: SequenceCore + ?Sized>(a: &A, b: &B) -> bool {
    variadic::unordered_equal(a.items(), b.items())
}

/// The result takes the shape of `a`.
pub fn set_union<S: SequenceCore, T: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &S,
    b: &T,
) -> error::Result<S> {
    a.rebuild(variadic::set_union(interpreter, cmp, a.items(), b.items())?)
}

pub fn set_intersection<S: SequenceCore, T: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &S,
    b: &T,
) -> error::Result<S> {
    a.rebuild(variadic::set_intersection(
        interpreter,
        cmp,
        a.items(),
        b.items(),
    )?)
}

pub fn set_difference<S: SequenceCore, T: SequenceCore + ?Sized>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &S,
    b: &T,
) -> error::Result<S> {
    a.rebuild(variadic::set_difference(
        interpreter,
        cmp,
        a.items(),
        b.items(),
    )?)
}
