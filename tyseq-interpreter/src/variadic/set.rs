use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::{FromPack, Item};

use super::is_sorted;

// Both inputs must be sorted under `cmp`. That is only checked when the
// static context asks for it; otherwise unsorted input gives an
// unspecified but deterministic result.
fn check_sorted(
    interpreter: &Interpreter,
    cmp: &Function,
    operation: &'static str,
    a: &[Item],
    b: &[Item],
) -> error::Result<()> {
    if interpreter.context().check_preconditions()
        && !(is_sorted(interpreter, cmp, a)? && is_sorted(interpreter, cmp, b)?)
    {
        return Err(error::Error::Unsorted { operation });
    }
    Ok(())
}

fn less(interpreter: &Interpreter, cmp: &Function, a: &Item, b: &Item) -> error::Result<bool> {
    interpreter.apply_predicate(cmp, &[a.clone(), b.clone()])
}

fn equivalent(interpreter: &Interpreter, cmp: &Function, a: &Item, b: &Item) -> error::Result<bool> {
    Ok(!less(interpreter, cmp, a, b)? && !less(interpreter, cmp, b, a)?)
}

// Results come out sorted, so a repeat can only follow its equivalent.
fn push_distinct(
    interpreter: &Interpreter,
    cmp: &Function,
    result: &mut Vec<Item>,
    item: &Item,
) -> error::Result<()> {
    if let Some(last) = result.last() {
        if equivalent(interpreter, cmp, last, item)? {
            return Ok(());
        }
    }
    result.push(item.clone());
    Ok(())
}

/// Merge two sorted packs.
///
/// Duplicates are ignored: the result holds one item per equivalence class
/// under `cmp`, the first one met, taking `a` before `b`.
pub fn set_union<O: FromPack>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &[Item],
    b: &[Item],
) -> error::Result<O> {
    log::trace!("set_union of {} and {} item(s)", a.len(), b.len());
    check_sorted(interpreter, cmp, "set_union", a, b)?;
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if less(interpreter, cmp, &b[j], &a[i])? {
            push_distinct(interpreter, cmp, &mut result, &b[j])?;
            j += 1;
        } else {
            push_distinct(interpreter, cmp, &mut result, &a[i])?;
            i += 1;
        }
    }
    for item in a[i..].iter().chain(&b[j..]) {
        push_distinct(interpreter, cmp, &mut result, item)?;
    }
    O::from_pack(result)
}

/// The items of `a` that have an equivalent in `b`.
///
/// Duplicates are ignored: each equivalence class appears at most once.
pub fn set_intersection<O: FromPack>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &[Item],
    b: &[Item],
) -> error::Result<O> {
    log::trace!("set_intersection of {} and {} item(s)", a.len(), b.len());
    check_sorted(interpreter, cmp, "set_intersection", a, b)?;
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if less(interpreter, cmp, &a[i], &b[j])? {
            i += 1;
        } else if less(interpreter, cmp, &b[j], &a[i])? {
            j += 1;
        } else {
            push_distinct(interpreter, cmp, &mut result, &a[i])?;
            i += 1;
        }
    }
    O::from_pack(result)
}

/// The items of `a` that have no equivalent in `b`.
///
/// Duplicates are ignored: each equivalence class appears at most once.
pub fn set_difference<O: FromPack>(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &[Item],
    b: &[Item],
) -> error::Result<O> {
    log::trace!("set_difference of {} and {} item(s)", a.len(), b.len());
    check_sorted(interpreter, cmp, "set_difference", a, b)?;
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j == b.len() || less(interpreter, cmp, &a[i], &b[j])? {
            push_distinct(interpreter, cmp, &mut result, &a[i])?;
            i += 1;
        } else if less(interpreter, cmp, &b[j], &a[i])? {
            j += 1;
        } else {
            i += 1;
        }
    }
    O::from_pack(result)
}
