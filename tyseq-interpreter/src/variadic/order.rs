use std::cmp::Ordering;

use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::{FromPack, Item};

fn less(interpreter: &Interpreter, cmp: &Function, a: &Item, b: &Item) -> error::Result<bool> {
    interpreter.apply_predicate(cmp, &[a.clone(), b.clone()])
}

// Scan for the earliest item that nothing beats. With `swapped` the
// comparator's arguments are exchanged, turning the minimum into the
// maximum; the comparator is still the one the caller supplied, so
// failures are traced to it.
fn first_extreme(
    interpreter: &Interpreter,
    cmp: &Function,
    items: &[Item],
    operation: &'static str,
    swapped: bool,
) -> error::Result<usize> {
    if items.is_empty() {
        return Err(error::Error::EmptySequence { operation });
    }
    let mut best = 0;
    for i in 1..items.len() {
        let (a, b) = if swapped {
            (&items[best], &items[i])
        } else {
            (&items[i], &items[best])
        };
        // strictly less, so ties keep the earliest index
        if less(interpreter, cmp, a, b)? {
            best = i;
        }
    }
    Ok(best)
}

/// Index of the first minimal item under `cmp`.
pub fn min_element(
    interpreter: &Interpreter,
    cmp: &Function,
    items: &[Item],
) -> error::Result<usize> {
    first_extreme(interpreter, cmp, items, "min_element", false)
}

/// Index of the first maximal item under `cmp`.
///
/// This is `min_element` with the comparator's arguments swapped.
pub fn max_element(
    interpreter: &Interpreter,
    cmp: &Function,
    items: &[Item],
) -> error::Result<usize> {
    first_extreme(interpreter, cmp, items, "max_element", true)
}

/// Stable sort under `cmp`.
///
/// Repeatedly extracts the earliest minimal element, so items that are
/// equivalent under `cmp` keep their relative order. `cmp` should be a
/// strict weak ordering; if it is not, the result is still deterministic.
pub fn sort<O: FromPack>(
    interpreter: &Interpreter,
    cmp: &Function,
    items: &[Item],
) -> error::Result<O> {
    log::trace!("sort {} item(s) by {}", items.len(), cmp);
    let mut remaining = items.to_vec();
    let mut result = Vec::with_capacity(items.len());
    while !remaining.is_empty() {
        let i = min_element(interpreter, cmp, &remaining)?;
        result.push(remaining.remove(i));
    }
    O::from_pack(result)
}

/// Whether no item is less than its predecessor under `cmp`.
pub fn is_sorted(interpreter: &Interpreter, cmp: &Function, items: &[Item]) -> error::Result<bool> {
    for window in items.windows(2) {
        if less(interpreter, cmp, &window[1], &window[0])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Three-way lexicographic comparison under `cmp`.
pub fn lexicographical_compare(
    interpreter: &Interpreter,
    cmp: &Function,
    a: &[Item],
    b: &[Item],
) -> error::Result<Ordering> {
    for (x, y) in a.iter().zip(b) {
        if less(interpreter, cmp, x, y)? {
            return Ok(Ordering::Less);
        }
        if less(interpreter, cmp, y, x)? {
            return Ok(Ordering::Greater);
        }
    }
    Ok(a.len().cmp(&b.len()))
}

/// Whether no two items are identical, wherever they are.
pub fn is_unique(items: &[Item]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| !items[..i].contains(item))
}

/// Drop every item identical to an earlier one.
///
/// Duplicates are removed wherever they occur, not just when adjacent;
/// first occurrences keep their order. On sorted input this is the same as
/// removing adjacent duplicates.
pub fn unique<O: FromPack>(items: &[Item]) -> error::Result<O> {
    let mut result: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    O::from_pack(result)
}

/// Whether `a` and `b` hold the same items with the same multiplicities,
/// in any order.
pub fn unordered_equal(a: &[Item], b: &[Item]) -> bool {
    a.len() == b.len()
        && a.iter().all(|item| {
            let in_a = a.iter().filter(|x| *x == item).count();
            let in_b = b.iter().filter(|x| *x == item).count();
            in_a == in_b
        })
}
