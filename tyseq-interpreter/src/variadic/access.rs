use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::{FromPack, Item};

pub fn size(items: &[Item]) -> usize {
    items.len()
}

pub fn at(index: usize, items: &[Item]) -> error::Result<&Item> {
    items.get(index).ok_or(error::Error::IndexOutOfRange {
        index,
        size: items.len(),
    })
}

/// Insert `item` before position `pos`; `pos == size` appends.
pub fn insert<O: FromPack>(pos: usize, item: Item, items: &[Item]) -> error::Result<O> {
    insert_range(pos, std::slice::from_ref(&item), items)
}

/// Insert all of `new` before position `pos`.
pub fn insert_range<O: FromPack>(pos: usize, new: &[Item], items: &[Item]) -> error::Result<O> {
    if pos > items.len() {
        return Err(error::Error::IndexOutOfRange {
            index: pos,
            size: items.len(),
        });
    }
    let mut result = Vec::with_capacity(items.len() + new.len());
    result.extend_from_slice(&items[..pos]);
    result.extend_from_slice(new);
    result.extend_from_slice(&items[pos..]);
    O::from_pack(result)
}

/// Remove the half-open range `[first, last)`.
pub fn erase<O: FromPack>(first: usize, last: usize, items: &[Item]) -> error::Result<O> {
    if first > last || last > items.len() {
        return Err(error::Error::InvalidRange {
            first,
            last,
            size: items.len(),
        });
    }
    let mut result = Vec::with_capacity(items.len() - (last - first));
    result.extend_from_slice(&items[..first]);
    result.extend_from_slice(&items[last..]);
    O::from_pack(result)
}

pub fn copy<O: FromPack>(items: &[Item]) -> error::Result<O> {
    O::from_pack(items.to_vec())
}

/// The first `n` items; `n` may not exceed the size.
pub fn copy_n<O: FromPack>(n: usize, items: &[Item]) -> error::Result<O> {
    if n > items.len() {
        return Err(error::Error::InvalidRange {
            first: 0,
            last: n,
            size: items.len(),
        });
    }
    O::from_pack(items[..n].to_vec())
}

/// `n` copies of `value`.
pub fn fill_n<O: FromPack>(n: usize, value: &Item) -> error::Result<O> {
    O::from_pack(vec![value.clone(); n])
}

/// `generator(0), generator(1), ..., generator(n - 1)`.
pub fn generate_n<O: FromPack>(
    interpreter: &Interpreter,
    n: usize,
    generator: &Function,
) -> error::Result<O> {
    let items = (0..n)
        .map(|i| interpreter.apply(generator, &[Item::from(i)]))
        .collect::<error::Result<Vec<_>>>()?;
    O::from_pack(items)
}

pub fn reverse<O: FromPack>(items: &[Item]) -> error::Result<O> {
    O::from_pack(items.iter().rev().cloned().collect())
}
