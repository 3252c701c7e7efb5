use std::fmt;

use crate::error;
use crate::sequence::{FromPack, Item, Pack, SequenceCore};
use crate::variadic;

/// An ordered list with positional operations.
///
/// Every operation returns a new vector; the receiver is never changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vector {
    pack: Pack,
}

impl Vector {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            pack: Pack::new(items),
        }
    }

    pub fn size(&self) -> usize {
        self.pack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pack.is_empty()
    }

    pub fn at(&self, index: usize) -> error::Result<&Item> {
        variadic::at(index, self.pack.items())
    }

    pub fn front(&self) -> error::Result<&Item> {
        self.pack.items().first().ok_or(error::Error::EmptySequence {
            operation: "front",
        })
    }

    pub fn back(&self) -> error::Result<&Item> {
        self.pack.items().last().ok_or(error::Error::EmptySequence {
            operation: "back",
        })
    }

    pub fn push_back(&self, item: impl Into<Item>) -> Vector {
        let mut items = self.pack.items().to_vec();
        items.push(item.into());
        Vector::new(items)
    }

    pub fn push_front(&self, item: impl Into<Item>) -> Vector {
        let mut items = Vec::with_capacity(self.size() + 1);
        items.push(item.into());
        items.extend_from_slice(self.pack.items());
        Vector::new(items)
    }

    pub fn pop_back(&self) -> error::Result<Vector> {
        if self.is_empty() {
            return Err(error::Error::EmptySequence {
                operation: "pop_back",
            });
        }
        variadic::erase(self.size() - 1, self.size(), self.pack.items())
    }

    pub fn pop_front(&self) -> error::Result<Vector> {
        if self.is_empty() {
            return Err(error::Error::EmptySequence {
                operation: "pop_front",
            });
        }
        variadic::erase(0, 1, self.pack.items())
    }

    /// Insert `item` before `pos`; `pos == size` appends.
    pub fn insert(&self, pos: usize, item: impl Into<Item>) -> error::Result<Vector> {
        variadic::insert(pos, item.into(), self.pack.items())
    }

    /// Insert every element of `sequence` before `pos`.
    pub fn insert_range<S: SequenceCore + ?Sized>(
        &self,
        pos: usize,
        sequence: &S,
    ) -> error::Result<Vector> {
        variadic::insert_range(pos, sequence.items(), self.pack.items())
    }

    /// Remove the half-open range `[first, last)`.
    pub fn erase(&self, first: usize, last: usize) -> error::Result<Vector> {
        variadic::erase(first, last, self.pack.items())
    }
}

impl SequenceCore for Vector {
    fn items(&self) -> &[Item] {
        self.pack.items()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Ok(Vector::new(items))
    }
}

impl FromPack for Vector {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        Ok(Vector::new(items))
    }
}

impl FromIterator<Item> for Vector {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector<")?;
        self.pack.fmt_items(f)?;
        write!(f, ">")
    }
}
