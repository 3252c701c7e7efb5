use std::fmt;

use crate::error;
use crate::sequence::{FromPack, Item, Pack, SequenceCore};
use crate::variadic;

/// A fixed, heterogeneous group of items.
///
/// Tuples take part in every sequence algorithm but have no editing
/// operations of their own. [`crate::algorithm::zip`] produces them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tuple {
    pack: Pack,
}

impl Tuple {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            pack: Pack::new(items),
        }
    }

    pub fn size(&self) -> usize {
        self.pack.len()
    }

    pub fn at(&self, index: usize) -> error::Result<&Item> {
        variadic::at(index, self.pack.items())
    }
}

impl SequenceCore for Tuple {
    fn items(&self) -> &[Item] {
        self.pack.items()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Ok(Tuple::new(items))
    }
}

impl FromPack for Tuple {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        Ok(Tuple::new(items))
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tuple<")?;
        self.pack.fmt_items(f)?;
        write!(f, ">")
    }
}
