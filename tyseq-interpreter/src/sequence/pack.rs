use std::fmt;
use std::rc::Rc;

use crate::error;

use super::{FromPack, Item, SequenceCore};

/// A bare, ordered pack of items.
///
/// This is the representation every algorithm works on. Packs are
/// immutable and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    items: Rc<[Item]>,
}

static_assertions::assert_eq_size!(Pack, [u8; 16]);

impl Pack {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub(crate) fn fmt_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl Default for Pack {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Item>> for Pack {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Pack {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SequenceCore for Pack {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Ok(Pack::new(items))
    }
}

impl FromPack for Pack {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        Ok(Pack::new(items))
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pack<")?;
        self.fmt_items(f)?;
        write!(f, ">")
    }
}
