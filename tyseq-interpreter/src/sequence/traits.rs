use crate::error;

use super::Item;

/// The sequence adapter.
///
/// A container shape takes part in every algorithm by exposing its element
/// pack and by rebuilding a container of the same shape from a new pack.
/// Rebuilding may fail when the shape constrains its elements, for
/// instance a map rejects duplicate keys and a string rejects anything but
/// characters.
pub trait SequenceCore {
    /// The elements, in order.
    fn items(&self) -> &[Item];

    /// A container of the same shape holding `items`.
    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self>
    where
        Self: Sized;
}

/// Convenience accessors available on every sequence.
pub trait SequenceExt: SequenceCore {
    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items().iter()
    }

    fn get(&self, index: usize) -> Option<&Item> {
        self.items().get(index)
    }
}

impl<T: SequenceCore + ?Sized> SequenceExt for T {}

/// A shape that can be built from a pack without a template value.
///
/// The pack algorithms that produce a sequence take the output shape as a
/// type parameter bounded by this trait.
pub trait FromPack: Sized {
    fn from_pack(items: Vec<Item>) -> error::Result<Self>;
}

// A plain vector of items stands in for a foreign tuple-like container:
// supplying the adapter pair is all it takes.
impl SequenceCore for Vec<Item> {
    fn items(&self) -> &[Item] {
        self.as_slice()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Ok(items)
    }
}

impl FromPack for Vec<Item> {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        Ok(items)
    }
}
