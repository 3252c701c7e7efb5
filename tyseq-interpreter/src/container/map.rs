use std::fmt;

use crate::error;
use crate::sequence::{FromPack, Item, Pack, SequenceCore};

use super::entries;
use super::Vector;

/// An association from keys to values with unique keys.
///
/// Entries are pairs kept in insertion order, but two maps with the same
/// entries in a different order are equal. Keys compare by identity.
#[derive(Debug, Clone, Eq, Default)]
pub struct Map {
    pack: Pack,
}

impl Map {
    /// Build a map from a pack of pairs.
    ///
    /// Anything other than a pair, or a repeated key, is an error.
    pub fn new(items: Vec<Item>) -> error::Result<Self> {
        entries::validate(&items)?;
        Ok(Self {
            pack: Pack::new(items),
        })
    }

    pub fn size(&self) -> usize {
        self.pack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pack.is_empty()
    }

    pub fn at(&self, key: &Item) -> error::Result<&Item> {
        entries::at(self.pack.items(), key)
    }

    pub fn get(&self, key: &Item) -> Option<&Item> {
        entries::get(self.pack.items(), key)
    }

    /// 1 if `key` is present, 0 otherwise.
    pub fn count(&self, key: &Item) -> usize {
        usize::from(entries::position(self.pack.items(), key).is_some())
    }

    pub fn contains_key(&self, key: &Item) -> bool {
        self.count(key) == 1
    }

    /// Add an entry. A key that is already present is an error; there is
    /// no overwrite.
    pub fn insert(&self, key: impl Into<Item>, value: impl Into<Item>) -> error::Result<Map> {
        let items = entries::insert(self.pack.items(), key.into(), value.into())?;
        Ok(Map {
            pack: Pack::new(items),
        })
    }

    /// Insert entries left to right, each under the same uniqueness rule.
    pub fn insert_many<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> error::Result<Map>
    where
        K: Into<Item>,
        V: Into<Item>,
    {
        pairs
            .into_iter()
            .try_fold(self.clone(), |map, (key, value)| map.insert(key, value))
    }

    pub fn erase(&self, key: &Item) -> error::Result<Map> {
        let items = entries::erase(self.pack.items(), key)?;
        Ok(Map {
            pack: Pack::new(items),
        })
    }

    pub fn keys(&self) -> Vector {
        Vector::new(entries::keys(self.pack.items()))
    }

    pub fn values(&self) -> Vector {
        Vector::new(entries::values(self.pack.items()))
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        entries::unordered_eq(self.pack.items(), other.pack.items())
    }
}

impl SequenceCore for Map {
    fn items(&self) -> &[Item] {
        self.pack.items()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Map::new(items)
    }
}

impl FromPack for Map {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        Map::new(items)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map<")?;
        self.pack.fmt_items(f)?;
        write!(f, ">")
    }
}
