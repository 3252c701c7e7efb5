use std::fmt;

use crate::atomic::AtomicType;
use crate::error;
use crate::sequence::{Item, Pack, SequenceCore};

use super::entries;
use super::Vector;

/// A map whose keys and values are constants of fixed atomic types.
///
/// Every entry is checked against the key and value types on the way in.
#[derive(Debug, Clone, Eq)]
pub struct ValueMap {
    key_type: AtomicType,
    value_type: AtomicType,
    pack: Pack,
}

impl ValueMap {
    pub fn new(key_type: AtomicType, value_type: AtomicType) -> Self {
        Self {
            key_type,
            value_type,
            pack: Pack::empty(),
        }
    }

    /// Build a value map from a pack of pairs, validating every entry.
    pub fn from_items(
        key_type: AtomicType,
        value_type: AtomicType,
        items: Vec<Item>,
    ) -> error::Result<Self> {
        let map = Self {
            key_type,
            value_type,
            pack: Pack::new(items),
        };
        entries::validate(map.pack.items())?;
        for item in map.pack.items() {
            let pair = item.to_pair()?;
            map.check_entry(pair.first(), pair.second())?;
        }
        Ok(map)
    }

    pub fn key_type(&self) -> AtomicType {
        self.key_type
    }

    pub fn value_type(&self) -> AtomicType {
        self.value_type
    }

    pub fn is_valid_key_type(&self, key: &Item) -> bool {
        matches!(key, Item::Atomic(atomic) if atomic.atomic_type() == self.key_type)
    }

    pub fn is_valid_value_type(&self, value: &Item) -> bool {
        matches!(value, Item::Atomic(atomic) if atomic.atomic_type() == self.value_type)
    }

    fn check_entry(&self, key: &Item, value: &Item) -> error::Result<()> {
        if !self.is_valid_key_type(key) {
            return Err(error::Error::InvalidKeyType {
                expected: self.key_type.to_string(),
                found: key.kind_name(),
            });
        }
        if !self.is_valid_value_type(value) {
            return Err(error::Error::InvalidValueType {
                expected: self.value_type.to_string(),
                found: value.kind_name(),
            });
        }
        Ok(())
    }

    fn with_items(&self, items: Vec<Item>) -> ValueMap {
        ValueMap {
            key_type: self.key_type,
            value_type: self.value_type,
            pack: Pack::new(items),
        }
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

    pub fn count(&self, key: &Item) -> usize {
        usize::from(entries::position(self.pack.items(), key).is_some())
    }

    pub fn insert(&self, key: impl Into<Item>, value: impl Into<Item>) -> error::Result<ValueMap> {
        let key = key.into();
        let value = value.into();
        self.check_entry(&key, &value)?;
        let items = entries::insert(self.pack.items(), key, value)?;
        Ok(self.with_items(items))
    }

    pub fn insert_many<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> error::Result<ValueMap>
    where
        K: Into<Item>,
        V: Into<Item>,
    {
        pairs
            .into_iter()
            .try_fold(self.clone(), |map, (key, value)| map.insert(key, value))
    }

    pub fn erase(&self, key: &Item) -> error::Result<ValueMap> {
        let items = entries::erase(self.pack.items(), key)?;
        Ok(self.with_items(items))
    }

    pub fn keys(&self) -> Vector {
        Vector::new(entries::keys(self.pack.items()))
    }

    pub fn values(&self) -> Vector {
        Vector::new(entries::values(self.pack.items()))
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.key_type == other.key_type
            && self.value_type == other.value_type
            && entries::unordered_eq(self.pack.items(), other.pack.items())
    }
}

impl SequenceCore for ValueMap {
    fn items(&self) -> &[Item] {
        self.pack.items()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        ValueMap::from_items(self.key_type, self.value_type, items)
    }
}

impl fmt::Display for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value_map<{}, {}", self.key_type, self.value_type)?;
        for item in self.pack.items() {
            write!(f, ", {}", item)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    use crate::sequence::Pair;

    #[test]
    fn test_insert_and_lookup() {
        let map = ValueMap::new(AtomicType::Integer, AtomicType::Char)
            .insert(1, 'a')
            .unwrap()
            .insert(2, 'b')
            .unwrap();
        assert_eq!(map.at(&1.into()), Ok(&Item::from('a')));
        assert_eq!(map.count(&3.into()), 0);
        assert_eq!(
            map.to_string(),
            "value_map<integer, char, pair<1, 'a'>, pair<2, 'b'>>"
        );
    }

    #[test]
    fn test_type_validation() {
        let map = ValueMap::new(AtomicType::Integer, AtomicType::Char);
        assert!(map.is_valid_key_type(&1.into()));
        assert!(!map.is_valid_key_type(&'a'.into()));
        assert!(!map.is_valid_value_type(&Pair::new(1, 2).into()));
        assert_eq!(
            map.insert('a', 'b'),
            Err(error::Error::InvalidKeyType {
                expected: "integer".to_string(),
                found: "char".to_string()
            })
        );
        assert_eq!(
            map.insert(1, true),
            Err(error::Error::InvalidValueType {
                expected: "char".to_string(),
                found: "boolean".to_string()
            })
        );
    }

    #[test]
    fn test_every_atomic_type_accepts_itself() {
        let samples: Vec<Item> = vec![
            tyseq_name::Token::new("t").into(),
            1.into(),
            num::rational::Ratio::new(1, 2).into(),
            true.into(),
            'c'.into(),
        ];
        for (atomic_type, sample) in AtomicType::iter().zip(&samples) {
            let map = ValueMap::new(atomic_type, atomic_type);
            assert!(map.is_valid_key_type(sample), "{}", atomic_type);
            assert!(map.insert(sample.clone(), sample.clone()).is_ok());
        }
    }

    #[test]
    fn test_duplicate_and_missing() {
        let map = ValueMap::new(AtomicType::Char, AtomicType::Integer)
            .insert('x', 1)
            .unwrap();
        assert!(matches!(
            map.insert('x', 2),
            Err(error::Error::DuplicateKey { .. })
        ));
        assert!(matches!(
            map.erase(&'y'.into()),
            Err(error::Error::MissingKey { .. })
        ));
        assert!(map.erase(&'x'.into()).unwrap().is_empty());
    }

    #[test]
    fn test_rebuild_validates() {
        let map = ValueMap::new(AtomicType::Char, AtomicType::Integer);
        assert!(map.rebuild(vec![Pair::new('a', 1).into()]).is_ok());
        assert!(map.rebuild(vec![Pair::new(1, 1).into()]).is_err());
    }
}
