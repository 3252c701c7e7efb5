// Shared bookkeeping for the map shapes: a pack of pairs with unique
// keys. Keys compare by identity.

use crate::error;
use crate::sequence::{Item, Pair};

pub(crate) fn position(items: &[Item], key: &Item) -> Option<usize> {
    items.iter().position(|item| match item {
        Item::Pair(pair) => pair.first() == key,
        _ => false,
    })
}

pub(crate) fn get<'a>(items: &'a [Item], key: &Item) -> Option<&'a Item> {
    position(items, key).and_then(|i| match &items[i] {
        Item::Pair(pair) => Some(pair.second()),
        _ => None,
    })
}

pub(crate) fn at<'a>(items: &'a [Item], key: &Item) -> error::Result<&'a Item> {
    get(items, key).ok_or_else(|| error::Error::MissingKey {
        key: key.to_string(),
    })
}

/// Check that every item is a pair and that no key repeats.
pub(crate) fn validate(items: &[Item]) -> error::Result<()> {
    for (i, item) in items.iter().enumerate() {
        let pair = item.to_pair()?;
        if position(&items[..i], pair.first()).is_some() {
            return Err(error::Error::DuplicateKey {
                key: pair.first().to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn insert(items: &[Item], key: Item, value: Item) -> error::Result<Vec<Item>> {
    if position(items, &key).is_some() {
        return Err(error::Error::DuplicateKey {
            key: key.to_string(),
        });
    }
    let mut result = items.to_vec();
    result.push(Pair::new(key, value).into());
    Ok(result)
}

pub(crate) fn erase(items: &[Item], key: &Item) -> error::Result<Vec<Item>> {
    let i = position(items, key).ok_or_else(|| error::Error::MissingKey {
        key: key.to_string(),
    })?;
    let mut result = items.to_vec();
    result.remove(i);
    Ok(result)
}

pub(crate) fn keys(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Pair(pair) => Some(pair.first().clone()),
            _ => None,
        })
        .collect()
}

pub(crate) fn values(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Pair(pair) => Some(pair.second().clone()),
            _ => None,
        })
        .collect()
}

/// Same entries regardless of order. Keys are unique on both sides, so
/// equal sizes plus containment is enough.
pub(crate) fn unordered_eq(a: &[Item], b: &[Item]) -> bool {
    a.len() == b.len() && a.iter().all(|item| b.contains(item))
}
