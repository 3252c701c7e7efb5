use crate::sequence::Item;

pub(crate) fn ints(values: &[i64]) -> Vec<Item> {
    values.iter().map(|i| Item::from(*i)).collect()
}

pub(crate) fn chars(s: &str) -> Vec<Item> {
    s.chars().map(Item::from).collect()
}
