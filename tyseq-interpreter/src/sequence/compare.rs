use std::cmp::Ordering;

use crate::atomic;
use crate::error;

use super::{Container, Item, SequenceCore};

/// Value equality between items.
///
/// Numbers compare by value, pairs component-wise, and sequences of the
/// same shape element-wise. Maps ignore entry order. Anything else falls
/// back to identity.
pub fn equal(a: &Item, b: &Item) -> bool {
    match (a, b) {
        (Item::Atomic(a), Item::Atomic(b)) => atomic::equal(a, b),
        (Item::Pair(a), Item::Pair(b)) => {
            equal(a.first(), b.first()) && equal(a.second(), b.second())
        }
        (Item::Sequence(a @ (Container::Map(_) | Container::ValueMap(_))), Item::Sequence(b)) => {
            a == b
        }
        (Item::Sequence(a), Item::Sequence(b)) => {
            a.shape_name() == b.shape_name()
                && a.items().len() == b.items().len()
                && a.items().iter().zip(b.items()).all(|(a, b)| equal(a, b))
        }
        _ => a == b,
    }
}

/// Ordering between items.
///
/// Atomics order within their family, pairs by first then second, and
/// sequences lexicographically. Functions are not ordered.
pub fn compare(a: &Item, b: &Item) -> error::Result<Ordering> {
    match (a, b) {
        (Item::Atomic(a), Item::Atomic(b)) => atomic::compare(a, b),
        (Item::Pair(a), Item::Pair(b)) => match compare(a.first(), b.first())? {
            Ordering::Equal => compare(a.second(), b.second()),
            ordering => Ok(ordering),
        },
        (Item::Sequence(a), Item::Sequence(b)) => {
            for (a, b) in a.items().iter().zip(b.items()) {
                match compare(a, b)? {
                    Ordering::Equal => continue,
                    ordering => return Ok(ordering),
                }
            }
            Ok(a.items().len().cmp(&b.items().len()))
        }
        _ => Err(error::Error::NotComparable {
            left: a.kind_name(),
            right: b.kind_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num::rational::Ratio;

    use crate::container::Vector;
    use crate::sequence::Pair;

    fn vector(items: &[i64]) -> Item {
        Vector::new(items.iter().map(|i| Item::from(*i)).collect()).into()
    }

    #[test]
    fn test_equal_numeric_inside_pairs() {
        let a = Pair::new(1, Ratio::new(1, 2));
        let b = Pair::new(Ratio::from_integer(1), Ratio::new(2, 4));
        assert!(equal(&a.into(), &b.into()));
    }

    #[test]
    fn test_compare_sequences() {
        assert_eq!(
            compare(&vector(&[1, 2]), &vector(&[1, 3])),
            Ok(Ordering::Less)
        );
        assert_eq!(
            compare(&vector(&[1, 2, 0]), &vector(&[1, 2])),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_pair_with_atomic() {
        assert_eq!(
            compare(&Pair::new(1, 2).into(), &Item::from(1)),
            Err(error::Error::NotComparable {
                left: "pair".to_string(),
                right: "integer".to_string()
            })
        );
    }
}
