//! Algorithms over any sequence shape.
//!
//! These mirror [`crate::variadic`] but take a sequence and give back a
//! sequence of the same shape, going through the
//! [`SequenceCore`](crate::sequence::SequenceCore) adapter. A vector stays
//! a vector, a string stays a string, and a map stays a map (so a result
//! that breaks the map's invariants is an error).

mod multi;
mod single;

pub use multi::{join, transform_many, transpose, unzip, zip};
pub use single::{
    accumulate, all_of, any_of, at, copy, copy_if, copy_n, count, count_if, erase, find, find_if,
    insert, insert_range, is_sorted, is_unique, left_fold, lexicographical_compare, max_element,
    min_element, none_of, remove, remove_if, replace, replace_if, reverse, right_fold,
    set_difference, set_intersection, set_union, size, sort, transform, unique, unordered_equal,
};

// Pack producers have no input sequence to take a shape from.
pub use crate::variadic::{fill_n, generate_n};
