//! Algorithms over a bare pack of items.
//!
//! Everything here works on `&[Item]`. Algorithms that produce a sequence
//! take the output shape as a type parameter, so the same traversal can
//! yield a [`crate::sequence::Pack`], a [`crate::container::Vector`] or any
//! other [`FromPack`](crate::sequence::FromPack) shape. Predicates,
//! operations and comparators are [`Function`](crate::function::Function)
//! values evaluated by an [`Interpreter`](crate::interpreter::Interpreter).
//!
//! Comparators are strict "less than" predicates. Element equality for
//! `find`, `count`, `unique` and friends is identity.

mod access;
mod fold;
mod modify;
mod order;
mod search;
mod set;

pub use access::{at, copy, copy_n, erase, fill_n, generate_n, insert, insert_range, reverse, size};
pub use fold::{accumulate, left_fold, right_fold};
pub use modify::{copy_if, remove, remove_if, replace, replace_if, transform};
pub use order::{
    is_sorted, is_unique, lexicographical_compare, max_element, min_element, sort, unique,
    unordered_equal,
};
pub use search::{all_of, any_of, count, count_if, find, find_if, none_of};
pub use set::{set_difference, set_intersection, set_union};
