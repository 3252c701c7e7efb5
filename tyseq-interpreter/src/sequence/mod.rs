// The value universe: items, bare packs and the container shapes that
// wrap them, plus the adapter traits that let algorithms treat every
// shape uniformly.

mod compare;
mod container;
mod item;
mod pack;
mod traits;

pub use compare::{compare, equal};
pub use container::Container;
pub use item::{Item, Pair};
pub use pack::Pack;
pub use traits::{FromPack, SequenceCore, SequenceExt};
