// Named containers over a pack. Each one re-exposes the pack algorithms
// under its own names and checks its own element constraints on rebuild.

mod entries;
mod map;
mod string;
mod tuple;
mod value_map;
mod vector;

pub use map::Map;
pub use string::BasicString;
pub use tuple::Tuple;
pub use value_map::ValueMap;
pub use vector::Vector;
