use std::fmt;

use crate::container::{BasicString, Map, Tuple, ValueMap, Vector};
use crate::error;

use super::{Item, Pack, SequenceCore};

/// Every built-in sequence shape.
///
/// This is how a sequence travels as an [`Item`], for instance as an
/// argument to a bound function or nested inside another sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Pack(Pack),
    Vector(Vector),
    Tuple(Tuple),
    Map(Map),
    ValueMap(ValueMap),
    String(BasicString),
}

impl Container {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Container::Pack(_) => "pack",
            Container::Vector(_) => "vector",
            Container::Tuple(_) => "tuple",
            Container::Map(_) => "map",
            Container::ValueMap(_) => "value_map",
            Container::String(_) => "basic_string",
        }
    }

    pub fn to_vector(&self) -> error::Result<&Vector> {
        match self {
            Container::Vector(vector) => Ok(vector),
            _ => Err(error::Error::type_mismatch("vector", self.shape_name())),
        }
    }

    pub fn to_map(&self) -> error::Result<&Map> {
        match self {
            Container::Map(map) => Ok(map),
            _ => Err(error::Error::type_mismatch("map", self.shape_name())),
        }
    }

    pub fn to_string_container(&self) -> error::Result<&BasicString> {
        match self {
            Container::String(string) => Ok(string),
            _ => Err(error::Error::type_mismatch("basic_string", self.shape_name())),
        }
    }
}

impl SequenceCore for Container {
    fn items(&self) -> &[Item] {
        match self {
            Container::Pack(pack) => SequenceCore::items(pack),
            Container::Vector(vector) => vector.items(),
            Container::Tuple(tuple) => tuple.items(),
            Container::Map(map) => map.items(),
            Container::ValueMap(map) => map.items(),
            Container::String(string) => string.items(),
        }
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        Ok(match self {
            Container::Pack(pack) => Container::Pack(pack.rebuild(items)?),
            Container::Vector(vector) => Container::Vector(vector.rebuild(items)?),
            Container::Tuple(tuple) => Container::Tuple(tuple.rebuild(items)?),
            Container::Map(map) => Container::Map(map.rebuild(items)?),
            Container::ValueMap(map) => Container::ValueMap(map.rebuild(items)?),
            Container::String(string) => Container::String(string.rebuild(items)?),
        })
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Pack(pack) => fmt::Display::fmt(pack, f),
            Container::Vector(vector) => fmt::Display::fmt(vector, f),
            Container::Tuple(tuple) => fmt::Display::fmt(tuple, f),
            Container::Map(map) => fmt::Display::fmt(map, f),
            Container::ValueMap(map) => fmt::Display::fmt(map, f),
            Container::String(string) => fmt::Display::fmt(string, f),
        }
    }
}
