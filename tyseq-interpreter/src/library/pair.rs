use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::{Item, Pair};

fn make_pair(_: &Interpreter, first: &Item, second: &Item) -> error::Result<Item> {
    Ok(Pair::new(first.clone(), second.clone()).into())
}

fn first(_: &Interpreter, pair: &Item) -> error::Result<Item> {
    Ok(pair.to_pair()?.first().clone())
}

fn second(_: &Interpreter, pair: &Item) -> error::Result<Item> {
    Ok(pair.to_pair()?.second().clone())
}

fn is_pair(_: &Interpreter, item: &Item) -> error::Result<Item> {
    Ok(item.is_pair().into())
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::binary(Builtin::MakePair, make_pair),
        StaticFunctionDescription::unary(Builtin::First, first),
        StaticFunctionDescription::unary(Builtin::Second, second),
        StaticFunctionDescription::unary(Builtin::IsPair, is_pair),
    ]
}
