use std::cmp::Ordering;

use crate::error;
use crate::function::{Builtin, StaticFunctionDescription};
use crate::interpreter::Interpreter;
use crate::sequence::{self, Item};

fn is_same(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((a == b).into())
}

fn equal_to(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok(sequence::equal(a, b).into())
}

fn not_equal_to(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((!sequence::equal(a, b)).into())
}

fn less(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((sequence::compare(a, b)? == Ordering::Less).into())
}

fn greater(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((sequence::compare(a, b)? == Ordering::Greater).into())
}

fn less_equal(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((sequence::compare(a, b)? != Ordering::Greater).into())
}

fn greater_equal(_: &Interpreter, a: &Item, b: &Item) -> error::Result<Item> {
    Ok((sequence::compare(a, b)? != Ordering::Less).into())
}

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    vec![
        StaticFunctionDescription::binary(Builtin::IsSame, is_same),
        StaticFunctionDescription::binary(Builtin::EqualTo, equal_to),
        StaticFunctionDescription::binary(Builtin::NotEqualTo, not_equal_to),
        StaticFunctionDescription::binary(Builtin::Less, less),
        StaticFunctionDescription::binary(Builtin::Greater, greater),
        StaticFunctionDescription::binary(Builtin::LessEqual, less_equal),
        StaticFunctionDescription::binary(Builtin::GreaterEqual, greater_equal),
    ]
}

#[cfg(test)]
mod tests {
    use num::rational::Ratio;

    use crate::context::StaticContext;
    use crate::function::Builtin;
    use crate::interpreter::Interpreter;
    use crate::sequence::Item;

    #[test]
    fn test_is_same_versus_equal_to() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let args = [Item::from(1), Item::from(Ratio::from_integer(1))];
        assert_eq!(
            interpreter.call_builtin(Builtin::IsSame, &args),
            Ok(false.into())
        );
        assert_eq!(
            interpreter.call_builtin(Builtin::EqualTo, &args),
            Ok(true.into())
        );
    }

    #[test]
    fn test_orderings() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let call = |builtin, a: i64, b: i64| interpreter.call_builtin(builtin, &[a.into(), b.into()]);
        assert_eq!(call(Builtin::Less, 1, 2), Ok(true.into()));
        assert_eq!(call(Builtin::Greater, 1, 2), Ok(false.into()));
        assert_eq!(call(Builtin::LessEqual, 2, 2), Ok(true.into()));
        assert_eq!(call(Builtin::GreaterEqual, 1, 2), Ok(false.into()));
        assert_eq!(call(Builtin::NotEqualTo, 1, 2), Ok(true.into()));
    }
}
