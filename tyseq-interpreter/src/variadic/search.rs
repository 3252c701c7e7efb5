use crate::error;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::sequence::Item;

/// How many items are identical to `value`.
pub fn count(value: &Item, items: &[Item]) -> usize {
    items.iter().filter(|item| *item == value).count()
}

pub fn count_if(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<usize> {
    let mut n = 0;
    for item in items {
        if interpreter.apply_predicate(predicate, std::slice::from_ref(item))? {
            n += 1;
        }
    }
    Ok(n)
}

/// Index of the first item identical to `value`, or the size if absent.
pub fn find(value: &Item, items: &[Item]) -> usize {
    items
        .iter()
        .position(|item| item == value)
        .unwrap_or(items.len())
}

/// Index of the first item satisfying `predicate`, or the size if none
/// does.
pub fn find_if(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<usize> {
    for (i, item) in items.iter().enumerate() {
        if interpreter.apply_predicate(predicate, std::slice::from_ref(item))? {
            return Ok(i);
        }
    }
    Ok(items.len())
}

pub fn all_of(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<bool> {
    for item in items {
        if !interpreter.apply_predicate(predicate, std::slice::from_ref(item))? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn any_of(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<bool> {
    Ok(find_if(interpreter, predicate, items)? != items.len())
}

pub fn none_of(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<bool> {
    Ok(!any_of(interpreter, predicate, items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use num::rational::Ratio;

    use crate::context::StaticContext;
    use crate::function::{Builtin, ARG1};
    use crate::test_util::ints;

    fn greater_than(n: i64) -> Function {
        Function::from(Builtin::Greater).bind(vec![ARG1.into(), n.into()])
    }

    #[test]
    fn test_find_is_identity() {
        let mut items = ints(&[3, 1, 2]);
        items.push(Ratio::from_integer(2).into());
        assert_eq!(find(&Item::from(2), &items), 2);
        assert_eq!(find(&Item::from(Ratio::from_integer(2)), &items), 3);
        assert_eq!(find(&Item::from(9), &items), 4);
        assert_eq!(count(&Item::from(1), &ints(&[1, 2, 1])), 2);
    }

    #[test]
    fn test_find_if_first_match() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let items = ints(&[1, 5, 2, 7]);
        assert_eq!(find_if(&interpreter, &greater_than(4), &items), Ok(1));
        assert_eq!(find_if(&interpreter, &greater_than(10), &items), Ok(4));
        assert_eq!(find_if(&interpreter, &greater_than(0), &[]), Ok(0));
    }

    #[test]
    fn test_count_if() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        assert_eq!(
            count_if(&interpreter, &greater_than(1), &ints(&[1, 2, 3])),
            Ok(2)
        );
    }

    #[test]
    fn test_quantifiers() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let items = ints(&[2, 3, 4]);
        assert_eq!(all_of(&interpreter, &greater_than(1), &items), Ok(true));
        assert_eq!(any_of(&interpreter, &greater_than(3), &items), Ok(true));
        assert_eq!(none_of(&interpreter, &greater_than(4), &items), Ok(true));
        assert_eq!(all_of(&interpreter, &greater_than(9), &[]), Ok(true));
        assert_eq!(any_of(&interpreter, &greater_than(9), &[]), Ok(false));
    }

    #[test]
    fn test_predicate_must_be_boolean() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let not_a_predicate = Function::from(Builtin::Identity);
        assert!(find_if(&interpreter, &not_a_predicate, &ints(&[1])).is_err());
    }
}
