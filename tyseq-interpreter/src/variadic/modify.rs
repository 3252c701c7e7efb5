use crate::error;
use crate::function::{Bind, Builtin, Function, ARG1};
use crate::interpreter::Interpreter;
use crate::sequence::{FromPack, Item};

/// The items satisfying `predicate`, in their original order.
pub fn copy_if<O: FromPack>(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<O> {
    let mut result = Vec::new();
    for item in items {
        if interpreter.apply_predicate(predicate, std::slice::from_ref(item))? {
            result.push(item.clone());
        }
    }
    O::from_pack(result)
}

/// `copy_if` with the complement of `predicate`.
pub fn remove_if<O: FromPack>(
    interpreter: &Interpreter,
    predicate: &Function,
    items: &[Item],
) -> error::Result<O> {
    let applied = Bind::new(predicate.clone(), vec![ARG1.into()]);
    let complement = Function::from(Builtin::LogicalNot).bind(vec![applied.into()]);
    copy_if(interpreter, &complement, items)
}

/// Drop every item identical to `value`.
pub fn remove<O: FromPack>(
    interpreter: &Interpreter,
    value: &Item,
    items: &[Item],
) -> error::Result<O> {
    remove_if(interpreter, &is_same(value), items)
}

pub fn transform<O: FromPack>(
    interpreter: &Interpreter,
    function: &Function,
    items: &[Item],
) -> error::Result<O> {
    let result = items
        .iter()
        .map(|item| interpreter.apply(function, std::slice::from_ref(item)))
        .collect::<error::Result<Vec<_>>>()?;
    O::from_pack(result)
}

/// Replace every item satisfying `predicate` with `new`.
pub fn replace_if<O: FromPack>(
    interpreter: &Interpreter,
    predicate: &Function,
    new: &Item,
    items: &[Item],
) -> error::Result<O> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if interpreter.apply_predicate(predicate, std::slice::from_ref(item))? {
            result.push(new.clone());
        } else {
            result.push(item.clone());
        }
    }
    O::from_pack(result)
}

/// Replace every item identical to `old` with `new`.
pub fn replace<O: FromPack>(
    interpreter: &Interpreter,
    old: &Item,
    new: &Item,
    items: &[Item],
) -> error::Result<O> {
    replace_if(interpreter, &is_same(old), new, items)
}

fn is_same(value: &Item) -> Function {
    Function::from(Builtin::IsSame).bind(vec![value.clone().into(), ARG1.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::context::StaticContext;
    use crate::test_util::ints;

    fn less_than(n: i64) -> Function {
        Function::from(Builtin::Less).bind(vec![ARG1.into(), n.into()])
    }

    #[test]
    fn test_copy_if_keeps_order() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        assert_eq!(
            copy_if::<Vec<Item>>(&interpreter, &less_than(3), &ints(&[4, 1, 5, 2, 0])),
            Ok(ints(&[1, 2, 0]))
        );
    }

    #[test]
    fn test_remove_if_is_complement_of_copy_if() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let items = ints(&[4, 1, 5, 2, 0]);
        let kept: Vec<Item> = copy_if(&interpreter, &less_than(3), &items).unwrap();
        let removed: Vec<Item> = remove_if(&interpreter, &less_than(3), &items).unwrap();
        assert_eq!(removed, ints(&[4, 5]));
        assert_eq!(kept.len() + removed.len(), items.len());
    }

    #[test]
    fn test_remove_and_replace() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let items = ints(&[1, 2, 1, 3]);
        assert_eq!(
            remove::<Vec<Item>>(&interpreter, &Item::from(1), &items),
            Ok(ints(&[2, 3]))
        );
        assert_eq!(
            replace::<Vec<Item>>(&interpreter, &Item::from(1), &Item::from(9), &items),
            Ok(ints(&[9, 2, 9, 3]))
        );
    }

    #[test]
    fn test_transform() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let double = Function::from(Builtin::Plus).bind(vec![ARG1.into(), ARG1.into()]);
        assert_eq!(
            transform::<Vec<Item>>(&interpreter, &double, &ints(&[1, 2, 3])),
            Ok(ints(&[2, 4, 6]))
        );
    }

    #[test]
    fn test_error_names_failing_predicate() {
        let context = StaticContext::default();
        let interpreter = Interpreter::new(&context);
        let items = vec![Item::from(1), Item::from('x')];
        let error = copy_if::<Vec<Item>>(&interpreter, &less_than(3), &items).unwrap_err();
        assert_eq!(error.trace(), vec!["bind<less, arg1, 3>"]);
        assert!(matches!(error.root(), error::Error::NotComparable { .. }));
    }
}
