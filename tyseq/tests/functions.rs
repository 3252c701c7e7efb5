use insta::assert_snapshot;

use tyseq::prelude::*;

mod common;

use common::{context, init_logging, ints};

fn double_context() -> StaticContext {
    init_logging();
    StaticContextBuilder::default()
        .function("double", Arity::Exact(1), |arguments| {
            let n = arguments[0].to_integer()?;
            n.checked_mul(2)
                .map(Item::from)
                .ok_or(tyseq::Error::Overflow)
        })
        .build()
}

#[test]
fn test_resolve_builtin_by_name() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let less = context.function("less").unwrap();
    assert_eq!(less, Function::from(Builtin::Less));
    assert!(interpreter.call_predicate(&less, &[1.into(), 2.into()]).unwrap());
    let err = context.function("no_such_function").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Definition);
}

#[test]
fn test_registered_function_in_algorithm() {
    let context = double_context();
    let interpreter = Interpreter::new(&context);
    let double = context.function("double").unwrap();
    let doubled = algorithm::transform(&interpreter, &double, &ints(&[1, 2, 3])).unwrap();
    assert_eq!(doubled, vector![2, 4, 6]);
}

#[test]
fn test_registered_function_in_bind() {
    let context = double_context();
    let interpreter = Interpreter::new(&context);
    let double = context.function("double").unwrap();
    let doubled_below_five = bind!(Builtin::Less, Bind::new(double, vec![ARG1.into()]), 5);
    let kept = algorithm::copy_if(&interpreter, &doubled_below_five, &ints(&[1, 2, 3, 4])).unwrap();
    assert_eq!(kept, vector![1, 2]);
}

#[test]
fn test_registered_function_arity() {
    let context = double_context();
    let interpreter = Interpreter::new(&context);
    let double = context.function("double").unwrap();
    let err = interpreter.call(&double, &[1.into(), 2.into()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arity);
}

#[test]
fn test_higher_order_builtin_with_protected_function() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let negate_all = bind!(Builtin::Transform, ARG1, Function::from(Builtin::Negate));
    let result = interpreter
        .call(&negate_all, &[vector![1, 2, 3].into()])
        .unwrap();
    assert_snapshot!(result.to_string(), @"vector<-1, -2, -3>");
}

#[test]
fn test_placeholders_reorder_arguments() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let greater = bind!(Builtin::Less, ARG2, ARG1);
    assert!(interpreter.call_predicate(&greater, &[3.into(), 1.into()]).unwrap());
    assert!(!interpreter.call_predicate(&greater, &[1.into(), 3.into()]).unwrap());
}

#[test]
fn test_max_element_ties_keep_first() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let less = Function::from(Builtin::Less);
    let s = ints(&[1, 5, 2, 5, 0]);
    assert_eq!(algorithm::max_element(&interpreter, &less, &s).unwrap(), 1);
    assert_eq!(algorithm::min_element(&interpreter, &less, &s).unwrap(), 4);
}

#[test]
fn test_error_trace_names_bind_expression() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let below_three = bind!(Builtin::Less, ARG1, 3);
    let s: Vector = vec![Item::from(1), Item::from('x')].into_iter().collect();
    let err = algorithm::copy_if(&interpreter, &below_three, &s).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.trace(), vec!["bind<less, arg1, 3>"]);
    assert_snapshot!(err.root().to_string(), @"char and integer cannot be compared");
}

#[test]
fn test_error_trace_names_plain_comparator() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let less = Function::from(Builtin::Less);
    let s: Vector = vec![Item::from(1), Item::from('x')].into_iter().collect();
    let err = algorithm::sort(&interpreter, &less, &s).unwrap_err();
    assert_eq!(err.trace(), vec!["less"]);
    let err = algorithm::max_element(&interpreter, &less, &s).unwrap_err();
    assert_eq!(err.trace(), vec!["less"]);
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_unbound_placeholder() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let f = bind!(Builtin::Plus, ARG1, ARG2);
    let err = interpreter.call(&f, &[1.into()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arity);
}

#[test]
fn test_recursion_limit() {
    init_logging();
    let context = StaticContextBuilder::default().recursion_limit(4).build();
    let interpreter = Interpreter::new(&context);
    let mut nested = Bind::new(Builtin::Negate.into(), vec![ARG1.into()]);
    for _ in 0..6 {
        nested = Bind::new(Builtin::Negate.into(), vec![nested.into()]);
    }
    let f = Function::from(nested.clone());
    let err = interpreter.call(&f, &[1.into()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Limit);

    let relaxed = StaticContext::default();
    let interpreter = Interpreter::new(&relaxed);
    assert_eq!(interpreter.call(&nested.into(), &[1.into()]).unwrap(), Item::from(-1));
}

#[test]
fn test_arithmetic_errors() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let err = interpreter
        .call_builtin(Builtin::Divides, &[1.into(), 0.into()])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    let err = interpreter
        .call_builtin(Builtin::Plus, &[i64::MAX.into(), 1.into()])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
}
