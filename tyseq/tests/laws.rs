use rstest::rstest;

use tyseq::prelude::*;

mod common;

use common::{context, ints, less};

fn samples() -> Vec<Vector> {
    vec![
        ints(&[]),
        ints(&[7]),
        ints(&[3, 1, 2]),
        ints(&[5, 3, 5, 1, 3, 3]),
        ints(&[1, 2, 3, 4, 5, 6]),
        ints(&[9, 8, 7, 6, 5]),
    ]
}

#[rstest]
#[case(0, 0)]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 3)]
#[case(3, 6)]
#[case(4, 5)]
#[case(5, 0)]
fn test_insert_then_at(#[case] sample: usize, #[case] pos: usize) {
    let s = &samples()[sample];
    if pos > s.size() {
        assert!(algorithm::insert(pos, 42, s).is_err());
        return;
    }
    let inserted = algorithm::insert(pos, 42, s).unwrap();
    assert_eq!(algorithm::size(&inserted), algorithm::size(s) + 1);
    assert_eq!(algorithm::at(pos, &inserted).unwrap(), &Item::from(42));
}

#[rstest]
#[case(0, 0)]
#[case(0, 3)]
#[case(1, 2)]
#[case(2, 5)]
#[case(4, 4)]
fn test_erase_insert_range_round_trip(#[case] first: usize, #[case] last: usize) {
    for s in samples() {
        if last > s.size() {
            assert!(algorithm::erase(first, last, &s).is_err());
            continue;
        }
        let len = s.size();
        let segment = algorithm::erase(0, first, &algorithm::erase(last, len, &s).unwrap()).unwrap();
        let erased = algorithm::erase(first, last, &s).unwrap();
        assert_eq!(erased.size(), len - (last - first));
        let restored = algorithm::insert_range(first, &segment, &erased).unwrap();
        assert_eq!(restored, s);
    }
}

#[test]
fn test_sort_is_idempotent() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    for s in samples() {
        let once = algorithm::sort(&interpreter, &less(), &s).unwrap();
        let twice = algorithm::sort(&interpreter, &less(), &once).unwrap();
        assert_eq!(once, twice);
        assert!(algorithm::is_sorted(&interpreter, &less(), &once).unwrap());
    }
}

#[test]
fn test_sort_is_stable() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let s: Vector = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')]
        .into_iter()
        .map(|(k, v)| Item::from(Pair::new(k, v)))
        .collect();
    let by_first = bind!(
        Builtin::Less,
        Bind::new(Builtin::First.into(), vec![ARG1.into()]),
        Bind::new(Builtin::First.into(), vec![ARG2.into()]),
    );
    let sorted = algorithm::sort(&interpreter, &by_first, &s).unwrap();
    let seconds: String = sorted
        .iter()
        .map(|item| item.to_pair().unwrap().second().to_char().unwrap())
        .collect();
    assert_eq!(seconds, "ebdacf");
}

#[test]
fn test_unique_of_sorted() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    for s in samples() {
        let sorted = algorithm::sort(&interpreter, &less(), &s).unwrap();
        let unique = algorithm::unique(&sorted).unwrap();
        assert!(algorithm::is_unique(&unique));
        for pair in unique.items().windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        for item in s.iter() {
            assert!(algorithm::count(item, &unique) == 1);
        }
        for item in unique.iter() {
            assert!(algorithm::count(item, &s) >= 1);
        }
    }
}

#[rstest]
#[case(&[1, 3, 5, 3], 1)]
#[case(&[5, 1], 0)]
#[case(&[0, 1, 2], 3)]
#[case(&[], 0)]
fn test_find_if_first_match(#[case] values: &[i64], #[case] expected: usize) {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let greater_than_two = bind!(Builtin::Greater, ARG1, 2);
    let s = ints(values);
    let found = algorithm::find_if(&interpreter, &greater_than_two, &s).unwrap();
    assert_eq!(found, expected);
    if found < s.size() {
        let item = algorithm::at(found, &s).unwrap();
        assert!(interpreter
            .call_predicate(&greater_than_two, &[item.clone()])
            .unwrap());
    }
    for item in &s.items()[..found] {
        assert!(!interpreter
            .call_predicate(&greater_than_two, &[item.clone()])
            .unwrap());
    }
}

#[test]
fn test_map_insert_law() {
    let k = Token::new("law-key");
    let map = Map::default().insert(k, 1).unwrap();
    assert_eq!(map.at(&k.into()).unwrap(), &Item::from(1));
    let err = map.insert(k, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}

#[test]
fn test_transform_identity() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let identity = Function::from(Builtin::Identity);
    for s in samples() {
        assert_eq!(algorithm::transform(&interpreter, &identity, &s).unwrap(), s);
    }
    let t = tuple![1, 'x', true];
    assert_eq!(algorithm::transform(&interpreter, &identity, &t).unwrap(), t);
}

#[test]
fn test_zip_unzip_round_trip() {
    let s: Vector = (1..=4)
        .map(|i| Item::from(tuple![i, char::from(b'a' + i as u8), i % 2 == 0]))
        .collect();
    let columns = algorithm::unzip(&s).unwrap();
    assert_eq!(columns.len(), 3);
    let views: Vec<&dyn SequenceCore> = columns.iter().map(|c| c as &dyn SequenceCore).collect();
    assert_eq!(algorithm::zip(&views).unwrap(), s);
}

#[test]
fn test_remove_is_copy_if_not() {
    let context = context();
    let interpreter = Interpreter::new(&context);
    let s = ints(&[5, 3, 5, 1, 3, 3]);
    let removed = algorithm::remove(&interpreter, &3.into(), &s).unwrap();
    let kept = algorithm::copy_if(
        &interpreter,
        &bind!(Builtin::NotEqualTo, ARG1, 3),
        &s,
    )
    .unwrap();
    assert_eq!(removed, kept);
    assert_eq!(removed, ints(&[5, 5, 1]));
}
