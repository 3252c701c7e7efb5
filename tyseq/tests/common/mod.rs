// each test binary uses a different subset of these helpers
#![allow(dead_code)]

use tyseq::prelude::*;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn context() -> StaticContext {
    init_logging();
    StaticContext::default()
}

pub(crate) fn checked_context() -> StaticContext {
    init_logging();
    StaticContextBuilder::default()
        .check_preconditions(true)
        .build()
}

pub(crate) fn ints(values: &[i64]) -> Vector {
    values.iter().copied().map(Item::from).collect()
}

pub(crate) fn tokens(names: &[&str]) -> Vector {
    names.iter().map(|name| Item::from(Token::new(name))).collect()
}

pub(crate) fn less() -> Function {
    Builtin::Less.into()
}
