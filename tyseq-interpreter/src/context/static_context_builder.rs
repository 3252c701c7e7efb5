use std::rc::Rc;

use tyseq_name::Token;

use crate::context::static_context::DEFAULT_RECURSION_LIMIT;
use crate::context::StaticContext;
use crate::error;
use crate::function::{Arity, ExternalFunction};
use crate::sequence::Item;

#[derive(Debug, Clone)]
pub struct StaticContextBuilder {
    externals: Vec<ExternalFunction>,
    check_preconditions: bool,
    recursion_limit: usize,
}

impl Default for StaticContextBuilder {
    fn default() -> Self {
        Self {
            externals: Vec::new(),
            check_preconditions: false,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl StaticContextBuilder {
    /// Validate the sorted-input precondition of the set algorithms.
    ///
    /// Off by default, in which case unsorted input gives an unspecified
    /// but deterministic result.
    pub fn check_preconditions(&mut self, check_preconditions: bool) -> &mut Self {
        self.check_preconditions = check_preconditions;
        self
    }

    /// Set how deeply function evaluation may nest.
    pub fn recursion_limit(&mut self, recursion_limit: usize) -> &mut Self {
        self.recursion_limit = recursion_limit;
        self
    }

    /// Register a function under `name`.
    ///
    /// It can then be resolved with [`StaticContext::function`] and used
    /// like any builtin, including inside bind expressions. Registering
    /// the same name twice keeps the later registration.
    pub fn function<F>(&mut self, name: &str, arity: Arity, func: F) -> &mut Self
    where
        F: Fn(&[Item]) -> error::Result<Item> + 'static,
    {
        log::debug!("registering function {} with arity {}", name, arity);
        self.externals.push(ExternalFunction {
            name: Token::new(name),
            arity,
            func: Rc::new(func),
        });
        self
    }

    pub fn build(&self) -> StaticContext {
        log::debug!(
            "building static context: {} external function(s), check_preconditions={}, recursion_limit={}",
            self.externals.len(),
            self.check_preconditions,
            self.recursion_limit
        );
        StaticContext::new(
            self.externals.clone(),
            self.check_preconditions,
            self.recursion_limit,
        )
    }
}
