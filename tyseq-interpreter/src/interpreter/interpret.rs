use std::cell::Cell;

use crate::context::StaticContext;
use crate::error;
use crate::function::{Argument, Bind, Builtin, Function, StaticFunctionType};
use crate::sequence::Item;

/// Evaluates functions and bind expressions against a static context.
///
/// Evaluation is pure: the same function applied to the same arguments
/// always gives the same result. The only state is the current nesting
/// depth, used to enforce the context's recursion limit.
#[derive(Debug)]
pub struct Interpreter<'a> {
    context: &'a StaticContext,
    depth: Cell<usize>,
}

struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

impl<'a> Interpreter<'a> {
    pub fn new(context: &'a StaticContext) -> Self {
        Self {
            context,
            depth: Cell::new(0),
        }
    }

    pub fn context(&self) -> &'a StaticContext {
        self.context
    }

    fn enter(&self) -> error::Result<DepthGuard<'_>> {
        let depth = self.depth.get();
        if depth >= self.context.recursion_limit() {
            return Err(error::Error::RecursionLimit {
                limit: self.context.recursion_limit(),
            });
        }
        self.depth.set(depth + 1);
        Ok(DepthGuard { depth: &self.depth })
    }

    /// Apply `function` to `arguments`.
    pub fn call(&self, function: &Function, arguments: &[Item]) -> error::Result<Item> {
        let _guard = self.enter()?;
        log::trace!("call {} with {} argument(s)", function, arguments.len());
        match function {
            Function::Static(builtin) => self.call_static(*builtin, arguments),
            Function::External(id) => {
                let external = self.context.external(*id)?;
                external.arity.check(external.name, arguments.len())?;
                (external.func)(arguments)
            }
            Function::Bind(bind) => self
                .evaluate_bind(bind, arguments)
                .map_err(|e| e.within(bind)),
        }
    }

    /// Apply a predicate; its result must be a boolean.
    pub fn call_predicate(&self, function: &Function, arguments: &[Item]) -> error::Result<bool> {
        self.call(function, arguments)?.to_boolean()
    }

    /// Apply `function` on behalf of an algorithm.
    ///
    /// Like [`Interpreter::call`], except that a failure is always traced
    /// back to `function`. Bind expressions already name themselves; a
    /// plain builtin or registered function is named here.
    pub fn apply(&self, function: &Function, arguments: &[Item]) -> error::Result<Item> {
        self.call(function, arguments).map_err(|e| match function {
            Function::Bind(_) => e,
            _ => e.within(function),
        })
    }

    /// [`Interpreter::apply`] for predicates and comparators.
    pub fn apply_predicate(&self, function: &Function, arguments: &[Item]) -> error::Result<bool> {
        self.apply(function, arguments)?
            .to_boolean()
            .map_err(|e| e.within(function))
    }

    /// Apply a builtin by name.
    pub fn call_builtin(&self, builtin: Builtin, arguments: &[Item]) -> error::Result<Item> {
        self.call(&Function::Static(builtin), arguments)
    }

    fn call_static(&self, builtin: Builtin, arguments: &[Item]) -> error::Result<Item> {
        let description = self.context.static_functions().get(builtin)?;
        match (description.func, arguments) {
            (StaticFunctionType::Unary(func), [a]) => func(self, a),
            (StaticFunctionType::Binary(func), [a, b]) => func(self, a, b),
            (StaticFunctionType::Ternary(func), [a, b, c]) => func(self, a, b, c),
            (StaticFunctionType::Variadic(min, func), arguments) if arguments.len() >= min => {
                func(self, arguments)
            }
            (func, arguments) => Err(error::Error::ArityMismatch {
                function: builtin.to_string(),
                expected: func.arity().to_string(),
                found: arguments.len(),
            }),
        }
    }

    fn evaluate_bind(&self, bind: &Bind, arguments: &[Item]) -> error::Result<Item> {
        let highest = bind.max_placeholder();
        if highest > arguments.len() {
            return Err(error::Error::UnboundPlaceholder {
                index: highest,
                supplied: arguments.len(),
            });
        }
        log::trace!("evaluate {}", bind);
        let substituted = bind
            .arguments()
            .iter()
            .map(|argument| self.substitute(argument, arguments))
            .collect::<error::Result<Vec<_>>>()?;
        self.call(bind.function(), &substituted)
    }

    fn substitute(&self, argument: &Argument, arguments: &[Item]) -> error::Result<Item> {
        match argument {
            Argument::Value(item) => Ok(item.clone()),
            Argument::Placeholder(placeholder) => arguments
                .get(placeholder.index() - 1)
                .cloned()
                .ok_or(error::Error::UnboundPlaceholder {
                    index: placeholder.index(),
                    supplied: arguments.len(),
                }),
            Argument::Bind(bind) => {
                let _guard = self.enter()?;
                self.evaluate_bind(bind, arguments)
                    .map_err(|e| e.within(bind))
            }
            Argument::Protect(function) => Ok(Item::Function(function.clone())),
        }
    }
}
