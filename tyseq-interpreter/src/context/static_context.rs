use std::str::FromStr;
use std::sync::LazyLock;

use tyseq_name::Token;

use crate::error;
use crate::function::{self, Builtin, ExternalFunction, ExternalFunctionId, Function};

static STATIC_FUNCTIONS: LazyLock<function::StaticFunctions> =
    LazyLock::new(function::StaticFunctions::new);

pub(crate) const DEFAULT_RECURSION_LIMIT: usize = 256;

/// Everything an evaluation needs to know up front: which functions exist
/// and how strictly algorithms check their inputs.
///
/// Build one with [`crate::context::StaticContextBuilder`], or use
/// [`StaticContext::default`] for the builtins with default settings.
#[derive(Debug)]
pub struct StaticContext {
    functions: &'static function::StaticFunctions,
    externals: Vec<ExternalFunction>,
    check_preconditions: bool,
    recursion_limit: usize,
}

impl Default for StaticContext {
    fn default() -> Self {
        Self::new(Vec::new(), false, DEFAULT_RECURSION_LIMIT)
    }
}

impl StaticContext {
    pub(crate) fn new(
        externals: Vec<ExternalFunction>,
        check_preconditions: bool,
        recursion_limit: usize,
    ) -> Self {
        Self {
            functions: &STATIC_FUNCTIONS,
            externals,
            check_preconditions,
            recursion_limit,
        }
    }

    /// Whether sorted-input algorithms validate their input.
    pub fn check_preconditions(&self) -> bool {
        self.check_preconditions
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Resolve a function by name.
    ///
    /// Functions registered on the context take precedence over builtins
    /// of the same name.
    pub fn function(&self, name: &str) -> error::Result<Function> {
        // a name that was never interned cannot belong to a registered function
        if let Some(token) = Token::lookup(name) {
            if let Some(index) = self.externals.iter().rposition(|e| e.name == token) {
                return Ok(Function::External(ExternalFunctionId::new(index, token)));
            }
        }
        Builtin::from_str(name)
            .map(Function::Static)
            .map_err(|_| error::Error::UnknownFunction {
                name: name.to_string(),
            })
    }

    pub(crate) fn static_functions(&self) -> &'static function::StaticFunctions {
        self.functions
    }

    pub(crate) fn external(&self, id: ExternalFunctionId) -> error::Result<&ExternalFunction> {
        self.externals
            .get(id.index())
            .filter(|external| external.name == id.name())
            .ok_or_else(|| error::Error::UnknownFunction {
                name: id.name().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::context::StaticContextBuilder;
    use crate::function::Arity;
    use crate::sequence::Item;

    #[test]
    fn test_resolve_builtin() {
        let context = StaticContext::default();
        assert_eq!(
            context.function("less"),
            Ok(Function::Static(Builtin::Less))
        );
        assert_eq!(
            context.function("no_such_function"),
            Err(error::Error::UnknownFunction {
                name: "no_such_function".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_name_is_not_interned() {
        let context = StaticContextBuilder::default()
            .function("context-test-registered", Arity::Exact(0), |_| Ok(Item::from(1)))
            .build();
        let name = "context-test-unknown-function";
        assert!(context.function(name).is_err());
        assert!(context.function(name).is_err());
        assert_eq!(Token::lookup(name), None);
        assert!(matches!(
            context.function("context-test-registered"),
            Ok(Function::External(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let context = StaticContext::default();
        assert!(!context.check_preconditions());
        assert_eq!(context.recursion_limit(), DEFAULT_RECURSION_LIMIT);
    }
}
