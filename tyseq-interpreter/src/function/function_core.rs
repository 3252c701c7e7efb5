use std::fmt;
use std::rc::Rc;

use super::{Argument, Bind, Builtin, ExternalFunctionId};

/// A callable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Function {
    Static(Builtin),
    External(ExternalFunctionId),
    Bind(Rc<Bind>),
}

impl Function {
    /// Bind this function to `arguments`.
    pub fn bind(self, arguments: Vec<Argument>) -> Function {
        Function::Bind(Rc::new(Bind::new(self, arguments)))
    }
}

impl From<Builtin> for Function {
    fn from(builtin: Builtin) -> Self {
        Function::Static(builtin)
    }
}

impl From<Bind> for Function {
    fn from(bind: Bind) -> Self {
        Function::Bind(Rc::new(bind))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Static(builtin) => write!(f, "{}", builtin),
            Function::External(id) => write!(f, "{}", id.name()),
            Function::Bind(bind) => write!(f, "{}", bind),
        }
    }
}
