// Functions are values: builtins from the static library, closures
// registered on the static context, and bind expressions composing
// either of those with placeholders.

mod bind;
mod function_core;
mod static_function;

pub use bind::{Argument, Bind, Placeholder, ARG1, ARG2, ARG3, ARG4, ARG5, ARG6, ARG7, ARG8};
pub use function_core::Function;
pub use static_function::{Arity, Builtin, ExternalFunctionId, ExternalFunctionType};
pub(crate) use static_function::{
    ExternalFunction, StaticFunctionDescription, StaticFunctionType, StaticFunctions,
};
