//! The builtin function library. Every function here can be bound with
//! placeholders and passed to the algorithm suites.
mod boolean;
mod comparison;
mod hof;
mod numeric;
mod pair;
mod sequence;

use crate::function::StaticFunctionDescription;

pub(crate) fn static_function_descriptions() -> Vec<StaticFunctionDescription> {
    let mut descriptions = Vec::new();
    descriptions.extend(comparison::static_function_descriptions());
    descriptions.extend(numeric::static_function_descriptions());
    descriptions.extend(boolean::static_function_descriptions());
    descriptions.extend(pair::static_function_descriptions());
    descriptions.extend(sequence::static_function_descriptions());
    descriptions.extend(hof::static_function_descriptions());
    descriptions
}
