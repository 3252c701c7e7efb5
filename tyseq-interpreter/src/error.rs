use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// An error raised while evaluating a sequence expression.
///
/// None of these are recoverable: the expression that produced one has no
/// result. Errors raised inside a bind expression are wrapped in
/// [`Error::Evaluation`] so the failing sub-expression can be identified;
/// use [`Error::root`] to get at the underlying cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    #[error("index {index} is out of range for a sequence of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("range [{first}, {last}) is not valid for a sequence of size {size}")]
    InvalidRange {
        first: usize,
        last: usize,
        size: usize,
    },
    #[error("{operation} requires a non-empty sequence")]
    EmptySequence { operation: &'static str },
    #[error("expected a sequence of length {expected}, found length {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("key {key} is already present")]
    DuplicateKey { key: String },
    #[error("key {key} is not present")]
    MissingKey { key: String },
    #[error("arg{index} is referenced but only {supplied} argument(s) were supplied")]
    UnboundPlaceholder { index: usize, supplied: usize },
    #[error("placeholders are numbered from 1")]
    InvalidPlaceholder,
    #[error("{function} expects {expected} argument(s), found {found}")]
    ArityMismatch {
        function: String,
        expected: String,
        found: usize,
    },
    #[error("{operation} requires input sorted under its comparator")]
    Unsorted { operation: &'static str },
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("{found} is not a valid key type, expected {expected}")]
    InvalidKeyType { expected: String, found: String },
    #[error("{found} is not a valid value type, expected {expected}")]
    InvalidValueType { expected: String, found: String },
    #[error("radix {radix} is not supported, expected 2 to 16")]
    InvalidRadix { radix: u32 },
    #[error("{left} and {right} cannot be compared")]
    NotComparable { left: String, right: String },
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown function {name}")]
    UnknownFunction { name: String },
    #[error("evaluation nested deeper than the limit of {limit}")]
    RecursionLimit { limit: usize },
    #[error("in {expression}: {source}")]
    Evaluation {
        expression: String,
        source: Box<Error>,
    },
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// Structural error.
    ///
    /// An index, range or length does not fit the sequence it is applied to.
    Structural,
    /// Duplicate key.
    ///
    /// A key was inserted into a map that already contains it.
    DuplicateKey,
    /// Missing key.
    ///
    /// A key was looked up or erased but the map does not contain it.
    MissingKey,
    /// Arity error.
    ///
    /// A bind expression references a placeholder beyond the supplied
    /// arguments, or a function was called with the wrong number of
    /// arguments.
    Arity,
    /// Precondition violation.
    ///
    /// An algorithm that requires sorted input was given unsorted input
    /// while precondition checking was enabled.
    Precondition,
    /// Type error.
    ///
    /// A value of the wrong kind was supplied.
    Type,
    /// Arithmetic error.
    Arithmetic,
    /// Limit exceeded.
    ///
    /// Evaluation nested deeper than the configured recursion limit.
    Limit,
    /// Definition error.
    ///
    /// A function name could not be resolved.
    Definition,
}

impl Error {
    /// The innermost error, looking through any evaluation wrappers.
    pub fn root(&self) -> &Error {
        let mut error = self;
        while let Error::Evaluation { source, .. } = error {
            error = source;
        }
        error
    }

    /// The chain of failing sub-expressions, outermost first.
    pub fn trace(&self) -> Vec<&str> {
        let mut trace = Vec::new();
        let mut error = self;
        while let Error::Evaluation { expression, source } = error {
            trace.push(expression.as_str());
            error = source;
        }
        trace
    }

    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            IndexOutOfRange { .. }
            | InvalidRange { .. }
            | EmptySequence { .. }
            | LengthMismatch { .. } => ErrorKind::Structural,
            DuplicateKey { .. } => ErrorKind::DuplicateKey,
            MissingKey { .. } => ErrorKind::MissingKey,
            UnboundPlaceholder { .. } | InvalidPlaceholder | ArityMismatch { .. } => {
                ErrorKind::Arity
            }
            Unsorted { .. } => ErrorKind::Precondition,
            TypeMismatch { .. }
            | InvalidKeyType { .. }
            | InvalidValueType { .. }
            | InvalidRadix { .. }
            | NotComparable { .. } => ErrorKind::Type,
            Overflow | DivisionByZero => ErrorKind::Arithmetic,
            RecursionLimit { .. } => ErrorKind::Limit,
            UnknownFunction { .. } => ErrorKind::Definition,
            Evaluation { source, .. } => source.kind(),
        }
    }

    pub(crate) fn within(self, expression: impl std::fmt::Display) -> Error {
        Error::Evaluation {
            expression: expression.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn type_mismatch(expected: impl std::fmt::Display, found: impl std::fmt::Display) -> Error {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl ErrorKind {
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_trace() {
        let error = Error::IndexOutOfRange { index: 4, size: 2 }
            .within("bind<at, arg1, 4>")
            .within("bind<transform, arg1>");
        assert_eq!(error.root(), &Error::IndexOutOfRange { index: 4, size: 2 });
        assert_eq!(error.trace(), vec!["bind<transform, arg1>", "bind<at, arg1, 4>"]);
        assert_eq!(error.kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_display() {
        let error = Error::DuplicateKey {
            key: "k1".to_string(),
        }
        .within("insert");
        assert_eq!(error.to_string(), "in insert: key k1 is already present");
    }

    #[test]
    fn test_kind_documentation() {
        assert_eq!(ErrorKind::DuplicateKey.message(), "Duplicate key.");
        assert_eq!(
            ErrorKind::MissingKey.note(),
            "A key was looked up or erased but the map does not contain it."
        );
        assert_eq!(ErrorKind::Arithmetic.note(), "");
        assert_eq!(ErrorKind::Precondition.to_string(), "Precondition");
    }
}
