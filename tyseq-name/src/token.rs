use std::cmp::Ordering;
use std::fmt;

use crate::interner::{with_interner, Entry};

/// An interned, identity-comparable symbol.
///
/// Tokens are cheap `Copy` handles into a process-wide intern table. Two
/// tokens are equal exactly when they were created from the same namespace
/// and name. The table only grows; a token stays valid for the lifetime of
/// the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u32);

impl Token {
    /// Intern a token without a namespace.
    pub fn new(name: &str) -> Self {
        Self::qualified("", name)
    }

    /// Intern a token inside a namespace.
    ///
    /// An empty namespace is the same as no namespace.
    ///
    /// # Panics
    ///
    /// Panics if the intern table already holds `u32::MAX + 1` entries.
    pub fn qualified(namespace: &str, name: &str) -> Self {
        Token(with_interner(|interner| interner.intern(namespace, name)))
    }

    /// The token for `name` if it has already been interned.
    ///
    /// Unlike [`Token::new`], this never adds to the intern table.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::lookup_qualified("", name)
    }

    pub fn lookup_qualified(namespace: &str, name: &str) -> Option<Self> {
        with_interner(|interner| interner.find(namespace, name)).map(Token)
    }

    fn entry(&self) -> Entry {
        with_interner(|interner| interner.entry(self.0))
    }

    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    pub fn namespace(&self) -> Option<&'static str> {
        let namespace = self.entry().namespace;
        if namespace.is_empty() {
            None
        } else {
            Some(namespace)
        }
    }

    /// The position of this token in the intern table.
    pub fn index(&self) -> u32 {
        self.0
    }
}

// Ordering goes by text rather than by intern index, so it does not depend
// on the order in which tokens happened to be created.
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            return Ordering::Equal;
        }
        let a = self.entry();
        let b = other.entry();
        (a.namespace, a.name).cmp(&(b.namespace, b.name))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry();
        if entry.namespace.is_empty() {
            write!(f, "{}", entry.name)
        } else {
            write!(f, "{}::{}", entry.namespace, entry.name)
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self)
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Token::new(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Token::new("int"), Token::new("int"));
        assert_ne!(Token::new("int"), Token::new("long"));
    }

    #[test]
    fn test_qualified() {
        let t = Token::qualified("std", "vector");
        assert_eq!(t.namespace(), Some("std"));
        assert_eq!(t.name(), "vector");
        assert_eq!(t.to_string(), "std::vector");
        assert_ne!(t, Token::new("vector"));
        assert_eq!(Token::qualified("", "vector"), Token::new("vector"));
    }

    #[test]
    fn test_order_is_textual() {
        // created in reverse so the intern index disagrees with text order
        let z = Token::new("token-order-z");
        let a = Token::new("token-order-a");
        assert!(a < z);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Token::lookup("token-lookup-never-created"), None);
        assert_eq!(Token::lookup("token-lookup-never-created"), None);
        let t = Token::new("token-lookup-created");
        assert_eq!(Token::lookup("token-lookup-created"), Some(t));
        let q = Token::qualified("ns", "token-lookup-created");
        assert_eq!(Token::lookup_qualified("ns", "token-lookup-created"), Some(q));
        assert_eq!(Token::lookup_qualified("other", "token-lookup-created"), None);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Token::new("char")), "Token(char)");
    }
}
