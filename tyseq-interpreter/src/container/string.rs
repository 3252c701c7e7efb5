use std::cmp::Ordering;
use std::fmt;

use crate::error;
use crate::sequence::{FromPack, Item, Pack, SequenceCore};
use crate::variadic;

/// A fixed string of characters.
///
/// Positions are character positions. Searches return the size of the
/// string when nothing is found.
///
/// Bounds are strict for positions and lenient for counts: a position past
/// the end is an error, but a count that runs past the end is clamped to
/// the characters that remain. `at` has no count and is always strict.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasicString {
    pack: Pack,
}

impl BasicString {
    pub fn new(s: &str) -> Self {
        Self {
            pack: s.chars().map(Item::from).collect(),
        }
    }

    /// Build a string from a pack; every item must be a character.
    pub fn from_items(items: Vec<Item>) -> error::Result<Self> {
        for item in &items {
            item.to_char()?;
        }
        Ok(Self {
            pack: Pack::new(items),
        })
    }

    /// Render an integer in `radix`, which must be between 2 and 16.
    ///
    /// Digits above 9 are lowercase letters.
    pub fn from_integer(value: i64, radix: u32) -> error::Result<Self> {
        if !(2..=16).contains(&radix) {
            return Err(error::Error::InvalidRadix { radix });
        }
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        loop {
            let digit = (magnitude % u64::from(radix)) as u32;
            digits.push(std::char::from_digit(digit, radix).unwrap_or('?'));
            magnitude /= u64::from(radix);
            if magnitude == 0 {
                break;
            }
        }
        if value < 0 {
            digits.push('-');
        }
        Ok(Self {
            pack: digits.into_iter().rev().map(Item::from).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.pack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pack.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.pack.iter().filter_map(|item| item.to_char().ok())
    }

    /// The characters as a Rust string.
    pub fn text(&self) -> String {
        self.chars().collect()
    }

    pub fn at(&self, index: usize) -> error::Result<char> {
        variadic::at(index, self.pack.items())?.to_char()
    }

    pub fn front(&self) -> error::Result<char> {
        self.pack
            .items()
            .first()
            .ok_or(error::Error::EmptySequence { operation: "front" })?
            .to_char()
    }

    pub fn back(&self) -> error::Result<char> {
        self.pack
            .items()
            .last()
            .ok_or(error::Error::EmptySequence { operation: "back" })?
            .to_char()
    }

    fn check_pos(&self, pos: usize) -> error::Result<()> {
        if pos > self.size() {
            Err(error::Error::IndexOutOfRange {
                index: pos,
                size: self.size(),
            })
        } else {
            Ok(())
        }
    }

    // characters available from `pos`, at most `count`
    fn clamp(&self, pos: usize, count: usize) -> usize {
        count.min(self.size() - pos)
    }

    pub fn insert(&self, pos: usize, s: &BasicString) -> error::Result<BasicString> {
        variadic::insert_range(pos, s.pack.items(), self.pack.items())
    }

    pub fn insert_c(&self, pos: usize, c: char) -> error::Result<BasicString> {
        variadic::insert(pos, c.into(), self.pack.items())
    }

    /// Remove up to `count` characters starting at `pos`.
    pub fn erase(&self, pos: usize, count: usize) -> error::Result<BasicString> {
        self.check_pos(pos)?;
        let count = self.clamp(pos, count);
        variadic::erase(pos, pos + count, self.pack.items())
    }

    pub fn append(&self, s: &BasicString) -> BasicString {
        let mut items = self.pack.items().to_vec();
        items.extend_from_slice(s.pack.items());
        BasicString {
            pack: Pack::new(items),
        }
    }

    pub fn append_c(&self, c: char) -> BasicString {
        let mut items = self.pack.items().to_vec();
        items.push(c.into());
        BasicString {
            pack: Pack::new(items),
        }
    }

    /// Up to `count` characters starting at `pos`.
    ///
    /// `pos` past the end is an error; `count` past the end is clamped.
    pub fn substr(&self, pos: usize, count: usize) -> error::Result<BasicString> {
        self.check_pos(pos)?;
        let count = self.clamp(pos, count);
        Ok(BasicString {
            pack: Pack::new(self.pack.items()[pos..pos + count].to_vec()),
        })
    }

    /// Replace up to `count` characters starting at `pos` with `s`.
    pub fn replace(&self, pos: usize, count: usize, s: &BasicString) -> error::Result<BasicString> {
        self.erase(pos, count)?.insert(pos, s)
    }

    /// Replace up to `count` characters starting at `pos` with `c`.
    pub fn replace_c(&self, pos: usize, count: usize, c: char) -> error::Result<BasicString> {
        self.erase(pos, count)?.insert_c(pos, c)
    }

    /// Lexicographic comparison by character.
    pub fn compare(&self, other: &BasicString) -> Ordering {
        self.chars().cmp(other.chars())
    }

    /// Position of the first occurrence of `needle`, or the size.
    ///
    /// The empty string is found at 0.
    pub fn find(&self, needle: &BasicString) -> usize {
        let (haystack, needle) = (self.pack.items(), needle.pack.items());
        if needle.len() > haystack.len() {
            return self.size();
        }
        (0..=haystack.len() - needle.len())
            .find(|&i| &haystack[i..i + needle.len()] == needle)
            .unwrap_or(self.size())
    }

    /// Position of the last occurrence of `needle`, or the size.
    ///
    /// The empty string is found at the size.
    pub fn rfind(&self, needle: &BasicString) -> usize {
        let (haystack, needle) = (self.pack.items(), needle.pack.items());
        if needle.len() > haystack.len() {
            return self.size();
        }
        (0..=haystack.len() - needle.len())
            .rev()
            .find(|&i| &haystack[i..i + needle.len()] == needle)
            .unwrap_or(self.size())
    }

    pub fn find_c(&self, c: char) -> usize {
        variadic::find(&c.into(), self.pack.items())
    }

    /// Position of the last `c`, or the size.
    pub fn rfind_c(&self, c: char) -> usize {
        let c = Item::from(c);
        self.pack
            .items()
            .iter()
            .rposition(|item| item == &c)
            .unwrap_or(self.size())
    }
}

impl From<&str> for BasicString {
    fn from(s: &str) -> Self {
        BasicString::new(s)
    }
}

impl SequenceCore for BasicString {
    fn items(&self) -> &[Item] {
        self.pack.items()
    }

    fn rebuild(&self, items: Vec<Item>) -> error::Result<Self> {
        BasicString::from_items(items)
    }
}

impl FromPack for BasicString {
    fn from_pack(items: Vec<Item>) -> error::Result<Self> {
        BasicString::from_items(items)
    }
}

impl fmt::Display for BasicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_util::{chars, ints};

    fn s(text: &str) -> BasicString {
        BasicString::new(text)
    }

    #[test]
    fn test_substr_clamps_count() {
        assert_eq!(s("abc").substr(1, 10), Ok(s("bc")));
        assert_eq!(s("abc").substr(3, 1), Ok(s("")));
        assert_eq!(
            s("abc").substr(4, 0),
            Err(error::Error::IndexOutOfRange { index: 4, size: 3 })
        );
    }

    #[test]
    fn test_at_is_strict() {
        assert_eq!(s("abc").at(2), Ok('c'));
        assert!(s("abc").at(3).is_err());
        assert_eq!(s("abc").front(), Ok('a'));
        assert_eq!(s("abc").back(), Ok('c'));
        assert!(s("").front().is_err());
    }

    #[test]
    fn test_insert_erase_append() {
        assert_eq!(s("ad").insert(1, &s("bc")), Ok(s("abcd")));
        assert_eq!(s("ac").insert_c(1, 'b'), Ok(s("abc")));
        assert_eq!(s("abcd").erase(1, 2), Ok(s("ad")));
        assert_eq!(s("abcd").erase(2, 99), Ok(s("ab")));
        assert!(s("abcd").erase(5, 1).is_err());
        assert_eq!(s("ab").append(&s("cd")), s("abcd"));
        assert_eq!(s("ab").append_c('c'), s("abc"));
    }

    #[test]
    fn test_replace() {
        assert_eq!(s("hello world").replace(6, 5, &s("there")), Ok(s("hello there")));
        assert_eq!(s("abc").replace(1, 10, &s("xy")), Ok(s("axy")));
        assert!(s("abc").replace(4, 0, &s("x")).is_err());
    }

    #[test]
    fn test_replace_c() {
        assert_eq!(s("abcd").replace_c(1, 2, 'x'), Ok(s("axd")));
        assert_eq!(s("abc").replace_c(1, 10, 'x'), Ok(s("ax")));
        assert_eq!(s("abc").replace_c(3, 0, 'x'), Ok(s("abcx")));
        assert_eq!(s("abc").replace_c(0, 0, 'x'), Ok(s("xabc")));
        assert!(s("abc").replace_c(4, 0, 'x').is_err());
    }

    #[test]
    fn test_find_rfind() {
        let hay = s("abcabc");
        assert_eq!(hay.find(&s("bc")), 1);
        assert_eq!(hay.rfind(&s("bc")), 4);
        assert_eq!(hay.find(&s("x")), 6);
        assert_eq!(hay.rfind(&s("x")), 6);
        assert_eq!(hay.find(&s("")), 0);
        assert_eq!(hay.rfind(&s("")), 6);
        assert_eq!(s("ab").find(&s("abc")), 2);
        assert_eq!(hay.find_c('c'), 2);
        assert_eq!(hay.rfind_c('c'), 5);
        assert_eq!(hay.rfind_c('a'), 3);
        assert_eq!(hay.rfind_c('z'), 6);
        assert_eq!(s("").rfind_c('a'), 0);
    }

    #[test]
    fn test_compare() {
        assert_eq!(s("abc").compare(&s("abd")), Ordering::Less);
        assert_eq!(s("abc").compare(&s("abc")), Ordering::Equal);
        assert_eq!(s("abcd").compare(&s("abc")), Ordering::Greater);
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(BasicString::from_integer(0, 10), Ok(s("0")));
        assert_eq!(BasicString::from_integer(-42, 10), Ok(s("-42")));
        assert_eq!(BasicString::from_integer(255, 16), Ok(s("ff")));
        assert_eq!(BasicString::from_integer(5, 2), Ok(s("101")));
        assert_eq!(
            BasicString::from_integer(i64::MIN, 16).map(|s| s.text()),
            Ok("-8000000000000000".to_string())
        );
        assert_eq!(
            BasicString::from_integer(1, 17),
            Err(error::Error::InvalidRadix { radix: 17 })
        );
    }

    #[test]
    fn test_rebuild_requires_chars() {
        assert_eq!(BasicString::from_items(chars("ab")), Ok(s("ab")));
        assert!(BasicString::from_items(ints(&[1])).is_err());
        assert_eq!(s("ab").to_string(), "\"ab\"");
    }
}
