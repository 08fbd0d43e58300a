//! Global string interning.
//!
//! Identifiers and record field names are deduplicated into a single
//! process-wide table so that `Scope` lookups and `Record` field comparisons
//! are pointer-cheap. The table lives behind a `OnceLock<Mutex<_>>` rather
//! than being threaded through every call site as an explicit argument,
//! since nothing about evaluating a Snek program needs more than one
//! interner instance at a time.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};

struct StringStorage {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<&'static str, u32>,
}

impl StringStorage {
    fn new() -> Self {
        Self {
            strings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(id) = self.lookup.get(s) {
            return *id;
        }

        let boxed: Box<str> = Box::from(s);
        // SAFETY: the leaked reference is only ever read back out of
        // `self.strings`, which we never shrink or remove from, so it stays
        // valid for the lifetime of the static storage.
        let leaked: &'static str = Box::leak(boxed.clone());
        let id = self.strings.len() as u32;
        self.strings.push(boxed);
        self.lookup.insert(leaked, id);
        id
    }

    fn resolve(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }
}

fn storage() -> &'static Mutex<StringStorage> {
    static STORAGE: OnceLock<Mutex<StringStorage>> = OnceLock::new();
    STORAGE.get_or_init(|| Mutex::new(StringStorage::new()))
}

/// A deduplicated, process-wide interned string.
///
/// Cheap to copy and compare: equality and hashing operate on the interned
/// id, never on the underlying bytes.
#[derive(Clone, Copy, Eq)]
pub struct InternedString(u32);

impl InternedString {
    pub fn new(s: &str) -> Self {
        let id = storage().lock().unwrap().intern(s);
        InternedString(id)
    }

    pub fn as_str(&self) -> &'static str {
        // SAFETY: ids are never reused and `StringStorage` never removes
        // entries, so the leaked `&'static str` backing this id is valid
        // for the process lifetime.
        let guard = storage().lock().unwrap();
        let s = guard.resolve(self.0);
        unsafe { std::mem::transmute::<&str, &'static str>(s) }
    }
}

impl PartialEq for InternedString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Hash for InternedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl std::ops::Deref for InternedString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        InternedString::new(s)
    }
}

impl From<String> for InternedString {
    fn from(s: String) -> Self {
        InternedString::new(&s)
    }
}

impl PartialEq<str> for InternedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_equal_strings_to_the_same_id() {
        let a = InternedString::new("foo");
        let b = InternedString::new("foo");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "foo");
    }

    #[test]
    fn distinct_strings_are_not_equal() {
        let a = InternedString::new("foo");
        let b = InternedString::new("bar");
        assert_ne!(a, b);
    }
}
