use std::sync::{LazyLock, Mutex, PoisonError};

use ahash::{HashMap, HashMapExt};

pub(crate) static INTERNER: LazyLock<Mutex<Interner>> = LazyLock::new(|| Mutex::new(Interner::new()));

#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) namespace: &'static str,
    pub(crate) name: &'static str,
}

// Entries are only ever appended; the strings are leaked so handles can
// hand out 'static slices without holding the lock.
#[derive(Debug)]
pub(crate) struct Interner {
    lookup: HashMap<&'static str, HashMap<&'static str, u32>>,
    entries: Vec<Entry>,
}

impl Interner {
    fn new() -> Self {
        Self {
            lookup: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn intern(&mut self, namespace: &str, name: &str) -> u32 {
        if let Some(index) = self
            .lookup
            .get(namespace)
            .and_then(|names| names.get(name))
        {
            return *index;
        }
        let namespace: &'static str = match self.lookup.get_key_value(namespace) {
            Some((namespace, _)) => *namespace,
            None => Box::leak(namespace.to_string().into_boxed_str()),
        };
        let name: &'static str = Box::leak(name.to_string().into_boxed_str());
        let index = next_index(self.entries.len());
        self.entries.push(Entry { namespace, name });
        self.lookup
            .entry(namespace)
            .or_insert_with(HashMap::new)
            .insert(name, index);
        index
    }

    /// Look a name up without interning it.
    pub(crate) fn find(&self, namespace: &str, name: &str) -> Option<u32> {
        self.lookup
            .get(namespace)
            .and_then(|names| names.get(name))
            .copied()
    }

    pub(crate) fn entry(&self, index: u32) -> Entry {
        self.entries[index as usize]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn next_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(index) => index,
        Err(_) => panic!("token table is full: {len} entries"),
    }
}

pub(crate) fn with_interner<R>(f: impl FnOnce(&mut Interner) -> R) -> R {
    let mut interner = INTERNER.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut interner)
}
