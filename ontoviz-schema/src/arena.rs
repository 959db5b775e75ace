//! Insertion-ordered records keyed by IRI

use rustc_hash::FxHashMap;

/// One owned record per IRI, iterated in first-insertion order
///
/// Every pass of the schema builder goes through [`Arena::ensure_with`], so a
/// record is created exactly once no matter how many passes reference it.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    entries: Vec<(String, T)>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `id`, creating it with `make` if absent
    pub fn ensure_with(&mut self, id: &str, make: impl FnOnce() -> T) -> &mut T {
        let pos = match self.index.get(id) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push((id.to_string(), make()));
                self.index.insert(id.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        match self.index.get(id) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// `(id, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut T)> {
        self.entries.iter_mut().map(|(id, v)| (id.as_str(), v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}
