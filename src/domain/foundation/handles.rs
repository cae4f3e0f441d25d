//! Keyed registry for externally-owned input handles.
//!
//! Wizards with dynamic document rows attach one input handle per row. The
//! registry ties handle lifetime to row lifetime: a handle is registered
//! when its row is added and released when the row is removed, so stale
//! handles never accumulate.

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from row identifier to an externally-owned handle.
#[derive(Debug, Clone)]
pub struct HandleRegistry<K, H> {
    handles: HashMap<K, H>,
}

impl<K: Eq + Hash + Copy, H> HandleRegistry<K, H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Registers the handle for a row, replacing any previous one.
    ///
    /// Returns the replaced handle so the caller can release it.
    pub fn register(&mut self, key: K, handle: H) -> Option<H> {
        self.handles.insert(key, handle)
    }

    /// Releases and returns the handle for a removed row.
    pub fn release(&mut self, key: K) -> Option<H> {
        self.handles.remove(&key)
    }

    /// Returns the handle for a row, if registered.
    pub fn get(&self, key: K) -> Option<&H> {
        self.handles.get(&key)
    }

    /// Returns the number of live handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true when no handle is registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drops handles whose row no longer exists.
    ///
    /// `live` receives each key and returns whether its row is still
    /// present.
    pub fn retain_rows(&mut self, mut live: impl FnMut(K) -> bool) {
        self.handles.retain(|k, _| live(*k));
    }
}

impl<K: Eq + Hash + Copy, H> Default for HandleRegistry<K, H> {
    fn default() -> Self {
        Self::new()
    }
}
