//! Single-slot memoization keyed by inputs.

/// Holds the last computed value together with the key it was computed for.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    recomputations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            recomputations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it first if the key changed.
    pub fn get_or_update(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        if !matches!(&self.slot, Some((cached, _)) if *cached == key) {
            self.recomputations += 1;
            self.slot = None;
        }
        &self.slot.get_or_insert_with(|| (key, compute())).1
    }

    /// The cached value, if any, regardless of key.
    pub fn get(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }

    /// How many times the value has been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
