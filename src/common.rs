use std::hash::{Hash, Hasher};

use hashbrown::HashSet;

pub type StateId = u32;

/// Label set identifying a composite state during subset construction.
/// Equality ignores insertion order; the hash is order-independent so the
/// set can key the label-set -> dense index map.
#[derive(Debug, Clone)]
pub struct StateSet {
    inner: HashSet<StateId>,
}

impl StateSet {
    pub fn new(set: HashSet<StateId>) -> Self {
        StateSet { inner: set }
    }

    pub fn singleton(state_id: StateId) -> Self {
        let mut set = HashSet::new();
        set.insert(state_id);
        StateSet { inner: set }
    }

    pub fn empty() -> Self {
        StateSet { inner: HashSet::new() }
    }

    #[inline]
    pub fn inner(&self) -> &HashSet<StateId> {
        &self.inner
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &StateSet) -> bool {
        self.inner == other.inner
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        let mut h: StateId = 0;
        for elm in &self.inner {
            h ^= *elm;
        }
        state.write_u64(h as u64 * self.inner.len() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stateset_eq_ignores_order() {
        let a = StateSet::new(vec![1, 2, 3].into_iter().collect());
        let b = StateSet::new(vec![3, 1, 2].into_iter().collect());
        assert_eq!(a, b);
        assert_ne!(a, StateSet::new(vec![1, 2].into_iter().collect()));
        assert_ne!(a, StateSet::empty());
    }

    #[test]
    fn test_stateset_as_key() {
        let mut map = hashbrown::HashMap::new();
        map.insert(StateSet::new(vec![0, 7].into_iter().collect()), 1u32);
        map.insert(StateSet::empty(), 2u32);
        assert_eq!(map.get(&StateSet::new(vec![7, 0].into_iter().collect())), Some(&1));
        assert_eq!(map.get(&StateSet::empty()), Some(&2));
        assert_eq!(map.get(&StateSet::singleton(7)), None);
    }
}
