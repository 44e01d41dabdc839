use crate::common::StateId;

/// Dense per-state transition storage: one row per state, one cell per
/// alphabet symbol. The cell type is `Transition` for an NFA row and a bare
/// `StateId` for a DFA row.
#[derive(Debug, Clone)]
pub struct TransitionTable<T: Default + Clone> {
    alphabet_size: usize,
    transitions: Vec<T>,
}

impl<T: Default + Clone> TransitionTable<T> {
    pub fn new(alphabet_size: usize, transitions: Vec<T>) -> Self {
        assert!(alphabet_size > 0);
        assert_eq!(transitions.len() % alphabet_size, 0);
        TransitionTable {
            alphabet_size,
            transitions,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.transitions.len()
    }

    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    #[inline]
    pub fn n_states(&self) -> usize {
        self.transitions.len() / self.alphabet_size
    }

    #[inline]
    pub fn get_transition(&self, state: StateId, symbol: usize) -> &T {
        &self.transitions[state as usize * self.alphabet_size + symbol]
    }

    #[inline]
    pub fn get_state(&self, state: StateId) -> &[T] {
        let start = state as usize * self.alphabet_size;
        &self.transitions[start..start + self.alphabet_size]
    }

    #[inline]
    pub fn get_state_mut(&mut self, state: StateId) -> &mut [T] {
        let start = state as usize * self.alphabet_size;
        let end = start + self.alphabet_size;
        &mut self.transitions[start..end]
    }

    pub fn states(&self) -> impl Iterator<Item = &[T]> {
        self.transitions.chunks(self.alphabet_size)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.transitions
    }

    pub fn map_states<S, F>(&self, f: F) -> TransitionTable<S>
    where
        F: FnMut(&T) -> S,
        S: Default + Clone,
    {
        TransitionTable {
            alphabet_size: self.alphabet_size,
            transitions: self.transitions.iter().map(f).collect(),
        }
    }
}

impl TransitionTable<StateId> {
    /// Rewrites every cell to the partition class of its target, writing
    /// into `out` (same layout as the table).
    pub fn fill_partitions(&self, partitions: &[StateId], out: &mut [StateId]) {
        assert_eq!(out.len(), self.transitions.len());
        for (idx, s_id) in self.transitions.iter().enumerate() {
            out[idx] = partitions[*s_id as usize];
        }
    }
}
