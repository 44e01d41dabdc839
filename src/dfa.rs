use std::fmt;

use hashbrown::HashMap;
use log::debug;

use crate::alphabet::Alphabet;
use crate::common::StateId;
use crate::nfa::{Nfa, Transition};
use crate::table::TransitionTable;

/// Deterministic, total automaton: every state has exactly one successor
/// per alphabet symbol, guaranteed by the table layout. State 0 is initial.
#[derive(Debug, Clone)]
pub struct Dfa {
    alphabet: Alphabet,
    table: TransitionTable<StateId>,
    accepting: Vec<bool>,
}

impl Dfa {
    pub fn new(alphabet: Alphabet, table: TransitionTable<StateId>, accepting: Vec<bool>) -> Self {
        assert_eq!(table.alphabet_size(), alphabet.len());
        assert_eq!(table.n_states(), accepting.len());
        assert!(!accepting.is_empty());
        Dfa {
            alphabet,
            table,
            accepting,
        }
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.table.alphabet_size()
    }

    #[inline]
    pub fn n_states(&self) -> usize {
        self.accepting.len()
    }

    #[inline]
    pub fn get_state(&self, state_id: StateId) -> &[StateId] {
        self.table.get_state(state_id)
    }

    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state as usize]
    }

    #[inline]
    pub fn accepting(&self) -> &Vec<bool> {
        &self.accepting
    }

    #[inline]
    pub fn transitions(&self) -> &[StateId] {
        self.table.as_slice()
    }

    /// Complement: the table is total, so flipping the accepting flags
    /// accepts exactly the complement language.
    pub fn neg(mut self) -> Self {
        for a in self.accepting.iter_mut() {
            *a = !*a;
        }
        self
    }

    pub fn to_nfa(self) -> Nfa {
        Nfa::new(
            self.alphabet.clone(),
            self.table.map_states(|s| Transition::simple(*s)),
            self.accepting,
        )
    }

    pub fn test_input<I: Iterator<Item = usize>>(&self, word: I) -> bool {
        let mut state: StateId = 0;
        for a in word {
            state = self.table.get_state(state)[a];
        }
        self.accepting[state as usize]
    }

    /// Moore partition refinement to the unique minimal DFA. Classes start
    /// split by the accepting flag and are refined by (flag, successor
    /// classes) signatures, numbering distinct signatures in scan order,
    /// until the class count is stable. A stable count means no class
    /// split, so the mapping itself is stable. Class labels are a scan
    /// order artifact; compare results up to isomorphism.
    pub fn minimize(&self) -> Self {
        let n_states = self.accepting.len();
        assert!(n_states > 0);
        let asize = self.alphabet_size();
        let mut partitions: Vec<StateId> =
            self.accepting.iter().map(|a| if *a { 0 } else { 1 }).collect();

        let mut target_ids: Vec<StateId> = vec![0; asize * n_states];

        let mut rounds = 0;
        let mut prev_ids = 0;
        loop {
            rounds += 1;
            self.table.fill_partitions(&partitions, &mut target_ids);
            let mut map = HashMap::new();
            let mut new_id = 0;
            for (s, acc) in self.accepting.iter().enumerate() {
                let slice = &target_ids[s * asize..(s + 1) * asize];
                let id = *map.entry((slice, acc)).or_insert_with(|| {
                    let id = new_id;
                    new_id += 1;
                    id
                });
                partitions[s] = id;
            }
            if prev_ids == new_id {
                break;
            } else {
                prev_ids = new_id;
            }
        }
        debug!(
            "minimize: {} -> {} states in {} rounds",
            n_states, prev_ids, rounds
        );

        let mut transitions = vec![0; asize * prev_ids as usize];
        let mut accepting = vec![false; prev_ids as usize];

        for s in 0..n_states {
            let p = partitions[s] as usize;
            let slice = &target_ids[s * asize..(s + 1) * asize];
            transitions[p * asize..(p + 1) * asize].copy_from_slice(slice);
            accepting[p] = self.accepting[s];
        }
        Dfa::new(
            self.alphabet.clone(),
            TransitionTable::new(asize, transitions),
            accepting,
        )
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.table.states().enumerate() {
            let not_term = if self.accepting[i] { "" } else { "not " };
            writeln!(f, "state {} is {}terminal:", i, not_term)?;
            for (a, target) in state.iter().enumerate() {
                writeln!(f, "  {} -> {}", self.alphabet.symbol(a), target)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dfa(alphabet: Alphabet, tr: Vec<StateId>, acc: Vec<bool>) -> Dfa {
        let asize = alphabet.len();
        Dfa::new(alphabet, TransitionTable::new(asize, tr), acc)
    }

    fn abc2() -> Alphabet {
        Alphabet::from_strs(&["a", "b"])
    }

    #[test]
    fn test_minimize_simple() {
        let a = make_dfa(abc2(), vec![0, 1, 1, 0], vec![false, true]);
        let m = a.minimize();
        assert_eq!(m.n_states(), 2);
        assert_eq!(*m.accepting(), vec![false, true]);
    }

    #[test]
    fn test_minimize_all_accepting() {
        let a = make_dfa(abc2(), vec![0, 1, 1, 0], vec![true, true]);
        let m = a.minimize();
        assert_eq!(m.n_states(), 1);
        assert_eq!(*m.accepting(), vec![true]);
        assert_eq!(m.transitions(), vec![0, 0].as_slice());
    }

    #[test]
    fn test_minimize_none_accepting() {
        let a = make_dfa(abc2(), vec![0, 1, 1, 0], vec![false, false]);
        let m = a.minimize();
        assert_eq!(m.n_states(), 1);
        assert_eq!(*m.accepting(), vec![false]);
    }

    #[test]
    fn test_minimize_collapses_chain() {
        /*
           s0 --a--> s1 ===> s2  loop
           |
           b
           v
           s3<->s4, s5, s6, s7: a maze equivalent to a 5-state machine
         */
        let tr = vec![
            1, 3, // 0
            2, 2, // 1
            2, 2, // 2
            5, 4, // 3
            6, 3, // 4
            5, 7, // 5
            6, 7, // 6
            7, 0, // 7
        ];
        let mut acc = vec![false; 8];
        acc[1] = true;
        acc[2] = true;

        let a = make_dfa(abc2(), tr, acc);
        let m = a.minimize();
        assert_eq!(m.n_states(), 5);

        /* language must be preserved on a sample of words */
        let words: Vec<Vec<usize>> = vec![
            vec![],
            vec![0],
            vec![1],
            vec![0, 0],
            vec![1, 0, 0],
            vec![1, 1, 0, 1, 0],
            vec![1, 0, 1, 1, 0, 0],
        ];
        for w in &words {
            assert_eq!(
                a.test_input(w.iter().copied()),
                m.test_input(w.iter().copied()),
                "word {:?}",
                w
            );
        }
    }

    #[test]
    fn test_minimize_bound() {
        let a = make_dfa(abc2(), vec![1, 1, 0, 0], vec![false, true]);
        assert!(a.minimize().n_states() <= a.n_states());
    }

    #[test]
    fn test_neg() {
        let a = make_dfa(abc2(), vec![0, 1, 1, 0], vec![false, true]);
        let n = a.clone().neg();
        assert!(a.test_input([1].iter().copied()));
        assert!(!n.test_input([1].iter().copied()));
        assert!(!a.test_input([].iter().copied()));
        assert!(n.test_input([].iter().copied()));
    }

    #[test]
    fn test_display_dump() {
        let a = make_dfa(Alphabet::from_strs(&["a"]), vec![1, 1], vec![false, true]);
        let dump = a.to_string();
        assert!(dump.contains("state 0 is not terminal:"));
        assert!(dump.contains("state 1 is terminal:"));
        assert!(dump.contains("  a -> 1"));
    }
}
