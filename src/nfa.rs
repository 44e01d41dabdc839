use std::fs::File;
use std::io::Write;
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::alphabet::Alphabet;
use crate::common::{StateId, StateSet};
use crate::dfa::Dfa;
use crate::error::AutomatonError;
use crate::table::TransitionTable;

/// Successor set of a single (state, symbol) cell.
#[derive(Debug, Default, Clone)]
pub struct Transition {
    pub states: SmallVec<[StateId; 2]>,
}

impl Transition {
    #[inline]
    pub fn empty() -> Transition {
        Transition {
            states: Default::default(),
        }
    }

    #[inline]
    pub fn simple(state_id: StateId) -> Transition {
        Transition {
            states: smallvec![state_id],
        }
    }

    pub fn pair(state_id1: StateId, state_id2: StateId) -> Transition {
        Transition {
            states: smallvec![state_id1, state_id2],
        }
    }

    pub fn new(states: SmallVec<[StateId; 2]>) -> Transition {
        Transition { states }
    }

    #[inline]
    pub fn is_simple(&self, state_id: StateId) -> bool {
        self.states.len() == 1 && self.states[0] == state_id
    }
}

/// Nondeterministic automaton over a fixed alphabet. State 0 is the initial
/// state; a cell may hold zero, one or many successors.
#[derive(Debug, Clone)]
pub struct Nfa {
    alphabet: Alphabet,
    table: TransitionTable<Transition>,
    accepting: Vec<bool>,
}

impl Nfa {
    pub fn new(alphabet: Alphabet, table: TransitionTable<Transition>, accepting: Vec<bool>) -> Self {
        assert_eq!(table.alphabet_size(), alphabet.len());
        assert_eq!(table.n_states(), accepting.len());
        assert!(!accepting.is_empty());
        Nfa {
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
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state as usize]
    }

    /// The unique successor of `state` on `symbol`. Fails unless the
    /// successor set has exactly one member.
    pub fn unique_successor(&self, state: StateId, symbol: usize) -> Result<StateId, AutomatonError> {
        let tr = self.table.get_transition(state, symbol);
        if tr.states.len() == 1 {
            Ok(tr.states[0])
        } else {
            Err(AutomatonError::NotDeterministic {
                state,
                symbol,
                count: tr.states.len(),
            })
        }
    }

    /// Reinterprets an automaton that is already deterministic and total as
    /// a `Dfa`, without running subset construction.
    pub fn try_into_dfa(&self) -> Result<Dfa, AutomatonError> {
        let asize = self.alphabet_size();
        let mut transitions = Vec::with_capacity(self.table.size());
        for state in 0..self.n_states() {
            for symbol in 0..asize {
                transitions.push(self.unique_successor(state as StateId, symbol)?);
            }
        }
        Ok(Dfa::new(
            self.alphabet.clone(),
            TransitionTable::new(asize, transitions),
            self.accepting.clone(),
        ))
    }

    /// Subset construction. Each distinct label set reachable from `{0}`
    /// becomes one output state; the empty label set, created when a cell
    /// has no successors, is the non-accepting sink that makes the result
    /// total. Unreachable input states are never materialized.
    pub fn determinize(&self) -> Dfa {
        let asize = self.alphabet_size();
        let mut map = HashMap::new();
        let init: HashSet<StateId> = Some(0).into_iter().collect();
        map.insert(StateSet::singleton(0), 0 as StateId);

        let mut transitions = vec![0; asize];
        let mut accepting = Vec::new();
        accepting.push(init.iter().any(|s| self.accepting[*s as usize]));

        let mut stack = vec![(0, init)];
        let mut new_id: StateId = 0;

        while let Some((s_id, state)) = stack.pop() {
            for a in 0..asize {
                let mut new_state = HashSet::new();
                for s in &state {
                    new_state.extend(self.table.get_transition(*s, a).states.iter());
                }
                let fs = StateSet::new(new_state);
                let id = map.get(&fs).copied().unwrap_or_else(|| {
                    let new_state: HashSet<StateId> = fs.inner().clone();
                    new_id += 1;
                    map.insert(fs, new_id);
                    accepting.push(new_state.iter().any(|s| self.accepting[*s as usize]));
                    transitions.resize(transitions.len() + asize, 0 as StateId);
                    stack.push((new_id, new_state));
                    new_id
                });
                transitions[s_id as usize * asize + a] = id;
            }
        }
        debug!("determinize: {} -> {} states", self.n_states(), new_id + 1);
        Dfa::new(
            self.alphabet.clone(),
            TransitionTable::new(asize, transitions),
            accepting,
        )
    }

    pub fn make_dfa(&self) -> Dfa {
        self.determinize().minimize()
    }

    /// Runs `word` (symbol indices) by set simulation from state 0.
    pub fn accepts(&self, word: &[usize]) -> bool {
        let mut current: HashSet<StateId> = Some(0).into_iter().collect();
        for &a in word {
            let mut next = HashSet::new();
            for s in &current {
                next.extend(self.table.get_transition(*s, a).states.iter());
            }
            current = next;
        }
        current.iter().any(|s| self.accepting[*s as usize])
    }

    pub fn write_dot(&self, path: &Path, remove_sink: bool) -> std::io::Result<()> {
        let sink: Option<StateId> = if remove_sink {
            self.accepting
                .iter()
                .enumerate()
                .find(|(i, a)| {
                    !**a
                        && *i != 0
                        && self
                            .table
                            .get_state(*i as StateId)
                            .iter()
                            .all(|x| x.is_simple(*i as StateId))
                })
                .map(|(i, _)| i as StateId)
        } else {
            None
        };

        let mut file = File::create(path)?;
        file.write_all(b"digraph G {\n")?;

        for (i, acc) in self.accepting.iter().enumerate() {
            if Some(i as StateId) == sink {
                continue;
            }
            let shape = if *acc { "doublecircle" } else { "circle" };
            let color = if i == 0 { "gray" } else { "none" };
            file.write_all(
                format!(
                    "s{i}[label={i},shape={shape},fillcolor={color}, style=filled]\n",
                    i = i,
                    shape = shape,
                    color = color
                )
                .as_bytes(),
            )?;
        }
        let mut pairs = Vec::new();

        for (i, states) in self.table.states().enumerate() {
            if Some(i as StateId) == sink {
                continue;
            }
            pairs.clear();
            for (symbol, target) in states.iter().enumerate() {
                for j in &target.states {
                    if Some(*j) == sink {
                        continue;
                    }
                    pairs.push((*j, symbol));
                }
            }
            pairs.sort();
            for (target, symbols) in &pairs.iter().group_by(|p| p.0) {
                let label = symbols.map(|x| self.alphabet.symbol(x.1)).join(",");
                file.write_all(format!("s{} -> s{} [label=\"{}\"]\n", i, target, label).as_bytes())?;
            }
        }
        file.write_all(b"\n}\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc1() -> Alphabet {
        Alphabet::from_strs(&["a"])
    }

    fn make_nfa(alphabet: Alphabet, tr: Vec<Transition>, acc: Vec<bool>) -> Nfa {
        let asize = alphabet.len();
        Nfa::new(alphabet, TransitionTable::new(asize, tr), acc)
    }

    #[test]
    fn test_determinize_merges_branches() {
        /* 0 -a-> {1, 2}; 1, 2 accepting self-loops */
        let tr = vec![
            Transition::pair(1, 2),
            Transition::simple(1),
            Transition::simple(2),
        ];
        let a = make_nfa(abc1(), tr, vec![false, true, true]);

        let d = a.determinize();
        assert_eq!(d.n_states(), 2);
        assert!(!d.is_accepting(0));
        assert!(d.is_accepting(1));
        assert_eq!(d.get_state(1), &[1]);
    }

    #[test]
    fn test_determinize_skips_unreachable() {
        /* 3 points into the live part but nothing reaches 3 */
        let tr = vec![
            Transition::simple(1),
            Transition::simple(2),
            Transition::simple(2),
            Transition::simple(2),
        ];
        let a = make_nfa(abc1(), tr, vec![false, false, true, false]);
        let d = a.determinize();
        assert_eq!(d.n_states(), 3);
        assert_eq!(*d.accepting(), vec![false, false, true]);
    }

    #[test]
    fn test_determinize_injects_sink() {
        /* no transitions at all: the sink must absorb every symbol */
        let tr = vec![Transition::empty(), Transition::empty()];
        let a = make_nfa(abc1(), tr, vec![false, true]);
        let d = a.determinize();

        assert_eq!(d.n_states(), 2);
        let sink = d.get_state(0)[0];
        assert_ne!(sink, 0);
        assert!(!d.is_accepting(sink));
        assert_eq!(d.get_state(sink), &[sink]);
        /* state 1 is unreachable, so no accepting state survives */
        assert!(d.accepting().iter().filter(|a| **a).count() == 0);
    }

    #[test]
    fn test_determinize_totality() {
        /* every cell of the result resolves to an existing state */
        let abc = Alphabet::from_strs(&["a", "b"]);
        let tr = vec![
            Transition::pair(1, 2),
            Transition::empty(),
            Transition::empty(),
            Transition::simple(0),
            Transition::simple(2),
            Transition::empty(),
        ];
        let a = make_nfa(abc, tr, vec![false, true, false]);
        let d = a.determinize();
        assert_eq!(d.transitions().len(), d.n_states() * 2);
        for target in d.transitions() {
            assert!((*target as usize) < d.n_states());
        }
    }

    #[test]
    fn test_determinize_total_without_sink() {
        /* already total and deterministic: no extra state appears */
        let tr = vec![Transition::simple(1), Transition::simple(1)];
        let a = make_nfa(abc1(), tr, vec![false, true]);
        assert_eq!(a.determinize().n_states(), 2);
    }

    #[test]
    fn test_unique_successor() {
        let abc = Alphabet::from_strs(&["a", "b"]);
        let tr = vec![
            Transition::simple(1),
            Transition::pair(0, 1),
            Transition::empty(),
            Transition::simple(0),
        ];
        let a = make_nfa(abc, tr, vec![false, true]);

        assert_eq!(a.unique_successor(0, 0), Ok(1));
        assert_eq!(
            a.unique_successor(0, 1),
            Err(AutomatonError::NotDeterministic {
                state: 0,
                symbol: 1,
                count: 2
            })
        );
        assert_eq!(
            a.unique_successor(1, 0),
            Err(AutomatonError::NotDeterministic {
                state: 1,
                symbol: 0,
                count: 0
            })
        );
        assert!(a.try_into_dfa().is_err());
    }

    #[test]
    fn test_try_into_dfa() {
        let tr = vec![Transition::simple(1), Transition::simple(1)];
        let a = make_nfa(abc1(), tr, vec![false, true]);
        let d = a.try_into_dfa().unwrap();
        assert_eq!(d.n_states(), 2);
        assert!(d.test_input([0].iter().copied()));
    }

    #[test]
    fn test_accepts_set_simulation() {
        let tr = vec![
            Transition::pair(1, 2),
            Transition::simple(1),
            Transition::simple(2),
        ];
        let a = make_nfa(abc1(), tr, vec![false, true, true]);
        assert!(!a.accepts(&[]));
        assert!(a.accepts(&[0]));
        assert!(a.accepts(&[0, 0, 0]));
    }
}
