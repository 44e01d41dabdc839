use crate::alphabet::Alphabet;
use crate::common::StateId;
use crate::error::AutomatonError;
use crate::nfa::{Nfa, Transition};
use crate::table::TransitionTable;

/// Parsed textual description of an automaton: symbols, state count,
/// terminal states and an edge list. States are numbered 0..state_count,
/// state 0 is initial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatonDef {
    pub alphabet: Vec<String>,
    pub state_count: usize,
    pub terminal: Vec<usize>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub symbol: String,
    pub to: usize,
}

impl AutomatonDef {
    pub fn build(&self) -> Result<Nfa, AutomatonError> {
        if self.state_count == 0 {
            return Err(AutomatonError::UnknownStateReference("0".to_string()));
        }
        let alphabet = Alphabet::new(self.alphabet.clone());
        let asize = alphabet.len();

        let mut transitions = vec![Transition::empty(); asize * self.state_count];
        let mut accepting = vec![false; self.state_count];

        for &t in &self.terminal {
            if t >= self.state_count {
                return Err(AutomatonError::UnknownStateReference(t.to_string()));
            }
            accepting[t] = true;
        }

        for edge in &self.edges {
            if edge.from >= self.state_count {
                return Err(AutomatonError::UnknownStateReference(edge.from.to_string()));
            }
            if edge.to >= self.state_count {
                return Err(AutomatonError::UnknownStateReference(edge.to.to_string()));
            }
            let a = alphabet
                .index_of(&edge.symbol)
                .ok_or_else(|| AutomatonError::UnknownSymbol(edge.symbol.clone()))?;
            let tr = &mut transitions[edge.from * asize + a];
            let to = edge.to as StateId;
            if !tr.states.contains(&to) {
                tr.states.push(to);
            }
        }

        Ok(Nfa::new(
            alphabet,
            TransitionTable::new(asize, transitions),
            accepting,
        ))
    }
}
