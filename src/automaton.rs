use crate::alphabet::Alphabet;
use crate::dfa::Dfa;
use crate::equiv;
use crate::error::AutomatonError;
use crate::nfa::Nfa;

/// An automaton in whichever form a caller currently holds it.
#[derive(Debug, Clone)]
pub enum Automaton {
    Dfa(Dfa),
    Nfa(Nfa),
}

impl Automaton {
    pub fn alphabet(&self) -> &Alphabet {
        match self {
            Self::Dfa(dfa) => dfa.alphabet(),
            Self::Nfa(nfa) => nfa.alphabet(),
        }
    }

    pub fn n_states(&self) -> usize {
        match self {
            Self::Dfa(dfa) => dfa.n_states(),
            Self::Nfa(nfa) => nfa.n_states(),
        }
    }

    pub fn to_nfa(self) -> Nfa {
        match self {
            Self::Dfa(dfa) => dfa.to_nfa(),
            Self::Nfa(nfa) => nfa,
        }
    }

    /// Total deterministic form; a no-op on an automaton already held as a
    /// DFA.
    pub fn determinize(&self) -> Dfa {
        match self {
            Self::Dfa(dfa) => dfa.clone(),
            Self::Nfa(nfa) => nfa.determinize(),
        }
    }

    /// The unique minimal DFA for the language, determinizing first when
    /// needed.
    pub fn minimize(&self) -> Dfa {
        match self {
            Self::Dfa(dfa) => dfa.minimize(),
            Self::Nfa(nfa) => nfa.make_dfa(),
        }
    }

    pub fn equivalent(&self, other: &Automaton) -> Result<bool, AutomatonError> {
        if self.alphabet() != other.alphabet() {
            return Err(AutomatonError::AlphabetMismatch {
                left: self.alphabet().symbols().to_vec(),
                right: other.alphabet().symbols().to_vec(),
            });
        }
        Ok(equiv::isomorphic(&self.minimize(), &other.minimize()))
    }

    /// Complement of the language; determinizes first so the flipped
    /// accepting flags cover a total transition function.
    pub fn neg(&self) -> Automaton {
        Automaton::Dfa(self.determinize().neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::Transition;
    use crate::table::TransitionTable;

    fn sample() -> Automaton {
        let abc = Alphabet::from_strs(&["a"]);
        Automaton::Nfa(Nfa::new(
            abc,
            TransitionTable::new(1, vec![Transition::pair(1, 2), Transition::simple(1), Transition::simple(2)]),
            vec![false, true, true],
        ))
    }

    #[test]
    fn test_facade_round_trip() {
        let a = sample();
        let m = Automaton::Dfa(a.minimize());
        assert_eq!(a.equivalent(&m), Ok(true));
        assert_eq!(m.n_states(), 2);
    }

    #[test]
    fn test_neg_flips_language() {
        let a = sample();
        let n = a.neg();
        assert_eq!(a.equivalent(&n), Ok(false));
        assert_eq!(a.equivalent(&n.neg()), Ok(true));
    }
}
