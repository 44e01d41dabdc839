use log::debug;

use crate::common::StateId;
use crate::dfa::Dfa;
use crate::error::AutomatonError;
use crate::nfa::Nfa;

/// Structural isomorphism of two DFAs, rooted at their initial states.
///
/// Walks both automata in lockstep with an explicit work stack, growing a
/// state bijection pair by pair. A pair fails if the accepting flags
/// disagree, or if exactly one side of a successor pair is already mapped
/// (the candidate bijection would not be well defined). Minimal DFAs for
/// the same language always pass (Myhill-Nerode uniqueness).
pub fn isomorphic(a: &Dfa, b: &Dfa) -> bool {
    assert_eq!(a.alphabet_size(), b.alphabet_size());
    if a.n_states() != b.n_states() {
        return false;
    }
    let asize = a.alphabet_size();

    let mut a_to_b: Vec<Option<StateId>> = vec![None; a.n_states()];
    let mut b_to_a: Vec<Option<StateId>> = vec![None; b.n_states()];
    a_to_b[0] = Some(0);
    b_to_a[0] = Some(0);

    let mut stack: Vec<(StateId, StateId)> = vec![(0, 0)];
    while let Some((s1, s2)) = stack.pop() {
        if a.is_accepting(s1) != b.is_accepting(s2) {
            return false;
        }
        for symbol in 0..asize {
            let n1 = a.get_state(s1)[symbol];
            let n2 = b.get_state(s2)[symbol];
            match (a_to_b[n1 as usize], b_to_a[n2 as usize]) {
                (None, None) => {
                    a_to_b[n1 as usize] = Some(n2);
                    b_to_a[n2 as usize] = Some(n1);
                    stack.push((n1, n2));
                }
                (Some(m1), Some(m2)) if m1 == n2 && m2 == n1 => {}
                _ => return false,
            }
        }
    }
    true
}

/// Language equivalence: minimize both sides and compare their transition
/// structures. Automata over different alphabets cannot be compared.
pub fn equivalent(a: &Nfa, b: &Nfa) -> Result<bool, AutomatonError> {
    if a.alphabet() != b.alphabet() {
        return Err(AutomatonError::AlphabetMismatch {
            left: a.alphabet().symbols().to_vec(),
            right: b.alphabet().symbols().to_vec(),
        });
    }
    let min_a = a.make_dfa();
    let min_b = b.make_dfa();
    debug!(
        "equivalent: comparing minimal automata of {} and {} states",
        min_a.n_states(),
        min_b.n_states()
    );
    Ok(isomorphic(&min_a, &min_b))
}
