//! Finite automaton engine: subset-construction determinization, partition
//! refinement minimization and language equivalence over a fixed alphabet.

pub mod alphabet;
pub mod automaton;
pub mod common;
pub mod def;
pub mod dfa;
pub mod equiv;
pub mod error;
pub mod nfa;
pub mod parser;
pub mod table;

pub use crate::alphabet::Alphabet;
pub use crate::automaton::Automaton;
pub use crate::def::AutomatonDef;
pub use crate::dfa::Dfa;
pub use crate::equiv::{equivalent, isomorphic};
pub use crate::error::AutomatonError;
pub use crate::nfa::{Nfa, Transition};
