use crate::common::StateId;

/// Failures surfaced to callers of the engine and its builder.
///
/// Internal invariants of the algorithms (table shapes, class counts) stay
/// `assert!`s; these variants cover misuse of the public operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    /// An edge or terminal marking referenced a state the definition never
    /// declared.
    #[error("unknown state '{0}' referenced")]
    UnknownStateReference(String),

    /// An edge used a symbol outside the declared alphabet.
    #[error("symbol '{0}' is not in the alphabet")]
    UnknownSymbol(String),

    /// A unique successor was requested where the successor set does not
    /// have exactly one member.
    #[error("state {state} has {count} successors on symbol {symbol}, expected exactly one")]
    NotDeterministic {
        state: StateId,
        symbol: usize,
        count: usize,
    },

    /// Two automata over different alphabets were compared.
    #[error("alphabet mismatch: {left:?} vs {right:?}")]
    AlphabetMismatch {
        left: Vec<String>,
        right: Vec<String>,
    },
}
