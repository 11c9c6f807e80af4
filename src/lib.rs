//! Library for working with finite state machines over single-character alphabets.
//!
//! Machines are read from (and written to) a compact textual encoding
//!
//! ```text
//! <states> / <alphabet> / <transitions> / <initial state> / <accepting states>
//! ```
//!
//! for example `0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1`. An empty symbol position
//! in a transition (`0,,1`) denotes an epsilon transition. A non-deterministic
//! machine ([`Ndfsm`]) can be converted into an equivalent deterministic one
//! ([`Dfsm`]) via the subset construction, and every machine has a canonical form
//! in which states are numbered in discovery order.
//!
//! ```
//! let dfsm = fsm::convert("0 1 2/a/0,,1;1,a,2/0/2").unwrap();
//! assert!(dfsm.compute("a"));
//! assert!(!dfsm.compute(""));
//! assert!(!dfsm.compute("aa"));
//! ```
#![warn(missing_docs)]

pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

mod state;
pub use state::{State, StateSet};

mod transition;
pub use transition::Transition;

pub mod mapping;
pub use mapping::{TransitionFunction, TransitionMapping, TransitionRelation};

mod encoding;

mod error;
pub use error::{FsmError, InvalidReference, NonDeterminism};

mod machine;
pub use machine::{Dfsm, Machine, Ndfsm};

pub mod operations;
pub use operations::{subset_construction, EpsilonClosures};

pub mod algorithms;
pub use algorithms::minimize;

mod display;

#[cfg(test)]
mod tests;

/// Type alias for hash maps used for internal bookkeeping, backed by `ahash` if the
/// corresponding feature is enabled.
#[cfg(feature = "ahash")]
pub type Map<K, V> = ahash::HashMap<K, V>;
/// Type alias for hash maps used for internal bookkeeping.
#[cfg(not(feature = "ahash"))]
pub type Map<K, V> = std::collections::HashMap<K, V>;

/// Type alias for hash sets used for internal bookkeeping, backed by `ahash` if the
/// corresponding feature is enabled.
#[cfg(feature = "ahash")]
pub type Set<S> = ahash::HashSet<S>;
/// Type alias for hash sets used for internal bookkeeping.
#[cfg(not(feature = "ahash"))]
pub type Set<S> = std::collections::HashSet<S>;

/// Parses the given encoding of a non-deterministic machine and converts it into an
/// equivalent deterministic one.
///
/// Fails if the encoding does not match the grammar or if it references states or
/// symbols that it does not declare. See [`FsmError`].
pub fn convert(encoding: &str) -> Result<Dfsm, FsmError> {
    let ndfsm: Ndfsm = encoding.parse()?;
    tracing::debug!(
        "parsed NDFSM with {} states and {} transitions",
        ndfsm.size(),
        ndfsm.transitions().len()
    );
    Ok(ndfsm.to_dfsm())
}
