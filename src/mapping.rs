//! Transition mappings answer the question which states can be reached from a given
//! state on a given [`Symbol`]. There are two implementations: the
//! [`TransitionRelation`] of a non-deterministic machine, which allows any number of
//! targets (including via [`Symbol::Epsilon`]), and the [`TransitionFunction`] of a
//! deterministic machine, which allows at most one.
use std::fmt::Debug;

use itertools::Itertools;

use crate::{Alphabet, FsmError, InvalidReference, State, StateSet, Symbol, Transition};

mod function;
pub use function::TransitionFunction;

mod relation;
pub use relation::TransitionRelation;

/// Abstracts the transitions of a machine.
pub trait TransitionMapping: Clone + Debug + PartialEq + Sized {
    /// Type of iterator over the targets reached from a state on some symbol.
    type Targets<'this>: Iterator<Item = State>
    where
        Self: 'this;

    /// Type of iterator over all transitions.
    type Transitions<'this>: Iterator<Item = Transition>
    where
        Self: 'this;

    /// The name under which the mapping appears in the set notation of a machine.
    const PRETTY_NAME: &'static str;

    /// Collects the given transitions into a mapping. Fails if the transitions violate
    /// an invariant of the mapping; references to states and symbols are checked
    /// separately by [`TransitionMapping::verify`].
    fn from_transitions<I: IntoIterator<Item = Transition>>(iter: I) -> Result<Self, FsmError>;

    /// Returns the states that are reachable from `state` on `symbol` in exactly one step.
    fn at(&self, state: State, symbol: Symbol) -> Self::Targets<'_>;

    /// Returns an iterator over all transitions in ascending order.
    fn transitions(&self) -> Self::Transitions<'_>;

    /// Renames the endpoints of all transitions with `f`, dropping every transition for
    /// which `f` returns `None` for either endpoint. `f` must be injective on the states
    /// it keeps.
    fn filter_map_states<F: FnMut(State) -> Option<State>>(&self, f: F) -> Self;

    /// The number of transitions.
    fn len(&self) -> usize;

    /// Returns true if there are no transitions at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Verifies that every transition connects members of `states` and that its symbol is
    /// either epsilon or a member of `alphabet`.
    fn verify(&self, states: &StateSet, alphabet: &Alphabet) -> Result<(), FsmError> {
        for transition in self.transitions() {
            for state in [transition.from_state(), transition.to_state()] {
                if !states.contains(&state) {
                    return Err(InvalidReference::State { transition, state }.into());
                }
            }
            if !alphabet.admits(transition.symbol()) {
                return Err(InvalidReference::Symbol(transition).into());
            }
        }
        Ok(())
    }

    /// Encodes all transitions, separated by `;`.
    fn encode(&self) -> String {
        self.transitions().map(|t| t.encode()).join(";")
    }

    /// Renders the mapping in set notation, e.g. `{(0, a, 1), (1, ε, 0)}`.
    fn pretty(&self) -> String {
        format!("{{{}}}", self.transitions().join(", "))
    }
}
