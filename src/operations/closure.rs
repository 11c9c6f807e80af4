use tracing::trace;

use crate::{Map, Ndfsm, State, StateSet};

/// The epsilon-closures of all states of an [`Ndfsm`]. The closure of a state `q` is the
/// set of states reachable from `q` using only epsilon transitions, which always contains
/// `q` itself.
///
/// The closures are computed once and then passed to the operations that need them, most
/// notably [`crate::subset_construction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpsilonClosures {
    closures: Map<State, StateSet>,
}

impl EpsilonClosures {
    /// Computes the closures of all states of `ndfsm`. Cycles of epsilon transitions are
    /// fine, every state is expanded at most once per closure.
    pub fn new(ndfsm: &Ndfsm) -> Self {
        let closures = ndfsm
            .states()
            .iter()
            .map(|q| (*q, Self::compute(ndfsm, *q)))
            .collect();
        Self { closures }
    }

    fn compute(ndfsm: &Ndfsm, origin: State) -> StateSet {
        let mut closure = StateSet::from([origin]);
        let mut todo = vec![origin];
        while let Some(q) = todo.pop() {
            for p in ndfsm.transitions().epsilon_targets(q) {
                if closure.insert(p) {
                    todo.push(p);
                }
            }
        }
        trace!("epsilon closure of {origin} is {closure:?}");
        closure
    }

    /// Returns the closure of `state`. States that do not belong to the machine are
    /// only reachable from themselves, so their closure is treated as empty.
    pub fn closure_of(&self, state: State) -> &StateSet {
        static EMPTY: StateSet = StateSet::new();
        self.closures.get(&state).unwrap_or(&EMPTY)
    }

    /// Returns the union of the closures of the given states.
    pub fn close<I: IntoIterator<Item = State>>(&self, states: I) -> StateSet {
        states
            .into_iter()
            .flat_map(|q| self.closure_of(q).iter().copied())
            .collect()
    }

    /// Iterates over all states together with their closures.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &StateSet)> + '_ {
        self.closures.iter()
    }
}

impl Ndfsm {
    /// Computes the [`EpsilonClosures`] of all states.
    pub fn epsilon_closures(&self) -> EpsilonClosures {
        EpsilonClosures::new(self)
    }
}
