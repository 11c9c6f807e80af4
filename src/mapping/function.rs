use std::collections::BTreeMap;

use crate::{FsmError, NonDeterminism, State, Symbol, Transition};

use super::TransitionMapping;

/// The transitions of a deterministic machine, every pair of a state and a character has
/// at most one target. Epsilon transitions are not allowed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TransitionFunction {
    edges: BTreeMap<(State, char), State>,
}

impl TransitionFunction {
    /// Returns the unique successor of `state` on `symbol`, if there is one.
    pub fn successor(&self, state: State, symbol: char) -> Option<State> {
        self.edges.get(&(state, symbol)).copied()
    }

    /// Builds a function from pairs that are already known to be unique, as produced by
    /// the subset construction.
    pub(crate) fn from_map(edges: BTreeMap<(State, char), State>) -> Self {
        Self { edges }
    }
}

impl TransitionMapping for TransitionFunction {
    type Targets<'this> = std::option::IntoIter<State>
    where
        Self: 'this;

    type Transitions<'this> = Box<dyn Iterator<Item = Transition> + 'this>
    where
        Self: 'this;

    const PRETTY_NAME: &'static str = "δ";

    fn from_transitions<I: IntoIterator<Item = Transition>>(iter: I) -> Result<Self, FsmError> {
        let mut edges = BTreeMap::new();
        for transition in iter {
            let Symbol::Char(symbol) = transition.symbol() else {
                return Err(NonDeterminism::Epsilon(transition).into());
            };
            let state = transition.from_state();
            if let Some(first) = edges.insert((state, symbol), transition.to_state()) {
                if first != transition.to_state() {
                    return Err(NonDeterminism::Conflict {
                        state,
                        symbol,
                        first,
                        second: transition.to_state(),
                    }
                    .into());
                }
            }
        }
        Ok(Self { edges })
    }

    fn at(&self, state: State, symbol: Symbol) -> Self::Targets<'_> {
        symbol
            .char()
            .and_then(|c| self.successor(state, c))
            .into_iter()
    }

    fn transitions(&self) -> Self::Transitions<'_> {
        Box::new(
            self.edges
                .iter()
                .map(|((from, symbol), to)| Transition::new(*from, *symbol, *to)),
        )
    }

    fn filter_map_states<F: FnMut(State) -> Option<State>>(&self, mut f: F) -> Self {
        let edges = self
            .edges
            .iter()
            .filter_map(|((from, symbol), to)| Some(((f(*from)?, *symbol), f(*to)?)))
            .collect();
        Self { edges }
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}
