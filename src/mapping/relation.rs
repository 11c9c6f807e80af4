use std::collections::BTreeMap;

use crate::{FsmError, State, StateSet, Symbol, Transition};

use super::TransitionMapping;

/// The transitions of a non-deterministic machine. For every pair of a state and a
/// symbol (including [`Symbol::Epsilon`]) there may be any number of targets.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TransitionRelation {
    edges: BTreeMap<(State, Symbol), StateSet>,
}

impl TransitionRelation {
    /// Returns the targets of all epsilon transitions leaving `state`.
    pub fn epsilon_targets(&self, state: State) -> impl Iterator<Item = State> + '_ {
        self.at(state, Symbol::Epsilon)
    }

    fn insert(&mut self, transition: Transition) {
        self.edges
            .entry((transition.from_state(), transition.symbol()))
            .or_default()
            .insert(transition.to_state());
    }
}

impl FromIterator<Transition> for TransitionRelation {
    fn from_iter<T: IntoIterator<Item = Transition>>(iter: T) -> Self {
        let mut relation = Self::default();
        for transition in iter {
            relation.insert(transition);
        }
        relation
    }
}

impl TransitionMapping for TransitionRelation {
    type Targets<'this> = std::iter::Flatten<
        std::option::IntoIter<std::iter::Copied<std::collections::btree_set::Iter<'this, State>>>,
    >
    where
        Self: 'this;

    type Transitions<'this> = Box<dyn Iterator<Item = Transition> + 'this>
    where
        Self: 'this;

    const PRETTY_NAME: &'static str = "Δ";

    fn from_transitions<I: IntoIterator<Item = Transition>>(iter: I) -> Result<Self, FsmError> {
        Ok(iter.into_iter().collect())
    }

    fn at(&self, state: State, symbol: Symbol) -> Self::Targets<'_> {
        self.edges
            .get(&(state, symbol))
            .map(|targets| targets.iter().copied())
            .into_iter()
            .flatten()
    }

    fn transitions(&self) -> Self::Transitions<'_> {
        Box::new(self.edges.iter().flat_map(|((from, symbol), targets)| {
            targets
                .iter()
                .map(move |to| Transition::new(*from, *symbol, *to))
        }))
    }

    fn filter_map_states<F: FnMut(State) -> Option<State>>(&self, mut f: F) -> Self {
        self.transitions()
            .filter_map(|t| {
                let from = f(t.from_state())?;
                let to = f(t.to_state())?;
                Some(Transition::new(from, t.symbol(), to))
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.edges.values().map(|targets| targets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::TransitionRelation;
    use crate::{Alphabet, FsmError, InvalidReference, State, Symbol, Transition, TransitionMapping};

    fn q(id: u32) -> State {
        State::new(id)
    }

    #[test]
    fn relation_lookup() {
        let relation = TransitionRelation::from_iter([
            Transition::from((0, 'a', 0)),
            Transition::from((0, 'a', 1)),
            Transition::from((0, None, 2)),
            Transition::from((0, 'a', 1)),
        ]);
        assert_eq!(relation.len(), 3);
        assert_eq!(relation.at(q(0), Symbol::Char('a')).collect_vec(), vec![q(0), q(1)]);
        assert_eq!(relation.epsilon_targets(q(0)).collect_vec(), vec![q(2)]);
        assert_eq!(relation.at(q(1), Symbol::Char('a')).count(), 0);
        assert_eq!(relation.encode(), "0, , 2;0, a, 0;0, a, 1");
        assert_eq!(relation.pretty(), "{(0, ε, 2), (0, a, 0), (0, a, 1)}");
    }

    #[test]
    fn relation_verification() {
        let alphabet = Alphabet::new(['a']).unwrap();
        let states = [q(0), q(1)].into_iter().collect();

        let unknown_state = TransitionRelation::from_iter([Transition::from((0, 'a', 7))]);
        assert_eq!(
            unknown_state.verify(&states, &alphabet),
            Err(FsmError::InvalidReference(InvalidReference::State {
                transition: Transition::from((0, 'a', 7)),
                state: q(7)
            }))
        );

        let unknown_symbol = TransitionRelation::from_iter([Transition::from((0, 'b', 1))]);
        assert_eq!(
            unknown_symbol.verify(&states, &alphabet),
            Err(FsmError::InvalidReference(InvalidReference::Symbol(
                Transition::from((0, 'b', 1))
            )))
        );

        let epsilon = TransitionRelation::from_iter([Transition::from((0, None, 1))]);
        assert_eq!(epsilon.verify(&states, &alphabet), Ok(()));
    }
}
