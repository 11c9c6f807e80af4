use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    state::show_set, Dfsm, EpsilonClosures, Map, Ndfsm, State, StateSet, Symbol,
    TransitionFunction, TransitionMapping,
};

/// Converts `ndfsm` into an equivalent [`Dfsm`] via the subset construction, using the
/// given epsilon-closures of its states.
///
/// Every state of the result corresponds to an epsilon-closed group of states of `ndfsm`.
/// The initial state `0` is the closure of the initial state of `ndfsm`, further groups
/// are numbered in the order in which a breadth-first exploration discovers them, where
/// the successors of a group are considered in the declaration order of the alphabet.
/// The result has exactly one transition for every state and symbol. If the empty group
/// is reached, it becomes a rejecting sink state.
pub fn subset_construction(ndfsm: &Ndfsm, closures: &EpsilonClosures) -> Dfsm {
    let initial_group = closures.closure_of(ndfsm.initial()).clone();
    let mut groups: Vec<StateSet> = vec![initial_group.clone()];
    let mut indices: Map<StateSet, State> = Map::default();
    indices.insert(initial_group, State::new(0));
    let mut edges = BTreeMap::new();

    let mut i = 0;
    while i < groups.len() {
        let source = State::new(i as u32);
        for sym in ndfsm.alphabet().universe() {
            let step = groups[i]
                .iter()
                .flat_map(|q| ndfsm.at(*q, Symbol::Char(sym)));
            let group = closures.close(step);

            let target = match indices.get(&group) {
                Some(target) => *target,
                None => {
                    let target = State::new(groups.len() as u32);
                    trace!(
                        "discovered group {} on {sym} from {source}, naming it {target}",
                        show_set(&group)
                    );
                    indices.insert(group.clone(), target);
                    groups.push(group);
                    target
                }
            };
            edges.insert((source, sym), target);
        }
        i += 1;
    }

    let states = (0..groups.len() as u32).map(State::new).collect();
    let accepting = groups
        .iter()
        .positions(|group| group.iter().any(|q| ndfsm.is_accepting(*q)))
        .map(|i| State::new(i as u32))
        .collect();
    let transitions = TransitionFunction::from_map(edges);
    debug!(
        "subset construction produced {} states and {} transitions",
        groups.len(),
        transitions.len()
    );

    Dfsm::from_parts(
        states,
        ndfsm.alphabet().clone(),
        transitions,
        State::new(0),
        accepting,
    )
}

impl Ndfsm {
    /// Converts this machine into an equivalent [`Dfsm`], see [`subset_construction`].
    pub fn to_dfsm(&self) -> Dfsm {
        subset_construction(self, &self.epsilon_closures())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{tests::SUBMITTED, Dfsm, Ndfsm, State, TransitionMapping};

    #[test_log::test]
    fn deterministic_input_is_preserved() {
        let ndfsm: Ndfsm = "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1".parse().unwrap();
        let dfsm = ndfsm.to_dfsm();
        let expected: Dfsm = "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1".parse().unwrap();
        assert_eq!(dfsm.to_canonic_form(), expected.to_canonic_form());
        assert!(dfsm.compute("ab"));
    }

    #[test_log::test]
    fn groups_are_merged_structurally() {
        let ndfsm: Ndfsm = "0 1 2/a b/0,a,0;0,a,1;0,b,2;1,a,0;1,b,1;2,b,0;2,b,1/0/2"
            .parse()
            .unwrap();
        let dfsm = ndfsm.to_dfsm();
        // groups in discovery order: {0}, {0, 1}, {2}, {1, 2}, {}
        assert_eq!(
            dfsm.encode(),
            "0 1 2 3 4/a b/0, a, 1;0, b, 2;1, a, 1;1, b, 3;2, a, 4;2, b, 1;3, a, 0;3, b, 1;4, a, 4;4, b, 4/0/2 3"
        );
    }

    #[test]
    fn the_sink_is_only_created_when_reached() {
        let ndfsm: Ndfsm = "0 1/a/0,a,1;1,a,1/0/1".parse().unwrap();
        let dfsm = ndfsm.to_dfsm();
        assert_eq!(dfsm.size(), 2);

        let ndfsm: Ndfsm = "0 1/a b/0,a,1/0/1".parse().unwrap();
        let dfsm = ndfsm.to_dfsm();
        assert_eq!(dfsm.size(), 3);
        let sink = dfsm.successor(State::new(0), 'b').unwrap();
        assert!(!dfsm.is_accepting(sink));
        assert_eq!(dfsm.successor(sink, 'a'), Some(sink));
        assert_eq!(dfsm.successor(sink, 'b'), Some(sink));
    }

    #[test]
    fn result_is_total() {
        for encoding in SUBMITTED {
            let ndfsm: Ndfsm = encoding.parse().unwrap();
            let dfsm = ndfsm.to_dfsm();
            for q in dfsm.states() {
                for sym in dfsm.alphabet().universe() {
                    assert!(dfsm.successor(*q, sym).is_some());
                }
            }
            assert_eq!(
                dfsm.transitions().len(),
                dfsm.size() * dfsm.alphabet().size()
            );
        }
    }

    #[test]
    fn explicit_closures() {
        let ndfsm: Ndfsm = "0 1 2/a/0,,1;1,a,2/0/2".parse().unwrap();
        let closures = ndfsm.epsilon_closures();
        let dfsm = super::subset_construction(&ndfsm, &closures);
        assert_eq!(dfsm, ndfsm.to_dfsm());
        assert!(dfsm.compute("a"));
        assert!(!dfsm.compute(""));
        assert!(!dfsm.compute("aa"));
    }
}
