use std::collections::VecDeque;

use tracing::debug;

use crate::{Machine, Set, State, StateSet, TransitionMapping};

impl<M: TransitionMapping> Machine<M> {
    /// Returns the set of states that can be reached from the initial state by following
    /// transitions on any symbol, including epsilon. The initial state is always contained.
    pub fn reachable_states(&self) -> StateSet {
        let mut seen = Set::from_iter([self.initial()]);
        let mut queue = VecDeque::from([self.initial()]);

        while let Some(q) = queue.pop_front() {
            for sym in self.alphabet().with_epsilon() {
                for p in self.at(q, sym) {
                    if seen.insert(p) {
                        queue.push_back(p);
                    }
                }
            }
        }

        seen.into_iter().collect()
    }

    /// Returns a version of this machine without unreachable states. It keeps exactly the
    /// transitions between reachable states and the reachable accepting states.
    pub fn remove_unreachable_states(&self) -> Self {
        let reachable = self.reachable_states();
        debug!(
            "keeping {} of {} states as reachable",
            reachable.len(),
            self.size()
        );
        self.filter_map_states(|q: State| reachable.contains(&q).then_some(q))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Dfsm, Ndfsm, State, StateSet, TransitionMapping};

    fn states(ids: &[u32]) -> StateSet {
        ids.iter().copied().map(State::new).collect()
    }

    #[test]
    fn epsilon_edges_count_for_reachability() {
        let ndfsm: Ndfsm = "0 1 2 3 4/a/0,,1;1,a,2;3,a,4;4,,0/0/2 4".parse().unwrap();
        assert_eq!(ndfsm.reachable_states(), states(&[0, 1, 2]));

        let pruned = ndfsm.remove_unreachable_states();
        assert_eq!(pruned.states(), &states(&[0, 1, 2]));
        assert_eq!(pruned.accepting(), &states(&[2]));
        assert_eq!(pruned.initial(), State::new(0));
        assert_eq!(pruned.transitions().len(), 2);
        assert_eq!(pruned.encode(), "0 1 2/a/0, , 1;1, a, 2/0/2");

        // the receiver is left untouched
        assert_eq!(ndfsm.size(), 5);
    }

    #[test]
    fn initial_state_is_retained() {
        let ndfsm: Ndfsm = "3 7/a/7,a,3/3/7".parse().unwrap();
        let pruned = ndfsm.remove_unreachable_states();
        assert_eq!(pruned.states(), &states(&[3]));
        assert!(pruned.accepting().is_empty());
        assert!(pruned.transitions().is_empty());
    }

    #[test]
    fn every_remaining_state_is_reachable() {
        let dfsm: Dfsm = "0 1 2 3/a b/0,a,1;1,b,0;2,a,3;3,b,2;2,b,0/0/1 3"
            .parse()
            .unwrap();
        let pruned = dfsm.remove_unreachable_states();
        assert_eq!(pruned.reachable_states(), pruned.states().clone());
        assert_eq!(pruned.states(), &states(&[0, 1]));
    }
}
