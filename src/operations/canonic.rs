use std::collections::BTreeMap;

use tracing::trace;

use crate::{Machine, State, TransitionMapping};

impl<M: TransitionMapping> Machine<M> {
    /// Returns a canonic version of this machine.
    ///
    /// States are renumbered `0, 1, 2, ...` in the order in which a depth-first traversal
    /// from the initial state discovers them. Outgoing transitions of a state are
    /// considered epsilon first and then in the declaration order of the alphabet, targets
    /// in ascending order. Unreachable states, including unreachable accepting states, do
    /// not appear in the canonic form.
    ///
    /// Two machines that are identical up to the naming of their states have the same
    /// canonic form.
    pub fn to_canonic_form(&self) -> Self {
        let mut canonic: BTreeMap<State, State> = BTreeMap::new();
        let mut free = 0;
        let mut todo = vec![self.initial()];
        canonic.insert(self.initial(), State::new(free));
        free += 1;

        while let Some(top) = todo.pop() {
            for sym in self.alphabet().with_epsilon() {
                for next in self.at(top, sym) {
                    if !canonic.contains_key(&next) {
                        trace!("discovered {next} from {top} on {sym}, naming it {free}");
                        canonic.insert(next, State::new(free));
                        todo.push(next);
                        free += 1;
                    }
                }
            }
        }

        self.filter_map_states(|q| canonic.get(&q).copied())
    }
}
