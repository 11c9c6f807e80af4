use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{Dfsm, Map, State, StateSet, TransitionFunction};

/// A partition of the states of a machine into disjoint classes. Classes are kept in
/// ascending order, so two partitions with the same classes are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition(Vec<StateSet>);

impl Partition {
    /// Creates a partition from the given classes.
    pub fn new<I, J>(classes: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = State>,
    {
        Self(
            classes
                .into_iter()
                .map(|class| class.into_iter().collect())
                .sorted()
                .collect(),
        )
    }

    /// Returns the classes in ascending order.
    pub fn classes(&self) -> &[StateSet] {
        &self.0
    }

    /// The number of classes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no classes, which only happens for a machine without
    /// states.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn class_indices(classes: &[StateSet]) -> Map<State, usize> {
        classes
            .iter()
            .enumerate()
            .flat_map(|(i, class)| class.iter().map(move |q| (*q, i)))
            .collect()
    }
}

/// Computes the coarsest partition of the states of `dfsm` into classes of states that
/// cannot be distinguished by any word. Starting from the split into accepting and
/// rejecting states, classes are split by the classes their successors belong to until
/// nothing changes. A missing transition distinguishes a state from one that has it.
pub fn partition_refinement(dfsm: &Dfsm) -> Partition {
    let (accepting, rejecting): (StateSet, StateSet) =
        dfsm.states().iter().partition(|q| dfsm.is_accepting(**q));
    let mut p: Vec<StateSet> = [rejecting, accepting]
        .into_iter()
        .filter(|o| !o.is_empty())
        .collect();

    loop {
        let class_of = Partition::class_indices(&p);
        let mut new_p = vec![];
        for class in &p {
            let mut split: BTreeMap<Vec<Option<usize>>, StateSet> = BTreeMap::new();
            for q in class {
                let signature = dfsm
                    .alphabet()
                    .universe()
                    .map(|sym| {
                        dfsm.successor(*q, sym)
                            .and_then(|p| class_of.get(&p).copied())
                    })
                    .collect();
                split.entry(signature).or_default().insert(*q);
            }
            if split.len() > 1 {
                trace!(
                    "splitting class of size {} into {} classes",
                    class.len(),
                    split.len()
                );
            }
            new_p.extend(split.into_values());
        }

        if new_p.len() == p.len() {
            return Partition::new(new_p);
        }
        p = new_p;
    }
}

/// Returns the minimal [`Dfsm`] recognizing the same language as `dfsm`, in canonic form.
///
/// Unreachable states are removed first, then all states that are equivalent according
/// to [`partition_refinement`] are merged.
pub fn minimize(dfsm: &Dfsm) -> Dfsm {
    let reachable = dfsm.remove_unreachable_states();
    let partition = partition_refinement(&reachable);
    let class_of = Partition::class_indices(partition.classes());
    let class = |q: State| class_of.get(&q).map(|i| State::new(*i as u32));

    let mut edges = BTreeMap::new();
    for (i, members) in partition.classes().iter().enumerate() {
        let Some(representative) = members.first() else {
            continue;
        };
        for sym in reachable.alphabet().universe() {
            if let Some(target) = reachable.successor(*representative, sym).and_then(class) {
                edges.insert((State::new(i as u32), sym), target);
            }
        }
    }

    let states = (0..partition.len() as u32).map(State::new).collect();
    let accepting = reachable
        .accepting()
        .iter()
        .filter_map(|q| class(*q))
        .collect();
    let initial = class(reachable.initial()).unwrap_or(State::new(0));
    debug!(
        "minimized machine with {} states to {} states",
        dfsm.size(),
        partition.len()
    );

    Dfsm::from_parts(
        states,
        reachable.alphabet().clone(),
        TransitionFunction::from_map(edges),
        initial,
        accepting,
    )
    .to_canonic_form()
}

impl Dfsm {
    /// Returns the minimal equivalent machine, see [`minimize`].
    pub fn minimize(&self) -> Dfsm {
        minimize(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{partition_refinement, Partition};
    use crate::{tests::wiki_dfsm, Dfsm, State};

    fn class(ids: &[u32]) -> Vec<State> {
        ids.iter().copied().map(State::new).collect()
    }

    #[test]
    fn partition_refinement_wiki() {
        let dfsm = wiki_dfsm();
        let p = partition_refinement(&dfsm);
        assert_eq!(
            p,
            Partition::new([class(&[0, 1]), class(&[5]), class(&[2, 3, 4])])
        );
    }

    #[test_log::test]
    fn minimize_wiki() {
        let minimal = wiki_dfsm().minimize();
        assert_eq!(
            minimal.encode(),
            "0 1 2/0 1/0, 0, 0;0, 1, 1;1, 0, 1;1, 1, 2;2, 0, 2;2, 1, 2/0/1"
        );
        assert_eq!(minimal.minimize(), minimal);
    }

    #[test]
    fn missing_transitions_distinguish() {
        // 1 and 2 are both accepting, but only 1 can continue
        let dfsm: Dfsm = "0 1 2/a b/0,a,1;0,b,2;1,a,1/0/1 2".parse().unwrap();
        let minimal = dfsm.minimize();
        assert_eq!(minimal.size(), 3);
        assert!(minimal.compute("aa"));
        assert!(!minimal.compute("ba"));
    }

    #[test]
    fn unreachable_states_vanish() {
        let dfsm: Dfsm = "0 1 7/a/0,a,1;1,a,0;7,a,7/0/0 7".parse().unwrap();
        let minimal = dfsm.minimize();
        assert_eq!(minimal.size(), 2);
        assert_eq!(minimal.accepting().len(), 1);
    }
}
