use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
    str::FromStr,
};

use itertools::Itertools;

/// A state of a machine, identified by a non-negative integer which is unique within
/// the machine. Two states are equal if and only if their ids are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(u32);

/// An ordered set of states. Being ordered, sets of states can be compared, hashed and
/// encoded deterministically.
pub type StateSet = BTreeSet<State>;

impl State {
    /// Creates the state with the given id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the id of the state.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Encodes the state as its id.
    pub fn encode(&self) -> String {
        self.0.to_string()
    }

    /// Encodes the given states as their ids, separated by single spaces.
    pub fn encode_set<'a, I: IntoIterator<Item = &'a State>>(states: I) -> String {
        states.into_iter().map(State::encode).join(" ")
    }
}

impl From<u32> for State {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for State {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(State)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Renders a set of states in set notation, e.g. `{0, 1, 2}`.
pub(crate) fn show_set<'a, I: IntoIterator<Item = &'a State>>(states: I) -> String {
    format!("{{{}}}", states.into_iter().join(", "))
}

#[cfg(test)]
mod tests {
    use super::{show_set, State, StateSet};

    #[test]
    fn state_encoding() {
        let states: StateSet = [2, 0, 1].into_iter().map(State::new).collect();
        assert_eq!(State::encode_set(&states), "0 1 2");
        assert_eq!(show_set(&states), "{0, 1, 2}");
        assert_eq!(" 17 ".parse::<State>(), Ok(State::new(17)));
        assert!("x".parse::<State>().is_err());
    }
}
