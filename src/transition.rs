use std::fmt::{Debug, Display};

use crate::{State, Symbol};

/// An immutable transition from one [`State`] to another on a [`Symbol`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    from: State,
    symbol: Symbol,
    to: State,
}

impl Transition {
    /// Creates a new transition.
    pub fn new<S: Into<Symbol>>(from: State, symbol: S, to: State) -> Self {
        Self {
            from,
            symbol: symbol.into(),
            to,
        }
    }

    /// The source of the transition.
    pub fn from_state(&self) -> State {
        self.from
    }

    /// The label of the transition.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The target of the transition.
    pub fn to_state(&self) -> State {
        self.to
    }

    /// Encodes the transition as `from, symbol, to`, leaving the symbol position empty
    /// for epsilon transitions.
    pub fn encode(&self) -> String {
        format!("{}, {}, {}", self.from, self.symbol.encode(), self.to)
    }
}

impl From<(u32, Option<char>, u32)> for Transition {
    fn from((from, symbol, to): (u32, Option<char>, u32)) -> Self {
        Self::new(State::new(from), symbol, State::new(to))
    }
}

impl From<(u32, char, u32)> for Transition {
    fn from((from, symbol, to): (u32, char, u32)) -> Self {
        Self::new(State::new(from), symbol, State::new(to))
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.symbol, self.to)
    }
}

impl Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
