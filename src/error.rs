use std::fmt::Display;

use crate::{State, Symbol, Transition};

/// Represents the different types of error that can be encountered when building a
/// machine, either from its encoding or from its components. No machine is built if
/// one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsmError {
    /// The encoding does not match the grammar. Contains a report of what went wrong.
    MalformedEncoding(String),
    /// A transition, the initial state or an accepting state refers to something that the
    /// machine does not declare.
    InvalidReference(InvalidReference),
    /// The transitions cannot form a deterministic transition function.
    NonDeterminism(NonDeterminism),
}

/// Describes a reference to an undeclared state or symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReference {
    /// The given endpoint of a transition is not a state of the machine.
    State {
        /// The offending transition.
        transition: Transition,
        /// The endpoint which is not a member of the set of states.
        state: State,
    },
    /// The symbol of a transition is neither epsilon nor a member of the alphabet.
    Symbol(Transition),
    /// The initial state is not a state of the machine.
    Initial(State),
    /// An accepting state is not a state of the machine.
    Accepting(State),
}

/// Describes why a set of transitions is not a deterministic transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonDeterminism {
    /// Two transitions leave `state` on `symbol` towards different targets.
    Conflict {
        /// The common source of both transitions.
        state: State,
        /// The common symbol.
        symbol: char,
        /// Target of the first transition.
        first: State,
        /// Target of the second transition.
        second: State,
    },
    /// A deterministic machine cannot have epsilon transitions.
    Epsilon(Transition),
}

impl Display for FsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsmError::MalformedEncoding(report) => write!(f, "Malformed encoding: {report}"),
            FsmError::InvalidReference(reference) => write!(f, "Invalid reference: {reference}"),
            FsmError::NonDeterminism(reason) => write!(f, "Not deterministic: {reason}"),
        }
    }
}

impl Display for InvalidReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReference::State { transition, state } => {
                write!(f, "transition {transition} uses unknown state {state}")
            }
            InvalidReference::Symbol(transition) => {
                write!(
                    f,
                    "transition {transition} uses symbol {} which is not in the alphabet",
                    transition.symbol()
                )
            }
            InvalidReference::Initial(state) => {
                write!(f, "initial state {state} is not a state of the machine")
            }
            InvalidReference::Accepting(state) => {
                write!(f, "accepting state {state} is not a state of the machine")
            }
        }
    }
}

impl Display for NonDeterminism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonDeterminism::Conflict {
                state,
                symbol,
                first,
                second,
            } => write!(
                f,
                "state {state} has transitions on {} to both {first} and {second}",
                Symbol::Char(*symbol)
            ),
            NonDeterminism::Epsilon(transition) => {
                write!(f, "epsilon transition {transition}")
            }
        }
    }
}

impl std::error::Error for FsmError {}

impl From<InvalidReference> for FsmError {
    fn from(value: InvalidReference) -> Self {
        FsmError::InvalidReference(value)
    }
}

impl From<NonDeterminism> for FsmError {
    fn from(value: NonDeterminism) -> Self {
        FsmError::NonDeterminism(value)
    }
}
