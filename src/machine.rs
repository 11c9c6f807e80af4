use std::str::FromStr;

use tracing::trace;

use crate::{
    encoding::RawEncoding, Alphabet, FsmError, InvalidReference, State, StateSet, Symbol,
    Transition, TransitionFunction, TransitionMapping, TransitionRelation,
};

/// A finite state machine over a single-character [`Alphabet`], consisting of a set of
/// states, a transition mapping `M`, an initial state and a set of accepting states.
///
/// Machines are immutable, every transformation returns a new machine. The two
/// instantiations are [`Ndfsm`] and [`Dfsm`].
#[derive(Clone, PartialEq)]
pub struct Machine<M: TransitionMapping> {
    states: StateSet,
    alphabet: Alphabet,
    transitions: M,
    initial: State,
    accepting: StateSet,
}

/// A non-deterministic finite state machine, which may have epsilon transitions.
pub type Ndfsm = Machine<TransitionRelation>;

/// A deterministic finite state machine, every state has at most one successor on every
/// symbol.
pub type Dfsm = Machine<TransitionFunction>;

impl<M: TransitionMapping> Machine<M> {
    /// Builds a machine from its components.
    ///
    /// Fails if the initial state or one of the accepting states is not a member of
    /// `states`, if a transition refers to an unknown state or symbol, or if the
    /// transitions do not satisfy the invariant of `M` (for a [`Dfsm`], at most one target
    /// per state and symbol and no epsilon transitions).
    pub fn new<I: IntoIterator<Item = Transition>>(
        states: StateSet,
        alphabet: Alphabet,
        transitions: I,
        initial: State,
        accepting: StateSet,
    ) -> Result<Self, FsmError> {
        if !states.contains(&initial) {
            return Err(InvalidReference::Initial(initial).into());
        }
        if let Some(q) = accepting.iter().find(|q| !states.contains(q)) {
            return Err(InvalidReference::Accepting(*q).into());
        }
        let transitions = M::from_transitions(transitions)?;
        transitions.verify(&states, &alphabet)?;
        Ok(Self::from_parts(
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        ))
    }

    /// Assembles a machine from components that are already known to be consistent.
    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: Alphabet,
        transitions: M,
        initial: State,
        accepting: StateSet,
    ) -> Self {
        debug_assert!(states.contains(&initial));
        debug_assert!(accepting.is_subset(&states));
        debug_assert!(transitions.verify(&states, &alphabet).is_ok());
        Self {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        }
    }

    /// Returns the set of states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the transition mapping.
    pub fn transitions(&self) -> &M {
        &self.transitions
    }

    /// Returns the initial state.
    pub fn initial(&self) -> State {
        self.initial
    }

    /// Returns the set of accepting states.
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Returns true if the given state is accepting.
    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    /// Returns the states reachable from `state` on `symbol` in exactly one step.
    pub fn at(&self, state: State, symbol: Symbol) -> M::Targets<'_> {
        self.transitions.at(state, symbol)
    }

    /// Encodes the machine in the format that is accepted by [`FromStr`], i.e.
    ///
    /// ```text
    /// <states>/<alphabet>/<transitions>/<initial state>/<accepting states>
    /// ```
    pub fn encode(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            State::encode_set(&self.states),
            self.alphabet.encode(),
            self.transitions.encode(),
            self.initial.encode(),
            State::encode_set(&self.accepting)
        )
    }

    /// Builds the machine that keeps exactly the states for which `f` returns `Some`,
    /// renamed to the returned state. `f` must be injective on kept states and keep the
    /// initial state.
    pub(crate) fn filter_map_states<F>(&self, f: F) -> Self
    where
        F: Fn(State) -> Option<State>,
    {
        let states = self.states.iter().filter_map(|q| f(*q)).collect();
        let accepting = self.accepting.iter().filter_map(|q| f(*q)).collect();
        let transitions = self.transitions.filter_map_states(&f);
        let initial = f(self.initial).unwrap_or(self.initial);
        Self::from_parts(
            states,
            self.alphabet.clone(),
            transitions,
            initial,
            accepting,
        )
    }
}

impl<M: TransitionMapping> TryFrom<RawEncoding> for Machine<M> {
    type Error = FsmError;

    /// Ids are taken as they are, references to undeclared states are reported by the
    /// checks of [`Machine::new`].
    fn try_from(raw: RawEncoding) -> Result<Self, Self::Error> {
        let states: StateSet = raw.states.iter().copied().map(State::new).collect();
        let alphabet = Alphabet::new(raw.alphabet)?;
        let transitions = raw
            .transitions
            .iter()
            .map(|(from, symbol, to)| {
                Transition::new(State::new(*from), *symbol, State::new(*to))
            })
            .collect::<Vec<_>>();
        let accepting = raw.accepting.iter().copied().map(State::new).collect();

        trace!(
            "read encoding with {} states and {} transitions",
            states.len(),
            transitions.len()
        );
        Self::new(
            states,
            alphabet,
            transitions,
            State::new(raw.initial),
            accepting,
        )
    }
}

impl<M: TransitionMapping> TryFrom<&str> for Machine<M> {
    type Error = FsmError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(RawEncoding::try_from(value)?)
    }
}

impl<M: TransitionMapping> FromStr for Machine<M> {
    type Err = FsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Dfsm {
    /// Returns the unique successor of `state` on `symbol`, if it exists.
    pub fn successor(&self, state: State, symbol: char) -> Option<State> {
        self.transitions.successor(state, symbol)
    }

    /// Runs the machine on `input` and returns whether it ends in an accepting state. A
    /// symbol without a transition (for instance one that is not in the alphabet) rejects.
    pub fn compute(&self, input: &str) -> bool {
        input
            .chars()
            .try_fold(self.initial, |q, c| self.successor(q, c))
            .is_some_and(|q| self.is_accepting(q))
    }
}

impl Ndfsm {
    /// Runs the machine on `input` by tracking the set of all states it can be in, and
    /// returns whether that set contains an accepting state at the end.
    pub fn compute(&self, input: &str) -> bool {
        let closures = self.epsilon_closures();
        let mut current = closures.closure_of(self.initial).clone();
        for c in input.chars() {
            if !self.alphabet.contains(c) {
                return false;
            }
            let step = current
                .iter()
                .flat_map(|q| self.transitions.at(*q, Symbol::Char(c)));
            current = closures.close(step);
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|q| self.is_accepting(*q))
    }
}

impl From<Dfsm> for Ndfsm {
    fn from(value: Dfsm) -> Self {
        let transitions = value.transitions.transitions().collect();
        Self::from_parts(
            value.states,
            value.alphabet,
            transitions,
            value.initial,
            value.accepting,
        )
    }
}
