//! Input symbols and alphabets.
use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::{FsmError, Set};

/// The label of a transition. This is either one of the characters of an [`Alphabet`]
/// or the special [`Symbol::Epsilon`], which labels transitions that can be taken without
/// reading any input.
///
/// The derived order places [`Symbol::Epsilon`] before all characters, which is the order
/// in which traversals over a machine consider the outgoing transitions of a state.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// The empty word, never a member of an alphabet.
    Epsilon,
    /// A single input character.
    Char(char),
}

impl Symbol {
    /// Returns the character of this symbol, or `None` for [`Symbol::Epsilon`].
    pub fn char(&self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(*c),
        }
    }

    /// Returns true if and only if this is [`Symbol::Epsilon`].
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Encodes the symbol for use in the symbol position of an encoded transition. The
    /// encoding of [`Symbol::Epsilon`] is empty.
    pub fn encode(&self) -> String {
        self.char().map(String::from).unwrap_or_default()
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::Char(value)
    }
}

impl From<Option<char>> for Symbol {
    fn from(value: Option<char>) -> Self {
        value.map(Symbol::Char).unwrap_or(Symbol::Epsilon)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// An ordered collection of distinct characters. The order in which the symbols were
/// declared is preserved and determines the order of iteration.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Creates a new [`Alphabet`] from the given symbols, failing if a symbol occurs
    /// more than once.
    pub fn new<I>(symbols: I) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut seen = Set::default();
        let mut out = Vec::new();
        for sym in symbols {
            if !seen.insert(sym) {
                return Err(FsmError::MalformedEncoding(format!(
                    "symbol {sym} occurs more than once in the alphabet"
                )));
            }
            out.push(sym);
        }
        Ok(Self(out))
    }

    /// Returns an iterator over the symbols of the alphabet, in declaration order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Iterates over [`Symbol::Epsilon`] followed by every symbol of the alphabet.
    pub fn with_epsilon(&self) -> impl Iterator<Item = Symbol> + '_ {
        std::iter::once(Symbol::Epsilon).chain(self.universe().map(Symbol::Char))
    }

    /// Returns true if the given character is a member of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Checks whether the given [`Symbol`] may label a transition of a machine over this
    /// alphabet, which is the case for [`Symbol::Epsilon`] and all members.
    pub fn admits(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::Epsilon => true,
            Symbol::Char(c) => self.contains(c),
        }
    }

    /// The number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the alphabet as its symbols separated by single spaces.
    pub fn encode(&self) -> String {
        self.0.iter().join(" ")
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
