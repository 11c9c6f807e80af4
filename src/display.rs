use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;
use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};

use crate::{state::show_set, Machine, TransitionMapping};

impl<M: TransitionMapping> Machine<M> {
    /// Writes the set notation of this machine (see the [`Display`] implementation) to
    /// `out`.
    pub fn pretty_print<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Renders the transitions as a table with one row per state and one column per
    /// symbol. The initial state is underlined, accepting states are green. An epsilon
    /// column is only shown if there are epsilon transitions.
    pub fn transition_table(&self) -> String {
        let has_epsilon = self.transitions().transitions().any(|t| t.symbol().is_epsilon());
        let symbols = self
            .alphabet()
            .with_epsilon()
            .filter(|sym| has_epsilon || !sym.is_epsilon())
            .collect_vec();

        let mut builder = Builder::default();
        builder.push_record(
            std::iter::once(M::PRETTY_NAME.bright_yellow().to_string())
                .chain(symbols.iter().map(|sym| sym.purple().to_string())),
        );
        for &state in self.states() {
            let label = match (state == self.initial(), self.is_accepting(state)) {
                (true, true) => state.green().underline().to_string(),
                (true, false) => state.underline().to_string(),
                (false, true) => state.green().to_string(),
                (false, false) => state.to_string(),
            };
            let mut row = vec![label];
            for &sym in &symbols {
                let targets = self.at(state, sym).collect_vec();
                row.push(match targets.as_slice() {
                    [] => "⊥".dimmed().to_string(),
                    [target] => target.to_string(),
                    _ => show_set(&targets),
                });
            }
            builder.push_record(row);
        }
        let mut transition_table = builder.build();
        transition_table.with(Style::modern());
        transition_table.to_string()
    }
}

/// Displays the machine as its formal description, i.e. the set of states `K`, the
/// alphabet `Σ`, the transitions, the initial state `s` and the accepting states `A`.
impl<M: TransitionMapping> Display for Machine<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "K = {}", show_set(self.states()))?;
        writeln!(f, "Σ = {}", self.alphabet())?;
        writeln!(f, "{} = {}", M::PRETTY_NAME, self.transitions().pretty())?;
        writeln!(f, "s = {}", self.initial())?;
        write!(f, "A = {}", show_set(self.accepting()))
    }
}

impl<M: TransitionMapping> Debug for Machine<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Initial state {} with table\n{}",
            self.initial(),
            self.transition_table()
        )
    }
}
