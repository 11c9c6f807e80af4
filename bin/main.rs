use std::fmt::Write;

use clap::Parser;
use cli::{Commands, Fsm};
use fsm::{Dfsm, Machine, TransitionMapping};
use tracing::{info, Level};

mod cli;
mod io;

fn show<M: TransitionMapping>(machine: &Machine<M>, table: bool) -> String {
    if table {
        machine.transition_table()
    } else {
        machine.to_string()
    }
}

fn convert(encoding: &str, dfsm: &Dfsm, minimize: bool, table: bool) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "NDFSM encoding:\n{encoding}")?;
    writeln!(out, "\nDFSM:\n{}", show(dfsm, table))?;
    let result = if minimize {
        let minimal = dfsm.minimize();
        info!(
            "Minimization reduced {} states to {}",
            dfsm.size(),
            minimal.size()
        );
        writeln!(out, "\nAfter DFSM minimization:\n{}", show(&minimal, table))?;
        minimal
    } else {
        dfsm.clone()
    };
    writeln!(out, "\nDFSM encoding:\n{}\n", result.encode())?;
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let args = Fsm::parse();

    let level = if args.verbose {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Convert {
            io: files,
            minimize,
            table,
        } => {
            let mut output = String::new();
            for (encoding, ndfsm) in io::ndfsms(files.input.as_ref())? {
                let dfsm = ndfsm.to_dfsm();
                info!(
                    "Converted NDFSM with {} states into DFSM with {} states",
                    ndfsm.size(),
                    dfsm.size()
                );
                output.push_str(&convert(&encoding, &dfsm, minimize, table)?);
            }
            io::to_file_or_stdout(files.output.as_ref(), &output)
        }
        Commands::Canonic { io: files } => {
            let output: String = io::ndfsms(files.input.as_ref())?
                .into_iter()
                .map(|(_, ndfsm)| format!("{}\n", ndfsm.to_canonic_form().encode()))
                .collect();
            io::to_file_or_stdout(files.output.as_ref(), &output)
        }
        Commands::Reachable { io: files } => {
            let output: String = io::ndfsms(files.input.as_ref())?
                .into_iter()
                .map(|(_, ndfsm)| format!("{}\n", ndfsm.remove_unreachable_states().encode()))
                .collect();
            io::to_file_or_stdout(files.output.as_ref(), &output)
        }
        Commands::Accepts { input, words } => {
            let mut output = String::new();
            for (encoding, ndfsm) in io::ndfsms(input.as_ref())? {
                writeln!(output, "{encoding}")?;
                for word in &words {
                    let verdict = if ndfsm.compute(word) {
                        "accepted"
                    } else {
                        "rejected"
                    };
                    writeln!(output, "{word:?}: {verdict}")?;
                }
            }
            io::to_file_or_stdout(None, &output)
        }
    }
}
