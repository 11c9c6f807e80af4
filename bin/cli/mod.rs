use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Fsm {
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "debug",
        help = "Enable verbose logging"
    )]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Turn on debugging information")]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Where encodings are read from and results are written to, defaulting to stdin and
/// stdout.
#[derive(Args)]
pub struct Io {
    #[arg(short, long, help = "File with one encoding per line")]
    pub input: Option<String>,
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Converts each NDFSM encoding into an equivalent DFSM")]
    Convert {
        #[command(flatten)]
        io: Io,
        #[arg(short, long, help = "Also print the minimized DFSM")]
        minimize: bool,
        #[arg(short, long, help = "Print transition tables instead of set notation")]
        table: bool,
    },
    #[command(about = "Renumbers the states of each NDFSM in discovery order")]
    Canonic {
        #[command(flatten)]
        io: Io,
    },
    #[command(about = "Removes the states that cannot be reached from the initial state")]
    Reachable {
        #[command(flatten)]
        io: Io,
    },
    #[command(about = "Decides for each word whether the NDFSM accepts it")]
    Accepts {
        #[arg(short, long)]
        input: Option<String>,
        words: Vec<String>,
    },
}
