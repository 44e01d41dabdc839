use std::fs;
use std::path::Path;
use std::process::exit;

use structopt::StructOpt;

use famin::equiv;
use famin::nfa::Nfa;
use famin::parser::{automaton_def, parse_exact, unwrap_nom};

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the total deterministic form of the automaton
    Determinize,
    /// Print the minimal deterministic form of the automaton
    Minimize,
    /// Decide whether the automaton accepts the same language as another
    Equiv { other: String },
    /// Write the automaton as a Graphviz dot file
    Dot {
        output: String,
        #[structopt(long)]
        with_sink: bool,
    },
}

#[derive(Debug, StructOpt)]
struct Opts {
    #[structopt(long)]
    file: String,
    #[structopt(subcommand)]
    command: Command,
}

fn read_file(path: &Path) -> Nfa {
    let content = fs::read_to_string(path).unwrap();
    let input = content.trim();
    let (_, def) = unwrap_nom(input, parse_exact(automaton_def, input));
    def.build().unwrap_or_else(|e| {
        eprintln!("{}: {}", path.display(), e);
        exit(1);
    })
}

fn main() {
    env_logger::init();
    let opts = Opts::from_args();
    let nfa = read_file(Path::new(&opts.file));
    match opts.command {
        Command::Determinize => {
            print!("{}", nfa.determinize());
        }
        Command::Minimize => {
            print!("{}", nfa.make_dfa());
        }
        Command::Equiv { other } => {
            let other = read_file(Path::new(&other));
            match equiv::equivalent(&nfa, &other) {
                Ok(result) => println!("{}", result),
                Err(e) => {
                    eprintln!("{}", e);
                    exit(1);
                }
            }
        }
        Command::Dot { output, with_sink } => {
            nfa.write_dot(Path::new(&output), !with_sink).unwrap()
        }
    };
}
