use clap::{Parser as ClapParser, Subcommand};
use fieldpath::cli::{self, CheckOptions, CliError, CompileOptions};
use std::io::{self, BufRead};

#[derive(ClapParser)]
#[command(name = "fieldpath")]
#[command(about = "fieldpath - Split payload field paths into steps and classify their precision")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile field paths and print their segments as JSON
    Compile {
        /// Paths to compile (reads one per line from stdin if not provided)
        paths: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Report whether a field path is precise or imprecise
    Check {
        /// The field path to classify
        path: String,

        /// Exit with an error if the path is imprecise
        #[arg(long)]
        precise: bool,
    },

    /// Show the path syntax reference
    Docs,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile { paths, pretty } => run_compile(paths, pretty),
        Commands::Check { path, precise } => {
            let options = CheckOptions {
                path,
                require_precise: precise,
            };
            cli::execute_check(&options).map(|result| println!("{}", result))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compile(paths: Vec<String>, pretty: bool) -> Result<(), CliError> {
    let paths = if paths.is_empty() && !atty::is(atty::Stream::Stdin) {
        read_paths(io::stdin().lock())?
    } else {
        paths
    };
    log::debug!("compiling {} path(s)", paths.len());

    let options = CompileOptions { paths, pretty };
    println!("{}", cli::execute_compile(&options)?);
    Ok(())
}

/// One path per non-blank line, trailing whitespace trimmed.
fn read_paths(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}
