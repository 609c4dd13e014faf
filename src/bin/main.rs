use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use lox_front::lox::Lox;
use std::{
    io,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "lox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize or parse a Lox expression", long_about = None)]
struct Cli {
    /// Log scanner and parser activity to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every token in the file, one per line
    Tokenize {
        file: PathBuf,
    },
    /// Parse the file as a single expression and print its tree
    Parse {
        file: PathBuf,
    },
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        },
    }
}

fn run(command: Command) -> Result<i32> {
    let mut lox = Lox::new(io::stdout(), io::stderr());

    let status = match command {
        Command::Tokenize { file } => lox.tokenize(&read(&file)?)?,
        Command::Parse { file } => lox.parse(&read(&file)?)?,
    };

    Ok(status)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))
}
