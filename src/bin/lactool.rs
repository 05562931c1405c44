use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use lacinka::latinize;
use lacinka::trace_init;
use lacinka::translit::explain;

#[derive(Parser)]
#[command(name = "lactool", about = "Łacinka conversion and diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text given as an argument, or stdin when omitted
    Convert {
        /// Text to convert; reads stdin to EOF when absent
        text: Option<String>,
    },

    /// Convert a whole file
    File {
        /// Path to the input file (UTF-8)
        input: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the per-character rule trace for a text
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

fn read_stdin() -> Result<String, ToolError> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn read_file(path: &Path) -> Result<String, ToolError> {
    Ok(String::from_utf8(fs::read(path)?)?)
}

fn run(command: Command) -> Result<(), ToolError> {
    match command {
        Command::Convert { text } => match text {
            Some(text) => println!("{}", latinize(&text)),
            None => {
                // stdin keeps its own line structure; don't add a newline
                print!("{}", latinize(&read_stdin()?));
            }
        },

        Command::File { input, output } => {
            let converted = latinize(&read_file(&input)?);
            match output {
                Some(path) => fs::write(path, converted)?,
                None => io::stdout().write_all(converted.as_bytes())?,
            }
        }

        Command::Explain { text, json } => {
            let result = explain::explain(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                print!("{}", explain::format_text(&result));
            }
        }
    }

    Ok(())
}

fn main() {
    trace_init::init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        process::exit(1);
    }
}
