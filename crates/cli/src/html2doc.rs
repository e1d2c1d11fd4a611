//! html2doc - parse persisted chapter HTML back into editor JSON.
//!
//! Reads HTML from a file or stdin and prints the document tree as
//! pretty-printed editor JSON, or as plain text with --text.

use clap::{ArgAction, Parser};
use parchment_core::error::Result;
use parchment_core::json::document_to_json;
use parchment_core::{html_to_document, plain_text};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Parse persisted HTML into an editor JSON document.
#[derive(Parser, Debug)]
#[command(name = "html2doc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an HTML file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short = 'o', long = "outfile")]
    outfile: Option<PathBuf>,

    /// Print the flattened plain text instead of JSON
    #[arg(short = 't', long = "text", action = ArgAction::SetTrue)]
    text: bool,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = read_input(args.file.as_deref())?;
    let doc = html_to_document(&input);
    let output = if args.text {
        plain_text(&doc)
    } else {
        serde_json::to_string_pretty(&document_to_json(&doc))?
    };
    write_output(args.outfile.as_deref(), &output)
}
