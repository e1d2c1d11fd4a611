//! doc2html - render editor JSON chapter content as HTML.
//!
//! Reads a Plate-style JSON document from a file or stdin and prints the
//! HTML form the content store persists.

use clap::Parser;
use parchment_core::document_to_html;
use parchment_core::error::Result;
use parchment_core::json::document_from_json;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Render an editor JSON document as HTML.
#[derive(Parser, Debug)]
#[command(name = "doc2html")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON document; reads stdin when omitted
    file: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short = 'o', long = "outfile")]
    outfile: Option<PathBuf>,
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
    let value: serde_json::Value = serde_json::from_str(&input)?;
    let doc = document_from_json(&value);
    write_output(args.outfile.as_deref(), &document_to_html(&doc))
}
