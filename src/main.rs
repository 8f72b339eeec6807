// SPDX-License-Identifier: PMPL-1.0-or-later

//! palavra: English to Portuguese vocabulary lookup
//!
//! Translates one word per invocation, taken from the command line or from
//! one line of standard input. Unknown words print a fixed fallback string
//! and still exit successfully.

use anyhow::Result;
use clap::Parser;
use colored::*;
use palavra::output::{OutputFormat, Translation};
use palavra::vocab;
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Parser)]
#[command(name = "palavra")]
#[command(version)]
#[command(about = "English to Portuguese vocabulary lookup")]
#[command(long_about = None)]
struct Cli {
    /// Word to translate; read from standard input when omitted
    #[arg(value_name = "WORD")]
    word: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the vocabulary table and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        print_vocabulary();
        return Ok(());
    }

    let word = match cli.word {
        Some(word) => word,
        None => read_word()?,
    };

    let result = Translation::of(&word);
    println!("{}", cli.format.serialize(&result)?);

    Ok(())
}

/// Read one line from standard input. The prompt goes to stderr, and only
/// when stdin is a terminal, so piped stdout is exactly the result.
fn read_word() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Enter word: ");
        io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    // strip the line terminator only; other whitespace stays and may miss
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(line.to_string())
}

fn print_vocabulary() {
    println!("{}", "VOCABULARY".bold().yellow());
    for (word, translation) in vocab::entries() {
        println!("  {:10} {}", word.bold(), translation);
    }
    println!();
    println!("  Entries: {}", vocab::entries().len());
    println!("  Fallback: {}", vocab::FALLBACK);
}
