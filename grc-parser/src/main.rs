use std::io::{self, BufRead};

use clap::Parser;
use grc_parser_lib::{resolve, suggest, Lexicon};

#[derive(Parser)]
#[command(name = "grc-parser", about = "Ancient Greek verb-form resolver")]
struct Cli {
    /// Verb form to resolve. If omitted, reads from stdin.
    input: Option<String>,

    /// Output a one-line human-readable gloss instead of JSON.
    #[arg(long)]
    gloss: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Treat the input as an autocomplete partial and print suggestions.
    #[arg(long)]
    suggest: bool,
}

fn main() {
    let cli = Cli::parse();
    let lexicon = Lexicon::new();

    match cli.input {
        Some(ref text) => process_line(text, &lexicon, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(&line, &lexicon, &cli);
                }
            }
        }
    }
}

fn process_line(line: &str, lexicon: &Lexicon, cli: &Cli) {
    // Trailing sentence punctuation (Greek question mark and ano teleia
    // included) is not part of the form.
    let word = line
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ';' | '·' | ','));

    if cli.suggest {
        let suggestions = suggest(word, lexicon);
        if cli.gloss {
            println!("{}", suggestions.join(", "));
        } else {
            print_json(&suggestions, cli.pretty);
        }
        return;
    }

    let parse = resolve(word, lexicon);
    if cli.gloss {
        match parse {
            Some(ref p) => println!("{}", grc_parser_lib::output::describe(p)),
            None => println!("{word}: (no parse)"),
        }
    } else {
        print_json(&parse, cli.pretty);
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.expect("JSON serialization failed"));
}
