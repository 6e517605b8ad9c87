use cfg_words::Grammar;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Breadth-first word generation and membership testing for context-free
/// grammars
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the grammar file
    #[arg(help = "Path to the grammar file")]
    grammar_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate words the grammar can derive
    Generate {
        #[arg(long, default_value = "8", help = "Longest word to derive")]
        max_length: usize,

        #[arg(long, default_value = "50", help = "Most words to list")]
        max_count: usize,
    },
    /// Test whether a word is derivable from the start symbol
    Check {
        #[arg(help = "Word to test")]
        word: String,
    },
    /// Write an example grammar file
    Example {
        #[arg(help = "Output file path")]
        output: Option<PathBuf>,
    },
}

const EXAMPLE_GRAMMAR: &str = "\
S -> aB | bA
A -> a | aS | bAA
B -> b | bS | aBB
";

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Example { output }) => {
            let output_path = output.unwrap_or_else(|| PathBuf::from("example_grammar.txt"));
            fs::write(&output_path, EXAMPLE_GRAMMAR)?;
            println!("Created example grammar at: {}", output_path.display());
        }
        Some(Commands::Generate {
            max_length,
            max_count,
        }) => {
            let grammar = load_grammar(cli.grammar_file)?;
            print_words(&grammar, max_length, max_count)?;
        }
        Some(Commands::Check { word }) => {
            let grammar = load_grammar(cli.grammar_file)?;
            if grammar.is_member(&word) {
                println!("'{}' belongs to the grammar", word);
            } else {
                println!("'{}' does NOT belong to the grammar", word);
            }
        }
        None => {
            let grammar = load_grammar(cli.grammar_file)?;
            print_grammar(&grammar);
            print_words(&grammar, 8, 50)?;
        }
    }

    Ok(())
}

fn load_grammar(path: Option<PathBuf>) -> Result<Grammar, Box<dyn Error>> {
    let path = path.ok_or("Grammar file path required")?;
    println!("Loading grammar from {}...\n", path.display());
    Ok(Grammar::from_file(&path)?)
}

fn print_grammar(grammar: &Grammar) {
    print!("{}", grammar);
    println!("Start symbol: {}", grammar.start_symbol());
    println!("Terminals: {{{}}}", join_chars(grammar.terminals()));
    println!("Non-terminals: {{{}}}\n", join_chars(grammar.non_terminals()));
}

fn print_words(grammar: &Grammar, max_length: usize, max_count: usize) -> Result<(), Box<dyn Error>> {
    let words = grammar.generate(max_length, max_count)?;
    println!("Generated {} words (max length {}):", words.len(), max_length);
    for (i, word) in words.iter().enumerate() {
        println!("{:2}. '{}'", i + 1, word);
    }
    Ok(())
}

fn join_chars(set: &BTreeSet<char>) -> String {
    set.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
