use std::io;
use thiserror::Error;

/// Custom error types for grammar construction and the search bounds
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed rule (expected `A -> aB | b`): {0}")]
    MalformedRule(String),

    #[error("Invalid symbol '{symbol}' in rule for '{rule}'")]
    InvalidSymbol { rule: char, symbol: char },

    #[error("Empty alternative in rule for '{0}'")]
    EmptyProduction(char),

    #[error("Grammar contains no rules")]
    EmptyGrammar,

    #[error("Unknown non-terminal: {0}")]
    UnknownNonTerminal(char),

    #[error("Invalid limit: {0} must be at least 1")]
    InvalidLimit(&'static str),
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;
