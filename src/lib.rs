//! Cfg-words enumerates and recognizes the words of a context-free grammar.
//!
//! Grammars are written one rule per line as `S -> aB | bA`, with uppercase
//! letters as non-terminals and lowercase letters as terminals. Both the
//! word enumerator and the membership test run a bounded breadth-first
//! search over sentential forms, so identical inputs always produce
//! identical, reproducible results.
//!
//! # Example
//!
//! ```rust
//! use cfg_words::Grammar;
//!
//! let grammar = Grammar::parse("S -> aB | bA\nA -> a | aS | bAA\nB -> b | bS | aBB")?;
//!
//! let words = grammar.generate(4, 10)?;
//! assert!(words.contains(&"ab".to_string()));
//!
//! assert!(grammar.is_member("ab"));
//! assert!(!grammar.is_member("aa"));
//! # Ok::<(), cfg_words::GrammarError>(())
//! ```

pub mod generate;
pub mod grammar;
pub mod member;
pub mod utils;

pub use generate::Words;
pub use grammar::{Grammar, Production, Symbol};
pub use utils::{GrammarError, Result};
