use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;

use crate::utils::{GrammarError, Result};

/// An atomic element of the grammar alphabet, classified by letter case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A lowercase letter that appears verbatim in derived words
    Terminal(char),
    /// An uppercase letter standing for one of its productions
    NonTerminal(char),
}

impl Symbol {
    /// Classify a character by case; `None` for anything that is not an
    /// ASCII letter
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Symbol::Terminal(c))
        } else if c.is_ascii_uppercase() {
            Some(Symbol::NonTerminal(c))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Terminal(c) | Symbol::NonTerminal(c) => c,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

/// One right-hand-side alternative of a rewrite rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// The sequence of symbols in this alternative
    pub symbols: Vec<Symbol>,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

/// A context-free grammar over single-letter symbols.
///
/// Rules and their alternatives keep the order they were added in, so every
/// search over the grammar visits productions in a reproducible order.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// The rules mapping non-terminals to their alternatives
    rules: IndexMap<char, Vec<Production>>,
    /// The non-terminal derivations start from
    start_symbol: char,
    /// Every terminal appearing on a right-hand side
    terminals: BTreeSet<char>,
    /// Every non-terminal appearing as a rule key or on a right-hand side
    non_terminals: BTreeSet<char>,
}

impl Grammar {
    /// Create an empty grammar with the given start symbol
    pub fn new(start_symbol: char) -> Self {
        Grammar {
            rules: IndexMap::new(),
            start_symbol,
            terminals: BTreeSet::new(),
            non_terminals: BTreeSet::new(),
        }
    }

    /// Parse a grammar from text, one rule per line:
    ///
    /// ```text
    /// S -> aB | bA
    /// A -> a | aS | bAA
    /// B -> b | bS | aBB
    /// ```
    ///
    /// Blank lines and `#` comments are skipped. The left-hand side of the
    /// first rule becomes the start symbol; see [`Grammar::with_start`] to
    /// override it.
    pub fn parse(text: &str) -> Result<Self> {
        let rule_regex = Regex::new(r"^([A-Z])\s*->\s*(.*)$").unwrap();

        let mut grammar: Option<Grammar> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let captures = rule_regex
                .captures(trimmed)
                .ok_or_else(|| GrammarError::MalformedRule(trimmed.to_string()))?;
            let lhs = captures.get(1).unwrap().as_str().chars().next().unwrap();
            let alternatives = captures.get(2).unwrap().as_str();

            // The first left-hand side in the input is the start symbol.
            let grammar = grammar.get_or_insert_with(|| Grammar::new(lhs));
            for alternative in alternatives.split('|') {
                grammar.add_rule(lhs, alternative)?;
            }
        }

        grammar.ok_or(GrammarError::EmptyGrammar)
    }

    /// Load and parse a grammar from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse one alternative into a production
    pub fn parse_production(rule: char, alternative: &str) -> Result<Production> {
        let trimmed = alternative.trim();
        if trimmed.is_empty() {
            return Err(GrammarError::EmptyProduction(rule));
        }

        let mut symbols = Vec::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            let symbol =
                Symbol::from_char(c).ok_or(GrammarError::InvalidSymbol { rule, symbol: c })?;
            symbols.push(symbol);
        }

        Ok(Production { symbols })
    }

    /// Add one alternative for a non-terminal, keeping the derived terminal
    /// and non-terminal sets up to date
    pub fn add_rule(&mut self, non_terminal: char, alternative: &str) -> Result<&mut Self> {
        if !non_terminal.is_ascii_uppercase() {
            return Err(GrammarError::InvalidSymbol {
                rule: non_terminal,
                symbol: non_terminal,
            });
        }

        let production = Self::parse_production(non_terminal, alternative)?;

        self.non_terminals.insert(non_terminal);
        for symbol in &production.symbols {
            match symbol {
                Symbol::Terminal(c) => self.terminals.insert(*c),
                Symbol::NonTerminal(c) => self.non_terminals.insert(*c),
            };
        }

        self.rules.entry(non_terminal).or_default().push(production);
        Ok(self)
    }

    /// Override the start symbol derived from the first rule.
    ///
    /// Fails if the symbol has no rules of its own.
    pub fn with_start(mut self, start_symbol: char) -> Result<Self> {
        if !self.rules.contains_key(&start_symbol) {
            return Err(GrammarError::UnknownNonTerminal(start_symbol));
        }
        self.start_symbol = start_symbol;
        Ok(self)
    }

    /// All one-step expansions of a sentential form: the leftmost
    /// non-terminal replaced by each of its productions in declaration
    /// order. A terminal-only form has no expansions, and neither has a
    /// form whose leftmost non-terminal lacks rules.
    pub(crate) fn expansions(&self, form: &[Symbol]) -> Vec<Vec<Symbol>> {
        let leftmost = form.iter().enumerate().find_map(|(at, symbol)| match symbol {
            Symbol::NonTerminal(name) => Some((at, *name)),
            Symbol::Terminal(_) => None,
        });
        let (at, name) = match leftmost {
            Some(found) => found,
            None => return Vec::new(),
        };

        self.productions_of(name)
            .iter()
            .map(|production| {
                let mut next = Vec::with_capacity(form.len() + production.symbols.len() - 1);
                next.extend_from_slice(&form[..at]);
                next.extend_from_slice(&production.symbols);
                next.extend_from_slice(&form[at + 1..]);
                next
            })
            .collect()
    }

    /// Get a reference to the grammar's rules, in input order
    pub fn rules(&self) -> &IndexMap<char, Vec<Production>> {
        &self.rules
    }

    /// The alternatives registered for a non-terminal; empty for
    /// non-terminals that only ever appear on a right-hand side
    pub fn productions_of(&self, non_terminal: char) -> &[Production] {
        self.rules
            .get(&non_terminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the start symbol
    pub fn start_symbol(&self) -> char {
        self.start_symbol
    }

    /// The terminal alphabet, sorted
    pub fn terminals(&self) -> &BTreeSet<char> {
        &self.terminals
    }

    /// The non-terminal alphabet, sorted
    pub fn non_terminals(&self) -> &BTreeSet<char> {
        &self.non_terminals
    }

    /// Check if the grammar has rules for a specific non-terminal
    pub fn has_non_terminal(&self, name: char) -> bool {
        self.rules.contains_key(&name)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (non_terminal, productions) in &self.rules {
            let alternatives = productions
                .iter()
                .map(|production| production.to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{} -> {}", non_terminal, alternatives)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "S -> aB | bA\nA -> a | aS | bAA\nB -> b | bS | aBB";

    #[test]
    fn test_parse_production() {
        let production = Grammar::parse_production('S', "aB").unwrap();

        assert_eq!(production.symbols.len(), 2);

        match production.symbols[0] {
            Symbol::Terminal(c) => assert_eq!(c, 'a'),
            _ => panic!("Expected Terminal"),
        }

        match production.symbols[1] {
            Symbol::NonTerminal(c) => assert_eq!(c, 'B'),
            _ => panic!("Expected NonTerminal"),
        }
    }

    #[test]
    fn test_parse_example_grammar() {
        let grammar = Grammar::parse(EXAMPLE).unwrap();

        assert_eq!(grammar.start_symbol(), 'S');
        assert_eq!(grammar.rules().len(), 3);
        assert_eq!(grammar.productions_of('A').len(), 3);
        assert_eq!(grammar.terminals().iter().collect::<Vec<_>>(), [&'a', &'b']);
        assert_eq!(
            grammar.non_terminals().iter().collect::<Vec<_>>(),
            [&'A', &'B', &'S']
        );
    }

    #[test]
    fn test_rule_and_alternative_order_preserved() {
        let grammar = Grammar::parse("Z -> ab\nA -> b\nZ -> ba").unwrap();

        let keys: Vec<char> = grammar.rules().keys().copied().collect();
        assert_eq!(keys, ['Z', 'A']);

        let alternatives: Vec<String> = grammar
            .productions_of('Z')
            .iter()
            .map(|production| production.to_string())
            .collect();
        assert_eq!(alternatives, ["ab", "ba"]);
    }

    #[test]
    fn test_blank_lines_and_comments_skipped() {
        let grammar = Grammar::parse("# words over a\n\nS -> a | aS\n").unwrap();
        assert_eq!(grammar.rules().len(), 1);
    }

    #[test]
    fn test_missing_arrow_is_malformed() {
        let result = Grammar::parse("S => a");
        assert!(matches!(result, Err(GrammarError::MalformedRule(_))));
    }

    #[test]
    fn test_non_letter_is_invalid_symbol() {
        let result = Grammar::parse("S -> a1");
        assert!(matches!(
            result,
            Err(GrammarError::InvalidSymbol { rule: 'S', symbol: '1' })
        ));
    }

    #[test]
    fn test_empty_input_is_empty_grammar() {
        assert!(matches!(Grammar::parse(""), Err(GrammarError::EmptyGrammar)));
        assert!(matches!(
            Grammar::parse("# nothing but a comment\n"),
            Err(GrammarError::EmptyGrammar)
        ));
    }

    #[test]
    fn test_empty_alternative_rejected() {
        let result = Grammar::parse("S -> a |");
        assert!(matches!(result, Err(GrammarError::EmptyProduction('S'))));
    }

    #[test]
    fn test_undefined_non_terminal_is_not_fatal() {
        let grammar = Grammar::parse("S -> aB").unwrap();
        assert!(grammar.non_terminals().contains(&'B'));
        assert!(!grammar.has_non_terminal('B'));
        assert!(grammar.productions_of('B').is_empty());
    }

    #[test]
    fn test_start_symbol_override() {
        let grammar = Grammar::parse(EXAMPLE).unwrap().with_start('B').unwrap();
        assert_eq!(grammar.start_symbol(), 'B');

        let missing = Grammar::parse(EXAMPLE).unwrap().with_start('X');
        assert!(matches!(missing, Err(GrammarError::UnknownNonTerminal('X'))));
    }

    #[test]
    fn test_display_round_trips() {
        let grammar = Grammar::parse(EXAMPLE).unwrap();
        let reparsed = Grammar::parse(&grammar.to_string()).unwrap();
        assert_eq!(reparsed.to_string(), grammar.to_string());
    }

    #[test]
    fn test_expansions_substitute_leftmost_only() {
        let grammar = Grammar::parse(EXAMPLE).unwrap();
        let form = vec![
            Symbol::Terminal('a'),
            Symbol::NonTerminal('B'),
            Symbol::NonTerminal('B'),
        ];

        let next: Vec<String> = grammar
            .expansions(&form)
            .iter()
            .map(|f| f.iter().map(|s| s.as_char()).collect())
            .collect();
        assert_eq!(next, ["abB", "abSB", "aaBBB"]);
    }
}
