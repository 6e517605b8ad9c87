use std::collections::{HashSet, VecDeque};

use crate::grammar::{Grammar, Symbol};

impl Grammar {
    /// Decide whether `word` is derivable from the start symbol.
    ///
    /// The search never expands a sentential form past `word.len()`
    /// symbols, and drops any form whose leading terminal run already
    /// disagrees with `word`, so it always terminates. Queue exhaustion is
    /// the ordinary "not a member" outcome.
    pub fn is_member(&self, word: &str) -> bool {
        // No epsilon productions means no derivation ever shrinks, so the
        // empty word is never derivable.
        if word.is_empty() {
            return false;
        }

        // A word using letters outside this grammar's own terminal
        // alphabet cannot be derived; skip the search entirely.
        let target: Vec<char> = word.chars().collect();
        if !target.iter().all(|c| self.terminals().contains(c)) {
            return false;
        }

        let start = vec![Symbol::NonTerminal(self.start_symbol())];
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        queue.push_back(start);

        while let Some(form) = queue.pop_front() {
            if form.iter().all(|symbol| symbol.is_terminal()) {
                if form.len() == target.len()
                    && form
                        .iter()
                        .zip(&target)
                        .all(|(symbol, c)| symbol.as_char() == *c)
                {
                    return true;
                }
                continue;
            }

            for next in self.expansions(&form) {
                if next.len() > target.len() || !prefix_matches(&next, &target) {
                    continue;
                }
                if !visited.contains(&next) {
                    visited.insert(next.clone());
                    queue.push_back(next);
                }
            }
        }

        false
    }
}

/// Whether the leading terminal run of a sentential form agrees with the
/// target word position by position. Symbols after the first non-terminal
/// have no fixed position yet and are not checked.
fn prefix_matches(form: &[Symbol], target: &[char]) -> bool {
    for (at, symbol) in form.iter().enumerate() {
        match symbol {
            Symbol::Terminal(c) => {
                if target.get(at) != Some(c) {
                    return false;
                }
            }
            Symbol::NonTerminal(_) => break,
        }
    }
    true
}
