use cfg_words::Grammar;
use std::error::Error;

/// Build a grammar programmatically and enumerate its shortest words
fn main() -> Result<(), Box<dyn Error>> {
    // Balanced pairs: every word has its p's and q's properly nested.
    let mut grammar = Grammar::new('S');
    grammar.add_rule('S', "pq")?;
    grammar.add_rule('S', "pSq")?;
    grammar.add_rule('S', "SS")?;

    println!("Balanced words up to length 6:");
    for (i, word) in grammar.words(6, 20)?.enumerate() {
        println!("{:2}. {}", i + 1, word);
    }

    Ok(())
}
