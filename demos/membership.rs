use cfg_words::Grammar;
use std::error::Error;

/// Parse a grammar from text and test a few candidate words
fn main() -> Result<(), Box<dyn Error>> {
    // Derives exactly the nonempty words with as many a's as b's.
    let grammar = Grammar::parse(
        "S -> aB | bA\n\
         A -> a | aS | bAA\n\
         B -> b | bS | aBB",
    )?;

    print!("{}", grammar);
    println!();

    for word in ["ab", "ba", "abba", "aab", "xyz", ""] {
        if grammar.is_member(word) {
            println!("'{}' belongs to the grammar", word);
        } else {
            println!("'{}' does NOT belong to the grammar", word);
        }
    }

    Ok(())
}
