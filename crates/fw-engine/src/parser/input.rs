//! Tokenizing and verb normalization.

/// Surface forms and the canonical verb they stand for.
///
/// Two-word entries are matched against the first two tokens before the
/// single first token is tried.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("north", "n"),
    ("south", "s"),
    ("east", "e"),
    ("west", "w"),
    ("northeast", "ne"),
    ("northwest", "nw"),
    ("southeast", "se"),
    ("southwest", "sw"),
    ("up", "u"),
    ("down", "d"),
    ("take", "get"),
    ("pick up", "get"),
    ("dump", "drop"),
    ("put down", "drop"),
    ("inventory", "i"),
    ("inv", "i"),
    ("l", "look"),
    ("z", "wait"),
    ("h", "help"),
    ("?", "help"),
    ("q", "quit"),
    ("exit", "quit"),
];

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Canonical verb, or the raw first token if it has no synonym.
    pub verb: String,
    /// Remaining tokens, lowercased.
    pub args: Vec<String>,
}

/// Split input into a canonical verb and arguments. Blank input yields `None`.
pub fn parse_input(raw: &str) -> Option<ParsedInput> {
    let lowered = raw.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let (&first, rest) = words.split_first()?;

    if let Some((&second, tail)) = rest.split_first() {
        let phrase = format!("{first} {second}");
        if let Some(verb) = lookup(&phrase) {
            return Some(ParsedInput {
                verb: verb.to_string(),
                args: to_owned(tail),
            });
        }
    }

    Some(ParsedInput {
        verb: normalize_verb(first),
        args: to_owned(rest),
    })
}

/// Map a single surface form to its canonical verb, passing unknown tokens through.
pub fn normalize_verb(word: &str) -> String {
    let word = word.to_lowercase();
    match lookup(&word) {
        Some(verb) => verb.to_string(),
        None => word,
    }
}

fn lookup(word: &str) -> Option<&'static str> {
    SYNONYMS
        .iter()
        .find(|(surface, _)| *surface == word)
        .map(|(_, verb)| *verb)
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
