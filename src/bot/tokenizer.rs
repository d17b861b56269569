use once_cell::sync::Lazy;
use regex::Regex;

/* Tokenizer splits raw message text into pieces for the Classifier.
 * Everything here is pure: no logging, no state.
 */

// Dice notation "YdX", where either side may be a number or an emoji name like :d20:
static DICE_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^((:[a-z0-9_-]+:)|\d+)?d((:[a-z0-9_-]+:)|\d+)$")
        .expect("dice notation pattern is valid")
});

const QUOTE: char = '"';
const MEME_DELIMITER: char = ':';

// Checks if a token is dice notation. Case-insensitive.
pub fn is_dice_notation(token: &str) -> bool {
    DICE_NOTATION.is_match(token)
}

/* Splits input on delimiter, except inside a pair of double quotes.
 * Quotes are stripped from the emitted tokens.
 * An unmatched quote swallows the rest of the input into the current token.
 * Empty input gives a single empty token, like a naive split.
 */
pub fn quote_safe_split(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![input.replace(QUOTE, "")];
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c == QUOTE {
            quoted = !quoted;
            rest = &rest[c.len_utf8()..];
        } else if !quoted && rest.starts_with(delimiter) {
            tokens.push(std::mem::take(&mut current));
            rest = &rest[delimiter.len()..];
        } else {
            current.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens.push(current);

    tokens
}

/* Splits input on the first delimiter that is not inside a :name: span.
 * Returns (left, right). If there is no such delimiter, left is empty
 * and right is the whole input.
 */
pub fn meme_safe_split(input: &str, delimiter: char) -> (String, String) {
    let mut in_meme = false;

    for (index, c) in input.char_indices() {
        if c == MEME_DELIMITER {
            in_meme = !in_meme;
        } else if c == delimiter && !in_meme {
            let left = input[..index].to_string();
            let right = input[index + c.len_utf8()..].to_string();
            return (left, right);
        }
    }

    (String::new(), input.to_string())
}
