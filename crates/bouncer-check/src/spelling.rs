//! Dictionary-based spelling check for names

use crate::lexicon::Dictionary;
use regex::Regex;
use std::sync::LazyLock;

/// Separator characters and digit runs that split a name into words
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ _\-(),.<>]|\d+").expect("separator pattern is valid"));

/// Split a name into lower-cased word tokens, dropping empty pieces
pub fn tokenize(name: &str) -> Vec<String> {
    let normalized = name.trim().to_lowercase();
    SEPARATORS
        .split(&normalized)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// A name is well spelled when every token is a recognized word.
///
/// Names made only of separators and digits have no tokens and pass.
pub fn is_well_spelled(name: &str, dictionary: &Dictionary) -> bool {
    tokenize(name)
        .iter()
        .all(|token| dictionary.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["wooden", "chair", "leg", "left", "material"])
    }

    #[test]
    fn test_tokenize_splits_on_separators_and_digits() {
        assert_eq!(tokenize("Cube.001"), vec!["cube"]);
        assert_eq!(
            tokenize(" Wooden_Chair-Leg(Left) "),
            vec!["wooden", "chair", "leg", "left"]
        );
        assert_eq!(tokenize("a<b>c,d"), vec!["a", "b", "c", "d"]);
        assert_eq!(tokenize("leg2left"), vec!["leg", "left"]);
    }

    #[test]
    fn test_well_spelled() {
        let dict = dictionary();
        assert!(is_well_spelled("Wooden Chair", &dict));
        assert!(is_well_spelled("wooden_chair.002", &dict));
        assert!(is_well_spelled("Chair (Left Leg)", &dict));
    }

    #[test]
    fn test_single_unknown_token_fails_name() {
        let dict = dictionary();
        assert!(!is_well_spelled("Wooden Chiar", &dict));
        assert!(!is_well_spelled("Cube.001", &dict));
        assert!(!is_well_spelled("chair_v", &dict));
    }

    #[test]
    fn test_separator_only_names_pass() {
        let dict = Dictionary::new();
        assert!(is_well_spelled("", &dict));
        assert!(is_well_spelled("  ", &dict));
        assert!(is_well_spelled("_-_.001", &dict));
        assert!(is_well_spelled("123", &dict));
    }
}
