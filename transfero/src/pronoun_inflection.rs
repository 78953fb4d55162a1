//! English renderings of Latin pronoun cells.

use accido::{Case, Number};

use crate::verb_inflection::dedupe;

/// Demonstratives change form in the plural; everything else keeps the
/// lemma.
fn pluralize(lemma: &str) -> String {
    match lemma {
        "this" => "these".to_string(),
        "that" => "those".to_string(),
        "he" | "she" | "it" => "they".to_string(),
        other => other.to_string(),
    }
}

pub fn inflections(lemma: &str, case: Case, number: Number) -> Vec<String> {
    let base = match number {
        Number::Singular => lemma.to_string(),
        Number::Plural => pluralize(lemma),
    };
    let phrases = match case {
        Case::Nominative | Case::Vocative | Case::Accusative => vec![base],
        Case::Genitive => vec![format!("of {base}")],
        Case::Dative => vec![format!("to {base}"), format!("for {base}")],
        Case::Ablative => vec![
            format!("by {base}"),
            format!("with {base}"),
            format!("by means of {base}"),
        ],
    };
    dedupe(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demonstrative_plural() {
        assert_eq!(
            inflections("this", Case::Nominative, Number::Plural),
            vec!["these"]
        );
    }

    #[test]
    fn test_genitive() {
        assert_eq!(
            inflections("this", Case::Genitive, Number::Singular),
            vec!["of this"]
        );
    }

    #[test]
    fn test_ablative() {
        let phrases = inflections("that", Case::Ablative, Number::Plural);
        assert!(phrases.contains(&"by those".to_string()));
        assert!(phrases.contains(&"by means of those".to_string()));
    }
}
