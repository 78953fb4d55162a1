//! English renderings of Latin noun cells: number, articles and the
//! case-governed prepositions.

use accido::{Case, Number};

use crate::english_noun::pluralize;
use crate::verb_inflection::dedupe;

fn article_variants(noun: &str, number: Number) -> Vec<String> {
    let mut variants = vec![noun.to_string(), format!("the {noun}")];
    if number == Number::Singular {
        let article = if noun.starts_with(|c| "aeiou".contains(c)) {
            "an"
        } else {
            "a"
        };
        variants.push(format!("{article} {noun}"));
    }
    variants
}

/// All acceptable phrases for (lemma, case, number), principal first.
pub fn inflections(lemma: &str, case: Case, number: Number) -> Vec<String> {
    let noun = match number {
        Number::Singular => lemma.to_string(),
        Number::Plural => pluralize(lemma),
    };
    let bare = article_variants(&noun, number);

    let phrases = match case {
        Case::Nominative | Case::Accusative => bare,
        Case::Vocative => {
            let mut phrases = vec![format!("O {noun}")];
            phrases.extend(bare);
            phrases
        }
        Case::Genitive => prefixed(&["of"], &bare),
        Case::Dative => prefixed(&["to", "for"], &bare),
        Case::Ablative => prefixed(&["by", "with", "by means of"], &bare),
    };
    dedupe(phrases)
}

fn prefixed(prepositions: &[&str], variants: &[String]) -> Vec<String> {
    // "of the farmer" reads as the principal phrase, so the articled
    // variant leads within each preposition.
    let mut phrases = Vec::new();
    for preposition in prepositions {
        for variant in reordered(variants) {
            phrases.push(format!("{preposition} {variant}"));
        }
    }
    phrases
}

fn reordered(variants: &[String]) -> Vec<String> {
    let mut reordered: Vec<String> = variants.to_vec();
    if reordered.len() > 1 {
        reordered.swap(0, 1);
    }
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominative() {
        let phrases = inflections("farmer", Case::Nominative, Number::Singular);
        assert_eq!(phrases[0], "farmer");
        assert!(phrases.contains(&"the farmer".to_string()));
        assert!(phrases.contains(&"a farmer".to_string()));
    }

    #[test]
    fn test_genitive_plural() {
        let phrases = inflections("farmer", Case::Genitive, Number::Plural);
        assert_eq!(phrases[0], "of the farmers");
        assert!(phrases.contains(&"of farmers".to_string()));
        // No indefinite article in the plural.
        assert!(!phrases.iter().any(|p| p.contains(" a ")));
    }

    #[test]
    fn test_vocative() {
        let phrases = inflections("farmer", Case::Vocative, Number::Singular);
        assert_eq!(phrases[0], "O farmer");
        assert!(phrases.contains(&"farmer".to_string()));
    }

    #[test]
    fn test_ablative() {
        let phrases = inflections("sword", Case::Ablative, Number::Singular);
        assert!(phrases.contains(&"by the sword".to_string()));
        assert!(phrases.contains(&"with a sword".to_string()));
        assert!(phrases.contains(&"by means of the sword".to_string()));
    }

    #[test]
    fn test_an_article() {
        let phrases = inflections("arrow", Case::Nominative, Number::Singular);
        assert!(phrases.contains(&"an arrow".to_string()));
    }
}
