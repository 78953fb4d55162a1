//! English adverb formation and degree rewrites.

use std::collections::HashMap;
use std::sync::LazyLock;

use accido::Degree;

use crate::verb_inflection::dedupe;

/// Irregular adjective-to-adverb overrides, loaded once at startup.
static ADJ_TO_ADV: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/adj_to_adv.json"))
        .expect("adj_to_adv.json is well-formed")
});

/// The English adverb for an adjective lemma: the override table first,
/// then the "-ly" rules.
pub fn adj_to_adv(adjective: &str) -> String {
    if let Some(adverb) = ADJ_TO_ADV.get(adjective) {
        return adverb.clone();
    }
    if let Some(stem) = adjective.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ily");
        }
    }
    if let Some(stem) = adjective.strip_suffix("le") {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ly");
        }
    }
    if adjective.ends_with("ic") {
        return format!("{adjective}ally");
    }
    format!("{adjective}ly")
}

/// Degree rewrites over an adverb lemma.
pub fn inflections(adverb: &str, degree: Degree) -> Vec<String> {
    let phrases = match degree {
        Degree::Positive => vec![adverb.to_string()],
        Degree::Comparative => vec![format!("more {adverb}")],
        Degree::Superlative => vec![
            format!("most {adverb}"),
            format!("very {adverb}"),
            format!("extremely {adverb}"),
            format!("rather {adverb}"),
            format!("quite {adverb}"),
            format!("too {adverb}"),
        ],
    };
    dedupe(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ly_rule() {
        assert_eq!(adj_to_adv("slow"), "slowly");
        assert_eq!(adj_to_adv("happy"), "happily");
        assert_eq!(adj_to_adv("gentle"), "gently");
        assert_eq!(adj_to_adv("energetic"), "energetically");
    }

    #[test]
    fn test_overrides() {
        assert_eq!(adj_to_adv("good"), "well");
        assert_eq!(adj_to_adv("fast"), "fast");
        assert_eq!(adj_to_adv("whole"), "wholly");
    }

    #[test]
    fn test_degrees() {
        let phrases = inflections("happily", Degree::Superlative);
        assert_eq!(phrases[0], "most happily");
        assert!(phrases.contains(&"very happily".to_string()));
        assert_eq!(
            inflections("happily", Degree::Comparative),
            vec!["more happily"]
        );
    }
}
