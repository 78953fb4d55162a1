//! English degree rewrites for adjectives.

use accido::Degree;

use crate::verb_inflection::dedupe;

/// Synthetic "-er"/"-est" forms are only safe on short adjectives: one
/// vowel group, or a "-y" ending that flips to "-ier".
fn synthetic_stem(lemma: &str) -> Option<String> {
    if lemma.contains(' ') {
        return None;
    }
    if let Some(stem) = lemma.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return Some(format!("{stem}i"));
        }
    }
    let vowel_groups = lemma
        .chars()
        .fold((0usize, false), |(count, in_group), c| {
            let vowel = "aeiouy".contains(c);
            (count + usize::from(vowel && !in_group), vowel)
        })
        .0;
    if vowel_groups <= 1 {
        return Some(lemma.strip_suffix('e').unwrap_or(lemma).to_string());
    }
    // Disyllables ending in mute "-e" still compare in "-er": large, simple.
    if vowel_groups == 2 && lemma.ends_with('e') {
        return Some(lemma[..lemma.len() - 1].to_string());
    }
    None
}

pub fn inflections(lemma: &str, degree: Degree) -> Vec<String> {
    let phrases = match degree {
        Degree::Positive => vec![lemma.to_string()],
        Degree::Comparative => {
            let mut phrases = Vec::new();
            if let Some(stem) = synthetic_stem(lemma) {
                phrases.push(format!("{stem}er"));
            }
            phrases.push(format!("more {lemma}"));
            phrases
        }
        Degree::Superlative => {
            let mut phrases = Vec::new();
            if let Some(stem) = synthetic_stem(lemma) {
                phrases.push(format!("{stem}est"));
            }
            phrases.extend([
                format!("most {lemma}"),
                format!("very {lemma}"),
                format!("extremely {lemma}"),
                format!("rather {lemma}"),
                format!("quite {lemma}"),
                format!("too {lemma}"),
            ]);
            phrases
        }
    };
    dedupe(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(inflections("light", Degree::Positive), vec!["light"]);
    }

    #[test]
    fn test_comparative_short() {
        let phrases = inflections("light", Degree::Comparative);
        assert_eq!(phrases[0], "lighter");
        assert!(phrases.contains(&"more light".to_string()));
    }

    #[test]
    fn test_comparative_y() {
        let phrases = inflections("happy", Degree::Comparative);
        assert!(phrases.contains(&"happier".to_string()));
    }

    #[test]
    fn test_comparative_long() {
        let phrases = inflections("beautiful", Degree::Comparative);
        assert_eq!(phrases, vec!["more beautiful"]);
    }

    #[test]
    fn test_superlative() {
        let phrases = inflections("light", Degree::Superlative);
        assert!(phrases.contains(&"lightest".to_string()));
        assert!(phrases.contains(&"most light".to_string()));
        assert!(phrases.contains(&"very light".to_string()));
        assert!(phrases.contains(&"too light".to_string()));
    }
}
