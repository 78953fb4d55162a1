//! Standalone adverbs and their degrees.

use crate::ending::Endings;
use crate::error::InvalidInputError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::Degree;

/// Irregular adverb comparison: (positive, comparative, superlative).
const IRREGULAR_DEGREES: [(&str, &str, &str); 7] = [
    ("bene", "melius", "optime"),
    ("male", "peius", "pessime"),
    ("magnopere", "magis", "maxime"),
    ("parum", "minus", "minime"),
    ("multum", "plus", "plurimum"),
    ("diu", "diutius", "diutissime"),
    ("saepe", "saepius", "saepissime"),
];

#[derive(Debug, Clone)]
pub struct Adverb {
    pub positive: String,
    pub meaning: Meaning,
    pub(crate) endings: Endings,
}

impl PartialEq for Adverb {
    fn eq(&self, other: &Self) -> bool {
        (&self.positive, &self.meaning) == (&other.positive, &other.meaning)
    }
}

impl Eq for Adverb {}

impl Adverb {
    pub fn new(positive: &str, meaning: Meaning) -> Result<Adverb, InvalidInputError> {
        let mut endings = Endings::new();
        endings.insert(EndingKey::Adverb { degree: Degree::Positive }, positive);

        if let Some((_, comparative, superlative)) = IRREGULAR_DEGREES
            .iter()
            .find(|(p, _, _)| *p == positive)
        {
            endings.insert(EndingKey::Adverb { degree: Degree::Comparative }, *comparative);
            endings.insert(EndingKey::Adverb { degree: Degree::Superlative }, *superlative);
        } else if let Some(stem) = adverb_stem(positive) {
            endings.insert(
                EndingKey::Adverb { degree: Degree::Comparative },
                format!("{stem}ius"),
            );
            endings.insert(
                EndingKey::Adverb { degree: Degree::Superlative },
                format!("{stem}issime"),
            );
        }
        // Otherwise the adverb does not compare; only the positive exists.

        Ok(Adverb {
            positive: positive.to_string(),
            meaning,
            endings,
        })
    }
}

/// Recovers the comparison stem from the positive suffix, where one exists.
fn adverb_stem(positive: &str) -> Option<&str> {
    if let Some(stem) = positive.strip_suffix("iter") {
        Some(stem)
    } else if positive.ends_with("nter") {
        // prudenter -> prudent-
        Some(&positive[..positive.len() - 2])
    } else if let Some(stem) = positive.strip_suffix('e') {
        Some(stem)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(adverb: &Adverb, degree: Degree) -> Option<String> {
        adverb
            .endings
            .get(&EndingKey::Adverb { degree })
            .map(|e| e.main_form().to_string())
    }

    #[test]
    fn test_e_adverb() {
        let laete = Adverb::new("laete", Meaning::from("happily")).unwrap();
        assert_eq!(form(&laete, Degree::Comparative).unwrap(), "laetius");
        assert_eq!(form(&laete, Degree::Superlative).unwrap(), "laetissime");
    }

    #[test]
    fn test_iter_adverb() {
        let leviter = Adverb::new("leviter", Meaning::from("lightly")).unwrap();
        assert_eq!(form(&leviter, Degree::Comparative).unwrap(), "levius");
    }

    #[test]
    fn test_nter_adverb() {
        let prudenter = Adverb::new("prudenter", Meaning::from("prudently")).unwrap();
        assert_eq!(form(&prudenter, Degree::Comparative).unwrap(), "prudentius");
    }

    #[test]
    fn test_irregular() {
        let bene = Adverb::new("bene", Meaning::from("well")).unwrap();
        assert_eq!(form(&bene, Degree::Comparative).unwrap(), "melius");
        assert_eq!(form(&bene, Degree::Superlative).unwrap(), "optime");
    }

    #[test]
    fn test_non_comparing() {
        let nunc = Adverb::new("nunc", Meaning::from("now")).unwrap();
        assert_eq!(form(&nunc, Degree::Comparative), None);
        assert!(form(&nunc, Degree::Positive).is_some());
    }
}
