//! The word entity: a closed sum over the six part-of-speech kinds, with
//! one capability surface (lookup, reverse lookup, iteration, meanings).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::adjective::Adjective;
use crate::adverb::Adverb;
use crate::ending::{Ending, Endings};
use crate::error::NoEndingError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::noun::Noun;
use crate::pronoun::Pronoun;
use crate::regular_word::RegularWord;
use crate::tags::Gender;
use crate::verb::Verb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
    Adverb,
    Pronoun,
    Regular,
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Regular => "Regular",
        };
        write!(f, "{word}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    Verb(Verb),
    Noun(Noun),
    Adjective(Adjective),
    Adverb(Adverb),
    Pronoun(Pronoun),
    Regular(RegularWord),
}

impl Word {
    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Word::Verb(_) => PartOfSpeech::Verb,
            Word::Noun(_) => PartOfSpeech::Noun,
            Word::Adjective(_) => PartOfSpeech::Adjective,
            Word::Adverb(_) => PartOfSpeech::Adverb,
            Word::Pronoun(_) => PartOfSpeech::Pronoun,
            Word::Regular(_) => PartOfSpeech::Regular,
        }
    }

    /// The dictionary headword.
    pub fn headword(&self) -> &str {
        match self {
            Word::Verb(verb) => &verb.present,
            Word::Noun(noun) => &noun.nominative,
            Word::Adjective(adjective) => &adjective.principal_parts[0],
            Word::Adverb(adverb) => &adverb.positive,
            Word::Pronoun(pronoun) => &pronoun.nominatives[0],
            Word::Regular(word) => &word.form,
        }
    }

    pub fn meaning(&self) -> &Meaning {
        match self {
            Word::Verb(verb) => &verb.meaning,
            Word::Noun(noun) => &noun.meaning,
            Word::Adjective(adjective) => &adjective.meaning,
            Word::Adverb(adverb) => &adverb.meaning,
            Word::Pronoun(pronoun) => &pronoun.meaning,
            Word::Regular(word) => &word.meaning,
        }
    }

    pub fn endings(&self) -> &Endings {
        match self {
            Word::Verb(verb) => &verb.endings,
            Word::Noun(noun) => &noun.endings,
            Word::Adjective(adjective) => &adjective.endings,
            Word::Adverb(adverb) => &adverb.endings,
            Word::Pronoun(pronoun) => &pronoun.endings,
            Word::Regular(word) => &word.endings,
        }
    }

    /// The ending at `key`, or a [`NoEndingError`] naming the word and key.
    pub fn get(&self, key: &EndingKey) -> Result<&Ending, NoEndingError> {
        self.endings()
            .get(key)
            .ok_or_else(|| NoEndingError::new(self.headword(), *key))
    }

    /// All keys realised by `form`.
    pub fn find_keys(&self, form: &str) -> BTreeSet<EndingKey> {
        self.endings().find_keys(form)
    }

    /// Every (key, ending) pair in paradigm order.
    pub fn forms(&self) -> impl Iterator<Item = (&EndingKey, &Ending)> {
        self.endings().iter()
    }

    /// The principal parts in dictionary order.
    pub fn principal_parts(&self) -> Vec<String> {
        match self {
            Word::Verb(verb) => verb.principal_parts(),
            Word::Noun(noun) => noun.principal_parts(),
            Word::Adjective(adjective) => adjective.principal_parts.clone(),
            Word::Adverb(adverb) => vec![adverb.positive.clone()],
            Word::Pronoun(pronoun) => pronoun.principal_parts(),
            Word::Regular(word) => vec![word.form.clone()],
        }
    }

    /// Renders the word the way a vocabulary list shows it, e.g.
    /// "farmer: agricola, agricolae, (m)".
    pub fn dictionary_entry(&self) -> String {
        let meaning = self.meaning().main();
        match self {
            Word::Verb(verb) => format!("{meaning}: {}", verb.principal_parts().join(", ")),
            Word::Noun(noun) => {
                let gender = match noun.gender {
                    Gender::Masculine => "m",
                    Gender::Feminine => "f",
                    Gender::Neuter => "n",
                };
                format!("{meaning}: {}, {}, ({gender})", noun.nominative, noun.genitive)
            }
            Word::Adjective(adjective) => format!(
                "{meaning}: {}, ({})",
                adjective.principal_parts.join(", "),
                adjective.termination
            ),
            Word::Adverb(adverb) => format!("{meaning}: {}", adverb.positive),
            Word::Pronoun(pronoun) => {
                format!("{meaning}: {}", pronoun.principal_parts().join(", "))
            }
            Word::Regular(word) => format!("{meaning}: {}", word.form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Case, Number};

    #[test]
    fn test_dictionary_entries() {
        let noun = Noun::new("agricola", "agricolae", Gender::Masculine, false, Meaning::from("farmer"))
            .unwrap();
        assert_eq!(
            Word::Noun(noun).dictionary_entry(),
            "farmer: agricola, agricolae, (m)"
        );

        let verb = Verb::new(
            "capio",
            Some("capere"),
            Some("cepi"),
            Some("captus"),
            Meaning::from("take"),
        )
        .unwrap();
        assert_eq!(
            Word::Verb(verb).dictionary_entry(),
            "take: capio, capere, cepi, captus"
        );

        let adjective = Adjective::new(
            &["levis", "leve"],
            crate::adjective::Termination::ThreeTwo,
            Meaning::from("light"),
        )
        .unwrap();
        assert_eq!(
            Word::Adjective(adjective).dictionary_entry(),
            "light: levis, leve, (3-2)"
        );

        let pronoun = Pronoun::new("hic", Meaning::from("this")).unwrap();
        assert_eq!(Word::Pronoun(pronoun).dictionary_entry(), "this: hic, haec, hoc");
    }

    #[test]
    fn test_get_reports_no_ending() {
        let word = Word::Regular(RegularWord::new("et", Meaning::from("and")));
        let missing = EndingKey::Noun { case: Case::Nominative, number: Number::Singular };
        let error = word.get(&missing).unwrap_err();
        assert_eq!(error.word, "et");
    }

    #[test]
    fn test_equality_ignores_paradigm_identity() {
        let a = Noun::new("agricola", "agricolae", Gender::Masculine, false, Meaning::from("farmer"))
            .unwrap();
        let b = Noun::new("agricola", "agricolae", Gender::Masculine, false, Meaning::from("farmer"))
            .unwrap();
        assert_eq!(Word::Noun(a), Word::Noun(b));
    }
}
