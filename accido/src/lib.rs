//! Latin morphology kernel.
//!
//! Word entities are built once from their principal parts; every inflected
//! form is generated eagerly at construction together with its grammatical
//! tags, so lookups and reverse lookups are cheap for the rest of the
//! word's life.

pub mod adjective;
pub mod adverb;
mod decline;
pub mod ending;
pub mod error;
pub mod key;
pub mod meaning;
pub mod noun;
pub mod pronoun;
pub mod regular_word;
pub mod tags;
pub mod verb;
mod verb_irregular;
mod verb_tables;
pub mod word;

pub use adjective::{Adjective, Termination};
pub use adverb::Adverb;
pub use ending::{Ending, Endings};
pub use error::{InvalidInputError, NoEndingError};
pub use key::EndingKey;
pub use meaning::Meaning;
pub use noun::{Declension, Noun};
pub use pronoun::{Pronoun, PronounKind};
pub use regular_word::RegularWord;
pub use tags::{Case, Degree, Gender, Mood, Number, Person, Tense, Voice};
pub use verb::{Conjugation, Verb};
pub use word::{PartOfSpeech, Word};

#[cfg(test)]
mod tests {
    use super::*;

    // Every form of every kind of word round-trips through the reverse
    // index.
    #[test]
    fn test_round_trip_across_kinds() {
        let words = [
            Word::Verb(
                Verb::new("porto", Some("portare"), Some("portavi"), Some("portatus"), Meaning::from("carry")).unwrap(),
            ),
            Word::Noun(
                Noun::new("rex", "regis", Gender::Masculine, false, Meaning::from("king")).unwrap(),
            ),
            Word::Adjective(
                Adjective::new(&["acer", "acris", "acre"], Termination::ThreeThree, Meaning::from("keen")).unwrap(),
            ),
            Word::Adverb(Adverb::new("laete", Meaning::from("happily")).unwrap()),
            Word::Pronoun(Pronoun::new("qui", Meaning::from("who")).unwrap()),
            Word::Regular(RegularWord::new("et", Meaning::from("and"))),
        ];
        for word in &words {
            assert!(!word.endings().is_empty());
            for (key, ending) in word.forms() {
                for form in ending.forms() {
                    assert!(
                        word.find_keys(form).contains(key),
                        "{}: '{form}' does not map back to {key:?}",
                        word.headword(),
                    );
                }
            }
        }
    }

    // Syncretism closure: every reverse-index hit maps forward to a cell
    // containing the form.
    #[test]
    fn test_syncretism_closure() {
        let noun =
            Noun::new("agricola", "agricolae", Gender::Masculine, false, Meaning::from("farmer")).unwrap();
        let word = Word::Noun(noun);
        for (_, ending) in word.forms() {
            for form in ending.forms() {
                let keys = word.find_keys(form);
                assert!(!keys.is_empty());
                for key in keys {
                    assert!(word.get(&key).unwrap().contains(form));
                }
            }
        }
    }
}
