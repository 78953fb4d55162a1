//! English-side derivation.
//!
//! Given an English lemma and the grammatical slot of the Latin form it
//! translates, this crate enumerates every English surface form a learner
//! might legitimately write, with a deterministic principal form first.

pub mod adjective_inflection;
pub mod adverb_inflection;
mod english_noun;
mod english_verb;
pub mod noun_inflection;
pub mod pronoun_inflection;
pub mod synonyms;
pub mod verb_inflection;

pub use adverb_inflection::adj_to_adv;
pub use english_noun::pluralize;
pub use english_verb::{verb_forms, VerbForms};
pub use synonyms::{NoSynonyms, SynonymDb, Synonyms, SYNONYM_DB_DEFAULT, SYNONYM_DB_ENV};

use accido::{EndingKey, PartOfSpeech};

/// Every acceptable English phrase for `lemma` at `key`, principal form
/// first. `pos` is the part of speech of the Latin word the lemma came
/// from: an adverb cell on an adjective goes through adjective→adverb
/// formation first. The set degrades to the bare lemma rather than
/// failing.
pub fn find_inflections(
    lemma: &str,
    key: &EndingKey,
    pos: PartOfSpeech,
    english_subjunctives: bool,
) -> Vec<String> {
    let phrases = match *key {
        EndingKey::Noun { case, number } => noun_inflection::inflections(lemma, case, number),
        EndingKey::Adjective { degree, .. } => adjective_inflection::inflections(lemma, degree),
        EndingKey::Adverb { degree } => {
            if pos == PartOfSpeech::Adjective {
                adverb_inflection::inflections(&adj_to_adv(lemma), degree)
            } else {
                adverb_inflection::inflections(lemma, degree)
            }
        }
        EndingKey::Pronoun { case, number, .. } => {
            pronoun_inflection::inflections(lemma, case, number)
        }
        EndingKey::Regular => vec![lemma.to_string()],
        _ => verb_inflection::inflections(lemma, key, english_subjunctives),
    };
    if phrases.is_empty() {
        vec![lemma.to_string()]
    } else {
        phrases
    }
}

/// The deterministic principal English form for `lemma` at `key`.
pub fn find_main_inflection(
    lemma: &str,
    key: &EndingKey,
    pos: PartOfSpeech,
    english_subjunctives: bool,
) -> String {
    find_inflections(lemma, key, pos, english_subjunctives)
        .into_iter()
        .next()
        .expect("inflection sets are never empty")
}

/// All acceptable synonyms of `meaning` according to `provider`.
pub fn find_synonyms(provider: &dyn Synonyms, meaning: &str) -> std::collections::BTreeSet<String> {
    provider.get(meaning)
}
