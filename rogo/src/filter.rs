//! Candidate pool construction: every (word, key) pair the session
//! settings do not exclude, in deterministic order.

use accido::{
    Case, Conjugation, Declension, Degree, EndingKey, Gender, Mood, Number, Person, Tense,
    Termination, Voice, Word,
};
use lego::VocabList;

use crate::settings::Settings;

/// One sampling candidate: a word (by list index) and one of its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub word_index: usize,
    pub key: EndingKey,
}

/// Applies the exclusion flags. Words are visited in list order and keys in
/// paradigm order, so the pool is identical across runs for the same list
/// and settings.
pub fn build_pool(list: &VocabList, settings: &Settings) -> Vec<Candidate> {
    let mut pool = Vec::new();
    for (word_index, word) in list.words.iter().enumerate() {
        if word_excluded(word, settings) {
            continue;
        }
        for (key, _) in word.forms() {
            if key_excluded(key, settings) {
                continue;
            }
            pool.push(Candidate { word_index, key: *key });
        }
    }
    pool
}

fn word_excluded(word: &Word, settings: &Settings) -> bool {
    match word {
        Word::Verb(verb) => {
            if settings.flag("exclude-verbs") {
                return true;
            }
            if (verb.deponent || verb.semi_deponent) && settings.flag("exclude-deponents") {
                return true;
            }
            let flag = match verb.conjugation {
                Conjugation::First => "exclude-verb-first-conjugation",
                Conjugation::Second => "exclude-verb-second-conjugation",
                Conjugation::Third => "exclude-verb-third-conjugation",
                Conjugation::Fourth => "exclude-verb-fourth-conjugation",
                Conjugation::Mixed => "exclude-verb-mixed-conjugation",
                Conjugation::Irregular => "exclude-verb-irregular-conjugation",
            };
            settings.flag(flag)
        }
        Word::Noun(noun) => {
            if settings.flag("exclude-nouns") {
                return true;
            }
            let flag = match noun.declension {
                Declension::First => "exclude-noun-first-declension",
                Declension::Second => "exclude-noun-second-declension",
                Declension::Third => "exclude-noun-third-declension",
                Declension::Fourth => "exclude-noun-fourth-declension",
                Declension::Fifth => "exclude-noun-fifth-declension",
                Declension::Irregular => "exclude-noun-irregular-declension",
            };
            settings.flag(flag)
        }
        Word::Adjective(adjective) => {
            if settings.flag("exclude-adjectives") {
                return true;
            }
            let flag = match adjective.termination {
                Termination::TwoOneTwo => "exclude-adjective-212",
                Termination::ThreeOne => "exclude-adjective-31",
                Termination::ThreeTwo => "exclude-adjective-32",
                Termination::ThreeThree => "exclude-adjective-33",
            };
            settings.flag(flag)
        }
        Word::Adverb(_) => settings.flag("exclude-adverbs"),
        Word::Pronoun(_) => settings.flag("exclude-pronouns"),
        Word::Regular(_) => settings.flag("exclude-regulars"),
    }
}

fn key_excluded(key: &EndingKey, settings: &Settings) -> bool {
    if key.is_participle() && settings.flag("exclude-participles") {
        return true;
    }
    if key.is_gerund() && settings.flag("exclude-gerunds") {
        return true;
    }
    if key.is_supine() && settings.flag("exclude-supines") {
        return true;
    }
    if let Some(mood) = key.mood() {
        let flag = match mood {
            Mood::Indicative => "exclude-mood-indicative",
            Mood::Subjunctive => "exclude-mood-subjunctive",
            Mood::Imperative => "exclude-mood-imperative",
            Mood::Infinitive => "exclude-mood-infinitive",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(tense) = key.tense() {
        let flag = match tense {
            Tense::Present => "exclude-tense-present",
            Tense::Imperfect => "exclude-tense-imperfect",
            Tense::Future => "exclude-tense-future",
            Tense::Perfect => "exclude-tense-perfect",
            Tense::Pluperfect => "exclude-tense-pluperfect",
            Tense::FuturePerfect => "exclude-tense-future-perfect",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(voice) = key.voice() {
        let flag = match voice {
            Voice::Active => "exclude-voice-active",
            Voice::Passive => "exclude-voice-passive",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(person) = key.person() {
        let flag = match person {
            Person::First => "exclude-person-first",
            Person::Second => "exclude-person-second",
            Person::Third => "exclude-person-third",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(number) = key.number() {
        let flag = match number {
            Number::Singular => "exclude-number-singular",
            Number::Plural => "exclude-number-plural",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(case) = key.case() {
        let flag = match case {
            Case::Nominative => "exclude-case-nominative",
            Case::Vocative => "exclude-case-vocative",
            Case::Accusative => "exclude-case-accusative",
            Case::Genitive => "exclude-case-genitive",
            Case::Dative => "exclude-case-dative",
            Case::Ablative => "exclude-case-ablative",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(gender) = key.gender() {
        let flag = match gender {
            Gender::Masculine => "exclude-gender-masculine",
            Gender::Feminine => "exclude-gender-feminine",
            Gender::Neuter => "exclude-gender-neuter",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    if let Some(degree) = key.degree() {
        let flag = match degree {
            Degree::Positive => "exclude-degree-positive",
            Degree::Comparative => "exclude-degree-comparative",
            Degree::Superlative => "exclude-degree-superlative",
        };
        if settings.flag(flag) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> VocabList {
        lego::read_list(
            "@ Noun\nfarmer: agricola, agricolae, (m)\n@ Verb\nhear: audio, audire, audivi, auditus\n@ Pronoun\nthis: hic, haec, hoc\n",
        )
        .unwrap()
    }

    #[test]
    fn test_pos_blanket() {
        let all = build_pool(&list(), &Settings::permissive(1, 3, &[]));
        let without_verbs = build_pool(&list(), &Settings::permissive(1, 3, &["exclude-verbs"]));
        assert!(without_verbs.len() < all.len());
        assert!(without_verbs.iter().all(|c| c.word_index != 1));
    }

    #[test]
    fn test_case_exclusion_applies_to_pronouns() {
        let pool = build_pool(
            &list(),
            &Settings::permissive(1, 3, &["exclude-case-genitive"]),
        );
        assert!(pool
            .iter()
            .all(|c| c.key.case() != Some(accido::Case::Genitive)));
        // Pronoun cells with other cases survive.
        assert!(pool.iter().any(|c| c.word_index == 2));
    }

    #[test]
    fn test_filter_monotonicity() {
        let base = build_pool(&list(), &Settings::permissive(1, 3, &[]));
        let flags = [
            "exclude-tense-future",
            "exclude-voice-passive",
            "exclude-number-plural",
            "exclude-participles",
            "exclude-noun-first-declension",
        ];
        for flag in flags {
            let filtered = build_pool(&list(), &Settings::permissive(1, 3, &[flag]));
            assert!(filtered.len() <= base.len(), "{flag} grew the pool");
            for candidate in &filtered {
                assert!(base.contains(candidate), "{flag} invented a candidate");
            }
        }
    }

    #[test]
    fn test_deterministic_order() {
        let a = build_pool(&list(), &Settings::permissive(1, 3, &[]));
        let b = build_pool(&list(), &Settings::permissive(1, 3, &[]));
        assert_eq!(a, b);
    }
}
