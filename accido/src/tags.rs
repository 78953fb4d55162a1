//! Grammatical tag enums.
//!
//! Every cell of a paradigm is identified by a tuple of these tags. They are
//! closed sets: a tag that would be vacuous for a given word kind simply does
//! not appear in that kind's keys.

use serde::{Deserialize, Serialize};

/// Grammatical number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        };
        write!(f, "{word}")
    }
}

/// Verb tense. The perfect system (perfect, pluperfect, future perfect) is
/// built on the perfect stem; everything else on the present stem.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Future,
        Tense::Perfect,
        Tense::Pluperfect,
        Tense::FuturePerfect,
    ];

    /// True for the tenses built on the perfect stem.
    pub fn is_perfect_system(self) -> bool {
        matches!(self, Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect)
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
            Tense::Perfect => "perfect",
            Tense::Pluperfect => "pluperfect",
            Tense::FuturePerfect => "future perfect",
        };
        write!(f, "{word}")
    }
}

/// Verb voice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        };
        write!(f, "{word}")
    }
}

/// Verb mood. Participles, gerunds and supines have their own key variants,
/// so only the finite moods and the infinitive appear here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Mood {
    Indicative,
    Subjunctive,
    Imperative,
    Infinitive,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Mood::Indicative => "indicative",
            Mood::Subjunctive => "subjunctive",
            Mood::Imperative => "imperative",
            Mood::Infinitive => "infinitive",
        };
        write!(f, "{word}")
    }
}

/// Grammatical case. Latin's locative is not carried; the six cases below
/// cover every paradigm this engine produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Case {
    Nominative,
    Vocative,
    Accusative,
    Genitive,
    Dative,
    Ablative,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Vocative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Ablative,
    ];

    /// The cases a gerund inflects in.
    pub const GERUND: [Case; 4] =
        [Case::Accusative, Case::Genitive, Case::Dative, Case::Ablative];

    /// The cases a supine inflects in.
    pub const SUPINE: [Case; 2] = [Case::Accusative, Case::Ablative];
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Case::Nominative => "nominative",
            Case::Vocative => "vocative",
            Case::Accusative => "accusative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Ablative => "ablative",
        };
        write!(f, "{word}")
    }
}

/// Grammatical gender.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        };
        write!(f, "{word}")
    }
}

/// Degree of comparison for adjectives and adverbs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::Positive, Degree::Comparative, Degree::Superlative];
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Degree::Positive => "positive",
            Degree::Comparative => "comparative",
            Degree::Superlative => "superlative",
        };
        write!(f, "{word}")
    }
}

/// Grammatical person. Displays as an ordinal ("1st person") so rendered
/// key components read naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// Zero-based index into a six-slot person/number ending row
    /// (1sg, 2sg, 3sg, 1pl, 2pl, 3pl).
    pub fn row_index(self, number: Number) -> usize {
        let base = match number {
            Number::Singular => 0,
            Number::Plural => 3,
        };
        base + match self {
            Person::First => 0,
            Person::Second => 1,
            Person::Third => 2,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Person::First => "1st person",
            Person::Second => "2nd person",
            Person::Third => "3rd person",
        };
        write!(f, "{word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_words() {
        assert_eq!(Case::Nominative.to_string(), "nominative");
        assert_eq!(Tense::FuturePerfect.to_string(), "future perfect");
        assert_eq!(Person::First.to_string(), "1st person");
        assert_eq!(Degree::Superlative.to_string(), "superlative");
    }

    #[test]
    fn test_perfect_system() {
        assert!(Tense::Perfect.is_perfect_system());
        assert!(Tense::FuturePerfect.is_perfect_system());
        assert!(!Tense::Imperfect.is_perfect_system());
    }

    #[test]
    fn test_person_row_index() {
        assert_eq!(Person::First.row_index(Number::Singular), 0);
        assert_eq!(Person::Third.row_index(Number::Singular), 2);
        assert_eq!(Person::First.row_index(Number::Plural), 3);
        assert_eq!(Person::Third.row_index(Number::Plural), 5);
    }
}
