//! Paradigm cell keys.
//!
//! An [`EndingKey`] names one cell of a word's paradigm. Keys are a closed
//! sum over the paradigm spaces this engine generates; tags that would be
//! vacuous for a space (case on a finite verb form, say) do not exist on its
//! variant at all.

use serde::{Deserialize, Serialize};

use crate::tags::{Case, Degree, Gender, Mood, Number, Person, Tense, Voice};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EndingKey {
    /// A finite verb form; `mood` is indicative or subjunctive.
    Finite {
        tense: Tense,
        voice: Voice,
        mood: Mood,
        person: Person,
        number: Number,
    },
    Infinitive {
        tense: Tense,
        voice: Voice,
    },
    Imperative {
        tense: Tense,
        voice: Voice,
        person: Person,
        number: Number,
    },
    Participle {
        tense: Tense,
        voice: Voice,
        gender: Gender,
        case: Case,
        number: Number,
    },
    Gerund {
        case: Case,
    },
    Supine {
        case: Case,
    },
    Noun {
        case: Case,
        number: Number,
    },
    Adjective {
        degree: Degree,
        gender: Gender,
        case: Case,
        number: Number,
    },
    Adverb {
        degree: Degree,
    },
    Pronoun {
        gender: Gender,
        case: Case,
        number: Number,
    },
    /// The single form of a non-inflecting word.
    Regular,
}

impl EndingKey {
    pub fn tense(&self) -> Option<Tense> {
        match *self {
            EndingKey::Finite { tense, .. }
            | EndingKey::Infinitive { tense, .. }
            | EndingKey::Imperative { tense, .. }
            | EndingKey::Participle { tense, .. } => Some(tense),
            _ => None,
        }
    }

    pub fn voice(&self) -> Option<Voice> {
        match *self {
            EndingKey::Finite { voice, .. }
            | EndingKey::Infinitive { voice, .. }
            | EndingKey::Imperative { voice, .. }
            | EndingKey::Participle { voice, .. } => Some(voice),
            _ => None,
        }
    }

    /// The finite mood, or the mood-like space this key lives in. Participle,
    /// gerund and supine keys answer `None`; filters treat them separately.
    pub fn mood(&self) -> Option<Mood> {
        match *self {
            EndingKey::Finite { mood, .. } => Some(mood),
            EndingKey::Infinitive { .. } => Some(Mood::Infinitive),
            EndingKey::Imperative { .. } => Some(Mood::Imperative),
            _ => None,
        }
    }

    pub fn person(&self) -> Option<Person> {
        match *self {
            EndingKey::Finite { person, .. } | EndingKey::Imperative { person, .. } => {
                Some(person)
            }
            _ => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        match *self {
            EndingKey::Finite { number, .. }
            | EndingKey::Imperative { number, .. }
            | EndingKey::Participle { number, .. }
            | EndingKey::Noun { number, .. }
            | EndingKey::Adjective { number, .. }
            | EndingKey::Pronoun { number, .. } => Some(number),
            _ => None,
        }
    }

    pub fn case(&self) -> Option<Case> {
        match *self {
            EndingKey::Participle { case, .. }
            | EndingKey::Gerund { case }
            | EndingKey::Supine { case }
            | EndingKey::Noun { case, .. }
            | EndingKey::Adjective { case, .. }
            | EndingKey::Pronoun { case, .. } => Some(case),
            _ => None,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match *self {
            EndingKey::Participle { gender, .. }
            | EndingKey::Adjective { gender, .. }
            | EndingKey::Pronoun { gender, .. } => Some(gender),
            _ => None,
        }
    }

    pub fn degree(&self) -> Option<Degree> {
        match *self {
            EndingKey::Adjective { degree, .. } | EndingKey::Adverb { degree } => Some(degree),
            _ => None,
        }
    }

    pub fn is_participle(&self) -> bool {
        matches!(self, EndingKey::Participle { .. })
    }

    pub fn is_gerund(&self) -> bool {
        matches!(self, EndingKey::Gerund { .. })
    }

    pub fn is_supine(&self) -> bool {
        matches!(self, EndingKey::Supine { .. })
    }

    /// Renders the key as space-joined lowercase tag words. This is the
    /// string shown to the learner in parsing questions, so the orders
    /// below are load-bearing: "nominative plural",
    /// "present active participle neuter accusative singular",
    /// "genitive plural feminine".
    pub fn components(&self) -> String {
        match *self {
            EndingKey::Finite {
                tense,
                voice,
                mood,
                person,
                number,
            } => format!("{tense} {voice} {mood} {person} {number}"),
            EndingKey::Infinitive { tense, voice } => {
                format!("{tense} {voice} infinitive")
            }
            EndingKey::Imperative {
                tense,
                voice,
                person,
                number,
            } => format!("{tense} {voice} imperative {person} {number}"),
            EndingKey::Participle {
                tense,
                voice,
                gender,
                case,
                number,
            } => format!("{tense} {voice} participle {gender} {case} {number}"),
            EndingKey::Gerund { case } => format!("gerund {case}"),
            EndingKey::Supine { case } => format!("supine {case}"),
            EndingKey::Noun { case, number } => format!("{case} {number}"),
            EndingKey::Adjective {
                degree,
                gender,
                case,
                number,
            } => format!("{degree} {case} {number} {gender}"),
            EndingKey::Adverb { degree } => degree.to_string(),
            EndingKey::Pronoun {
                gender,
                case,
                number,
            } => format!("{case} {number} {gender}"),
            EndingKey::Regular => String::new(),
        }
    }
}

impl std::fmt::Display for EndingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.components())
    }
}
