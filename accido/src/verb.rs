//! Verbs: conjugation detection, stem derivation and paradigm assembly.

use serde::{Deserialize, Serialize};

use crate::decline::{self, AblativeSingular, ThirdDeclension};
use crate::ending::{Ending, Endings};
use crate::error::InvalidInputError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::{Case, Mood, Number, Person, Tense, Voice};
use crate::verb_irregular;
use crate::verb_tables as t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conjugation {
    First,
    Second,
    Third,
    Fourth,
    Mixed,
    Irregular,
}

impl Conjugation {
    /// Index into the regular conjugation tables. Panics for `Irregular`,
    /// which never reaches the table-driven builders.
    fn table_index(self) -> usize {
        match self {
            Conjugation::First => 0,
            Conjugation::Second => 1,
            Conjugation::Third => 2,
            Conjugation::Fourth => 3,
            Conjugation::Mixed => 4,
            Conjugation::Irregular => unreachable!("irregular verbs are hand-authored"),
        }
    }
}

/// A Latin verb with its fully generated paradigm.
#[derive(Debug, Clone)]
pub struct Verb {
    pub present: String,
    pub infinitive: Option<String>,
    pub perfect: Option<String>,
    pub ppp: Option<String>,
    pub meaning: Meaning,
    pub conjugation: Conjugation,
    pub deponent: bool,
    /// Active present system but a passive-shaped perfect with active
    /// sense (audeo, ausus sum).
    pub semi_deponent: bool,
    pub(crate) endings: Endings,
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        (
            &self.present,
            &self.infinitive,
            &self.perfect,
            &self.ppp,
            self.conjugation,
            self.deponent,
            self.semi_deponent,
            &self.meaning,
        ) == (
            &other.present,
            &other.infinitive,
            &other.perfect,
            &other.ppp,
            other.conjugation,
            other.deponent,
            other.semi_deponent,
            &other.meaning,
        )
    }
}

impl Eq for Verb {}

impl Verb {
    /// Builds a verb from its principal parts. Absent parts (defective
    /// verbs) leave the corresponding paradigm spaces empty.
    pub fn new(
        present: &str,
        infinitive: Option<&str>,
        perfect: Option<&str>,
        ppp: Option<&str>,
        meaning: Meaning,
    ) -> Result<Verb, InvalidInputError> {
        if let Some(irregular) = verb_irregular::build(present, meaning.clone()) {
            return Ok(irregular);
        }

        let infinitive = infinitive.ok_or_else(|| {
            InvalidInputError::new(format!(
                "Verb '{present}' has no infinitive and is not a recognised irregular verb"
            ))
        })?;

        let deponent = present.ends_with("or");
        let semi_deponent =
            !deponent && perfect.is_some_and(|perfect| perfect.ends_with(" sum"));
        let conjugation = detect_conjugation(present, infinitive, deponent)?;

        // Deponent and semi-deponent dictionary perfects are a participle
        // plus "sum"; the participle doubles as the supine-stem source.
        let (perfect, ppp) = if deponent || semi_deponent {
            let participle = perfect.map(|p| p.trim_end_matches(" sum").to_string());
            (None, participle)
        } else {
            (perfect.map(str::to_string), ppp.map(str::to_string))
        };

        let stem = present_stem(infinitive, conjugation, deponent);
        let perfect_stem = match &perfect {
            Some(perfect) => Some(
                perfect
                    .strip_suffix('i')
                    .ok_or_else(|| {
                        InvalidInputError::new(format!(
                            "Invalid perfect principal part '{perfect}' (expected '-i')"
                        ))
                    })?
                    .to_string(),
            ),
            None => None,
        };
        let supine_stem = match &ppp {
            Some(ppp) => Some(
                ppp.strip_suffix("us")
                    .ok_or_else(|| {
                        InvalidInputError::new(format!(
                            "Invalid perfect participle '{ppp}' (expected '-us')"
                        ))
                    })?
                    .to_string(),
            ),
            None => None,
        };

        let mut endings = Endings::new();
        if deponent {
            build_deponent(&mut endings, &stem, supine_stem.as_deref(), conjugation);
        } else if semi_deponent {
            build_semi_deponent(
                &mut endings,
                &stem,
                infinitive,
                supine_stem.as_deref(),
                conjugation,
            );
        } else {
            build_regular(
                &mut endings,
                &stem,
                infinitive,
                perfect_stem.as_deref(),
                supine_stem.as_deref(),
                conjugation,
            );
        }

        Ok(Verb {
            present: present.to_string(),
            infinitive: Some(infinitive.to_string()),
            perfect: if deponent || semi_deponent {
                ppp.as_ref().map(|p| format!("{p} sum"))
            } else {
                perfect
            },
            ppp: if deponent || semi_deponent { None } else { ppp },
            meaning,
            conjugation,
            deponent,
            semi_deponent,
            endings,
        })
    }

    pub fn principal_parts(&self) -> Vec<String> {
        let mut parts = vec![self.present.clone()];
        parts.extend(self.infinitive.clone());
        parts.extend(self.perfect.clone());
        parts.extend(self.ppp.clone());
        parts
    }
}

fn detect_conjugation(
    present: &str,
    infinitive: &str,
    deponent: bool,
) -> Result<Conjugation, InvalidInputError> {
    let conjugation = if deponent {
        if infinitive.ends_with("ari") {
            Some(Conjugation::First)
        } else if infinitive.ends_with("eri") {
            Some(Conjugation::Second)
        } else if infinitive.ends_with("iri") {
            Some(Conjugation::Fourth)
        } else if infinitive.ends_with('i') {
            if present.ends_with("ior") {
                Some(Conjugation::Mixed)
            } else {
                Some(Conjugation::Third)
            }
        } else {
            None
        }
    } else if infinitive.ends_with("are") {
        Some(Conjugation::First)
    } else if infinitive.ends_with("ere") {
        if present.ends_with("eo") {
            Some(Conjugation::Second)
        } else if present.ends_with("io") {
            Some(Conjugation::Mixed)
        } else if present.ends_with('o') {
            Some(Conjugation::Third)
        } else {
            None
        }
    } else if infinitive.ends_with("ire") {
        Some(Conjugation::Fourth)
    } else {
        None
    };

    conjugation.ok_or_else(|| {
        InvalidInputError::new(format!(
            "Principal parts '{present}, {infinitive}' do not match any conjugation"
        ))
    })
}

fn present_stem(infinitive: &str, conjugation: Conjugation, deponent: bool) -> String {
    let suffix = if deponent {
        match conjugation {
            Conjugation::First => "ari",
            Conjugation::Second => "eri",
            Conjugation::Fourth => "iri",
            Conjugation::Third | Conjugation::Mixed => "i",
            Conjugation::Irregular => unreachable!(),
        }
    } else {
        match conjugation {
            Conjugation::First => "are",
            Conjugation::Second | Conjugation::Third | Conjugation::Mixed => "ere",
            Conjugation::Fourth => "ire",
            Conjugation::Irregular => unreachable!(),
        }
    };
    infinitive
        .strip_suffix(suffix)
        .expect("conjugation detection guarantees the suffix")
        .to_string()
}

fn add_finite_row(
    endings: &mut Endings,
    stem: &str,
    row: &t::Row,
    tense: Tense,
    voice: Voice,
    mood: Mood,
) {
    for number in Number::ALL {
        for person in Person::ALL {
            let suffix = row[person.row_index(number)];
            endings.insert(
                EndingKey::Finite {
                    tense,
                    voice,
                    mood,
                    person,
                    number,
                },
                format!("{stem}{suffix}"),
            );
        }
    }
}

/// Active perfect-system cells (indicative and subjunctive) from the
/// perfect stem. The third plural perfect keeps both "-erunt" and "-ere".
pub(crate) fn add_perfect_system_active(endings: &mut Endings, perfect_stem: &str, voice: Voice) {
    let rows: [(&t::Row, Tense, Mood); 5] = [
        (&t::PERFECT_ACTIVE_INDICATIVE, Tense::Perfect, Mood::Indicative),
        (&t::PLUPERFECT_ACTIVE_INDICATIVE, Tense::Pluperfect, Mood::Indicative),
        (&t::FUTURE_PERFECT_ACTIVE_INDICATIVE, Tense::FuturePerfect, Mood::Indicative),
        (&t::PERFECT_ACTIVE_SUBJUNCTIVE, Tense::Perfect, Mood::Subjunctive),
        (&t::PLUPERFECT_ACTIVE_SUBJUNCTIVE, Tense::Pluperfect, Mood::Subjunctive),
    ];
    for (row, tense, mood) in rows {
        for number in Number::ALL {
            for person in Person::ALL {
                let suffix = row[person.row_index(number)];
                let key = EndingKey::Finite {
                    tense,
                    voice,
                    mood,
                    person,
                    number,
                };
                if tense == Tense::Perfect
                    && mood == Mood::Indicative
                    && person == Person::Third
                    && number == Number::Plural
                {
                    endings.insert(
                        key,
                        Ending::multiple([
                            format!("{perfect_stem}erunt"),
                            format!("{perfect_stem}ere"),
                        ]),
                    );
                } else {
                    endings.insert(key, format!("{perfect_stem}{suffix}"));
                }
            }
        }
    }
}

/// Periphrastic perfect-system cells ("amatus sum", "amati sumus", ...)
/// built on the perfect participle. Used for the passive of regular verbs
/// and for the whole perfect system of deponents.
pub(crate) fn add_periphrastic_perfect(endings: &mut Endings, supine_stem: &str, voice: Voice) {
    let rows: [(&t::Row, Tense, Mood); 5] = [
        (&t::SUM_PRESENT, Tense::Perfect, Mood::Indicative),
        (&t::SUM_IMPERFECT, Tense::Pluperfect, Mood::Indicative),
        (&t::SUM_FUTURE, Tense::FuturePerfect, Mood::Indicative),
        (&t::SUM_PRESENT_SUBJUNCTIVE, Tense::Perfect, Mood::Subjunctive),
        (&t::SUM_IMPERFECT_SUBJUNCTIVE, Tense::Pluperfect, Mood::Subjunctive),
    ];
    for (row, tense, mood) in rows {
        for number in Number::ALL {
            let participle = match number {
                Number::Singular => format!("{supine_stem}us"),
                Number::Plural => format!("{supine_stem}i"),
            };
            for person in Person::ALL {
                let auxiliary = row[person.row_index(number)];
                endings.insert(
                    EndingKey::Finite {
                        tense,
                        voice,
                        mood,
                        person,
                        number,
                    },
                    format!("{participle} {auxiliary}"),
                );
            }
        }
    }
}

/// Declines the present active participle: third declension, one
/// termination, with both "-e" and "-i" ablatives.
pub(crate) fn add_present_participle(endings: &mut Endings, nom: &str, stem: &str, voice: Voice) {
    let shape = ThirdDeclension {
        noms: [nom, nom, nom],
        stem,
        ablative: AblativeSingular::Both,
        i_stem_genitive: true,
        i_stem_neuter: true,
    };
    for (gender, case, number, ending) in decline::third_declension(&shape) {
        endings.insert(
            EndingKey::Participle {
                tense: Tense::Present,
                voice,
                gender,
                case,
                number,
            },
            ending,
        );
    }
}

/// Declines a first/second-declension participle (perfect passive, future
/// active, gerundive) under the given key space.
pub(crate) fn add_212_participle(endings: &mut Endings, stem: &str, tense: Tense, voice: Voice) {
    let nom_m = format!("{stem}us");
    let nom_f = format!("{stem}a");
    let nom_n = format!("{stem}um");
    for (gender, case, number, ending) in decline::first_second(stem, &nom_m, &nom_f, &nom_n) {
        endings.insert(
            EndingKey::Participle {
                tense,
                voice,
                gender,
                case,
                number,
            },
            ending,
        );
    }
}

pub(crate) fn add_gerund(endings: &mut Endings, gerund_stem: &str) {
    for case in Case::GERUND {
        let suffix = match case {
            Case::Accusative => "um",
            Case::Genitive => "i",
            Case::Dative | Case::Ablative => "o",
            _ => unreachable!(),
        };
        endings.insert(EndingKey::Gerund { case }, format!("{gerund_stem}{suffix}"));
    }
}

pub(crate) fn add_supine(endings: &mut Endings, supine_stem: &str) {
    endings.insert(
        EndingKey::Supine { case: Case::Accusative },
        format!("{supine_stem}um"),
    );
    endings.insert(
        EndingKey::Supine { case: Case::Ablative },
        format!("{supine_stem}u"),
    );
}

fn build_regular(
    endings: &mut Endings,
    stem: &str,
    infinitive: &str,
    perfect_stem: Option<&str>,
    supine_stem: Option<&str>,
    conjugation: Conjugation,
) {
    let c = conjugation.table_index();
    let themes = t::THEMES[c];

    // Finite present system, both voices.
    add_finite_row(endings, stem, &t::PRESENT_ACTIVE_INDICATIVE[c], Tense::Present, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::IMPERFECT_ACTIVE_INDICATIVE[c], Tense::Imperfect, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::FUTURE_ACTIVE_INDICATIVE[c], Tense::Future, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::PRESENT_ACTIVE_SUBJUNCTIVE[c], Tense::Present, Voice::Active, Mood::Subjunctive);
    add_finite_row(endings, stem, &t::IMPERFECT_ACTIVE_SUBJUNCTIVE[c], Tense::Imperfect, Voice::Active, Mood::Subjunctive);
    add_finite_row(endings, stem, &t::PRESENT_PASSIVE_INDICATIVE[c], Tense::Present, Voice::Passive, Mood::Indicative);
    add_finite_row(endings, stem, &t::IMPERFECT_PASSIVE_INDICATIVE[c], Tense::Imperfect, Voice::Passive, Mood::Indicative);
    add_finite_row(endings, stem, &t::FUTURE_PASSIVE_INDICATIVE[c], Tense::Future, Voice::Passive, Mood::Indicative);
    add_finite_row(endings, stem, &t::PRESENT_PASSIVE_SUBJUNCTIVE[c], Tense::Present, Voice::Passive, Mood::Subjunctive);
    add_finite_row(endings, stem, &t::IMPERFECT_PASSIVE_SUBJUNCTIVE[c], Tense::Imperfect, Voice::Passive, Mood::Subjunctive);

    // Perfect system.
    if let Some(perfect_stem) = perfect_stem {
        add_perfect_system_active(endings, perfect_stem, Voice::Active);
    }
    if let Some(supine_stem) = supine_stem {
        add_periphrastic_perfect(endings, supine_stem, Voice::Passive);
    }

    // Imperatives.
    add_imperatives(endings, stem, c);

    // Infinitives.
    endings.insert(
        EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active },
        infinitive.to_string(),
    );
    endings.insert(
        EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Passive },
        format!("{stem}{}", themes[1]),
    );
    if let Some(perfect_stem) = perfect_stem {
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Active },
            format!("{perfect_stem}isse"),
        );
    }
    if let Some(supine_stem) = supine_stem {
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Passive },
            format!("{supine_stem}us esse"),
        );
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Active },
            format!("{supine_stem}urus esse"),
        );
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Passive },
            format!("{supine_stem}um iri"),
        );
    }

    // Participles, gerund, supine.
    add_present_participle(
        endings,
        &format!("{stem}{}", themes[2]),
        &format!("{stem}{}", themes[3]),
        Voice::Active,
    );
    if let Some(supine_stem) = supine_stem {
        add_212_participle(endings, supine_stem, Tense::Perfect, Voice::Passive);
        add_212_participle(endings, &format!("{supine_stem}ur"), Tense::Future, Voice::Active);
        add_supine(endings, supine_stem);
    }
    add_212_participle(endings, &format!("{stem}{}", themes[4]), Tense::Future, Voice::Passive);
    add_gerund(endings, &format!("{stem}{}", themes[4]));
}

fn add_imperatives(endings: &mut Endings, stem: &str, c: usize) {
    let present = t::PRESENT_ACTIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", present[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", present[1]),
    );

    let present_passive = t::PRESENT_PASSIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Passive, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", present_passive[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Passive, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", present_passive[1]),
    );

    let future = t::FUTURE_ACTIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", future[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Singular },
        format!("{stem}{}", future[1]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", future[2]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Plural },
        format!("{stem}{}", future[3]),
    );

    let future_passive = t::FUTURE_PASSIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Passive, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", future_passive[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Passive, person: Person::Third, number: Number::Singular },
        format!("{stem}{}", future_passive[1]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Passive, person: Person::Third, number: Number::Plural },
        format!("{stem}{}", future_passive[2]),
    );
}

/// Deponents: passive-shaped morphology, keyed as active. The learner
/// parses "sequitur" as a present 3rd-person form of a verb whose sense is
/// active, and the English side renders it actively throughout.
fn build_deponent(
    endings: &mut Endings,
    stem: &str,
    supine_stem: Option<&str>,
    conjugation: Conjugation,
) {
    let c = conjugation.table_index();
    let themes = t::THEMES[c];

    add_finite_row(endings, stem, &t::PRESENT_PASSIVE_INDICATIVE[c], Tense::Present, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::IMPERFECT_PASSIVE_INDICATIVE[c], Tense::Imperfect, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::FUTURE_PASSIVE_INDICATIVE[c], Tense::Future, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::PRESENT_PASSIVE_SUBJUNCTIVE[c], Tense::Present, Voice::Active, Mood::Subjunctive);
    add_finite_row(endings, stem, &t::IMPERFECT_PASSIVE_SUBJUNCTIVE[c], Tense::Imperfect, Voice::Active, Mood::Subjunctive);

    if let Some(supine_stem) = supine_stem {
        add_periphrastic_perfect(endings, supine_stem, Voice::Active);
    }

    let present_passive = t::PRESENT_PASSIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", present_passive[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", present_passive[1]),
    );
    let future_passive = t::FUTURE_PASSIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", future_passive[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Singular },
        format!("{stem}{}", future_passive[1]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Plural },
        format!("{stem}{}", future_passive[2]),
    );

    endings.insert(
        EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active },
        format!("{stem}{}", themes[1]),
    );
    if let Some(supine_stem) = supine_stem {
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Active },
            format!("{supine_stem}us esse"),
        );
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Active },
            format!("{supine_stem}urus esse"),
        );
    }

    add_present_participle(
        endings,
        &format!("{stem}{}", themes[2]),
        &format!("{stem}{}", themes[3]),
        Voice::Active,
    );
    if let Some(supine_stem) = supine_stem {
        add_212_participle(endings, supine_stem, Tense::Perfect, Voice::Active);
        add_212_participle(endings, &format!("{supine_stem}ur"), Tense::Future, Voice::Active);
        add_supine(endings, supine_stem);
    }
    // The gerundive keeps its passive sense even for deponents.
    add_212_participle(endings, &format!("{stem}{}", themes[4]), Tense::Future, Voice::Passive);
    add_gerund(endings, &format!("{stem}{}", themes[4]));
}

/// Semi-deponents (audeo, ausus sum): a fully active present system, then
/// a passive-shaped perfect with active sense.
fn build_semi_deponent(
    endings: &mut Endings,
    stem: &str,
    infinitive: &str,
    supine_stem: Option<&str>,
    conjugation: Conjugation,
) {
    let c = conjugation.table_index();
    let themes = t::THEMES[c];

    add_finite_row(endings, stem, &t::PRESENT_ACTIVE_INDICATIVE[c], Tense::Present, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::IMPERFECT_ACTIVE_INDICATIVE[c], Tense::Imperfect, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::FUTURE_ACTIVE_INDICATIVE[c], Tense::Future, Voice::Active, Mood::Indicative);
    add_finite_row(endings, stem, &t::PRESENT_ACTIVE_SUBJUNCTIVE[c], Tense::Present, Voice::Active, Mood::Subjunctive);
    add_finite_row(endings, stem, &t::IMPERFECT_ACTIVE_SUBJUNCTIVE[c], Tense::Imperfect, Voice::Active, Mood::Subjunctive);

    if let Some(supine_stem) = supine_stem {
        add_periphrastic_perfect(endings, supine_stem, Voice::Active);
    }

    let present = t::PRESENT_ACTIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", present[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", present[1]),
    );
    let future = t::FUTURE_ACTIVE_IMPERATIVE[c];
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Second, number: Number::Singular },
        format!("{stem}{}", future[0]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Singular },
        format!("{stem}{}", future[1]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Second, number: Number::Plural },
        format!("{stem}{}", future[2]),
    );
    endings.insert(
        EndingKey::Imperative { tense: Tense::Future, voice: Voice::Active, person: Person::Third, number: Number::Plural },
        format!("{stem}{}", future[3]),
    );

    endings.insert(
        EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active },
        infinitive.to_string(),
    );
    if let Some(supine_stem) = supine_stem {
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Perfect, voice: Voice::Active },
            format!("{supine_stem}us esse"),
        );
        endings.insert(
            EndingKey::Infinitive { tense: Tense::Future, voice: Voice::Active },
            format!("{supine_stem}urus esse"),
        );
    }

    add_present_participle(
        endings,
        &format!("{stem}{}", themes[2]),
        &format!("{stem}{}", themes[3]),
        Voice::Active,
    );
    if let Some(supine_stem) = supine_stem {
        add_212_participle(endings, supine_stem, Tense::Perfect, Voice::Active);
        add_212_participle(endings, &format!("{supine_stem}ur"), Tense::Future, Voice::Active);
        add_supine(endings, supine_stem);
    }
    add_212_participle(endings, &format!("{stem}{}", themes[4]), Tense::Future, Voice::Passive);
    add_gerund(endings, &format!("{stem}{}", themes[4]));
}
