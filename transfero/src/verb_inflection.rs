//! English renderings of Latin verb cells.
//!
//! Every standard periphrasis a learner might legitimately write is
//! produced, the principal one first. Finite cells also get
//! pronoun-prefixed variants ("he hears" next to "hears").

use accido::{Case, EndingKey, Mood, Number, Person, Tense, Voice};

use crate::english_verb::{verb_forms, VerbForms};

/// Orders-preserving dedup shared by the inflection modules.
pub(crate) fn dedupe(phrases: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    phrases
        .into_iter()
        .filter(|phrase| seen.insert(phrase.clone()))
        .collect()
}

fn be_present(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::First, Number::Singular) => "am",
        (Person::Third, Number::Singular) => "is",
        _ => "are",
    }
}

fn be_past(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::First | Person::Third, Number::Singular) => "was",
        _ => "were",
    }
}

fn have_present(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::Third, Number::Singular) => "has",
        _ => "have",
    }
}

fn do_present(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::Third, Number::Singular) => "does",
        _ => "do",
    }
}

fn subject_pronouns(person: Person, number: Number) -> &'static [&'static str] {
    match (person, number) {
        (Person::First, Number::Singular) => &["I"],
        (Person::Second, Number::Singular) => &["you"],
        (Person::Third, Number::Singular) => &["he", "she", "it"],
        (Person::First, Number::Plural) => &["we"],
        (Person::Second, Number::Plural) => &["you"],
        (Person::Third, Number::Plural) => &["they"],
    }
}

/// English phrases for any verb-space key. Returns an empty vector only for
/// key shapes that are not verb cells.
pub fn inflections(lemma: &str, key: &EndingKey, english_subjunctives: bool) -> Vec<String> {
    let forms = verb_forms(lemma);
    let phrases = match *key {
        EndingKey::Finite { tense, voice, mood, person, number } => {
            finite(&forms, tense, voice, mood, person, number, english_subjunctives)
        }
        EndingKey::Imperative { tense, voice, person, number } => {
            imperative(&forms, tense, voice, person, number)
        }
        EndingKey::Infinitive { tense, voice } => infinitive(&forms, tense, voice),
        EndingKey::Participle { tense, voice, .. } => participle(&forms, tense, voice),
        EndingKey::Gerund { case } => gerund(&forms, case),
        EndingKey::Supine { .. } => vec![format!("to {}", forms.lemma)],
        _ => Vec::new(),
    };
    dedupe(phrases)
}

#[allow(clippy::too_many_arguments)]
fn finite(
    forms: &VerbForms,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    person: Person,
    number: Number,
    english_subjunctives: bool,
) -> Vec<String> {
    let base = if mood == Mood::Subjunctive && english_subjunctives {
        subjunctive_base(forms, tense, voice)
    } else {
        indicative_base(forms, tense, voice, person, number)
    };
    let mut phrases = base.clone();
    for pronoun in subject_pronouns(person, number) {
        for phrase in &base {
            phrases.push(format!("{pronoun} {phrase}"));
        }
    }
    phrases
}

fn indicative_base(
    forms: &VerbForms,
    tense: Tense,
    voice: Voice,
    person: Person,
    number: Number,
) -> Vec<String> {
    let v = &forms.lemma;
    let ving = &forms.present_participle;
    let vpast = &forms.past;
    let vppl = &forms.past_participle;
    let be = be_present(person, number);
    let was = be_past(person, number);
    let have = have_present(person, number);

    match (voice, tense) {
        (Voice::Active, Tense::Present) => {
            let conjugated = if (person, number) == (Person::Third, Number::Singular) {
                forms.third_singular.clone()
            } else {
                v.clone()
            };
            vec![
                conjugated,
                format!("{be} {ving}"),
                format!("{} {v}", do_present(person, number)),
            ]
        }
        (Voice::Active, Tense::Imperfect) => vec![
            format!("{was} {ving}"),
            vpast.clone(),
            format!("used to {v}"),
        ],
        (Voice::Active, Tense::Future) => vec![
            format!("will {v}"),
            format!("shall {v}"),
            format!("will be {ving}"),
            format!("shall be {ving}"),
        ],
        (Voice::Active, Tense::Perfect) => vec![
            vpast.clone(),
            format!("{have} {vppl}"),
            format!("did {v}"),
        ],
        (Voice::Active, Tense::Pluperfect) => vec![format!("had {vppl}")],
        (Voice::Active, Tense::FuturePerfect) => vec![
            format!("will have {vppl}"),
            format!("shall have {vppl}"),
        ],
        (Voice::Passive, Tense::Present) => vec![
            format!("{be} {vppl}"),
            format!("{be} being {vppl}"),
        ],
        (Voice::Passive, Tense::Imperfect) => vec![
            format!("{was} being {vppl}"),
            format!("{was} {vppl}"),
        ],
        (Voice::Passive, Tense::Future) => vec![
            format!("will be {vppl}"),
            format!("shall be {vppl}"),
        ],
        (Voice::Passive, Tense::Perfect) => vec![
            format!("{have} been {vppl}"),
            format!("{was} {vppl}"),
        ],
        (Voice::Passive, Tense::Pluperfect) => vec![format!("had been {vppl}")],
        (Voice::Passive, Tense::FuturePerfect) => vec![format!("will have been {vppl}")],
    }
}

fn subjunctive_base(forms: &VerbForms, tense: Tense, voice: Voice) -> Vec<String> {
    let v = &forms.lemma;
    let vppl = &forms.past_participle;
    match (voice, tense) {
        (Voice::Active, Tense::Present) => vec![format!("may {v}")],
        (Voice::Active, Tense::Imperfect) => vec![format!("might {v}"), format!("would {v}")],
        (Voice::Active, Tense::Perfect) => vec![format!("may have {vppl}")],
        (Voice::Active, _) => vec![
            format!("might have {vppl}"),
            format!("would have {vppl}"),
        ],
        (Voice::Passive, Tense::Present) => vec![format!("may be {vppl}")],
        (Voice::Passive, Tense::Imperfect) => vec![
            format!("might be {vppl}"),
            format!("would be {vppl}"),
        ],
        (Voice::Passive, Tense::Perfect) => vec![format!("may have been {vppl}")],
        (Voice::Passive, _) => vec![
            format!("might have been {vppl}"),
            format!("would have been {vppl}"),
        ],
    }
}

fn imperative(
    forms: &VerbForms,
    tense: Tense,
    voice: Voice,
    person: Person,
    number: Number,
) -> Vec<String> {
    let v = &forms.lemma;
    let vppl = &forms.past_participle;
    match (tense, voice, person) {
        (Tense::Present, Voice::Active, _) => vec![v.clone()],
        (Tense::Present, Voice::Passive, _) => vec![format!("be {vppl}")],
        (Tense::Future, Voice::Active, Person::Second) => {
            vec![format!("you shall {v}"), v.clone()]
        }
        (Tense::Future, Voice::Active, _) => third_person_lets(number, v),
        (Tense::Future, Voice::Passive, Person::Second) => {
            vec![format!("you shall be {vppl}")]
        }
        (Tense::Future, Voice::Passive, _) => third_person_lets(number, &format!("be {vppl}")),
        _ => Vec::new(),
    }
}

fn third_person_lets(number: Number, rest: &str) -> Vec<String> {
    match number {
        Number::Singular => vec![
            format!("let him {rest}"),
            format!("let her {rest}"),
            format!("let it {rest}"),
        ],
        Number::Plural => vec![format!("let them {rest}")],
    }
}

fn infinitive(forms: &VerbForms, tense: Tense, voice: Voice) -> Vec<String> {
    let v = &forms.lemma;
    let vppl = &forms.past_participle;
    match (tense, voice) {
        (Tense::Present, Voice::Active) => vec![format!("to {v}")],
        (Tense::Present, Voice::Passive) => vec![format!("to be {vppl}")],
        (Tense::Perfect, Voice::Active) => vec![format!("to have {vppl}")],
        (Tense::Perfect, Voice::Passive) => vec![format!("to have been {vppl}")],
        (Tense::Future, Voice::Active) => vec![
            format!("to be about to {v}"),
            format!("to be going to {v}"),
        ],
        (Tense::Future, Voice::Passive) => vec![format!("to be about to be {vppl}")],
        _ => Vec::new(),
    }
}

fn participle(forms: &VerbForms, tense: Tense, voice: Voice) -> Vec<String> {
    let v = &forms.lemma;
    let ving = &forms.present_participle;
    let vppl = &forms.past_participle;
    match (tense, voice) {
        (Tense::Present, Voice::Active) => vec![ving.clone()],
        (Tense::Perfect, Voice::Passive) => {
            vec![format!("having been {vppl}"), vppl.clone()]
        }
        // Deponents key their perfect participle as active: "having followed".
        (Tense::Perfect, Voice::Active) => vec![format!("having {vppl}")],
        (Tense::Future, Voice::Active) => {
            vec![format!("about to {v}"), format!("going to {v}")]
        }
        (Tense::Future, Voice::Passive) => vec![
            format!("to be {vppl}"),
            format!("requiring to be {vppl}"),
        ],
        _ => Vec::new(),
    }
}

fn gerund(forms: &VerbForms, case: Case) -> Vec<String> {
    let ving = &forms.present_participle;
    match case {
        Case::Genitive => vec![format!("of {ving}")],
        Case::Dative => vec![format!("for {ving}")],
        Case::Ablative => vec![format!("by {ving}")],
        _ => vec![ving.clone()],
    }
}
