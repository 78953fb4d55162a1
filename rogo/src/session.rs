//! Question sampling and assembly.
//!
//! A session draws `number-of-questions` questions from the filtered
//! candidate pool: pick an enabled question type uniformly, pick a
//! compatible candidate uniformly, assemble the payload. A type with no
//! compatible candidate is retried with another; when every enabled type
//! has come up empty for one draw the session fails.

use std::collections::BTreeSet;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use accido::{EndingKey, PartOfSpeech, Word};
use lego::VocabList;
use transfero::{find_inflections, find_main_inflection, Synonyms};

use crate::filter::{build_pool, Candidate};
use crate::question::{
    MultipleChoicePayload, ParseWordCompToLatPayload, ParseWordLatToCompPayload,
    PrincipalPartsPayload, Question, TypeInPayload,
};
use crate::settings::Settings;

/// Sampling exhaustion: no enabled question type has a compatible
/// candidate left.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No questions could be generated from the given vocab list and settings.")]
pub struct NoQuestionsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionType {
    TypeInEngToLat,
    TypeInLatToEng,
    ParseWordLatToComp,
    ParseWordCompToLat,
    PrincipalParts,
    MultipleChoiceEngToLat,
    MultipleChoiceLatToEng,
}

/// Enum order is the canonical order; the gate flags come from the
/// settings schema.
const QUESTION_TYPES: [(QuestionType, &str); 7] = [
    (QuestionType::TypeInEngToLat, "include-typein-engtolat"),
    (QuestionType::TypeInLatToEng, "include-typein-lattoeng"),
    (QuestionType::ParseWordLatToComp, "include-parse"),
    (QuestionType::ParseWordCompToLat, "include-inflect"),
    (QuestionType::PrincipalParts, "include-principal-parts"),
    (QuestionType::MultipleChoiceEngToLat, "include-multiplechoice-engtolat"),
    (QuestionType::MultipleChoiceLatToEng, "include-multiplechoice-lattoeng"),
];

/// Generates one session's questions. Deterministic given the RNG state,
/// the list, and the settings.
pub fn generate_session<R: Rng>(
    list: &VocabList,
    settings: &Settings,
    synonyms: &dyn Synonyms,
    rng: &mut R,
) -> Result<Vec<Question>, NoQuestionsError> {
    let pool = build_pool(list, settings);
    log::debug!("candidate pool holds {} cells", pool.len());

    // Per-type candidate views, all in pool order.
    let cell_candidates: Vec<&Candidate> = pool.iter().collect();
    let parse_candidates: Vec<&Candidate> = pool
        .iter()
        .filter(|candidate| candidate.key != EndingKey::Regular)
        .collect();
    let word_indices: Vec<usize> = pool.iter().map(|c| c.word_index).unique().collect();
    let principal_parts_words: Vec<usize> = word_indices
        .iter()
        .copied()
        .filter(|&index| list.words[index].principal_parts().len() > 1)
        .collect();

    let enabled: Vec<QuestionType> = QUESTION_TYPES
        .iter()
        .filter(|(_, flag)| settings.flag(flag))
        .map(|(question_type, _)| *question_type)
        .collect();
    if enabled.is_empty() {
        return Err(NoQuestionsError);
    }

    let subjunctives = settings.flag("english-subjunctives");
    let options = settings.multiple_choice_options();

    let mut questions = Vec::new();
    for _ in 0..settings.number_of_questions() {
        let mut attempts = enabled.clone();
        attempts.shuffle(rng);

        let mut question = None;
        for question_type in attempts {
            question = match question_type {
                QuestionType::TypeInEngToLat => {
                    pick(rng, &cell_candidates).map(|c| type_in_eng_to_lat(list, c, subjunctives))
                }
                QuestionType::TypeInLatToEng => pick(rng, &cell_candidates)
                    .map(|c| type_in_lat_to_eng(list, c, synonyms, subjunctives)),
                QuestionType::ParseWordLatToComp => {
                    pick(rng, &parse_candidates).map(|c| parse_lat_to_comp(list, c))
                }
                QuestionType::ParseWordCompToLat => {
                    pick(rng, &parse_candidates).map(|c| parse_comp_to_lat(list, c))
                }
                QuestionType::PrincipalParts => {
                    pick(rng, &principal_parts_words).map(|&index| principal_parts(list, index))
                }
                QuestionType::MultipleChoiceEngToLat => {
                    multiple_choice(list, &word_indices, options, rng, true)
                }
                QuestionType::MultipleChoiceLatToEng => {
                    multiple_choice(list, &word_indices, options, rng, false)
                }
            };
            if question.is_some() {
                break;
            }
        }
        questions.push(question.ok_or(NoQuestionsError)?);
    }
    Ok(questions)
}

fn pick<'a, T, R: Rng>(rng: &mut R, candidates: &'a [T]) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(&candidates[index])
}

fn sorted(mut answers: Vec<String>) -> Vec<String> {
    answers.sort();
    answers.dedup();
    answers
}

fn word_and_pos<'a>(list: &'a VocabList, candidate: &Candidate) -> (&'a Word, PartOfSpeech) {
    let word = &list.words[candidate.word_index];
    (word, word.part_of_speech())
}

fn type_in_eng_to_lat(list: &VocabList, candidate: &Candidate, subjunctives: bool) -> Question {
    let (word, pos) = word_and_pos(list, candidate);
    let meaning = word.meaning().main();
    let prompt = find_main_inflection(meaning, &candidate.key, pos, subjunctives);
    let main_answer = word
        .get(&candidate.key)
        .expect("candidate keys come from the word's own paradigm")
        .main_form()
        .to_string();

    // Every Latin form of this word whose cell translates to the prompt is
    // an acceptable answer.
    let mut answers = Vec::new();
    for (key, ending) in word.forms() {
        if find_inflections(meaning, key, pos, subjunctives).contains(&prompt) {
            answers.extend(ending.forms().map(str::to_string));
        }
    }

    Question::TypeInEngToLat(TypeInPayload {
        prompt,
        main_answer,
        answers: sorted(answers),
    })
}

fn type_in_lat_to_eng(
    list: &VocabList,
    candidate: &Candidate,
    synonyms: &dyn Synonyms,
    subjunctives: bool,
) -> Question {
    let (word, pos) = word_and_pos(list, candidate);
    let prompt = word
        .get(&candidate.key)
        .expect("candidate keys come from the word's own paradigm")
        .main_form()
        .to_string();
    let main_answer =
        find_main_inflection(word.meaning().main(), &candidate.key, pos, subjunctives);

    let mut lemmas: Vec<String> = word.meaning().all().map(str::to_string).collect();
    let mut synonym_set = BTreeSet::new();
    for lemma in &lemmas {
        synonym_set.extend(synonyms.get(lemma));
    }
    lemmas.extend(synonym_set);

    let mut answers = Vec::new();
    for key in word.find_keys(&prompt) {
        for lemma in &lemmas {
            answers.extend(find_inflections(lemma, &key, pos, subjunctives));
        }
    }

    Question::TypeInLatToEng(TypeInPayload {
        prompt,
        main_answer,
        answers: sorted(answers),
    })
}

fn parse_lat_to_comp(list: &VocabList, candidate: &Candidate) -> Question {
    let (word, _) = word_and_pos(list, candidate);
    let prompt = word
        .get(&candidate.key)
        .expect("candidate keys come from the word's own paradigm")
        .main_form()
        .to_string();
    let answers: Vec<String> = word
        .find_keys(&prompt)
        .iter()
        .map(EndingKey::components)
        .collect();

    Question::ParseWordLatToComp(ParseWordLatToCompPayload {
        prompt,
        dictionary_entry: word.dictionary_entry(),
        main_answer: candidate.key.components(),
        answers: sorted(answers),
    })
}

fn parse_comp_to_lat(list: &VocabList, candidate: &Candidate) -> Question {
    let (word, _) = word_and_pos(list, candidate);
    let ending = word
        .get(&candidate.key)
        .expect("candidate keys come from the word's own paradigm");

    Question::ParseWordCompToLat(ParseWordCompToLatPayload {
        prompt: word.dictionary_entry(),
        components: candidate.key.components(),
        main_answer: ending.main_form().to_string(),
        answers: sorted(ending.forms().map(str::to_string).collect()),
    })
}

fn principal_parts(list: &VocabList, word_index: usize) -> Question {
    let parts = list.words[word_index].principal_parts();
    Question::PrincipalParts(PrincipalPartsPayload {
        prompt: parts[0].clone(),
        principal_parts: parts,
    })
}

/// Builds a multiple-choice question, or `None` when the pool cannot
/// supply enough distinct distractors.
fn multiple_choice<R: Rng>(
    list: &VocabList,
    word_indices: &[usize],
    options: usize,
    rng: &mut R,
    eng_to_lat: bool,
) -> Option<Question> {
    let &answer_index = pick(rng, word_indices)?;
    let answer_word = &list.words[answer_index];
    let (prompt, answer) = if eng_to_lat {
        (
            answer_word.meaning().main().to_string(),
            answer_word.headword().to_string(),
        )
    } else {
        (
            answer_word.headword().to_string(),
            answer_word.meaning().main().to_string(),
        )
    };

    // Distractors: other words, no duplicate meanings, never the answer.
    let mut others: Vec<usize> = word_indices
        .iter()
        .copied()
        .filter(|&index| index != answer_index)
        .collect();
    others.shuffle(rng);

    let mut choices = vec![answer.clone()];
    let mut seen_meanings = vec![answer_word.meaning().main().to_string()];
    for index in others {
        if choices.len() == options {
            break;
        }
        let word = &list.words[index];
        let meaning = word.meaning().main().to_string();
        if seen_meanings.contains(&meaning) {
            continue;
        }
        let choice = if eng_to_lat {
            word.headword().to_string()
        } else {
            meaning.clone()
        };
        if choices.contains(&choice) {
            continue;
        }
        seen_meanings.push(meaning);
        choices.push(choice);
    }
    if choices.len() < options {
        return None;
    }
    choices.shuffle(rng);

    let payload = MultipleChoicePayload { prompt, answer, choices };
    Some(if eng_to_lat {
        Question::MultipleChoiceEngToLat(payload)
    } else {
        Question::MultipleChoiceLatToEng(payload)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use transfero::NoSynonyms;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn sample_list() -> VocabList {
        lego::read_list(
            "@ Noun\nfarmer: agricola, agricolae, (m)\ngirl: puella, puellae, (f)\nking: rex, regis, (m)\n\
             \n@ Verb\ntake: capio, capere, cepi, captus\nhear: audio, audire, audivi, auditus\n\
             \n@ Adjective\nlight: levis, leve, (3-2)\nhappy: laetus, laeta, laetum\n\
             \n@ Pronoun\nthis: hic, haec, hoc\n",
        )
        .unwrap()
    }

    #[test]
    fn test_question_count_and_types() {
        let list = sample_list();
        let settings = Settings::permissive(
            12,
            3,
            &["include-typein-engtolat", "include-parse", "include-multiplechoice-lattoeng"],
        );
        let questions =
            generate_session(&list, &settings, &NoSynonyms, &mut rng(7)).unwrap();
        assert_eq!(questions.len(), 12);
        for question in &questions {
            assert!(matches!(
                question.type_name(),
                "TypeInEngToLatQuestion" | "ParseWordLatToCompQuestion" | "MultipleChoiceLatToEngQuestion"
            ));
        }
    }

    #[test]
    fn test_multiple_choice_invariants() {
        let list = sample_list();
        let settings = Settings::permissive(20, 4, &["include-multiplechoice-engtolat"]);
        let questions =
            generate_session(&list, &settings, &NoSynonyms, &mut rng(3)).unwrap();
        for question in questions {
            let Question::MultipleChoiceEngToLat(payload) = question else {
                panic!("unexpected type");
            };
            assert_eq!(payload.choices.len(), 4);
            assert!(payload.choices.contains(&payload.answer));
            let unique: std::collections::HashSet<_> = payload.choices.iter().collect();
            assert_eq!(unique.len(), payload.choices.len());
        }
    }

    #[test]
    fn test_multiple_choice_exhaustion() {
        let list = lego::read_list("@ Noun\nfarmer: agricola, agricolae, (m)").unwrap();
        let settings = Settings::permissive(1, 3, &["include-multiplechoice-engtolat"]);
        let error = generate_session(&list, &settings, &NoSynonyms, &mut rng(1));
        assert_eq!(error.unwrap_err(), NoQuestionsError);
    }

    #[test]
    fn test_determinism_same_seed() {
        let list = sample_list();
        let settings = Settings::permissive(
            15,
            3,
            &[
                "include-typein-engtolat",
                "include-typein-lattoeng",
                "include-parse",
                "include-inflect",
                "include-principal-parts",
                "include-multiplechoice-engtolat",
                "include-multiplechoice-lattoeng",
            ],
        );
        let a = generate_session(&list, &settings, &NoSynonyms, &mut rng(42)).unwrap();
        let b = generate_session(&list, &settings, &NoSynonyms, &mut rng(42)).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_agricolae_parse_answers() {
        // End-to-end scenario: parsing "agricolae".
        let list = lego::read_list("@ Noun\nfarmer: agricola, agricolae, (m)").unwrap();
        let settings = Settings::permissive(40, 3, &["include-parse"]);
        let questions =
            generate_session(&list, &settings, &NoSynonyms, &mut rng(11)).unwrap();
        let parsed = questions
            .iter()
            .find_map(|q| match q {
                Question::ParseWordLatToComp(payload) if payload.prompt == "agricolae" => {
                    Some(payload)
                }
                _ => None,
            })
            .expect("40 draws over a 12-cell paradigm hit 'agricolae'");
        assert_eq!(parsed.dictionary_entry, "farmer: agricola, agricolae, (m)");
        for expected in [
            "dative singular",
            "genitive singular",
            "nominative plural",
            "vocative plural",
        ] {
            assert!(parsed.answers.contains(&expected.to_string()), "{expected}");
        }
        // Sorted and deduplicated.
        let mut sorted_answers = parsed.answers.clone();
        sorted_answers.sort();
        sorted_answers.dedup();
        assert_eq!(parsed.answers, sorted_answers);
    }

    #[test]
    fn test_capiens_inflect_answer() {
        // End-to-end scenario: "present active participle neuter accusative
        // singular" of capio is "capiens".
        let list = lego::read_list("@ Verb\ntake: capio, capere, cepi, captus").unwrap();
        let word = &list.words[0];
        let key = EndingKey::Participle {
            tense: accido::Tense::Present,
            voice: accido::Voice::Active,
            gender: accido::Gender::Neuter,
            case: accido::Case::Accusative,
            number: accido::Number::Singular,
        };
        let candidate = Candidate { word_index: 0, key };
        let Question::ParseWordCompToLat(payload) = parse_comp_to_lat(&list, &candidate) else {
            panic!("unexpected type");
        };
        assert_eq!(
            payload.components,
            "present active participle neuter accusative singular"
        );
        assert_eq!(payload.main_answer, "capiens");
        assert_eq!(payload.prompt, word.dictionary_entry());
    }

    #[test]
    fn test_levioris_answers() {
        // End-to-end scenario: "levioris" accepts both comparative shapes.
        let list = lego::read_list("@ Adjective\nlight: levis, leve, (3-2)").unwrap();
        let key = EndingKey::Adjective {
            degree: accido::Degree::Comparative,
            gender: accido::Gender::Masculine,
            case: accido::Case::Genitive,
            number: accido::Number::Singular,
        };
        let candidate = Candidate { word_index: 0, key };
        let Question::TypeInLatToEng(payload) =
            type_in_lat_to_eng(&list, &candidate, &NoSynonyms, false)
        else {
            panic!("unexpected type");
        };
        assert_eq!(payload.prompt, "levioris");
        assert!(payload.answers.contains(&"lighter".to_string()));
        assert!(payload.answers.contains(&"more light".to_string()));
    }

    #[test]
    fn test_harum_main_answer() {
        // End-to-end scenario: "genitive plural feminine" of hic.
        let list = lego::read_list("@ Pronoun\nthis: hic, haec, hoc").unwrap();
        let key = EndingKey::Pronoun {
            gender: accido::Gender::Feminine,
            case: accido::Case::Genitive,
            number: accido::Number::Plural,
        };
        let candidate = Candidate { word_index: 0, key };
        let Question::ParseWordCompToLat(payload) = parse_comp_to_lat(&list, &candidate) else {
            panic!("unexpected type");
        };
        assert_eq!(payload.components, "genitive plural feminine");
        assert_eq!(payload.main_answer, "harum");
    }

    #[test]
    fn test_deponent_answers_stay_active() {
        let list = lego::read_list("@ Verb\nfollow: sequor, sequi, secutus sum").unwrap();
        let key = EndingKey::Finite {
            tense: accido::Tense::Present,
            voice: accido::Voice::Active,
            mood: accido::Mood::Indicative,
            person: accido::Person::Third,
            number: accido::Number::Singular,
        };
        let candidate = Candidate { word_index: 0, key };
        let Question::TypeInLatToEng(payload) =
            type_in_lat_to_eng(&list, &candidate, &NoSynonyms, false)
        else {
            panic!("unexpected type");
        };
        assert_eq!(payload.prompt, "sequitur");
        assert!(payload.answers.contains(&"follows".to_string()));
        assert!(!payload.answers.iter().any(|a| a.contains("is followed")));
    }

    #[test]
    fn test_synonyms_expand_answers() {
        let db = transfero::SynonymDb::from_entries(std::collections::HashMap::from([(
            "take".to_string(),
            vec!["seize".to_string()],
        )]));
        let list = lego::read_list("@ Verb\ntake: capio, capere, cepi, captus").unwrap();
        let key = EndingKey::Finite {
            tense: accido::Tense::Present,
            voice: accido::Voice::Active,
            mood: accido::Mood::Indicative,
            person: accido::Person::Third,
            number: accido::Number::Singular,
        };
        let candidate = Candidate { word_index: 0, key };
        let Question::TypeInLatToEng(payload) = type_in_lat_to_eng(&list, &candidate, &db, false)
        else {
            panic!("unexpected type");
        };
        assert!(payload.answers.contains(&"takes".to_string()));
        assert!(payload.answers.contains(&"seizes".to_string()));
    }

    #[test]
    fn test_principal_parts_question() {
        let list = sample_list();
        let settings = Settings::permissive(5, 3, &["include-principal-parts"]);
        let questions =
            generate_session(&list, &settings, &NoSynonyms, &mut rng(9)).unwrap();
        for question in questions {
            let Question::PrincipalParts(payload) = question else {
                panic!("unexpected type");
            };
            assert_eq!(payload.prompt, payload.principal_parts[0]);
            assert!(payload.principal_parts.len() > 1);
        }
    }

    #[test]
    fn test_no_enabled_types() {
        let list = sample_list();
        let settings = Settings::permissive(3, 3, &[]);
        assert!(generate_session(&list, &settings, &NoSynonyms, &mut rng(1)).is_err());
    }
}
