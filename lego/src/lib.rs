//! Vocab-list reader: line-oriented text to word entities.
//!
//! A list is organised in sections headed `@ <PartOfSpeech>`; each entry is
//! `english_meaning(s): latin_principal_parts[, metadata]`. Blank lines
//! separate groups and `#` lines are comments.

use accido::{
    Adjective, Adverb, Gender, InvalidInputError, Meaning, Noun, PartOfSpeech, Pronoun,
    RegularWord, Termination, Verb, Word,
};

/// A parsed vocabulary list, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabList {
    pub words: Vec<Word>,
}

impl VocabList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A malformed vocab file. Carries the offending line so the client can
/// show the learner where their list went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidVocabFileFormat {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

impl InvalidVocabFileFormat {
    fn new(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        InvalidVocabFileFormat {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parses a vocab list. The first error aborts the read; a list is either
/// wholly valid or rejected.
pub fn read_list(text: &str) -> Result<VocabList, InvalidVocabFileFormat> {
    let mut words = Vec::new();
    let mut section: Option<PartOfSpeech> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('@') {
            section = Some(parse_part_of_speech(header.trim()).ok_or_else(|| {
                InvalidVocabFileFormat::new(
                    line_number,
                    line,
                    format!("Invalid part of speech: '{}'", header.trim()),
                )
            })?);
            continue;
        }

        let Some(pos) = section else {
            return Err(InvalidVocabFileFormat::new(
                line_number,
                line,
                format!("Vocab line found outside of a section: '{line}'"),
            ));
        };

        let word = parse_entry(line, pos)
            .map_err(|reason| InvalidVocabFileFormat::new(line_number, line, reason))?;
        words.push(word);
    }

    log::debug!("read vocab list with {} words", words.len());
    Ok(VocabList { words })
}

fn parse_part_of_speech(name: &str) -> Option<PartOfSpeech> {
    match name.to_lowercase().as_str() {
        "verb" => Some(PartOfSpeech::Verb),
        "noun" => Some(PartOfSpeech::Noun),
        "adjective" => Some(PartOfSpeech::Adjective),
        "adverb" => Some(PartOfSpeech::Adverb),
        "pronoun" => Some(PartOfSpeech::Pronoun),
        "regular" => Some(PartOfSpeech::Regular),
        _ => None,
    }
}

/// Metadata markers trailing the principal parts: noun gender, adjective
/// termination, and the `(irregular)` flag.
#[derive(Debug, Default)]
struct Metadata {
    gender: Option<Gender>,
    termination: Option<Termination>,
    irregular: bool,
}

fn parse_entry(line: &str, pos: PartOfSpeech) -> Result<Word, String> {
    let (meanings, rest) = line
        .split_once(':')
        .ok_or_else(|| format!("Invalid line format: '{line}'"))?;

    let meanings: Vec<&str> = meanings.split('/').map(str::trim).collect();
    if meanings.iter().any(|meaning| meaning.is_empty()) {
        return Err(format!("Invalid meaning in line: '{line}'"));
    }
    let meaning = Meaning::new(meanings);

    let mut parts = Vec::new();
    let mut metadata = Metadata::default();
    for part in rest.split(',').map(str::trim) {
        if part.is_empty() {
            return Err(format!("Invalid principal parts in line: '{line}'"));
        }
        if let Some(marker) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) {
            apply_marker(&mut metadata, marker)
                .map_err(|reason| format!("{reason} in line: '{line}'"))?;
        } else {
            parts.push(part);
        }
    }
    if parts.is_empty() {
        return Err(format!("Invalid principal parts in line: '{line}'"));
    }

    build_word(pos, &parts, metadata, meaning).map_err(|InvalidInputError(reason)| reason)
}

fn apply_marker(metadata: &mut Metadata, marker: &str) -> Result<(), String> {
    let set_gender = |metadata: &mut Metadata, gender| {
        if metadata.gender.replace(gender).is_some() {
            Err("Duplicate gender marker".to_string())
        } else {
            Ok(())
        }
    };
    let set_termination = |metadata: &mut Metadata, termination| {
        if metadata.termination.replace(termination).is_some() {
            Err("Duplicate termination marker".to_string())
        } else {
            Ok(())
        }
    };
    match marker {
        "m" => set_gender(metadata, Gender::Masculine),
        "f" => set_gender(metadata, Gender::Feminine),
        "n" => set_gender(metadata, Gender::Neuter),
        "2-1-2" => set_termination(metadata, Termination::TwoOneTwo),
        "3-1" => set_termination(metadata, Termination::ThreeOne),
        "3-2" => set_termination(metadata, Termination::ThreeTwo),
        "3-3" => set_termination(metadata, Termination::ThreeThree),
        "irregular" => {
            if metadata.irregular {
                Err("Duplicate irregular marker".to_string())
            } else {
                metadata.irregular = true;
                Ok(())
            }
        }
        other => Err(format!("Invalid metadata marker: '({other})'")),
    }
}

fn build_word(
    pos: PartOfSpeech,
    parts: &[&str],
    metadata: Metadata,
    meaning: Meaning,
) -> Result<Word, InvalidInputError> {
    match pos {
        PartOfSpeech::Verb => {
            if parts.len() > 4 {
                return Err(InvalidInputError::new(format!(
                    "Verb '{}' has too many principal parts",
                    parts[0]
                )));
            }
            let verb = Verb::new(
                parts[0],
                parts.get(1).copied(),
                parts.get(2).copied(),
                parts.get(3).copied(),
                meaning,
            )?;
            Ok(Word::Verb(verb))
        }
        PartOfSpeech::Noun => {
            let [nominative, genitive] = parts else {
                return Err(InvalidInputError::new(format!(
                    "Noun '{}' needs a nominative and a genitive",
                    parts[0]
                )));
            };
            let gender = metadata.gender.ok_or_else(|| {
                InvalidInputError::new(format!("Noun '{nominative}' is missing a gender marker"))
            })?;
            Ok(Word::Noun(Noun::new(
                nominative,
                genitive,
                gender,
                metadata.irregular,
                meaning,
            )?))
        }
        PartOfSpeech::Adjective => {
            let termination = match metadata.termination {
                Some(termination) => termination,
                // Three bare parts default to the 2-1-2 pattern.
                None if parts.len() == 3 => Termination::TwoOneTwo,
                None => {
                    return Err(InvalidInputError::new(format!(
                        "Adjective '{}' is missing a termination marker",
                        parts[0]
                    )))
                }
            };
            let max_parts = match termination {
                Termination::TwoOneTwo | Termination::ThreeThree => 3,
                Termination::ThreeOne | Termination::ThreeTwo => 2,
            };
            if parts.len() > max_parts {
                return Err(InvalidInputError::new(format!(
                    "Adjective '{}' has too many principal parts",
                    parts[0]
                )));
            }
            Ok(Word::Adjective(Adjective::new(parts, termination, meaning)?))
        }
        PartOfSpeech::Adverb => Ok(Word::Adverb(Adverb::new(parts[0], meaning)?)),
        PartOfSpeech::Pronoun => Ok(Word::Pronoun(Pronoun::new(parts[0], meaning)?)),
        PartOfSpeech::Regular => Ok(Word::Regular(RegularWord::new(parts[0], meaning))),
    }
}
