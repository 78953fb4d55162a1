//! Adjectives: the four termination patterns, degree synthesis and
//! adverb formation.

use serde::{Deserialize, Serialize};

use crate::decline::{self, AblativeSingular, ThirdDeclension};
use crate::ending::Endings;
use crate::error::InvalidInputError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::Degree;

/// Declensional pattern of an adjective's nominative singular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Termination {
    /// First/second declension, three endings (laetus, laeta, laetum).
    TwoOneTwo,
    /// Third declension, one ending (ingens, gen. ingentis).
    ThreeOne,
    /// Third declension, two endings (levis, leve).
    ThreeTwo,
    /// Third declension, three endings (acer, acris, acre).
    ThreeThree,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Termination::TwoOneTwo => "2-1-2",
            Termination::ThreeOne => "3-1",
            Termination::ThreeTwo => "3-2",
            Termination::ThreeThree => "3-3",
        };
        write!(f, "{code}")
    }
}

/// Adjectives whose superlative is "-limus" rather than "-issimus".
const LIS_SUPERLATIVES: [&str; 6] = [
    "facilis",
    "difficilis",
    "similis",
    "dissimilis",
    "gracilis",
    "humilis",
];

/// Irregular comparison: (positive, comparative m/f, comparative n,
/// superlative stem).
const IRREGULAR_COMPARISON: [(&str, &str, &str, &str); 4] = [
    ("bonus", "melior", "melius", "optim"),
    ("malus", "peior", "peius", "pessim"),
    ("magnus", "maior", "maius", "maxim"),
    ("parvus", "minor", "minus", "minim"),
];

/// Irregular Latin adverbs by positive masculine nominative.
const IRREGULAR_ADVERBS: [(&str, &str); 6] = [
    ("bonus", "bene"),
    ("malus", "male"),
    ("magnus", "magnopere"),
    ("parvus", "parum"),
    ("multus", "multum"),
    ("facilis", "facile"),
];

#[derive(Debug, Clone)]
pub struct Adjective {
    pub principal_parts: Vec<String>,
    pub termination: Termination,
    pub meaning: Meaning,
    pub(crate) endings: Endings,
}

impl PartialEq for Adjective {
    fn eq(&self, other: &Self) -> bool {
        (&self.principal_parts, self.termination, &self.meaning)
            == (&other.principal_parts, other.termination, &other.meaning)
    }
}

impl Eq for Adjective {}

impl Adjective {
    pub fn new(
        parts: &[&str],
        termination: Termination,
        meaning: Meaning,
    ) -> Result<Adjective, InvalidInputError> {
        let part = |i: usize| -> Result<&str, InvalidInputError> {
            parts.get(i).copied().ok_or_else(|| {
                InvalidInputError::new(format!(
                    "Adjective '{}' is missing principal part {}",
                    parts.first().copied().unwrap_or(""),
                    i + 1,
                ))
            })
        };

        // Positive grid plus the stem the degrees build on.
        let (stem, noms): (String, [String; 3]) = match termination {
            Termination::TwoOneTwo => {
                let (m, f) = (part(0)?, part(1)?);
                let stem = f.strip_suffix('a').ok_or_else(|| {
                    InvalidInputError::new(format!(
                        "Adjective '{m}' has an invalid feminine form '{f}'"
                    ))
                })?;
                // Two-part entries leave the neuter to be derived from the
                // feminine stem.
                let n = match parts.get(2) {
                    Some(n) => n.to_string(),
                    None => format!("{stem}um"),
                };
                (stem.to_string(), [m.to_string(), f.to_string(), n])
            }
            Termination::ThreeOne => {
                let (nom, gen) = (part(0)?, part(1)?);
                let stem = gen.strip_suffix("is").ok_or_else(|| {
                    InvalidInputError::new(format!(
                        "Adjective '{nom}' has an invalid genitive '{gen}'"
                    ))
                })?;
                (stem.to_string(), [nom.to_string(), nom.to_string(), nom.to_string()])
            }
            Termination::ThreeTwo => {
                let (mf, n) = (part(0)?, part(1)?);
                let stem = mf.strip_suffix("is").ok_or_else(|| {
                    InvalidInputError::new(format!(
                        "Adjective '{mf}' does not end in '-is'"
                    ))
                })?;
                (stem.to_string(), [mf.to_string(), mf.to_string(), n.to_string()])
            }
            Termination::ThreeThree => {
                let (m, f, n) = (part(0)?, part(1)?, part(2)?);
                let stem = f.strip_suffix("is").ok_or_else(|| {
                    InvalidInputError::new(format!(
                        "Adjective '{m}' has an invalid feminine form '{f}'"
                    ))
                })?;
                (stem.to_string(), [m.to_string(), f.to_string(), n.to_string()])
            }
        };

        let mut endings = Endings::new();

        // Positive.
        let positive_cells = match termination {
            Termination::TwoOneTwo => decline::first_second(&stem, &noms[0], &noms[1], &noms[2]),
            _ => decline::third_declension(&ThirdDeclension {
                noms: [&noms[0], &noms[1], &noms[2]],
                stem: &stem,
                ablative: AblativeSingular::I,
                i_stem_genitive: true,
                i_stem_neuter: true,
            }),
        };
        for (gender, case, number, ending) in positive_cells {
            endings.insert(
                EndingKey::Adjective { degree: Degree::Positive, gender, case, number },
                ending,
            );
        }

        let irregular = IRREGULAR_COMPARISON
            .iter()
            .find(|(positive, ..)| *positive == noms[0]);

        // Comparative: third declension, consonant stem.
        let skip_comparative = noms[0] == "multus";
        if !skip_comparative {
            let (nom_mf, nom_n, comparative_stem) = match irregular {
                Some((_, mf, n, _)) => (mf.to_string(), n.to_string(), mf.to_string()),
                None => (
                    format!("{stem}ior"),
                    format!("{stem}ius"),
                    format!("{stem}ior"),
                ),
            };
            let cells = decline::third_declension(&ThirdDeclension {
                noms: [&nom_mf, &nom_mf, &nom_n],
                stem: &comparative_stem,
                ablative: AblativeSingular::E,
                i_stem_genitive: false,
                i_stem_neuter: false,
            });
            for (gender, case, number, ending) in cells {
                endings.insert(
                    EndingKey::Adjective { degree: Degree::Comparative, gender, case, number },
                    ending,
                );
            }
        }

        // Superlative: always first/second declension.
        let superlative_stem = match irregular {
            Some((.., superlative)) => superlative.to_string(),
            None if noms[0] == "multus" => "plurim".to_string(),
            None if noms[0].ends_with("er") => format!("{}rim", noms[0]),
            None if LIS_SUPERLATIVES.contains(&noms[0].as_str()) => format!("{stem}lim"),
            None => format!("{stem}issim"),
        };
        let cells = decline::first_second(
            &superlative_stem,
            &format!("{superlative_stem}us"),
            &format!("{superlative_stem}a"),
            &format!("{superlative_stem}um"),
        );
        for (gender, case, number, ending) in cells {
            endings.insert(
                EndingKey::Adjective { degree: Degree::Superlative, gender, case, number },
                ending,
            );
        }

        // Adverb cells for the three degrees.
        let positive_adverb = IRREGULAR_ADVERBS
            .iter()
            .find(|(positive, _)| *positive == noms[0])
            .map(|(_, adverb)| adverb.to_string())
            .unwrap_or_else(|| match termination {
                Termination::TwoOneTwo => format!("{stem}e"),
                _ if noms[0].ends_with("ns") => format!("{stem}er"),
                _ => format!("{stem}iter"),
            });
        endings.insert(EndingKey::Adverb { degree: Degree::Positive }, positive_adverb);
        if !skip_comparative {
            let comparative_adverb = match irregular {
                Some((_, _, n, _)) => n.to_string(),
                None => format!("{stem}ius"),
            };
            endings.insert(EndingKey::Adverb { degree: Degree::Comparative }, comparative_adverb);
        }
        endings.insert(
            EndingKey::Adverb { degree: Degree::Superlative },
            format!("{superlative_stem}e"),
        );

        Ok(Adjective {
            principal_parts: parts.iter().map(|p| p.to_string()).collect(),
            termination,
            meaning,
            endings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Case, Gender, Number};

    fn form(adj: &Adjective, degree: Degree, gender: Gender, case: Case, number: Number) -> String {
        adj.endings
            .get(&EndingKey::Adjective { degree, gender, case, number })
            .unwrap()
            .main_form()
            .to_string()
    }

    #[test]
    fn test_212() {
        let laetus = Adjective::new(
            &["laetus", "laeta", "laetum"],
            Termination::TwoOneTwo,
            Meaning::from("happy"),
        )
        .unwrap();
        assert_eq!(
            form(&laetus, Degree::Positive, Gender::Masculine, Case::Vocative, Number::Singular),
            "laete"
        );
        assert_eq!(
            form(&laetus, Degree::Comparative, Gender::Neuter, Case::Nominative, Number::Singular),
            "laetius"
        );
        assert_eq!(
            form(&laetus, Degree::Superlative, Gender::Feminine, Case::Nominative, Number::Singular),
            "laetissima"
        );
        assert_eq!(
            laetus
                .endings
                .get(&EndingKey::Adverb { degree: Degree::Positive })
                .unwrap()
                .main_form(),
            "laete"
        );
    }

    #[test]
    fn test_212_two_parts_derives_neuter() {
        let laetus = Adjective::new(
            &["laetus", "laeta"],
            Termination::TwoOneTwo,
            Meaning::from("happy"),
        )
        .unwrap();
        assert_eq!(
            form(&laetus, Degree::Positive, Gender::Neuter, Case::Nominative, Number::Singular),
            "laetum"
        );
        assert_eq!(
            form(&laetus, Degree::Positive, Gender::Neuter, Case::Accusative, Number::Singular),
            "laetum"
        );
    }

    #[test]
    fn test_er_superlative() {
        let pulcher = Adjective::new(
            &["pulcher", "pulchra", "pulchrum"],
            Termination::TwoOneTwo,
            Meaning::from("beautiful"),
        )
        .unwrap();
        assert_eq!(
            form(&pulcher, Degree::Superlative, Gender::Masculine, Case::Nominative, Number::Singular),
            "pulcherrimus"
        );
    }

    #[test]
    fn test_32() {
        let levis = Adjective::new(
            &["levis", "leve"],
            Termination::ThreeTwo,
            Meaning::from("light"),
        )
        .unwrap();
        assert_eq!(
            form(&levis, Degree::Positive, Gender::Neuter, Case::Nominative, Number::Singular),
            "leve"
        );
        assert_eq!(
            form(&levis, Degree::Comparative, Gender::Masculine, Case::Genitive, Number::Singular),
            "levioris"
        );
        assert_eq!(
            levis
                .endings
                .get(&EndingKey::Adverb { degree: Degree::Comparative })
                .unwrap()
                .main_form(),
            "levius"
        );
    }

    #[test]
    fn test_31_and_33() {
        let ingens = Adjective::new(
            &["ingens", "ingentis"],
            Termination::ThreeOne,
            Meaning::from("huge"),
        )
        .unwrap();
        assert_eq!(
            form(&ingens, Degree::Positive, Gender::Feminine, Case::Ablative, Number::Singular),
            "ingenti"
        );
        let acer = Adjective::new(
            &["acer", "acris", "acre"],
            Termination::ThreeThree,
            Meaning::from("keen"),
        )
        .unwrap();
        assert_eq!(
            form(&acer, Degree::Positive, Gender::Masculine, Case::Nominative, Number::Singular),
            "acer"
        );
        assert_eq!(
            form(&acer, Degree::Superlative, Gender::Masculine, Case::Nominative, Number::Singular),
            "acerrimus"
        );
        assert_eq!(
            acer.endings
                .get(&EndingKey::Adverb { degree: Degree::Positive })
                .unwrap()
                .main_form(),
            "acriter"
        );
    }

    #[test]
    fn test_lis_superlative() {
        let facilis = Adjective::new(
            &["facilis", "facile"],
            Termination::ThreeTwo,
            Meaning::from("easy"),
        )
        .unwrap();
        assert_eq!(
            form(&facilis, Degree::Superlative, Gender::Masculine, Case::Nominative, Number::Singular),
            "facillimus"
        );
        // Irregular positive adverb from the override table.
        assert_eq!(
            facilis
                .endings
                .get(&EndingKey::Adverb { degree: Degree::Positive })
                .unwrap()
                .main_form(),
            "facile"
        );
    }

    #[test]
    fn test_irregular_comparison() {
        let bonus = Adjective::new(
            &["bonus", "bona", "bonum"],
            Termination::TwoOneTwo,
            Meaning::from("good"),
        )
        .unwrap();
        assert_eq!(
            form(&bonus, Degree::Comparative, Gender::Masculine, Case::Nominative, Number::Singular),
            "melior"
        );
        assert_eq!(
            form(&bonus, Degree::Superlative, Gender::Masculine, Case::Nominative, Number::Singular),
            "optimus"
        );
        assert_eq!(
            bonus
                .endings
                .get(&EndingKey::Adverb { degree: Degree::Positive })
                .unwrap()
                .main_form(),
            "bene"
        );
    }

    #[test]
    fn test_ns_adverb() {
        let prudens = Adjective::new(
            &["prudens", "prudentis"],
            Termination::ThreeOne,
            Meaning::from("prudent"),
        )
        .unwrap();
        assert_eq!(
            prudens
                .endings
                .get(&EndingKey::Adverb { degree: Degree::Positive })
                .unwrap()
                .main_form(),
            "prudenter"
        );
    }

    #[test]
    fn test_missing_part_errors() {
        assert!(Adjective::new(&["laetus"], Termination::TwoOneTwo, Meaning::from("x")).is_err());
    }
}
