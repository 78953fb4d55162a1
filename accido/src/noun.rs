//! Nouns: declension inference from the nominative/genitive pair and
//! paradigm assembly.

use serde::{Deserialize, Serialize};

use crate::ending::{Ending, Endings};
use crate::error::InvalidInputError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::{Case, Gender, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Irregular,
}

#[derive(Debug, Clone)]
pub struct Noun {
    pub nominative: String,
    pub genitive: String,
    pub gender: Gender,
    pub meaning: Meaning,
    pub declension: Declension,
    pub plurale_tantum: bool,
    pub(crate) endings: Endings,
}

impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        (&self.nominative, &self.genitive, self.gender, self.declension, self.plurale_tantum, &self.meaning)
            == (&other.nominative, &other.genitive, other.gender, other.declension, other.plurale_tantum, &other.meaning)
    }
}

impl Eq for Noun {}

impl Noun {
    /// Builds a noun, inferring its declension from the genitive ending.
    /// `irregular` selects a hand-authored table by nominative instead; an
    /// unknown nominative under that flag is an error rather than a wrong
    /// guess.
    pub fn new(
        nominative: &str,
        genitive: &str,
        gender: Gender,
        irregular: bool,
        meaning: Meaning,
    ) -> Result<Noun, InvalidInputError> {
        if irregular {
            let endings = irregular_table(nominative).ok_or_else(|| {
                InvalidInputError::new(format!(
                    "Noun '{nominative}' is not a recognised irregular noun"
                ))
            })?;
            return Ok(Noun {
                nominative: nominative.to_string(),
                genitive: genitive.to_string(),
                gender,
                meaning,
                declension: Declension::Irregular,
                plurale_tantum: false,
                endings,
            });
        }

        // Plural-only nouns are recognised by a plural genitive.
        if let Some((declension, endings)) = plurale_tantum_table(nominative, genitive, gender)? {
            return Ok(Noun {
                nominative: nominative.to_string(),
                genitive: genitive.to_string(),
                gender,
                meaning,
                declension,
                plurale_tantum: true,
                endings,
            });
        }

        let (declension, endings) = if let Some(stem) = genitive.strip_suffix("ae") {
            (Declension::First, first_declension(nominative, stem))
        } else if let Some(stem) = genitive.strip_suffix("ei") {
            (Declension::Fifth, fifth_declension(nominative, stem))
        } else if let Some(stem) = genitive.strip_suffix("is") {
            (Declension::Third, third_declension(nominative, stem, gender))
        } else if let Some(stem) = genitive.strip_suffix("us") {
            (Declension::Fourth, fourth_declension(nominative, stem, gender))
        } else if let Some(stem) = genitive.strip_suffix('i') {
            (Declension::Second, second_declension(nominative, stem, gender)?)
        } else {
            return Err(InvalidInputError::new(format!(
                "Noun '{nominative}, {genitive}' does not match any declension"
            )));
        };

        Ok(Noun {
            nominative: nominative.to_string(),
            genitive: genitive.to_string(),
            gender,
            meaning,
            declension,
            plurale_tantum: false,
            endings,
        })
    }

    pub fn principal_parts(&self) -> Vec<String> {
        vec![self.nominative.clone(), self.genitive.clone()]
    }
}

fn insert_cells(endings: &mut Endings, cells: Vec<(Case, Number, Ending)>) {
    for (case, number, ending) in cells {
        endings.insert(EndingKey::Noun { case, number }, ending);
    }
}

fn first_declension(nominative: &str, stem: &str) -> Endings {
    let mut endings = Endings::new();
    insert_cells(
        &mut endings,
        vec![
            (Case::Nominative, Number::Singular, nominative.into()),
            (Case::Vocative, Number::Singular, format!("{stem}a").into()),
            (Case::Accusative, Number::Singular, format!("{stem}am").into()),
            (Case::Genitive, Number::Singular, format!("{stem}ae").into()),
            (Case::Dative, Number::Singular, format!("{stem}ae").into()),
            (Case::Ablative, Number::Singular, format!("{stem}a").into()),
            (Case::Nominative, Number::Plural, format!("{stem}ae").into()),
            (Case::Vocative, Number::Plural, format!("{stem}ae").into()),
            (Case::Accusative, Number::Plural, format!("{stem}as").into()),
            (Case::Genitive, Number::Plural, format!("{stem}arum").into()),
            (Case::Dative, Number::Plural, format!("{stem}is").into()),
            (Case::Ablative, Number::Plural, format!("{stem}is").into()),
        ],
    );
    endings
}

fn second_declension(
    nominative: &str,
    stem: &str,
    gender: Gender,
) -> Result<Endings, InvalidInputError> {
    let mut endings = Endings::new();
    if gender == Gender::Neuter {
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Singular, nominative.into()),
                (Case::Vocative, Number::Singular, nominative.into()),
                (Case::Accusative, Number::Singular, nominative.into()),
                (Case::Genitive, Number::Singular, format!("{stem}i").into()),
                (Case::Dative, Number::Singular, format!("{stem}o").into()),
                (Case::Ablative, Number::Singular, format!("{stem}o").into()),
                (Case::Nominative, Number::Plural, format!("{stem}a").into()),
                (Case::Vocative, Number::Plural, format!("{stem}a").into()),
                (Case::Accusative, Number::Plural, format!("{stem}a").into()),
                (Case::Genitive, Number::Plural, format!("{stem}orum").into()),
                (Case::Dative, Number::Plural, format!("{stem}is").into()),
                (Case::Ablative, Number::Plural, format!("{stem}is").into()),
            ],
        );
        return Ok(endings);
    }

    // "-us" nouns take "-e" in the vocative, "-ius" nouns contract to "-i"
    // (fili), and "-er/-ir" nouns keep the bare nominative.
    let vocative = if nominative.ends_with("ius") {
        stem.to_string()
    } else if nominative.ends_with("us") {
        format!("{stem}e")
    } else if nominative.ends_with("er") || nominative.ends_with("ir") {
        nominative.to_string()
    } else {
        return Err(InvalidInputError::new(format!(
            "Second-declension noun '{nominative}' has an unrecognised nominative shape"
        )));
    };

    insert_cells(
        &mut endings,
        vec![
            (Case::Nominative, Number::Singular, nominative.into()),
            (Case::Vocative, Number::Singular, vocative.into()),
            (Case::Accusative, Number::Singular, format!("{stem}um").into()),
            (Case::Genitive, Number::Singular, format!("{stem}i").into()),
            (Case::Dative, Number::Singular, format!("{stem}o").into()),
            (Case::Ablative, Number::Singular, format!("{stem}o").into()),
            (Case::Nominative, Number::Plural, format!("{stem}i").into()),
            (Case::Vocative, Number::Plural, format!("{stem}i").into()),
            (Case::Accusative, Number::Plural, format!("{stem}os").into()),
            (Case::Genitive, Number::Plural, format!("{stem}orum").into()),
            (Case::Dative, Number::Plural, format!("{stem}is").into()),
            (Case::Ablative, Number::Plural, format!("{stem}is").into()),
        ],
    );
    Ok(endings)
}

/// I-stem detection from the nominative/genitive shape: parisyllabic
/// "-is"/"-es" nominatives, oblique stems ending in two consonants
/// (urbs/urbis, mons/montis, nox/noctis), and the neuter "-e/-al/-ar"
/// class. Stems like reg- (rex) stay consonant-stem.
fn is_i_stem(nominative: &str, stem: &str, gender: Gender) -> bool {
    if gender == Gender::Neuter {
        return nominative.ends_with('e')
            || nominative.ends_with("al")
            || nominative.ends_with("ar");
    }
    let parisyllabic = nominative
        .strip_suffix("is")
        .or_else(|| nominative.strip_suffix("es"))
        .is_some_and(|base| base == stem);
    // "-er" nominatives (pater, patris) syncopate to stems in two
    // consonants without becoming i-stems.
    let double_consonant = !nominative.ends_with("er") && {
        let is_vowel = |c: char| "aeiou".contains(c);
        let mut chars = stem.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(last), Some(second)) => !is_vowel(last) && !is_vowel(second),
            _ => false,
        }
    };
    parisyllabic || double_consonant
}

fn third_declension(nominative: &str, stem: &str, gender: Gender) -> Endings {
    let i_stem = is_i_stem(nominative, stem, gender);
    let mut endings = Endings::new();
    if gender == Gender::Neuter {
        let abl_sg = if i_stem { format!("{stem}i") } else { format!("{stem}e") };
        let plural = if i_stem { format!("{stem}ia") } else { format!("{stem}a") };
        let gen_pl = if i_stem { format!("{stem}ium") } else { format!("{stem}um") };
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Singular, nominative.into()),
                (Case::Vocative, Number::Singular, nominative.into()),
                (Case::Accusative, Number::Singular, nominative.into()),
                (Case::Genitive, Number::Singular, format!("{stem}is").into()),
                (Case::Dative, Number::Singular, format!("{stem}i").into()),
                (Case::Ablative, Number::Singular, abl_sg.into()),
                (Case::Nominative, Number::Plural, plural.clone().into()),
                (Case::Vocative, Number::Plural, plural.clone().into()),
                (Case::Accusative, Number::Plural, plural.into()),
                (Case::Genitive, Number::Plural, gen_pl.into()),
                (Case::Dative, Number::Plural, format!("{stem}ibus").into()),
                (Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
            ],
        );
        return endings;
    }

    let gen_pl = if i_stem { format!("{stem}ium") } else { format!("{stem}um") };
    insert_cells(
        &mut endings,
        vec![
            (Case::Nominative, Number::Singular, nominative.into()),
            (Case::Vocative, Number::Singular, nominative.into()),
            (Case::Accusative, Number::Singular, format!("{stem}em").into()),
            (Case::Genitive, Number::Singular, format!("{stem}is").into()),
            (Case::Dative, Number::Singular, format!("{stem}i").into()),
            (Case::Ablative, Number::Singular, format!("{stem}e").into()),
            (Case::Nominative, Number::Plural, format!("{stem}es").into()),
            (Case::Vocative, Number::Plural, format!("{stem}es").into()),
            (Case::Accusative, Number::Plural, format!("{stem}es").into()),
            (Case::Genitive, Number::Plural, gen_pl.into()),
            (Case::Dative, Number::Plural, format!("{stem}ibus").into()),
            (Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
        ],
    );
    endings
}

fn fourth_declension(nominative: &str, stem: &str, gender: Gender) -> Endings {
    let mut endings = Endings::new();
    if gender == Gender::Neuter {
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Singular, nominative.into()),
                (Case::Vocative, Number::Singular, nominative.into()),
                (Case::Accusative, Number::Singular, nominative.into()),
                (Case::Genitive, Number::Singular, format!("{stem}us").into()),
                (Case::Dative, Number::Singular, format!("{stem}u").into()),
                (Case::Ablative, Number::Singular, format!("{stem}u").into()),
                (Case::Nominative, Number::Plural, format!("{stem}ua").into()),
                (Case::Vocative, Number::Plural, format!("{stem}ua").into()),
                (Case::Accusative, Number::Plural, format!("{stem}ua").into()),
                (Case::Genitive, Number::Plural, format!("{stem}uum").into()),
                (Case::Dative, Number::Plural, format!("{stem}ibus").into()),
                (Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
            ],
        );
        return endings;
    }
    insert_cells(
        &mut endings,
        vec![
            (Case::Nominative, Number::Singular, nominative.into()),
            (Case::Vocative, Number::Singular, nominative.into()),
            (Case::Accusative, Number::Singular, format!("{stem}um").into()),
            (Case::Genitive, Number::Singular, format!("{stem}us").into()),
            (Case::Dative, Number::Singular, format!("{stem}ui").into()),
            (Case::Ablative, Number::Singular, format!("{stem}u").into()),
            (Case::Nominative, Number::Plural, format!("{stem}us").into()),
            (Case::Vocative, Number::Plural, format!("{stem}us").into()),
            (Case::Accusative, Number::Plural, format!("{stem}us").into()),
            (Case::Genitive, Number::Plural, format!("{stem}uum").into()),
            (Case::Dative, Number::Plural, format!("{stem}ibus").into()),
            (Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
        ],
    );
    endings
}

fn fifth_declension(nominative: &str, stem: &str) -> Endings {
    let mut endings = Endings::new();
    insert_cells(
        &mut endings,
        vec![
            (Case::Nominative, Number::Singular, nominative.into()),
            (Case::Vocative, Number::Singular, nominative.into()),
            (Case::Accusative, Number::Singular, format!("{stem}em").into()),
            (Case::Genitive, Number::Singular, format!("{stem}ei").into()),
            (Case::Dative, Number::Singular, format!("{stem}ei").into()),
            (Case::Ablative, Number::Singular, format!("{stem}e").into()),
            (Case::Nominative, Number::Plural, format!("{stem}es").into()),
            (Case::Vocative, Number::Plural, format!("{stem}es").into()),
            (Case::Accusative, Number::Plural, format!("{stem}es").into()),
            (Case::Genitive, Number::Plural, format!("{stem}erum").into()),
            (Case::Dative, Number::Plural, format!("{stem}ebus").into()),
            (Case::Ablative, Number::Plural, format!("{stem}ebus").into()),
        ],
    );
    endings
}

fn plurale_tantum_table(
    nominative: &str,
    genitive: &str,
    gender: Gender,
) -> Result<Option<(Declension, Endings)>, InvalidInputError> {
    let mut endings = Endings::new();
    if let Some(stem) = genitive.strip_suffix("arum") {
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Plural, format!("{stem}ae").into()),
                (Case::Vocative, Number::Plural, format!("{stem}ae").into()),
                (Case::Accusative, Number::Plural, format!("{stem}as").into()),
                (Case::Genitive, Number::Plural, format!("{stem}arum").into()),
                (Case::Dative, Number::Plural, format!("{stem}is").into()),
                (Case::Ablative, Number::Plural, format!("{stem}is").into()),
            ],
        );
        return Ok(Some((Declension::First, endings)));
    }
    if let Some(stem) = genitive.strip_suffix("orum") {
        let (nom, acc) = if gender == Gender::Neuter {
            (format!("{stem}a"), format!("{stem}a"))
        } else {
            (format!("{stem}i"), format!("{stem}os"))
        };
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Plural, nom.clone().into()),
                (Case::Vocative, Number::Plural, nom.into()),
                (Case::Accusative, Number::Plural, acc.into()),
                (Case::Genitive, Number::Plural, format!("{stem}orum").into()),
                (Case::Dative, Number::Plural, format!("{stem}is").into()),
                (Case::Ablative, Number::Plural, format!("{stem}is").into()),
            ],
        );
        return Ok(Some((Declension::Second, endings)));
    }
    if nominative.ends_with("ia") && genitive.ends_with("ium") && gender == Gender::Neuter {
        let stem = genitive.strip_suffix("um").expect("checked suffix");
        insert_cells(
            &mut endings,
            vec![
                (Case::Nominative, Number::Plural, nominative.into()),
                (Case::Vocative, Number::Plural, nominative.into()),
                (Case::Accusative, Number::Plural, nominative.into()),
                (Case::Genitive, Number::Plural, genitive.into()),
                (Case::Dative, Number::Plural, format!("{stem}bus").into()),
                (Case::Ablative, Number::Plural, format!("{stem}bus").into()),
            ],
        );
        return Ok(Some((Declension::Third, endings)));
    }
    Ok(None)
}

/// Explicit tables for the handful of nouns no rule covers.
fn irregular_table(nominative: &str) -> Option<Endings> {
    let mut endings = Endings::new();
    match nominative {
        "vis" => {
            insert_cells(
                &mut endings,
                vec![
                    (Case::Nominative, Number::Singular, "vis".into()),
                    (Case::Vocative, Number::Singular, "vis".into()),
                    (Case::Accusative, Number::Singular, "vim".into()),
                    (Case::Genitive, Number::Singular, "vis".into()),
                    (Case::Dative, Number::Singular, "vi".into()),
                    (Case::Ablative, Number::Singular, "vi".into()),
                    (Case::Nominative, Number::Plural, "vires".into()),
                    (Case::Vocative, Number::Plural, "vires".into()),
                    (Case::Accusative, Number::Plural, "vires".into()),
                    (Case::Genitive, Number::Plural, "virium".into()),
                    (Case::Dative, Number::Plural, "viribus".into()),
                    (Case::Ablative, Number::Plural, "viribus".into()),
                ],
            );
        }
        "bos" => {
            insert_cells(
                &mut endings,
                vec![
                    (Case::Nominative, Number::Singular, "bos".into()),
                    (Case::Vocative, Number::Singular, "bos".into()),
                    (Case::Accusative, Number::Singular, "bovem".into()),
                    (Case::Genitive, Number::Singular, "bovis".into()),
                    (Case::Dative, Number::Singular, "bovi".into()),
                    (Case::Ablative, Number::Singular, "bove".into()),
                    (Case::Nominative, Number::Plural, "boves".into()),
                    (Case::Vocative, Number::Plural, "boves".into()),
                    (Case::Accusative, Number::Plural, "boves".into()),
                    (Case::Genitive, Number::Plural, "boum".into()),
                    (Case::Dative, Number::Plural, Ending::multiple(["bobus", "bubus"])),
                    (Case::Ablative, Number::Plural, Ending::multiple(["bobus", "bubus"])),
                ],
            );
        }
        "Iuppiter" => {
            insert_cells(
                &mut endings,
                vec![
                    (Case::Nominative, Number::Singular, "Iuppiter".into()),
                    (Case::Vocative, Number::Singular, "Iuppiter".into()),
                    (Case::Accusative, Number::Singular, "Iovem".into()),
                    (Case::Genitive, Number::Singular, "Iovis".into()),
                    (Case::Dative, Number::Singular, "Iovi".into()),
                    (Case::Ablative, Number::Singular, "Iove".into()),
                ],
            );
        }
        "domus" => {
            insert_cells(
                &mut endings,
                vec![
                    (Case::Nominative, Number::Singular, "domus".into()),
                    (Case::Vocative, Number::Singular, "domus".into()),
                    (Case::Accusative, Number::Singular, "domum".into()),
                    (Case::Genitive, Number::Singular, "domus".into()),
                    (Case::Dative, Number::Singular, "domui".into()),
                    (Case::Ablative, Number::Singular, "domo".into()),
                    (Case::Nominative, Number::Plural, "domus".into()),
                    (Case::Vocative, Number::Plural, "domus".into()),
                    (Case::Accusative, Number::Plural, "domos".into()),
                    (Case::Genitive, Number::Plural, Ending::multiple(["domuum", "domorum"])),
                    (Case::Dative, Number::Plural, "domibus".into()),
                    (Case::Ablative, Number::Plural, "domibus".into()),
                ],
            );
        }
        "nemo" => {
            insert_cells(
                &mut endings,
                vec![
                    (Case::Nominative, Number::Singular, "nemo".into()),
                    (Case::Vocative, Number::Singular, "nemo".into()),
                    (Case::Accusative, Number::Singular, "neminem".into()),
                    (Case::Genitive, Number::Singular, "neminis".into()),
                    (Case::Dative, Number::Singular, "nemini".into()),
                    (Case::Ablative, Number::Singular, "nemine".into()),
                ],
            );
        }
        _ => return None,
    }
    Some(endings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(nom: &str, gen: &str, gender: Gender) -> Noun {
        Noun::new(nom, gen, gender, false, Meaning::from("test")).unwrap()
    }

    fn form(noun: &Noun, case: Case, number: Number) -> String {
        noun.endings
            .get(&EndingKey::Noun { case, number })
            .unwrap()
            .main_form()
            .to_string()
    }

    #[test]
    fn test_first_declension() {
        let agricola = noun("agricola", "agricolae", Gender::Masculine);
        assert_eq!(agricola.declension, Declension::First);
        assert_eq!(form(&agricola, Case::Genitive, Number::Singular), "agricolae");
        assert_eq!(form(&agricola, Case::Accusative, Number::Plural), "agricolas");
        // "agricolae" is genitive/dative singular and nominative/vocative plural.
        assert_eq!(agricola.endings.find_keys("agricolae").len(), 4);
    }

    #[test]
    fn test_second_declension_vocatives() {
        let servus = noun("servus", "servi", Gender::Masculine);
        assert_eq!(form(&servus, Case::Vocative, Number::Singular), "serve");
        let filius = noun("filius", "filii", Gender::Masculine);
        assert_eq!(form(&filius, Case::Vocative, Number::Singular), "fili");
        let puer = noun("puer", "pueri", Gender::Masculine);
        assert_eq!(form(&puer, Case::Vocative, Number::Singular), "puer");
        assert_eq!(form(&puer, Case::Genitive, Number::Plural), "puerorum");
    }

    #[test]
    fn test_second_declension_neuter() {
        let bellum = noun("bellum", "belli", Gender::Neuter);
        assert_eq!(form(&bellum, Case::Accusative, Number::Singular), "bellum");
        assert_eq!(form(&bellum, Case::Nominative, Number::Plural), "bella");
    }

    #[test]
    fn test_third_declension_consonant_stem() {
        let rex = noun("rex", "regis", Gender::Masculine);
        assert_eq!(rex.declension, Declension::Third);
        assert_eq!(form(&rex, Case::Accusative, Number::Singular), "regem");
        assert_eq!(form(&rex, Case::Genitive, Number::Plural), "regum");
        assert_eq!(form(&rex, Case::Dative, Number::Plural), "regibus");
    }

    #[test]
    fn test_third_declension_i_stem() {
        let navis = noun("navis", "navis", Gender::Feminine);
        assert_eq!(form(&navis, Case::Genitive, Number::Plural), "navium");
        let urbs = noun("urbs", "urbis", Gender::Feminine);
        assert_eq!(form(&urbs, Case::Genitive, Number::Plural), "urbium");
        let mons = noun("mons", "montis", Gender::Masculine);
        assert_eq!(form(&mons, Case::Genitive, Number::Plural), "montium");
        let pater = noun("pater", "patris", Gender::Masculine);
        assert_eq!(form(&pater, Case::Genitive, Number::Plural), "patrum");
        let mare = noun("mare", "maris", Gender::Neuter);
        assert_eq!(form(&mare, Case::Ablative, Number::Singular), "mari");
        assert_eq!(form(&mare, Case::Nominative, Number::Plural), "maria");
    }

    #[test]
    fn test_third_declension_neuter_consonant() {
        let nomen = noun("nomen", "nominis", Gender::Neuter);
        assert_eq!(form(&nomen, Case::Accusative, Number::Singular), "nomen");
        assert_eq!(form(&nomen, Case::Nominative, Number::Plural), "nomina");
        assert_eq!(form(&nomen, Case::Genitive, Number::Plural), "nominum");
    }

    #[test]
    fn test_fourth_and_fifth() {
        let manus = noun("manus", "manus", Gender::Feminine);
        assert_eq!(manus.declension, Declension::Fourth);
        assert_eq!(form(&manus, Case::Dative, Number::Singular), "manui");
        assert_eq!(form(&manus, Case::Genitive, Number::Plural), "manuum");

        let cornu = noun("cornu", "cornus", Gender::Neuter);
        assert_eq!(form(&cornu, Case::Nominative, Number::Plural), "cornua");

        let res = noun("res", "rei", Gender::Feminine);
        assert_eq!(res.declension, Declension::Fifth);
        assert_eq!(form(&res, Case::Genitive, Number::Plural), "rerum");
        assert_eq!(form(&res, Case::Dative, Number::Plural), "rebus");
    }

    #[test]
    fn test_plurale_tantum() {
        let castra = noun("castra", "castrorum", Gender::Neuter);
        assert!(castra.plurale_tantum);
        assert_eq!(form(&castra, Case::Nominative, Number::Plural), "castra");
        assert!(castra
            .endings
            .get(&EndingKey::Noun { case: Case::Nominative, number: Number::Singular })
            .is_none());

        let divitiae = noun("divitiae", "divitiarum", Gender::Feminine);
        assert!(divitiae.plurale_tantum);
        assert_eq!(form(&divitiae, Case::Ablative, Number::Plural), "divitiis");

        let moenia = noun("moenia", "moenium", Gender::Neuter);
        assert!(moenia.plurale_tantum);
        assert_eq!(form(&moenia, Case::Dative, Number::Plural), "moenibus");
    }

    #[test]
    fn test_irregular_vis() {
        let vis = Noun::new("vis", "vis", Gender::Feminine, true, Meaning::from("force")).unwrap();
        assert_eq!(vis.declension, Declension::Irregular);
        assert_eq!(form(&vis, Case::Accusative, Number::Singular), "vim");
        assert_eq!(form(&vis, Case::Genitive, Number::Plural), "virium");
    }

    #[test]
    fn test_irregular_flag_rejects_unknown_nominative() {
        let error =
            Noun::new("agricola", "agricolae", Gender::Masculine, true, Meaning::from("farmer"))
                .unwrap_err();
        assert!(error.0.contains("not a recognised irregular noun"));
    }

    #[test]
    fn test_unrecognised_genitive() {
        assert!(
            Noun::new("blah", "blahxyz", Gender::Masculine, false, Meaning::from("x")).is_err()
        );
    }
}
