//! Shared adjectival declension builders.
//!
//! Adjectives, participles and gerundives all decline over
//! gender × case × number using one of two patterns: the first/second
//! declension ("-us, -a, -um") or the third declension with a handful of
//! parameters (ablative vowel, genitive plural, neuter plural). The
//! builders here emit the full grid; callers wrap each cell in the key
//! variant they need.

use crate::ending::Ending;
use crate::tags::{Case, Gender, Number};

pub(crate) type Cell = (Gender, Case, Number, Ending);

/// First/second-declension grid from a stem and the three nominatives.
///
/// The masculine vocative singular is "-e" for "-us" nominatives and the
/// bare nominative for "-er" ones (pulcher, miser).
pub(crate) fn first_second(stem: &str, nom_m: &str, nom_f: &str, nom_n: &str) -> Vec<Cell> {
    let voc_m = if nom_m.ends_with("us") {
        format!("{stem}e")
    } else {
        nom_m.to_string()
    };

    let mut cells = Vec::with_capacity(36);
    // masculine
    cells.extend([
        (Gender::Masculine, Case::Nominative, Number::Singular, nom_m.into()),
        (Gender::Masculine, Case::Vocative, Number::Singular, voc_m.into()),
        (Gender::Masculine, Case::Accusative, Number::Singular, format!("{stem}um").into()),
        (Gender::Masculine, Case::Genitive, Number::Singular, format!("{stem}i").into()),
        (Gender::Masculine, Case::Dative, Number::Singular, format!("{stem}o").into()),
        (Gender::Masculine, Case::Ablative, Number::Singular, format!("{stem}o").into()),
        (Gender::Masculine, Case::Nominative, Number::Plural, format!("{stem}i").into()),
        (Gender::Masculine, Case::Vocative, Number::Plural, format!("{stem}i").into()),
        (Gender::Masculine, Case::Accusative, Number::Plural, format!("{stem}os").into()),
        (Gender::Masculine, Case::Genitive, Number::Plural, format!("{stem}orum").into()),
        (Gender::Masculine, Case::Dative, Number::Plural, format!("{stem}is").into()),
        (Gender::Masculine, Case::Ablative, Number::Plural, format!("{stem}is").into()),
    ]);
    // feminine
    cells.extend([
        (Gender::Feminine, Case::Nominative, Number::Singular, nom_f.into()),
        (Gender::Feminine, Case::Vocative, Number::Singular, nom_f.into()),
        (Gender::Feminine, Case::Accusative, Number::Singular, format!("{stem}am").into()),
        (Gender::Feminine, Case::Genitive, Number::Singular, format!("{stem}ae").into()),
        (Gender::Feminine, Case::Dative, Number::Singular, format!("{stem}ae").into()),
        (Gender::Feminine, Case::Ablative, Number::Singular, format!("{stem}a").into()),
        (Gender::Feminine, Case::Nominative, Number::Plural, format!("{stem}ae").into()),
        (Gender::Feminine, Case::Vocative, Number::Plural, format!("{stem}ae").into()),
        (Gender::Feminine, Case::Accusative, Number::Plural, format!("{stem}as").into()),
        (Gender::Feminine, Case::Genitive, Number::Plural, format!("{stem}arum").into()),
        (Gender::Feminine, Case::Dative, Number::Plural, format!("{stem}is").into()),
        (Gender::Feminine, Case::Ablative, Number::Plural, format!("{stem}is").into()),
    ]);
    // neuter
    cells.extend([
        (Gender::Neuter, Case::Nominative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Vocative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Accusative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Genitive, Number::Singular, format!("{stem}i").into()),
        (Gender::Neuter, Case::Dative, Number::Singular, format!("{stem}o").into()),
        (Gender::Neuter, Case::Ablative, Number::Singular, format!("{stem}o").into()),
        (Gender::Neuter, Case::Nominative, Number::Plural, format!("{stem}a").into()),
        (Gender::Neuter, Case::Vocative, Number::Plural, format!("{stem}a").into()),
        (Gender::Neuter, Case::Accusative, Number::Plural, format!("{stem}a").into()),
        (Gender::Neuter, Case::Genitive, Number::Plural, format!("{stem}orum").into()),
        (Gender::Neuter, Case::Dative, Number::Plural, format!("{stem}is").into()),
        (Gender::Neuter, Case::Ablative, Number::Plural, format!("{stem}is").into()),
    ]);
    cells
}

/// Ablative singular vowel for a third-declension adjectival form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AblativeSingular {
    /// "-e" only (comparatives).
    E,
    /// "-i" only (i-stem adjectives).
    I,
    /// Both, "-e" first (participles: ablative absolute versus attributive).
    Both,
}

/// Parameters for a third-declension adjectival grid.
pub(crate) struct ThirdDeclension<'a> {
    /// Nominative singular for masculine, feminine, neuter.
    pub noms: [&'a str; 3],
    /// Oblique stem.
    pub stem: &'a str,
    pub ablative: AblativeSingular,
    /// "-ium" genitive plural (otherwise "-um").
    pub i_stem_genitive: bool,
    /// "-ia" neuter plural (otherwise "-a").
    pub i_stem_neuter: bool,
}

pub(crate) fn third_declension(shape: &ThirdDeclension<'_>) -> Vec<Cell> {
    let ThirdDeclension {
        noms,
        stem,
        ablative,
        i_stem_genitive,
        i_stem_neuter,
    } = shape;
    let abl_sg = match ablative {
        AblativeSingular::E => Ending::single(format!("{stem}e")),
        AblativeSingular::I => Ending::single(format!("{stem}i")),
        AblativeSingular::Both => {
            Ending::multiple([format!("{stem}e"), format!("{stem}i")])
        }
    };
    let gen_pl = if *i_stem_genitive {
        format!("{stem}ium")
    } else {
        format!("{stem}um")
    };
    let n_pl = if *i_stem_neuter {
        format!("{stem}ia")
    } else {
        format!("{stem}a")
    };

    let mut cells = Vec::with_capacity(36);
    for (gender, nom) in [(Gender::Masculine, noms[0]), (Gender::Feminine, noms[1])] {
        cells.extend([
            (gender, Case::Nominative, Number::Singular, nom.into()),
            (gender, Case::Vocative, Number::Singular, nom.into()),
            (gender, Case::Accusative, Number::Singular, format!("{stem}em").into()),
            (gender, Case::Genitive, Number::Singular, format!("{stem}is").into()),
            (gender, Case::Dative, Number::Singular, format!("{stem}i").into()),
            (gender, Case::Ablative, Number::Singular, abl_sg.clone()),
            (gender, Case::Nominative, Number::Plural, format!("{stem}es").into()),
            (gender, Case::Vocative, Number::Plural, format!("{stem}es").into()),
            (gender, Case::Accusative, Number::Plural, format!("{stem}es").into()),
            (gender, Case::Genitive, Number::Plural, gen_pl.clone().into()),
            (gender, Case::Dative, Number::Plural, format!("{stem}ibus").into()),
            (gender, Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
        ]);
    }
    let nom_n = noms[2];
    cells.extend([
        (Gender::Neuter, Case::Nominative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Vocative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Accusative, Number::Singular, nom_n.into()),
        (Gender::Neuter, Case::Genitive, Number::Singular, format!("{stem}is").into()),
        (Gender::Neuter, Case::Dative, Number::Singular, format!("{stem}i").into()),
        (Gender::Neuter, Case::Ablative, Number::Singular, abl_sg),
        (Gender::Neuter, Case::Nominative, Number::Plural, n_pl.clone().into()),
        (Gender::Neuter, Case::Vocative, Number::Plural, n_pl.clone().into()),
        (Gender::Neuter, Case::Accusative, Number::Plural, n_pl.into()),
        (Gender::Neuter, Case::Genitive, Number::Plural, gen_pl.into()),
        (Gender::Neuter, Case::Dative, Number::Plural, format!("{stem}ibus").into()),
        (Gender::Neuter, Case::Ablative, Number::Plural, format!("{stem}ibus").into()),
    ]);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_at(cells: &[Cell], gender: Gender, case: Case, number: Number) -> String {
        cells
            .iter()
            .find(|(g, c, n, _)| (*g, *c, *n) == (gender, case, number))
            .map(|(_, _, _, e)| e.main_form().to_string())
            .unwrap()
    }

    #[test]
    fn test_first_second_us() {
        let cells = first_second("laet", "laetus", "laeta", "laetum");
        assert_eq!(form_at(&cells, Gender::Masculine, Case::Vocative, Number::Singular), "laete");
        assert_eq!(form_at(&cells, Gender::Feminine, Case::Genitive, Number::Singular), "laetae");
        assert_eq!(form_at(&cells, Gender::Neuter, Case::Nominative, Number::Plural), "laeta");
    }

    #[test]
    fn test_first_second_er() {
        let cells = first_second("pulchr", "pulcher", "pulchra", "pulchrum");
        assert_eq!(
            form_at(&cells, Gender::Masculine, Case::Vocative, Number::Singular),
            "pulcher"
        );
        assert_eq!(
            form_at(&cells, Gender::Masculine, Case::Genitive, Number::Plural),
            "pulchrorum"
        );
    }

    #[test]
    fn test_third_declension_i_stem() {
        let shape = ThirdDeclension {
            noms: ["levis", "levis", "leve"],
            stem: "lev",
            ablative: AblativeSingular::I,
            i_stem_genitive: true,
            i_stem_neuter: true,
        };
        let cells = third_declension(&shape);
        assert_eq!(form_at(&cells, Gender::Masculine, Case::Ablative, Number::Singular), "levi");
        assert_eq!(form_at(&cells, Gender::Neuter, Case::Accusative, Number::Plural), "levia");
        assert_eq!(form_at(&cells, Gender::Feminine, Case::Genitive, Number::Plural), "levium");
    }

    #[test]
    fn test_third_declension_comparative() {
        let shape = ThirdDeclension {
            noms: ["levior", "levior", "levius"],
            stem: "levior",
            ablative: AblativeSingular::E,
            i_stem_genitive: false,
            i_stem_neuter: false,
        };
        let cells = third_declension(&shape);
        assert_eq!(form_at(&cells, Gender::Masculine, Case::Ablative, Number::Singular), "leviore");
        assert_eq!(form_at(&cells, Gender::Neuter, Case::Nominative, Number::Plural), "leviora");
        assert_eq!(form_at(&cells, Gender::Feminine, Case::Genitive, Number::Plural), "leviorum");
    }
}
