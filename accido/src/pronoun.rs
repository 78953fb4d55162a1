//! The closed set of supported pronouns, each with a static table.

use serde::{Deserialize, Serialize};

use crate::ending::{Ending, Endings};
use crate::error::InvalidInputError;
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::{Case, Gender, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PronounKind {
    Hic,
    Ille,
    Iste,
    Is,
    Idem,
    Ipse,
    Qui,
    Quidam,
}

/// Cases in table order. Pronouns carry no vocative row.
const CASES: [Case; 5] = [
    Case::Nominative,
    Case::Accusative,
    Case::Genitive,
    Case::Dative,
    Case::Ablative,
];

/// One gender's row: five singular cells then five plural cells. A cell
/// with a '|' holds alternative forms ("eis|iis").
type GenderRow = [&'static str; 10];

/// (kind, masculine nominative, the three nominatives, m/f/n rows)
const TABLES: [(PronounKind, [&str; 3], [GenderRow; 3]); 8] = [
    (
        PronounKind::Hic,
        ["hic", "haec", "hoc"],
        [
            ["hic", "hunc", "huius", "huic", "hoc", "hi", "hos", "horum", "his", "his"],
            ["haec", "hanc", "huius", "huic", "hac", "hae", "has", "harum", "his", "his"],
            ["hoc", "hoc", "huius", "huic", "hoc", "haec", "haec", "horum", "his", "his"],
        ],
    ),
    (
        PronounKind::Ille,
        ["ille", "illa", "illud"],
        [
            ["ille", "illum", "illius", "illi", "illo", "illi", "illos", "illorum", "illis", "illis"],
            ["illa", "illam", "illius", "illi", "illa", "illae", "illas", "illarum", "illis", "illis"],
            ["illud", "illud", "illius", "illi", "illo", "illa", "illa", "illorum", "illis", "illis"],
        ],
    ),
    (
        PronounKind::Iste,
        ["iste", "ista", "istud"],
        [
            ["iste", "istum", "istius", "isti", "isto", "isti", "istos", "istorum", "istis", "istis"],
            ["ista", "istam", "istius", "isti", "ista", "istae", "istas", "istarum", "istis", "istis"],
            ["istud", "istud", "istius", "isti", "isto", "ista", "ista", "istorum", "istis", "istis"],
        ],
    ),
    (
        PronounKind::Is,
        ["is", "ea", "id"],
        [
            ["is", "eum", "eius", "ei", "eo", "ei|ii", "eos", "eorum", "eis|iis", "eis|iis"],
            ["ea", "eam", "eius", "ei", "ea", "eae", "eas", "earum", "eis|iis", "eis|iis"],
            ["id", "id", "eius", "ei", "eo", "ea", "ea", "eorum", "eis|iis", "eis|iis"],
        ],
    ),
    (
        PronounKind::Idem,
        ["idem", "eadem", "idem"],
        [
            ["idem", "eundem", "eiusdem", "eidem", "eodem", "eidem|idem", "eosdem", "eorundem", "eisdem|isdem", "eisdem|isdem"],
            ["eadem", "eandem", "eiusdem", "eidem", "eadem", "eaedem", "easdem", "earundem", "eisdem|isdem", "eisdem|isdem"],
            ["idem", "idem", "eiusdem", "eidem", "eodem", "eadem", "eadem", "eorundem", "eisdem|isdem", "eisdem|isdem"],
        ],
    ),
    (
        PronounKind::Ipse,
        ["ipse", "ipsa", "ipsum"],
        [
            ["ipse", "ipsum", "ipsius", "ipsi", "ipso", "ipsi", "ipsos", "ipsorum", "ipsis", "ipsis"],
            ["ipsa", "ipsam", "ipsius", "ipsi", "ipsa", "ipsae", "ipsas", "ipsarum", "ipsis", "ipsis"],
            ["ipsum", "ipsum", "ipsius", "ipsi", "ipso", "ipsa", "ipsa", "ipsorum", "ipsis", "ipsis"],
        ],
    ),
    (
        PronounKind::Qui,
        ["qui", "quae", "quod"],
        [
            ["qui", "quem", "cuius", "cui", "quo", "qui", "quos", "quorum", "quibus", "quibus"],
            ["quae", "quam", "cuius", "cui", "qua", "quae", "quas", "quarum", "quibus", "quibus"],
            ["quod", "quod", "cuius", "cui", "quo", "quae", "quae", "quorum", "quibus", "quibus"],
        ],
    ),
    (
        PronounKind::Quidam,
        ["quidam", "quaedam", "quoddam"],
        [
            ["quidam", "quendam", "cuiusdam", "cuidam", "quodam", "quidam", "quosdam", "quorundam", "quibusdam", "quibusdam"],
            ["quaedam", "quandam", "cuiusdam", "cuidam", "quadam", "quaedam", "quasdam", "quarundam", "quibusdam", "quibusdam"],
            ["quoddam", "quoddam", "cuiusdam", "cuidam", "quodam", "quaedam", "quaedam", "quorundam", "quibusdam", "quibusdam"],
        ],
    ),
];

#[derive(Debug, Clone)]
pub struct Pronoun {
    pub kind: PronounKind,
    pub nominatives: [String; 3],
    pub meaning: Meaning,
    pub(crate) endings: Endings,
}

impl PartialEq for Pronoun {
    fn eq(&self, other: &Self) -> bool {
        (self.kind, &self.meaning) == (other.kind, &other.meaning)
    }
}

impl Eq for Pronoun {}

impl Pronoun {
    /// Builds a pronoun from the masculine nominative of the closed set.
    pub fn new(nominative: &str, meaning: Meaning) -> Result<Pronoun, InvalidInputError> {
        let (kind, nominatives, rows) = TABLES
            .iter()
            .find(|(_, noms, _)| noms[0] == nominative)
            .ok_or_else(|| {
                InvalidInputError::new(format!("Unsupported pronoun: '{nominative}'"))
            })?;

        let mut endings = Endings::new();
        for (gender, row) in Gender::ALL.iter().zip(rows.iter()) {
            for (slot, form) in row.iter().enumerate() {
                let case = CASES[slot % 5];
                let number = if slot < 5 { Number::Singular } else { Number::Plural };
                let ending = if form.contains('|') {
                    Ending::multiple(form.split('|'))
                } else {
                    Ending::single(*form)
                };
                endings.insert(
                    EndingKey::Pronoun { gender: *gender, case, number },
                    ending,
                );
            }
        }

        Ok(Pronoun {
            kind: *kind,
            nominatives: nominatives.map(str::to_string),
            meaning,
            endings,
        })
    }

    pub fn principal_parts(&self) -> Vec<String> {
        self.nominatives.to_vec()
    }
}
