//! Present-system suffix rows for the regular conjugations.
//!
//! Each table is indexed by conjugation (first, second, third, fourth,
//! mixed) and then by person/number slot (1sg, 2sg, 3sg, 1pl, 2pl, 3pl).
//! Suffixes attach to the present stem. The perfect system does not vary by
//! conjugation and lives in [`crate::verb`] directly.

/// One person/number row of six suffixes.
pub(crate) type Row = [&'static str; 6];

/// Rows for the five regular conjugation patterns, in the order
/// first, second, third, fourth, mixed.
pub(crate) type ConjTable = [Row; 5];

pub(crate) const PRESENT_ACTIVE_INDICATIVE: ConjTable = [
    ["o", "as", "at", "amus", "atis", "ant"],
    ["eo", "es", "et", "emus", "etis", "ent"],
    ["o", "is", "it", "imus", "itis", "unt"],
    ["io", "is", "it", "imus", "itis", "iunt"],
    ["io", "is", "it", "imus", "itis", "iunt"],
];

pub(crate) const IMPERFECT_ACTIVE_INDICATIVE: ConjTable = [
    ["abam", "abas", "abat", "abamus", "abatis", "abant"],
    ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    ["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
    ["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
];

pub(crate) const FUTURE_ACTIVE_INDICATIVE: ConjTable = [
    ["abo", "abis", "abit", "abimus", "abitis", "abunt"],
    ["ebo", "ebis", "ebit", "ebimus", "ebitis", "ebunt"],
    ["am", "es", "et", "emus", "etis", "ent"],
    ["iam", "ies", "iet", "iemus", "ietis", "ient"],
    ["iam", "ies", "iet", "iemus", "ietis", "ient"],
];

pub(crate) const PRESENT_PASSIVE_INDICATIVE: ConjTable = [
    ["or", "aris", "atur", "amur", "amini", "antur"],
    ["eor", "eris", "etur", "emur", "emini", "entur"],
    ["or", "eris", "itur", "imur", "imini", "untur"],
    ["ior", "iris", "itur", "imur", "imini", "iuntur"],
    ["ior", "eris", "itur", "imur", "imini", "iuntur"],
];

pub(crate) const IMPERFECT_PASSIVE_INDICATIVE: ConjTable = [
    ["abar", "abaris", "abatur", "abamur", "abamini", "abantur"],
    ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    ["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
    ["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
];

pub(crate) const FUTURE_PASSIVE_INDICATIVE: ConjTable = [
    ["abor", "aberis", "abitur", "abimur", "abimini", "abuntur"],
    ["ebor", "eberis", "ebitur", "ebimur", "ebimini", "ebuntur"],
    ["ar", "eris", "etur", "emur", "emini", "entur"],
    ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
    ["iar", "ieris", "ietur", "iemur", "iemini", "ientur"],
];

pub(crate) const PRESENT_ACTIVE_SUBJUNCTIVE: ConjTable = [
    ["em", "es", "et", "emus", "etis", "ent"],
    ["eam", "eas", "eat", "eamus", "eatis", "eant"],
    ["am", "as", "at", "amus", "atis", "ant"],
    ["iam", "ias", "iat", "iamus", "iatis", "iant"],
    ["iam", "ias", "iat", "iamus", "iatis", "iant"],
];

pub(crate) const IMPERFECT_ACTIVE_SUBJUNCTIVE: ConjTable = [
    ["arem", "ares", "aret", "aremus", "aretis", "arent"],
    ["erem", "eres", "eret", "eremus", "eretis", "erent"],
    ["erem", "eres", "eret", "eremus", "eretis", "erent"],
    ["irem", "ires", "iret", "iremus", "iretis", "irent"],
    ["erem", "eres", "eret", "eremus", "eretis", "erent"],
];

pub(crate) const PRESENT_PASSIVE_SUBJUNCTIVE: ConjTable = [
    ["er", "eris", "etur", "emur", "emini", "entur"],
    ["ear", "earis", "eatur", "eamur", "eamini", "eantur"],
    ["ar", "aris", "atur", "amur", "amini", "antur"],
    ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    ["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
];

pub(crate) const IMPERFECT_PASSIVE_SUBJUNCTIVE: ConjTable = [
    ["arer", "areris", "aretur", "aremur", "aremini", "arentur"],
    ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
    ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
    ["irer", "ireris", "iretur", "iremur", "iremini", "irentur"],
    ["erer", "ereris", "eretur", "eremur", "eremini", "erentur"],
];

/// Present imperative suffixes: [2sg, 2pl].
pub(crate) const PRESENT_ACTIVE_IMPERATIVE: [[&str; 2]; 5] = [
    ["a", "ate"],
    ["e", "ete"],
    ["e", "ite"],
    ["i", "ite"],
    ["e", "ite"],
];

pub(crate) const PRESENT_PASSIVE_IMPERATIVE: [[&str; 2]; 5] = [
    ["are", "amini"],
    ["ere", "emini"],
    ["ere", "imini"],
    ["ire", "imini"],
    ["ere", "imini"],
];

/// Future imperative suffixes: [2sg, 3sg, 2pl, 3pl].
pub(crate) const FUTURE_ACTIVE_IMPERATIVE: [[&str; 4]; 5] = [
    ["ato", "ato", "atote", "anto"],
    ["eto", "eto", "etote", "ento"],
    ["ito", "ito", "itote", "unto"],
    ["ito", "ito", "itote", "iunto"],
    ["ito", "ito", "itote", "iunto"],
];

/// Future passive imperative suffixes: [2sg, 3sg, 3pl]. No second plural is
/// attested for this space.
pub(crate) const FUTURE_PASSIVE_IMPERATIVE: [[&str; 3]; 5] = [
    ["ator", "ator", "antor"],
    ["etor", "etor", "entor"],
    ["itor", "itor", "untor"],
    ["itor", "itor", "iuntor"],
    ["itor", "itor", "iuntor"],
];

/// Theme suffixes used by the nominal verb forms, per conjugation:
/// [present infinitive, passive infinitive, present participle nominative,
/// present participle stem, gerund/gerundive theme].
pub(crate) const THEMES: [[&str; 5]; 5] = [
    ["are", "ari", "ans", "ant", "and"],
    ["ere", "eri", "ens", "ent", "end"],
    ["ere", "i", "ens", "ent", "end"],
    ["ire", "iri", "iens", "ient", "iend"],
    ["ere", "i", "iens", "ient", "iend"],
];

/// Perfect-system active suffixes (attach to the perfect stem); identical
/// across the conjugations.
pub(crate) const PERFECT_ACTIVE_INDICATIVE: Row = ["i", "isti", "it", "imus", "istis", "erunt"];
pub(crate) const PLUPERFECT_ACTIVE_INDICATIVE: Row =
    ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(crate) const FUTURE_PERFECT_ACTIVE_INDICATIVE: Row =
    ["ero", "eris", "erit", "erimus", "eritis", "erint"];
pub(crate) const PERFECT_ACTIVE_SUBJUNCTIVE: Row =
    ["erim", "eris", "erit", "erimus", "eritis", "erint"];
pub(crate) const PLUPERFECT_ACTIVE_SUBJUNCTIVE: Row =
    ["issem", "isses", "isset", "issemus", "issetis", "issent"];

/// Forms of "sum" used by the periphrastic perfect passive, per tense/mood.
pub(crate) const SUM_PRESENT: Row = ["sum", "es", "est", "sumus", "estis", "sunt"];
pub(crate) const SUM_IMPERFECT: Row = ["eram", "eras", "erat", "eramus", "eratis", "erant"];
pub(crate) const SUM_FUTURE: Row = ["ero", "eris", "erit", "erimus", "eritis", "erunt"];
pub(crate) const SUM_PRESENT_SUBJUNCTIVE: Row = ["sim", "sis", "sit", "simus", "sitis", "sint"];
pub(crate) const SUM_IMPERFECT_SUBJUNCTIVE: Row =
    ["essem", "esses", "esset", "essemus", "essetis", "essent"];
