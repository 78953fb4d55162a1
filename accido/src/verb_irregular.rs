//! Hand-authored paradigms for the irregular verbs.
//!
//! These verbs replace the table-driven builders wholesale; each entry
//! authors its present system explicitly and reuses the regular
//! perfect-system and participle helpers where the verb behaves regularly
//! (the perfect systems of sum, volo, fero and friends are built on their
//! perfect stems by the ordinary rules).

use crate::ending::{Ending, Endings};
use crate::key::EndingKey;
use crate::meaning::Meaning;
use crate::tags::{Case, Mood, Number, Person, Tense, Voice};
use crate::verb::{
    add_212_participle, add_gerund, add_perfect_system_active, add_periphrastic_perfect,
    add_present_participle, add_supine, Conjugation, Verb,
};

/// Returns the fully built verb when `present` names a supported irregular.
pub(crate) fn build(present: &str, meaning: Meaning) -> Option<Verb> {
    let (infinitive, perfect, ppp, builder): (
        Option<&str>,
        Option<&str>,
        Option<&str>,
        fn(&mut Endings),
    ) = match present {
        "sum" => (Some("esse"), Some("fui"), None, build_sum),
        "possum" => (Some("posse"), Some("potui"), None, build_possum),
        "volo" => (Some("velle"), Some("volui"), None, build_volo),
        "nolo" => (Some("nolle"), Some("nolui"), None, build_nolo),
        "malo" => (Some("malle"), Some("malui"), None, build_malo),
        "eo" => (Some("ire"), Some("ii"), None, build_eo),
        "fero" => (Some("ferre"), Some("tuli"), Some("latus"), build_fero),
        "fio" => (Some("fieri"), Some("factus sum"), None, build_fio),
        "edo" => (Some("edere"), Some("edi"), Some("esus"), build_edo),
        "inquam" => (None, None, None, build_inquam),
        _ => return None,
    };

    let mut endings = Endings::new();
    builder(&mut endings);

    Some(Verb {
        present: present.to_string(),
        infinitive: infinitive.map(str::to_string),
        perfect: perfect.map(str::to_string),
        ppp: ppp.map(str::to_string),
        meaning,
        conjugation: Conjugation::Irregular,
        deponent: false,
        semi_deponent: false,
        endings,
    })
}

fn row(endings: &mut Endings, tense: Tense, voice: Voice, mood: Mood, forms: [&str; 6]) {
    for number in Number::ALL {
        for person in Person::ALL {
            endings.insert(
                EndingKey::Finite { tense, voice, mood, person, number },
                forms[person.row_index(number)],
            );
        }
    }
}

fn imperative(
    endings: &mut Endings,
    tense: Tense,
    voice: Voice,
    person: Person,
    number: Number,
    form: impl Into<Ending>,
) {
    endings.insert(EndingKey::Imperative { tense, voice, person, number }, form);
}

fn infinitive(endings: &mut Endings, tense: Tense, voice: Voice, form: impl Into<Ending>) {
    endings.insert(EndingKey::Infinitive { tense, voice }, form);
}

fn build_sum(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["sum", "es", "est", "sumus", "estis", "sunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["eram", "eras", "erat", "eramus", "eratis", "erant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["ero", "eris", "erit", "erimus", "eritis", "erunt"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["sim", "sis", "sit", "simus", "sitis", "sint"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["essem", "esses", "esset", "essemus", "essetis", "essent"]);
    add_perfect_system_active(e, "fu", Voice::Active);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, "es");
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, "este");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Singular, "esto");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Singular, "esto");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Plural, "estote");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Plural, "sunto");

    infinitive(e, Tense::Present, Voice::Active, "esse");
    infinitive(e, Tense::Perfect, Voice::Active, "fuisse");
    infinitive(e, Tense::Future, Voice::Active, Ending::multiple(["futurus esse", "fore"]));

    add_212_participle(e, "futur", Tense::Future, Voice::Active);
}

fn build_possum(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["possum", "potes", "potest", "possumus", "potestis", "possunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["poteram", "poteras", "poterat", "poteramus", "poteratis", "poterant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["potero", "poteris", "poterit", "poterimus", "poteritis", "poterunt"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["possim", "possis", "possit", "possimus", "possitis", "possint"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["possem", "posses", "posset", "possemus", "possetis", "possent"]);
    add_perfect_system_active(e, "potu", Voice::Active);

    infinitive(e, Tense::Present, Voice::Active, "posse");
    infinitive(e, Tense::Perfect, Voice::Active, "potuisse");

    add_present_participle(e, "potens", "potent", Voice::Active);
}

fn build_volo(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["volo", "vis", "vult", "volumus", "vultis", "volunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["volebam", "volebas", "volebat", "volebamus", "volebatis", "volebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["volam", "voles", "volet", "volemus", "voletis", "volent"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["velim", "velis", "velit", "velimus", "velitis", "velint"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["vellem", "velles", "vellet", "vellemus", "velletis", "vellent"]);
    add_perfect_system_active(e, "volu", Voice::Active);

    infinitive(e, Tense::Present, Voice::Active, "velle");
    infinitive(e, Tense::Perfect, Voice::Active, "voluisse");

    add_present_participle(e, "volens", "volent", Voice::Active);
}

fn build_nolo(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["nolo", "non vis", "non vult", "nolumus", "non vultis", "nolunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["nolebam", "nolebas", "nolebat", "nolebamus", "nolebatis", "nolebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["nolam", "noles", "nolet", "nolemus", "noletis", "nolent"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["nolim", "nolis", "nolit", "nolimus", "nolitis", "nolint"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["nollem", "nolles", "nollet", "nollemus", "nolletis", "nollent"]);
    add_perfect_system_active(e, "nolu", Voice::Active);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, "noli");
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, "nolite");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Singular, "nolito");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Singular, "nolito");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Plural, "nolitote");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Plural, "nolunto");

    infinitive(e, Tense::Present, Voice::Active, "nolle");
    infinitive(e, Tense::Perfect, Voice::Active, "noluisse");

    add_present_participle(e, "nolens", "nolent", Voice::Active);
}

fn build_malo(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["malo", "mavis", "mavult", "malumus", "mavultis", "malunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["malebam", "malebas", "malebat", "malebamus", "malebatis", "malebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["malam", "males", "malet", "malemus", "maletis", "malent"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["malim", "malis", "malit", "malimus", "malitis", "malint"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["mallem", "malles", "mallet", "mallemus", "malletis", "mallent"]);
    add_perfect_system_active(e, "malu", Voice::Active);

    infinitive(e, Tense::Present, Voice::Active, "malle");
    infinitive(e, Tense::Perfect, Voice::Active, "maluisse");
}

fn build_eo(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["eo", "is", "it", "imus", "itis", "eunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["ibam", "ibas", "ibat", "ibamus", "ibatis", "ibant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["ibo", "ibis", "ibit", "ibimus", "ibitis", "ibunt"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["eam", "eas", "eat", "eamus", "eatis", "eant"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["irem", "ires", "iret", "iremus", "iretis", "irent"]);
    add_perfect_system_active(e, "i", Voice::Active);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, "i");
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, "ite");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Singular, "ito");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Singular, "ito");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Plural, "itote");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Plural, "eunto");

    infinitive(e, Tense::Present, Voice::Active, "ire");
    infinitive(e, Tense::Perfect, Voice::Active, Ending::multiple(["isse", "iisse"]));
    infinitive(e, Tense::Future, Voice::Active, "iturus esse");

    // The present participle keeps its irregular oblique stem: iens, euntis.
    add_present_participle(e, "iens", "eunt", Voice::Active);
    add_212_participle(e, "itur", Tense::Future, Voice::Active);
    add_212_participle(e, "eund", Tense::Future, Voice::Passive);
    add_gerund(e, "eund");
    add_supine(e, "it");
}

fn build_fero(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["fero", "fers", "fert", "ferimus", "fertis", "ferunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["ferebam", "ferebas", "ferebat", "ferebamus", "ferebatis", "ferebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["feram", "feres", "feret", "feremus", "feretis", "ferent"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["feram", "feras", "ferat", "feramus", "feratis", "ferant"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["ferrem", "ferres", "ferret", "ferremus", "ferretis", "ferrent"]);
    row(e, Tense::Present, Voice::Passive, Mood::Indicative, ["feror", "ferris", "fertur", "ferimur", "ferimini", "feruntur"]);
    row(e, Tense::Imperfect, Voice::Passive, Mood::Indicative, ["ferebar", "ferebaris", "ferebatur", "ferebamur", "ferebamini", "ferebantur"]);
    row(e, Tense::Future, Voice::Passive, Mood::Indicative, ["ferar", "fereris", "feretur", "feremur", "feremini", "ferentur"]);
    row(e, Tense::Present, Voice::Passive, Mood::Subjunctive, ["ferar", "feraris", "feratur", "feramur", "feramini", "ferantur"]);
    row(e, Tense::Imperfect, Voice::Passive, Mood::Subjunctive, ["ferrer", "ferreris", "ferretur", "ferremur", "ferremini", "ferrentur"]);
    add_perfect_system_active(e, "tul", Voice::Active);
    add_periphrastic_perfect(e, "lat", Voice::Passive);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, "fer");
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, "ferte");
    imperative(e, Tense::Present, Voice::Passive, Person::Second, Number::Singular, "ferre");
    imperative(e, Tense::Present, Voice::Passive, Person::Second, Number::Plural, "ferimini");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Singular, "ferto");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Singular, "ferto");
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Plural, "fertote");
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Plural, "ferunto");
    imperative(e, Tense::Future, Voice::Passive, Person::Second, Number::Singular, "fertor");
    imperative(e, Tense::Future, Voice::Passive, Person::Third, Number::Singular, "fertor");
    imperative(e, Tense::Future, Voice::Passive, Person::Third, Number::Plural, "feruntor");

    infinitive(e, Tense::Present, Voice::Active, "ferre");
    infinitive(e, Tense::Present, Voice::Passive, "ferri");
    infinitive(e, Tense::Perfect, Voice::Active, "tulisse");
    infinitive(e, Tense::Perfect, Voice::Passive, "latus esse");
    infinitive(e, Tense::Future, Voice::Active, "laturus esse");
    infinitive(e, Tense::Future, Voice::Passive, "latum iri");

    add_present_participle(e, "ferens", "ferent", Voice::Active);
    add_212_participle(e, "lat", Tense::Perfect, Voice::Passive);
    add_212_participle(e, "latur", Tense::Future, Voice::Active);
    add_212_participle(e, "ferend", Tense::Future, Voice::Passive);
    add_gerund(e, "ferend");
    add_supine(e, "lat");
}

fn build_fio(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["fio", "fis", "fit", "fimus", "fitis", "fiunt"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["fiebam", "fiebas", "fiebat", "fiebamus", "fiebatis", "fiebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["fiam", "fies", "fiet", "fiemus", "fietis", "fient"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["fiam", "fias", "fiat", "fiamus", "fiatis", "fiant"]);
    row(e, Tense::Imperfect, Voice::Active, Mood::Subjunctive, ["fierem", "fieres", "fieret", "fieremus", "fieretis", "fierent"]);
    // Passive-shaped perfect with active sense, like a deponent.
    add_periphrastic_perfect(e, "fact", Voice::Active);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, "fi");
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, "fite");

    infinitive(e, Tense::Present, Voice::Active, "fieri");
    infinitive(e, Tense::Perfect, Voice::Active, "factus esse");

    add_212_participle(e, "fact", Tense::Perfect, Voice::Active);
}

fn build_edo(e: &mut Endings) {
    let multi = |a: &str, b: &str| Ending::multiple([a, b]);

    // Present indicative active carries the athematic alternatives.
    let forms: [Ending; 6] = [
        "edo".into(),
        multi("edis", "es"),
        multi("edit", "est"),
        "edimus".into(),
        multi("editis", "estis"),
        "edunt".into(),
    ];
    for number in Number::ALL {
        for person in Person::ALL {
            e.insert(
                EndingKey::Finite {
                    tense: Tense::Present,
                    voice: Voice::Active,
                    mood: Mood::Indicative,
                    person,
                    number,
                },
                forms[person.row_index(number)].clone(),
            );
        }
    }
    row(e, Tense::Imperfect, Voice::Active, Mood::Indicative, ["edebam", "edebas", "edebat", "edebamus", "edebatis", "edebant"]);
    row(e, Tense::Future, Voice::Active, Mood::Indicative, ["edam", "edes", "edet", "edemus", "edetis", "edent"]);
    row(e, Tense::Present, Voice::Active, Mood::Subjunctive, ["edam", "edas", "edat", "edamus", "edatis", "edant"]);
    let forms: [Ending; 6] = [
        multi("ederem", "essem"),
        multi("ederes", "esses"),
        multi("ederet", "esset"),
        multi("ederemus", "essemus"),
        multi("ederetis", "essetis"),
        multi("ederent", "essent"),
    ];
    for number in Number::ALL {
        for person in Person::ALL {
            e.insert(
                EndingKey::Finite {
                    tense: Tense::Imperfect,
                    voice: Voice::Active,
                    mood: Mood::Subjunctive,
                    person,
                    number,
                },
                forms[person.row_index(number)].clone(),
            );
        }
    }
    row(e, Tense::Present, Voice::Passive, Mood::Indicative, ["edor", "ederis", "editur", "edimur", "edimini", "eduntur"]);
    row(e, Tense::Imperfect, Voice::Passive, Mood::Indicative, ["edebar", "edebaris", "edebatur", "edebamur", "edebamini", "edebantur"]);
    row(e, Tense::Future, Voice::Passive, Mood::Indicative, ["edar", "ederis", "edetur", "edemur", "edemini", "edentur"]);
    row(e, Tense::Present, Voice::Passive, Mood::Subjunctive, ["edar", "edaris", "edatur", "edamur", "edamini", "edantur"]);
    row(e, Tense::Imperfect, Voice::Passive, Mood::Subjunctive, ["ederer", "edereris", "ederetur", "ederemur", "ederemini", "ederentur"]);
    add_perfect_system_active(e, "ed", Voice::Active);
    add_periphrastic_perfect(e, "es", Voice::Passive);

    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Singular, multi("ede", "es"));
    imperative(e, Tense::Present, Voice::Active, Person::Second, Number::Plural, multi("edite", "este"));
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Singular, multi("edito", "esto"));
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Singular, multi("edito", "esto"));
    imperative(e, Tense::Future, Voice::Active, Person::Second, Number::Plural, multi("editote", "estote"));
    imperative(e, Tense::Future, Voice::Active, Person::Third, Number::Plural, "edunto");

    infinitive(e, Tense::Present, Voice::Active, multi("edere", "esse"));
    infinitive(e, Tense::Present, Voice::Passive, "edi");
    infinitive(e, Tense::Perfect, Voice::Active, "edisse");
    infinitive(e, Tense::Perfect, Voice::Passive, "esus esse");
    infinitive(e, Tense::Future, Voice::Active, "esurus esse");
    infinitive(e, Tense::Future, Voice::Passive, "esum iri");

    add_present_participle(e, "edens", "edent", Voice::Active);
    add_212_participle(e, "es", Tense::Perfect, Voice::Passive);
    add_212_participle(e, "esur", Tense::Future, Voice::Active);
    add_212_participle(e, "edend", Tense::Future, Voice::Passive);
    add_gerund(e, "edend");
    add_supine(e, "es");
}

/// "inquam" is defective; only the attested cells exist.
fn build_inquam(e: &mut Endings) {
    row(e, Tense::Present, Voice::Active, Mood::Indicative, ["inquam", "inquis", "inquit", "inquimus", "inquitis", "inquiunt"]);

    let third_sg = |tense| EndingKey::Finite {
        tense,
        voice: Voice::Active,
        mood: Mood::Indicative,
        person: Person::Third,
        number: Number::Singular,
    };
    e.insert(third_sg(Tense::Imperfect), "inquiebat");
    e.insert(
        EndingKey::Finite {
            tense: Tense::Future,
            voice: Voice::Active,
            mood: Mood::Indicative,
            person: Person::Second,
            number: Number::Singular,
        },
        "inquies",
    );
    e.insert(third_sg(Tense::Future), "inquiet");
    e.insert(
        EndingKey::Finite {
            tense: Tense::Perfect,
            voice: Voice::Active,
            mood: Mood::Indicative,
            person: Person::Second,
            number: Number::Singular,
        },
        "inquisti",
    );
    e.insert(third_sg(Tense::Perfect), "inquit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Gender;

    fn form(verb: &Verb, key: EndingKey) -> String {
        verb.endings.get(&key).unwrap().main_form().to_string()
    }

    fn finite(tense: Tense, voice: Voice, mood: Mood, person: Person, number: Number) -> EndingKey {
        EndingKey::Finite { tense, voice, mood, person, number }
    }

    #[test]
    fn test_sum() {
        let sum = build("sum", Meaning::from("be")).unwrap();
        assert_eq!(sum.conjugation, Conjugation::Irregular);
        assert_eq!(
            form(&sum, finite(Tense::Present, Voice::Active, Mood::Indicative, Person::Third, Number::Plural)),
            "sunt"
        );
        assert_eq!(
            form(&sum, finite(Tense::Perfect, Voice::Active, Mood::Indicative, Person::First, Number::Singular)),
            "fui"
        );
        assert_eq!(
            form(&sum, finite(Tense::Imperfect, Voice::Active, Mood::Subjunctive, Person::Third, Number::Singular)),
            "esset"
        );
    }

    #[test]
    fn test_possum() {
        let possum = build("possum", Meaning::from("be able")).unwrap();
        assert_eq!(
            form(&possum, finite(Tense::Present, Voice::Active, Mood::Indicative, Person::Second, Number::Singular)),
            "potes"
        );
        assert_eq!(
            form(&possum, finite(Tense::Present, Voice::Active, Mood::Subjunctive, Person::First, Number::Singular)),
            "possim"
        );
    }

    #[test]
    fn test_nolo_negative_forms() {
        let nolo = build("nolo", Meaning::from("not want")).unwrap();
        assert_eq!(
            form(&nolo, finite(Tense::Present, Voice::Active, Mood::Indicative, Person::Second, Number::Singular)),
            "non vis"
        );
        assert_eq!(
            form(&nolo, EndingKey::Imperative { tense: Tense::Present, voice: Voice::Active, person: Person::Second, number: Number::Singular }),
            "noli"
        );
    }

    #[test]
    fn test_eo_participle_stem() {
        let eo = build("eo", Meaning::from("go")).unwrap();
        let nom = EndingKey::Participle {
            tense: Tense::Present,
            voice: Voice::Active,
            gender: Gender::Masculine,
            case: Case::Nominative,
            number: Number::Singular,
        };
        let gen = EndingKey::Participle {
            tense: Tense::Present,
            voice: Voice::Active,
            gender: Gender::Masculine,
            case: Case::Genitive,
            number: Number::Singular,
        };
        assert_eq!(form(&eo, nom), "iens");
        assert_eq!(form(&eo, gen), "euntis");
        assert_eq!(form(&eo, EndingKey::Gerund { case: Case::Accusative }), "eundum");
    }

    #[test]
    fn test_fero_passive() {
        let fero = build("fero", Meaning::from("carry")).unwrap();
        assert_eq!(
            form(&fero, finite(Tense::Present, Voice::Passive, Mood::Indicative, Person::Second, Number::Singular)),
            "ferris"
        );
        assert_eq!(
            form(&fero, finite(Tense::Perfect, Voice::Passive, Mood::Indicative, Person::First, Number::Singular)),
            "latus sum"
        );
        assert_eq!(
            form(&fero, EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Passive }),
            "ferri"
        );
    }

    #[test]
    fn test_edo_athematic_alternatives() {
        let edo = build("edo", Meaning::from("eat")).unwrap();
        let ending = edo
            .endings
            .get(&finite(Tense::Present, Voice::Active, Mood::Indicative, Person::Third, Number::Singular))
            .unwrap();
        let forms: Vec<_> = ending.forms().collect();
        assert_eq!(forms, vec!["edit", "est"]);
    }

    #[test]
    fn test_inquam_defective() {
        let inquam = build("inquam", Meaning::from("say")).unwrap();
        assert_eq!(
            form(&inquam, finite(Tense::Present, Voice::Active, Mood::Indicative, Person::Third, Number::Singular)),
            "inquit"
        );
        assert!(inquam
            .endings
            .get(&finite(Tense::Present, Voice::Active, Mood::Subjunctive, Person::First, Number::Singular))
            .is_none());
        assert!(inquam
            .endings
            .get(&EndingKey::Infinitive { tense: Tense::Present, voice: Voice::Active })
            .is_none());
    }

    #[test]
    fn test_unknown_is_none() {
        assert!(build("amo", Meaning::from("love")).is_none());
    }
}
