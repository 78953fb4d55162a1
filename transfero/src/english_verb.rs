//! English verb morphology: principal forms from a lemma.
//!
//! An irregular table covers the common strong verbs; everything else goes
//! through the orthographic rules. Unknown lemmas never fail, they just
//! inflect regularly.

/// (lemma, past, past participle). The 3rd singular and present participle
/// are always regular enough to synthesise.
const IRREGULAR_VERBS: [(&str, &str, &str); 78] = [
    ("be", "was", "been"),
    ("bear", "bore", "borne"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"),
    ("get", "got", "got"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("let", "let", "let"),
    ("lie", "lay", "lain"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("read", "read", "read"),
    ("ride", "rode", "ridden"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("shake", "shook", "shaken"),
    ("show", "showed", "shown"),
    ("sing", "sang", "sung"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("strike", "struck", "struck"),
    ("swim", "swam", "swum"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("win", "won", "won"),
    ("write", "wrote", "written"),
];

/// The principal forms of an English verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbForms {
    pub lemma: String,
    pub third_singular: String,
    pub present_participle: String,
    pub past: String,
    pub past_participle: String,
}

pub fn verb_forms(lemma: &str) -> VerbForms {
    let (past, past_participle) = match IRREGULAR_VERBS.iter().find(|(l, ..)| *l == lemma) {
        Some((_, past, participle)) => (past.to_string(), participle.to_string()),
        None => {
            let past = regular_past(lemma);
            (past.clone(), past)
        }
    };
    VerbForms {
        lemma: lemma.to_string(),
        third_singular: third_singular(lemma),
        present_participle: present_participle(lemma),
        past,
        past_participle,
    }
}

fn is_vowel(c: char) -> bool {
    "aeiou".contains(c)
}

fn third_singular(lemma: &str) -> String {
    if lemma == "be" {
        return "is".to_string();
    }
    if lemma == "have" {
        return "has".to_string();
    }
    if lemma.ends_with('s')
        || lemma.ends_with('x')
        || lemma.ends_with('z')
        || lemma.ends_with("ch")
        || lemma.ends_with("sh")
        || lemma.ends_with('o')
    {
        return format!("{lemma}es");
    }
    if let Some(stem) = lemma.strip_suffix('y') {
        if !stem.ends_with(is_vowel) {
            return format!("{stem}ies");
        }
    }
    format!("{lemma}s")
}

fn present_participle(lemma: &str) -> String {
    if lemma == "be" {
        return "being".to_string();
    }
    if let Some(stem) = lemma.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    if let Some(stem) = lemma.strip_suffix('e') {
        if !stem.ends_with('e') && !stem.is_empty() {
            return format!("{stem}ing");
        }
    }
    if let Some(doubled) = double_final_consonant(lemma) {
        return format!("{doubled}ing");
    }
    format!("{lemma}ing")
}

fn regular_past(lemma: &str) -> String {
    if lemma.ends_with('e') {
        return format!("{lemma}d");
    }
    if let Some(stem) = lemma.strip_suffix('y') {
        if !stem.ends_with(is_vowel) {
            return format!("{stem}ied");
        }
    }
    if let Some(doubled) = double_final_consonant(lemma) {
        return format!("{doubled}ed");
    }
    format!("{lemma}ed")
}

/// Doubles the final consonant of short consonant-vowel-consonant stems
/// (stop -> stopp-, run -> runn-). Longer words are left alone; the
/// heuristic only fires on monosyllables.
fn double_final_consonant(lemma: &str) -> Option<String> {
    let chars: Vec<char> = lemma.chars().collect();
    let [.., a, b, c] = chars[..] else { return None };
    if chars.len() > 4 {
        return None;
    }
    if !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !"wxy".contains(c) {
        Some(format!("{lemma}{c}"))
    } else {
        None
    }
}
