//! English noun pluralisation.

const IRREGULAR_PLURALS: [(&str, &str); 12] = [
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("fish", "fish"),
];

pub fn pluralize(noun: &str) -> String {
    // Multi-word meanings pluralise their head word, which for the phrases
    // vocab lists use ("battle line", "son of a king") is the last word
    // unless an "of" phrase follows it.
    if let Some(of_index) = noun.find(" of ") {
        let (head, rest) = noun.split_at(of_index);
        return format!("{}{rest}", pluralize(head));
    }
    if let Some((head, last)) = noun.rsplit_once(' ') {
        return format!("{head} {}", pluralize(last));
    }

    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == noun) {
        return plural.to_string();
    }
    if noun.ends_with('s')
        || noun.ends_with('x')
        || noun.ends_with('z')
        || noun.ends_with("ch")
        || noun.ends_with("sh")
    {
        return format!("{noun}es");
    }
    if let Some(stem) = noun.strip_suffix('y') {
        if !stem.ends_with(|c| "aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if let Some(stem) = noun.strip_suffix("fe") {
        return format!("{stem}ves");
    }
    if let Some(stem) = noun.strip_suffix('f') {
        return format!("{stem}ves");
    }
    format!("{noun}s")
}
