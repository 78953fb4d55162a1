//! English meanings attached to a word.

use serde::{Deserialize, Serialize};

/// One or more English meanings. The first meaning of `Multiple` is the
/// principal meaning used when a single string is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Meaning {
    Single(String),
    Multiple(Vec<String>),
}

impl Meaning {
    pub fn new<I, S>(meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut meanings: Vec<String> = meanings.into_iter().map(Into::into).collect();
        if meanings.len() == 1 {
            Meaning::Single(meanings.remove(0))
        } else {
            Meaning::Multiple(meanings)
        }
    }

    /// The principal meaning.
    pub fn main(&self) -> &str {
        match self {
            Meaning::Single(meaning) => meaning,
            Meaning::Multiple(meanings) => &meanings[0],
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Meaning::Single(meaning) => std::slice::from_ref(meaning),
            Meaning::Multiple(meanings) => meanings,
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for Meaning {
    fn from(meaning: &str) -> Self {
        Meaning::Single(meaning.to_string())
    }
}

impl std::fmt::Display for Meaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.main())
    }
}
