//! Ending values and the forward/reverse paradigm tables.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::key::EndingKey;

/// The surface form(s) at one paradigm cell.
///
/// Most cells hold a single form. Where Latin genuinely offers alternatives
/// for the same cell (perfect "amaverunt"/"amavere", "eis"/"iis"), the cell
/// holds them all; the first is the principal form and the order never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ending {
    Single(String),
    Multiple(Vec<String>),
}

impl Ending {
    pub fn single(form: impl Into<String>) -> Self {
        Ending::Single(form.into())
    }

    pub fn multiple<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let forms: Vec<String> = forms.into_iter().map(Into::into).collect();
        debug_assert!(forms.len() > 1, "multiple ending needs at least two forms");
        Ending::Multiple(forms)
    }

    /// The principal surface form of this cell.
    pub fn main_form(&self) -> &str {
        match self {
            Ending::Single(form) => form,
            Ending::Multiple(forms) => &forms[0],
        }
    }

    pub fn forms(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Ending::Single(form) => std::slice::from_ref(form),
            Ending::Multiple(forms) => forms,
        };
        slice.iter().map(String::as_str)
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms().any(|f| f == form)
    }
}

impl From<&str> for Ending {
    fn from(form: &str) -> Self {
        Ending::Single(form.to_string())
    }
}

impl From<String> for Ending {
    fn from(form: String) -> Self {
        Ending::Single(form)
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.main_form())
    }
}

/// A word's complete paradigm: the forward map from key to ending, plus the
/// reverse index from surface form to every key it realises.
///
/// The forward map keeps insertion order, which is the canonical paradigm
/// order for the word kind; everything downstream that iterates a paradigm
/// inherits its determinism from this.
#[derive(Debug, Clone, Default)]
pub struct Endings {
    forward: IndexMap<EndingKey, Ending>,
    reverse: HashMap<String, BTreeSet<EndingKey>>,
}

impl Endings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a cell. Panics in debug builds on duplicate keys: a paradigm
    /// builder that produces the same key twice is wrong.
    pub fn insert(&mut self, key: EndingKey, ending: impl Into<Ending>) {
        let ending = ending.into();
        for form in ending.forms() {
            self.reverse.entry(form.to_string()).or_default().insert(key);
        }
        let previous = self.forward.insert(key, ending);
        debug_assert!(previous.is_none(), "duplicate paradigm key: {key:?}");
    }

    pub fn get(&self, key: &EndingKey) -> Option<&Ending> {
        self.forward.get(key)
    }

    /// Every key whose cell contains `form`, in key order.
    pub fn find_keys(&self, form: &str) -> BTreeSet<EndingKey> {
        self.reverse.get(form).cloned().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EndingKey, &Ending)> {
        self.forward.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &EndingKey> {
        self.forward.keys()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl PartialEq for Endings {
    fn eq(&self, other: &Self) -> bool {
        self.forward.len() == other.forward.len()
            && self
                .forward
                .iter()
                .zip(other.forward.iter())
                .all(|(a, b)| a == b)
    }
}

impl Eq for Endings {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Case, Number};

    fn noun_key(case: Case, number: Number) -> EndingKey {
        EndingKey::Noun { case, number }
    }

    #[test]
    fn test_round_trip() {
        let mut endings = Endings::new();
        endings.insert(noun_key(Case::Nominative, Number::Singular), "agricola");
        endings.insert(noun_key(Case::Genitive, Number::Singular), "agricolae");
        endings.insert(noun_key(Case::Dative, Number::Singular), "agricolae");

        let keys = endings.find_keys("agricolae");
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&noun_key(Case::Genitive, Number::Singular)));
        assert!(keys.contains(&noun_key(Case::Dative, Number::Singular)));

        for (key, ending) in endings.iter() {
            for form in ending.forms() {
                assert!(endings.find_keys(form).contains(key));
            }
        }
    }

    #[test]
    fn test_multiple_endings() {
        let mut endings = Endings::new();
        endings.insert(
            noun_key(Case::Dative, Number::Plural),
            Ending::multiple(["eis", "iis"]),
        );
        assert_eq!(
            endings
                .get(&noun_key(Case::Dative, Number::Plural))
                .unwrap()
                .main_form(),
            "eis"
        );
        assert!(!endings.find_keys("iis").is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut endings = Endings::new();
        endings.insert(noun_key(Case::Nominative, Number::Singular), "a");
        endings.insert(noun_key(Case::Vocative, Number::Singular), "b");
        endings.insert(noun_key(Case::Accusative, Number::Singular), "c");
        let keys: Vec<_> = endings.keys().collect();
        assert_eq!(keys[0].case(), Some(Case::Nominative));
        assert_eq!(keys[1].case(), Some(Case::Vocative));
        assert_eq!(keys[2].case(), Some(Case::Accusative));
    }
}
