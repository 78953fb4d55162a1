//! Non-inflecting words: prepositions, conjunctions, interjections.

use crate::ending::Endings;
use crate::key::EndingKey;
use crate::meaning::Meaning;

#[derive(Debug, Clone)]
pub struct RegularWord {
    pub form: String,
    pub meaning: Meaning,
    pub(crate) endings: Endings,
}

impl PartialEq for RegularWord {
    fn eq(&self, other: &Self) -> bool {
        (&self.form, &self.meaning) == (&other.form, &other.meaning)
    }
}

impl Eq for RegularWord {}

impl RegularWord {
    pub fn new(form: &str, meaning: Meaning) -> RegularWord {
        let mut endings = Endings::new();
        endings.insert(EndingKey::Regular, form);
        RegularWord {
            form: form.to_string(),
            meaning,
            endings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_form() {
        let et = RegularWord::new("et", Meaning::from("and"));
        assert_eq!(et.endings.len(), 1);
        assert_eq!(
            et.endings.get(&EndingKey::Regular).unwrap().main_form(),
            "et"
        );
        assert!(et.endings.find_keys("et").contains(&EndingKey::Regular));
    }
}
