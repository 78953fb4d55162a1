//! Question objects and their wire shape.
//!
//! Each question serialises as a single-key object discriminated by
//! `question_type`:
//!
//! ```json
//! {"question_type": "MultipleChoiceEngToLatQuestion",
//!  "MultipleChoiceEngToLatQuestion":
//!    {"prompt": "this", "answer": "hic", "choices": ["acer", "hic", "laetus"]}}
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MultipleChoicePayload {
    pub prompt: String,
    pub answer: String,
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TypeInPayload {
    pub prompt: String,
    pub main_answer: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseWordLatToCompPayload {
    pub prompt: String,
    pub dictionary_entry: String,
    pub main_answer: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseWordCompToLatPayload {
    pub prompt: String,
    pub components: String,
    pub main_answer: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PrincipalPartsPayload {
    pub prompt: String,
    pub principal_parts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    TypeInEngToLat(TypeInPayload),
    TypeInLatToEng(TypeInPayload),
    ParseWordLatToComp(ParseWordLatToCompPayload),
    ParseWordCompToLat(ParseWordCompToLatPayload),
    PrincipalParts(PrincipalPartsPayload),
    MultipleChoiceEngToLat(MultipleChoicePayload),
    MultipleChoiceLatToEng(MultipleChoicePayload),
}

impl Question {
    /// The `question_type` discriminator on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            Question::TypeInEngToLat(_) => "TypeInEngToLatQuestion",
            Question::TypeInLatToEng(_) => "TypeInLatToEngQuestion",
            Question::ParseWordLatToComp(_) => "ParseWordLatToCompQuestion",
            Question::ParseWordCompToLat(_) => "ParseWordCompToLatQuestion",
            Question::PrincipalParts(_) => "PrincipalPartsQuestion",
            Question::MultipleChoiceEngToLat(_) => "MultipleChoiceEngToLatQuestion",
            Question::MultipleChoiceLatToEng(_) => "MultipleChoiceLatToEngQuestion",
        }
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.type_name();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("question_type", name)?;
        match self {
            Question::TypeInEngToLat(payload) | Question::TypeInLatToEng(payload) => {
                map.serialize_entry(name, payload)?;
            }
            Question::ParseWordLatToComp(payload) => map.serialize_entry(name, payload)?,
            Question::ParseWordCompToLat(payload) => map.serialize_entry(name, payload)?,
            Question::PrincipalParts(payload) => map.serialize_entry(name, payload)?,
            Question::MultipleChoiceEngToLat(payload)
            | Question::MultipleChoiceLatToEng(payload) => {
                map.serialize_entry(name, payload)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let question = Question::MultipleChoiceEngToLat(MultipleChoicePayload {
            prompt: "this".to_string(),
            answer: "hic".to_string(),
            choices: vec!["acer".to_string(), "hic".to_string(), "laetus".to_string()],
        });
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["question_type"], "MultipleChoiceEngToLatQuestion");
        assert_eq!(value["MultipleChoiceEngToLatQuestion"]["answer"], "hic");
        assert_eq!(
            value["MultipleChoiceEngToLatQuestion"]["choices"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_payload_shape() {
        let question = Question::ParseWordLatToComp(ParseWordLatToCompPayload {
            prompt: "agricolae".to_string(),
            dictionary_entry: "farmer: agricola, agricolae, (m)".to_string(),
            main_answer: "nominative plural".to_string(),
            answers: vec!["dative singular".to_string(), "genitive singular".to_string()],
        });
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.starts_with(r#"{"question_type":"ParseWordLatToCompQuestion""#));
        assert!(json.contains(r#""dictionary_entry":"farmer: agricola, agricolae, (m)""#));
    }
}
