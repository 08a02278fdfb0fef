//! Typed view over the structured CV returned by the language model.
//!
//! The model response is only required to be valid JSON, so every field is
//! read leniently: a missing or mistyped key yields an empty list.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCandidate {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub qualifications: Vec<String>,
}

impl ParsedCandidate {
    pub fn from_value(value: &Value) -> Self {
        Self {
            skills: string_list(value.get("skills")),
            experience: value
                .get("experience")
                .and_then(Value::as_array)
                .map(|arr| arr.iter().filter_map(experience_entry).collect())
                .unwrap_or_default(),
            qualifications: string_list(value.get("qualifications")),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn experience_entry(value: &Value) -> Option<ExperienceEntry> {
    let obj = value.as_object()?;
    let text = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some(ExperienceEntry {
        title: text("title"),
        dates: text("dates"),
    })
}
