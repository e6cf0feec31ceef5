use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Product attributes submitted for question generation.
///
/// Constructed at the request boundary and discarded once the response is
/// produced; nothing here is persisted. Date fields are carried verbatim and
/// never parsed by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Input style expected for a follow-up question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Text,
    Select,
    Multiselect,
    Boolean,
    Number,
}

/// A single follow-up disclosure question.
///
/// Ids are unique within a generated batch; `options` is present exactly for
/// select/multiselect questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl Question {
    /// Required free-text question, the shape shared by every template entry.
    pub fn required_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::Text,
            options: None,
            required: true,
        }
    }
}

/// Open mapping of declared product attributes used for scoring.
///
/// The recognized keys are modeled as named fields so the rubric never does
/// stringly-typed lookups; everything else lands in `extra` and is ignored by
/// the current rubric. Values keep their JSON type because submissions arrive
/// from heterogeneous forms (booleans, numbers, and strings all occur).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductDisclosure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_efforts: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cruelty_free: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_friendly: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Truthiness of a declared value, matching dynamic-language semantics:
/// null, false, zero, and empty strings/arrays/objects all count as absent.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Length of the value's string form; zero when the value is absent.
pub fn text_len(value: Option<&Value>) -> usize {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::String(text)) => text.chars().count(),
        Some(other) => other.to_string().chars().count(),
    }
}
