//! Request and response documents for the interpret contract.

use crate::comps::Comp;
use crate::pricing::Recommendation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretRequest {
    #[serde(default)]
    pub message: String,
}

/// Reply to a chat message, tagged by `intent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "intent")]
pub enum InterpretResponse {
    /// The user wants to sell something: either a form to fill in, or a priced result.
    #[serde(rename = "sell_item")]
    SellItem {
        category: String,
        extracted: Value,
        form: Option<Form>,
        comps: Option<Vec<Comp>>,
        recommendation: Option<Recommendation>,
    },

    #[serde(rename = "greeting")]
    Greeting { message: String },
}

/// Dynamic form asking for item details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub prefill: Prefill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefill {
    pub brand: Option<String>,
    pub item: String,
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required,
            options: None,
        }
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            ..Self::new(name, label, FieldType::Select, false)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Text,
    Select,
}
