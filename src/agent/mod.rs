//! Chat-facing interpret contract: detail submissions get priced, sell
//! messages get a form, everything else gets a greeting.

mod models;

pub use models::{FieldSpec, FieldType, Form, InterpretRequest, InterpretResponse, Prefill};

use crate::comps::{CompAssembler, PriceExtractor, Query};
use crate::pricing::recommend;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

/// Prefix marking a message as a submitted details form.
pub const DETAILS_PREFIX: &str = "DETAILS:";

pub const GREETING: &str = "Hello! Tell me what furniture you want to sell.";

/// Item details pulled from a `DETAILS:` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub query: Query,
    pub expected_price: Option<f64>,
    pub raw: Value,
}

impl Details {
    /// Parses the JSON object after the `DETAILS:` prefix.
    pub fn parse(payload: &str) -> Result<Self> {
        let raw: Value =
            serde_json::from_str(payload.trim()).context("Failed to parse details payload")?;
        let fields = raw.as_object().context("Details payload must be a JSON object")?;

        let item = text_field(fields, "item")
            .or_else(|| text_field(fields, "category"))
            .unwrap_or("item");
        let brand = text_field(fields, "brand");
        let condition = text_field(fields, "condition");

        let expected_price = ["price", "price_expectation"]
            .iter()
            .filter_map(|name| fields.get(*name))
            .find(|value| is_filled(value))
            .and_then(number_value);
        let query = Query::new(item, brand, condition);

        Ok(Self { query, expected_price, raw })
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty())
}

/// A field counts as filled unless it is null, false, zero, or empty.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Numbers and numeric strings are accepted; anything else counts as absent.
fn number_value(value: &Value) -> Option<f64> {
    let value = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|p| p.is_finite())
}

/// Answers a chat message.
pub async fn interpret<E: PriceExtractor>(
    message: &str,
    assembler: &CompAssembler<E>,
) -> Result<InterpretResponse> {
    if let Some(payload) = message.strip_prefix(DETAILS_PREFIX) {
        let details = Details::parse(payload)?;
        info!("Pricing {}", details.query.label());

        let comps = assembler.build_comps(&details.query).await;
        let recommendation = recommend(details.expected_price, &comps);

        return Ok(InterpretResponse::SellItem {
            category: details.query.item.clone(),
            extracted: details.raw,
            form: None,
            comps: Some(comps),
            recommendation: Some(recommendation),
        });
    }

    let text = message.to_lowercase();
    if text.contains("sell") {
        let brand = text.contains("ikea").then(|| "IKEA".to_string());
        let item = guess_item(&text);
        debug!("Sell request for {} (brand {:?})", item, brand);

        let extracted = json!({ "brand": brand, "item": item });
        return Ok(InterpretResponse::SellItem {
            category: item.to_string(),
            extracted,
            form: Some(details_form(brand, item)),
            comps: None,
            recommendation: None,
        });
    }

    Ok(InterpretResponse::Greeting { message: GREETING.to_string() })
}

fn guess_item(text: &str) -> &'static str {
    if text.contains("chair") {
        "chair"
    } else if text.contains("table") {
        "table"
    } else if text.contains("sofa") || text.contains("couch") {
        "sofa"
    } else {
        "item"
    }
}

/// The form shown after a sell message.
pub fn details_form(brand: Option<String>, item: &str) -> Form {
    let title = match &brand {
        Some(brand) => format!("Details for {} {}", brand, item),
        None => format!("Details for {}", item),
    };

    Form {
        title,
        fields: vec![
            FieldSpec::new("price", "Your expected price ($)", FieldType::Number, true),
            FieldSpec::new("notes", "Notes (optional)", FieldType::Text, false),
            FieldSpec::select("shape", "Shape", &["Rectangle", "Round", "Square", "Other"]),
            FieldSpec::new("dimensions", "Dimensions (L x W x H)", FieldType::Text, false),
        ],
        prefill: Prefill { brand, item: item.to_string() },
    }
}
