//! # Record Normalization
//!
//! The document store accepts any JSON object per document, so records
//! read back may be missing fields or hold the wrong types. [`normalize`]
//! is the one path from such a document to a [`Palette`]:
//!
//! | Field       | Coercion                                                    |
//! |-------------|-------------------------------------------------------------|
//! | `id`        | required string, else [`NormalizeError::MissingId`]         |
//! | `title`     | non-string or absent becomes `""`                           |
//! | `notes`     | non-string or absent becomes `""`                           |
//! | `tags`      | non-array becomes `[]`; non-string elements dropped         |
//! | `colors`    | non-array becomes `[]`; non-string elements dropped         |
//! | `textPairs` | non-array becomes `[]`; non-object elements dropped, missing or non-string `background`/`text` become `""` |
//!
//! Unrecognized fields are dropped. Normalizing the JSON form of an
//! already-normalized palette returns the same palette.

use serde_json::{Map, Value};

use crate::error::NormalizeError;
use crate::palette::{Palette, PaletteId, TextPair};

/// Coerce a raw stored document into a well-formed [`Palette`].
pub fn normalize(raw: &Value) -> Result<Palette, NormalizeError> {
    let doc = raw
        .as_object()
        .ok_or_else(|| NormalizeError::NotAnObject(json_type(raw)))?;

    let id = doc
        .get("id")
        .and_then(Value::as_str)
        .ok_or(NormalizeError::MissingId)?;

    Ok(Palette {
        id: PaletteId::new(id),
        title: string_field(doc, "title"),
        notes: string_field(doc, "notes"),
        tags: string_array(doc, "tags"),
        colors: string_array(doc, "colors"),
        text_pairs: array(doc, "textPairs")
            .filter_map(Value::as_object)
            .map(|pair| TextPair {
                background: string_field(pair, "background"),
                text: string_field(pair, "text"),
            })
            .collect(),
    })
}

fn string_field(doc: &Map<String, Value>, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array<'a>(doc: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|items| items.as_slice())
        .unwrap_or_default()
        .iter()
}

fn string_array(doc: &Map<String, Value>, key: &str) -> Vec<String> {
    array(doc, key)
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
