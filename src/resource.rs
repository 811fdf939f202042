// src/resource.rs

use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};

/// A record type bound to one collection of the store.
pub trait Resource: Serialize + Send + Sync + Sized + 'static {
    const COLLECTION: &'static str;
    /// Field carrying the stored record in the create response.
    const KEY: &'static str;
    const CREATED: &'static str;
    const DELETED: &'static str;

    /// Example records inserted into an empty collection at startup.
    fn samples() -> Vec<Self>;

    fn sample_documents() -> Result<Vec<Document>, bson::ser::Error> {
        Self::samples().iter().map(bson::to_document).collect()
    }
}

/// Converts a request body into a document, keeping every field it carries.
///
/// Integers beyond the signed 64-bit range are stored as doubles.
pub fn to_record(body: &Map<String, Value>) -> Result<Document, bson::ser::Error> {
    let body: Map<String, Value> = body
        .iter()
        .map(|(key, value)| (key.clone(), widen_unsigned(value)))
        .collect();

    bson::to_document(&body)
}

fn widen_unsigned(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_u64() && n.as_i64().is_none() => {
            n.as_f64().map_or(Value::Null, Value::from)
        }
        Value::Array(items) => Value::Array(items.iter().map(widen_unsigned).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), widen_unsigned(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Renders a stored document as JSON with ObjectIds as plain hex strings.
pub fn render(document: Document) -> Value {
    render_bson(Bson::Document(document))
}

fn render_bson(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, render_bson(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(render_bson).collect()),
        other => other.into_relaxed_extjson(),
    }
}
