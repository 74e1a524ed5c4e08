//! Translation from stored documents to API response shapes.
//!
//! Stored documents carry a BSON `_id` and, where set at insert time, a BSON
//! datetime `created_at`. The API instead exposes a hex string `id` and an
//! ISO-8601 `created_at` with a `Z` suffix. Every other field passes through
//! unchanged, so fields written by other tooling survive the round trip.

use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a stored document into its response JSON.
#[must_use]
pub fn document_to_response(document: Document) -> Value {
    let mut response = Map::new();
    for (key, value) in document {
        if key == "_id" {
            response.insert("id".to_owned(), id_to_json(value));
        } else if key == "created_at" {
            response.insert(key, timestamp_to_json(value));
        } else {
            response.insert(key, bson_to_json(value));
        }
    }
    Value::Object(response)
}

/// Convert an optional stored document; absent input stays absent.
#[must_use]
pub fn optional_document_to_response(document: Option<Document>) -> Option<Value> {
    document.map(document_to_response)
}

/// Convert a list of stored documents, preserving order.
#[must_use]
pub fn documents_to_responses(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(document_to_response).collect()
}

fn id_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        other => bson_to_json(other),
    }
}

fn timestamp_to_json(value: Bson) -> Value {
    match value {
        Bson::DateTime(timestamp) => Value::String(
            timestamp
                .to_chrono()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        other => bson_to_json(other),
    }
}

fn bson_to_json(value: Bson) -> Value {
    value.into_relaxed_extjson()
}
