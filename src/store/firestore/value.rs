use serde_json::{Map, Value, json};

use crate::store::Document;

/// Convert plain JSON into Firestore's typed value representation.
///
/// Integers travel as decimal strings (`integerValue` is int64 on the wire),
/// everything else maps onto the matching typed field.
pub fn encode_value(value: &Value) -> Value {
	match value {
		Value::Null => json!({ "nullValue": null }),
		Value::Bool(b) => json!({ "booleanValue": b }),
		Value::Number(n) => {
			if n.is_i64() || n.is_u64() {
				json!({ "integerValue": n.to_string() })
			} else {
				json!({ "doubleValue": n.as_f64() })
			}
		}
		Value::String(s) => json!({ "stringValue": s }),
		Value::Array(items) => {
			let values: Vec<Value> = items.iter().map(encode_value).collect();
			json!({ "arrayValue": { "values": values } })
		}
		Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
	}
}

pub fn encode_fields(doc: &Document) -> Value {
	let fields: Map<String, Value> = doc
		.iter()
		.map(|(k, v)| (k.clone(), encode_value(v)))
		.collect();
	Value::Object(fields)
}

/// Read an `integerValue`, which the API returns as a string.
pub fn decode_integer(value: &Value) -> Option<i64> {
	match value.get("integerValue")? {
		Value::String(s) => s.parse().ok(),
		Value::Number(n) => n.as_i64(),
		_ => None,
	}
}

/// The last path segment of a resource name is the document id.
pub fn document_id(name: &str) -> Option<&str> {
	name.rsplit('/').next().filter(|id| !id.is_empty())
}
