//! Method-specific request body preparation.

// crates.io
use url::form_urlencoded::{self, Serializer};
// self
use crate::{_prelude::*, request::Method};

/// Request parameters supplied by callers, keyed by parameter name.
pub type RequestData = Map<String, Value>;

/// Media type of URL-encoded bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Media type of JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Prepares the request body for `method` from `data`.
///
/// - Methods other than GET, POST, and PATCH, or empty data, yield an empty string.
/// - GET and POST URL-encode the mapping; object and array values are JSON-serialized first.
/// - PATCH JSON-serializes the whole mapping and never URL-encodes it.
pub fn prepare_body(method: Method, data: Option<&RequestData>) -> String {
	let Some(data) = data.filter(|data| !data.is_empty()) else {
		return String::new();
	};

	match method {
		Method::Get | Method::Post => {
			let mut serializer = Serializer::new(String::new());

			for (key, value) in data {
				serializer.append_pair(key, &form_value(value));
			}

			serializer.finish()
		},
		Method::Patch => Value::Object(data.clone()).to_string(),
		_ => String::new(),
	}
}

/// Decodes a URL-encoded body back into ordered key/value pairs.
pub fn form_pairs(body: &str) -> Vec<(String, String)> {
	form_urlencoded::parse(body.as_bytes())
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect()
}

fn form_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		// Structured and remaining scalar values use their compact JSON text.
		other => other.to_string(),
	}
}
