//! Response interpretation: API error mapping, UTF-8 decoding, and payload shaping.

// std
use std::convert::Infallible;
// self
use crate::{_prelude::*, error::ApiError, http::RawResponse};

/// Selects which part of a successful response [`OAuthAdapter::request`] returns.
///
/// [`OAuthAdapter::request`]: crate::adapter::OAuthAdapter::request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponseSelector {
	/// Decoded body, parsed as JSON when possible.
	#[default]
	Body,
	/// HTTP status code.
	Status,
	/// Response headers.
	Headers,
	/// Nothing.
	Nothing,
}
impl FromStr for ResponseSelector {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"body" => Self::Body,
			"status" => Self::Status,
			"headers" => Self::Headers,
			_ => Self::Nothing,
		})
	}
}

/// Value returned by a successful request, shaped by [`ResponseSelector`].
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
	/// Body parsed as a non-empty JSON value.
	Json(Value),
	/// Body text that is not JSON, or whose JSON value is empty.
	Text(String),
	/// HTTP status code.
	Status(u16),
	/// Response headers keyed by lower-case name.
	Headers(BTreeMap<String, String>),
	/// No value was requested.
	Empty,
}
impl Payload {
	/// Returns the JSON value, if the body parsed as JSON.
	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the raw text, if the body was kept as text.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the status code, if one was requested.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status(status) => Some(*status),
			_ => None,
		}
	}

	/// Returns the headers, if they were requested.
	pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
		match self {
			Self::Headers(headers) => Some(headers),
			_ => None,
		}
	}
}

/// Parses `text` as JSON, keeping the original text when parsing fails or yields an empty value.
///
/// Empty values are `null`, `false`, `0`, `""`, `[]`, and `{}`.
pub fn parse_payload(text: String) -> Payload {
	match serde_json::from_str::<Value>(&text) {
		Ok(value) if !is_empty_value(&value) => Payload::Json(value),
		_ => Payload::Text(text),
	}
}

/// Turns a raw transport response into the caller's [`Payload`].
///
/// Statuses of 400 and above fail with [`Error::Api`] built from the body's `error.type` and
/// `error.message`; a body that is not JSON fails with [`Error::MalformedErrorBody`].
pub fn interpret(response: RawResponse, selector: ResponseSelector) -> Result<Payload> {
	let RawResponse { status, headers, body } = response;

	if status >= 400 {
		return Err(api_error(status, &body));
	}

	Ok(match selector {
		ResponseSelector::Body =>
			parse_payload(String::from_utf8(body).map_err(|source| Error::Decode { source })?),
		ResponseSelector::Status => Payload::Status(status),
		ResponseSelector::Headers => Payload::Headers(headers),
		ResponseSelector::Nothing => Payload::Empty,
	})
}

fn api_error(status: u16, body: &[u8]) -> Error {
	let content = match serde_json::from_slice::<Value>(body) {
		Ok(content) => content,
		Err(source) => return Error::MalformedErrorBody { status, source },
	};
	let error = content.get("error");
	let field = |name: &str| {
		error.and_then(|error| error.get(name)).map(|value| match value {
			Value::String(text) => text.clone(),
			other => other.to_string(),
		})
	};

	ApiError { status, error_type: field("type"), message: field("message") }.into()
}

fn is_empty_value(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(flag) => !flag,
		Value::Number(number) => number.as_f64() == Some(0.0),
		Value::String(text) => text.is_empty(),
		Value::Array(items) => items.is_empty(),
		Value::Object(map) => map.is_empty(),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn structured_bodies_parse_as_json() {
		let payload = interpret(RawResponse::new(200, "{\"id\": 42}"), ResponseSelector::Body)
			.expect("Successful response should be interpreted.");

		assert_eq!(payload, Payload::Json(json!({"id": 42})));
	}

	#[test]
	fn empty_and_degenerate_bodies_fall_back_to_text() {
		for body in ["", "{}", "[]", "0", "false", "null", "\"\"", "not json"] {
			assert_eq!(parse_payload(body.to_owned()), Payload::Text(body.to_owned()));
		}

		assert_eq!(parse_payload("\"hi\"".into()), Payload::Json(json!("hi")));
		assert_eq!(parse_payload("1".into()), Payload::Json(json!(1)));
	}

	#[test]
	fn selectors_shape_the_payload() {
		let response = RawResponse::new(201, "not json").with_header("Location", "/lists/1");

		assert_eq!(
			interpret(response.clone(), ResponseSelector::Status).ok(),
			Some(Payload::Status(201))
		);
		assert_eq!(
			interpret(response.clone(), ResponseSelector::Headers)
				.ok()
				.as_ref()
				.and_then(Payload::headers)
				.and_then(|headers| headers.get("location"))
				.map(String::as_str),
			Some("/lists/1")
		);
		assert_eq!(interpret(response, ResponseSelector::Nothing).ok(), Some(Payload::Empty));
	}

	#[test]
	fn selector_strings_parse_with_fallback() {
		assert_eq!("body".parse::<ResponseSelector>(), Ok(ResponseSelector::Body));
		assert_eq!("status".parse::<ResponseSelector>(), Ok(ResponseSelector::Status));
		assert_eq!("headers".parse::<ResponseSelector>(), Ok(ResponseSelector::Headers));
		assert_eq!("anything".parse::<ResponseSelector>(), Ok(ResponseSelector::Nothing));
	}

	#[test]
	fn error_statuses_map_to_api_errors() {
		let body = "{\"error\":{\"type\":\"InvalidAccessToken\",\"message\":\"bad token\"}}";
		let err = interpret(RawResponse::new(404, body), ResponseSelector::Status)
			.expect_err("404 responses should fail.");

		assert_eq!(err.to_string(), "InvalidAccessToken: bad token");
		assert!(matches!(err, Error::Api(ApiError { status: 404, .. })));
	}

	#[test]
	fn malformed_error_bodies_surface_parse_failures() {
		let err = interpret(RawResponse::new(500, "<html>"), ResponseSelector::Body)
			.expect_err("500 responses should fail.");

		assert!(matches!(err, Error::MalformedErrorBody { status: 500, .. }));
	}

	#[test]
	fn error_bodies_without_error_object_render_null_fields() {
		let err = interpret(RawResponse::new(400, "[1]"), ResponseSelector::Body)
			.expect_err("400 responses should fail.");

		assert_eq!(err.to_string(), "null: null");
	}

	#[test]
	fn invalid_utf8_bodies_fail_to_decode() {
		let err = interpret(RawResponse::new(200, vec![0xff_u8, 0xfe]), ResponseSelector::Body)
			.expect_err("Invalid UTF-8 should fail.");

		assert!(matches!(err, Error::Decode { .. }));
		assert_eq!(
			interpret(RawResponse::new(200, vec![0xff_u8]), ResponseSelector::Status).ok(),
			Some(Payload::Status(200))
		);
	}
}
