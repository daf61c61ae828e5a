//! Request descriptors: HTTP methods, URL resolution, and prepared bodies.

pub mod body;

pub use body::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// HTTP methods the adapter can dispatch.
///
/// Only GET, POST, and PATCH carry caller data; the remaining methods are sent without a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`; data travels in the query string.
	Get,
	/// `POST`; data travels as a URL-encoded form body.
	Post,
	/// `PATCH`; data travels as a JSON body.
	Patch,
	/// `PUT`.
	Put,
	/// `DELETE`.
	Delete,
	/// `HEAD`.
	Head,
}
impl Method {
	/// Returns the canonical upper-case method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Patch => "PATCH",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
			Method::Head => "HEAD",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Method {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(Method::Get),
			"POST" => Ok(Method::Post),
			"PATCH" => Ok(Method::Patch),
			"PUT" => Ok(Method::Put),
			"DELETE" => Ok(Method::Delete),
			"HEAD" => Ok(Method::Head),
			_ => Err(ConfigError::UnsupportedMethod { method: s.to_owned() }),
		}
	}
}

/// Body attached to a prepared request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestBody {
	/// Value of the `Content-Type` header.
	pub content_type: &'static str,
	/// Encoded body text.
	pub content: String,
}

/// Request whose URL and body have been resolved but not yet signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
	/// Method to dispatch.
	pub method: Method,
	/// Fully resolved target URL, including any appended query string.
	pub url: String,
	/// Body to send, if any.
	pub body: Option<RequestBody>,
}
impl PreparedRequest {
	/// Prepares `data` for `method` against an already-resolved `url`.
	///
	/// GET bodies are appended to the URL as a query string. Existing query parameters are not
	/// re-parsed, so a key present in both places is sent twice.
	pub fn new(method: Method, url: impl Into<String>, data: Option<&RequestData>) -> Self {
		let mut url = url.into();
		let content = prepare_body(method, data);
		let body = match method {
			_ if content.is_empty() => None,
			Method::Get => {
				url = append_query(&url, &content);

				None
			},
			Method::Post => Some(RequestBody { content_type: FORM_CONTENT_TYPE, content }),
			Method::Patch => Some(RequestBody { content_type: JSON_CONTENT_TYPE, content }),
			_ => None,
		};

		Self { method, url, body }
	}

	/// Decoded form parameters that take part in the OAuth signature.
	pub fn signed_form_params(&self) -> Vec<(String, String)> {
		match &self.body {
			Some(body) if body.content_type == FORM_CONTENT_TYPE => form_pairs(&body.content),
			_ => Vec::new(),
		}
	}
}

/// Resolves `url` against `base_url` unless it already carries an HTTP scheme.
pub fn expand_url(base_url: &str, url: &str) -> String {
	if url.starts_with("http") { url.to_owned() } else { format!("{base_url}{url}") }
}

/// Appends `query` to `url`, using `&` when the URL already has a query part.
pub fn append_query(url: &str, query: &str) -> String {
	let separator = if url.contains('?') { '&' } else { '?' };

	format!("{url}{separator}{query}")
}
