//! Transport primitives for signed OAuth requests.
//!
//! The module exposes [`OAuthTransport`] alongside [`OutboundRequest`] and [`RawResponse`] so
//! downstream crates can plug in custom HTTP clients. The adapter signs every request before
//! handing it over; transports only move bytes and must not retry.

// self
use crate::{
	_prelude::*,
	error::TransportError,
	request::{Method, RequestBody},
};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`OAuthTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing one already-signed request.
///
/// The trait acts as the adapter's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so a single transport can back many adapters behind an `Arc`.
/// Timeouts, proxies, and TLS settings belong to the implementation.
pub trait OAuthTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves with the raw response, whatever its status.
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_>;
}

/// Signed request ready for dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
	/// Method to dispatch.
	pub method: Method,
	/// Target URL, exactly as signed.
	pub url: Url,
	/// Value of the `Authorization` header.
	pub authorization: String,
	/// Body to send, if any.
	pub body: Option<RequestBody>,
}

/// Status, headers, and body returned by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers keyed by lower-case name; repeated headers are joined with `, `.
	pub headers: BTreeMap<String, String>,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Creates a response with the provided status and body and no headers.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers: BTreeMap::new(), body: body.into() }
	}

	/// Adds a header, joining with any existing value of the same name.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		insert_header(&mut self.headers, name, value);

		self
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests time out after `timeout`.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl OAuthTransport for ReqwestTransport {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

		Box::pin(async move {
			let OutboundRequest { method, url, authorization, body } = request;
			let mut builder =
				self.0.request(reqwest_method(method), url).header(AUTHORIZATION, authorization);

			if let Some(body) = body {
				builder = builder.header(CONTENT_TYPE, body.content_type).body(body.content);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let mut headers = BTreeMap::new();

			for (name, value) in response.headers() {
				if let Ok(value) = value.to_str() {
					insert_header(&mut headers, name.as_str(), value);
				}
			}

			let body = response.bytes().await?.to_vec();

			Ok(RawResponse { status, headers, body })
		})
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

#[cfg(feature = "reqwest")]
fn reqwest_method(method: Method) -> reqwest::Method {
	match method {
		Method::Get => reqwest::Method::GET,
		Method::Post => reqwest::Method::POST,
		Method::Patch => reqwest::Method::PATCH,
		Method::Put => reqwest::Method::PUT,
		Method::Delete => reqwest::Method::DELETE,
		Method::Head => reqwest::Method::HEAD,
	}
}

fn insert_header(headers: &mut BTreeMap<String, String>, name: &str, value: &str) {
	headers
		.entry(name.to_ascii_lowercase())
		.and_modify(|existing| {
			existing.push_str(", ");
			existing.push_str(value);
		})
		.or_insert_with(|| value.to_owned());
}
