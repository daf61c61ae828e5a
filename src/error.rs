//! Adapter-level error types shared across token exchanges and signed requests.

// std
use std::string::FromUtf8Error;
// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Remote API rejected the request with a structured error payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Remote API answered with an error status but the body was not valid JSON.
	#[error("API returned HTTP {status} with a malformed error body.")]
	MalformedErrorBody {
		/// HTTP status code of the failed response.
		status: u16,
		/// Underlying JSON parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response body is not valid UTF-8.
	#[error("Response body is not valid UTF-8.")]
	Decode {
		/// Underlying decoding failure.
		#[source]
		source: FromUtf8Error,
	},
	/// Caller-supplied data lacks a required key.
	#[error("Required parameter `{key}` is missing.")]
	MissingParameter {
		/// Name of the missing key.
		key: &'static str,
	},
	/// Token endpoint refused to issue a token.
	#[error("Token endpoint returned HTTP {status}: {body}.")]
	TokenRequestDenied {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body, decoded lossily.
		body: String,
	},
	/// Token endpoint response did not carry a token + secret pair.
	#[error("Token endpoint response is missing `oauth_token` or `oauth_token_secret`.")]
	TokenMissing,
}

/// Error raised by the remote API for responses with status 400 or above.
///
/// The rendered message is always `"{error_type}: {message}"`, matching the API's `error.type`
/// and `error.message` fields. Absent fields render as `null`.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{}: {}", .error_type.as_deref().unwrap_or("null"), .message.as_deref().unwrap_or("null"))]
pub struct ApiError {
	/// HTTP status code of the failed response.
	pub status: u16,
	/// Value of `error.type` in the response body.
	pub error_type: Option<String>,
	/// Value of `error.message` in the response body.
	pub message: Option<String>,
}

/// Configuration and validation failures raised by the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Target URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL string.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP method token is not one the adapter dispatches.
	#[error("HTTP method `{method}` is not supported.")]
	UnsupportedMethod {
		/// Offending method token.
		method: String,
	},
	/// No user collaborator has been attached to the adapter.
	#[error("No OAuth user is attached to the adapter.")]
	MissingUser,
	/// Access-token endpoint has not been configured.
	#[error("Access-token URL has not been configured.")]
	MissingAccessTokenUrl,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
