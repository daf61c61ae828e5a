//! Consumer and resource-owner credential pairs.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Application-level credential pair identifying the client to the API provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerCredentials {
	/// Public consumer key sent as `oauth_consumer_key`.
	pub key: String,
	/// Consumer secret used as the first half of the signing key.
	pub secret: TokenSecret,
}
impl ConsumerCredentials {
	/// Creates a new consumer credential pair.
	pub fn new(key: impl Into<String>, secret: impl Into<TokenSecret>) -> Self {
		Self { key: key.into(), secret: secret.into() }
	}
}

/// Per-user resource-owner credential pair (request token or access token + secret).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCredentials {
	/// Token value sent as `oauth_token`.
	pub token: String,
	/// Token secret used as the second half of the signing key.
	pub secret: TokenSecret,
}
impl TokenCredentials {
	/// Creates a new token credential pair.
	pub fn new(token: impl Into<String>, secret: impl Into<TokenSecret>) -> Self {
		Self { token: token.into(), secret: secret.into() }
	}
}
