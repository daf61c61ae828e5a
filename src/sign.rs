//! OAuth 1.0a request signing on top of `oauth1-request`.
//!
//! [`OAuthParams`] is an immutable per-call value: the adapter builds a fresh one for every
//! token exchange or resource request from its consumer credentials plus the call's
//! resource-owner token, verifier, and callback. Nothing is shared between calls.

// crates.io
use oauth1_request::{Builder, Credentials, HmacSha1, request::ParameterList};
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, TokenCredentials},
	request::Method,
};

const NONCE_LEN: usize = 32;

/// OAuth protocol parameters for a single signed request.
#[derive(Clone, Debug)]
pub struct OAuthParams {
	/// Consumer credential pair.
	pub consumer: ConsumerCredentials,
	/// Resource-owner token pair, absent on the request-token leg or before authorization.
	pub token: Option<TokenCredentials>,
	/// Verifier returned by the authorization step.
	pub verifier: Option<String>,
	/// Callback URI announced on the request-token leg.
	pub callback: Option<String>,
	/// Single-use random nonce.
	pub nonce: String,
}
impl OAuthParams {
	/// Creates parameters for `consumer` with a fresh nonce.
	pub fn new(consumer: ConsumerCredentials) -> Self {
		Self { consumer, token: None, verifier: None, callback: None, nonce: random_nonce() }
	}

	/// Attaches a resource-owner token pair.
	pub fn with_token(mut self, token: impl Into<Option<TokenCredentials>>) -> Self {
		self.token = token.into();

		self
	}

	/// Attaches the verifier for the access-token leg.
	pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
		self.verifier = Some(verifier.into());

		self
	}

	/// Attaches the callback URI for the request-token leg.
	pub fn with_callback(mut self, callback: impl Into<Option<String>>) -> Self {
		self.callback = callback.into();

		self
	}

	/// Overrides the generated nonce.
	pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
		self.nonce = nonce.into();

		self
	}

	/// Renders the HMAC-SHA1 `Authorization: OAuth ...` header value for the request.
	///
	/// Query parameters are read from `url`; `form` carries the decoded
	/// `application/x-www-form-urlencoded` body parameters. Both take part in the signature.
	pub fn authorization_header(
		&self,
		method: Method,
		url: &Url,
		form: &[(String, String)],
	) -> String {
		let mut endpoint = url.clone();

		endpoint.set_query(None);
		endpoint.set_fragment(None);

		let request = ParameterList::new(signed_parameters(url, form));
		let token = self
			.token
			.as_ref()
			.map(|token| Credentials::new(token.token.as_str(), token.secret.expose()));
		let mut builder = Builder::new(
			Credentials::new(self.consumer.key.as_str(), self.consumer.secret.expose()),
			HmacSha1::new(),
		);

		builder
			.token(token)
			.callback(self.callback.as_deref())
			.verifier(self.verifier.as_deref())
			.nonce(self.nonce.as_str());

		match method {
			Method::Get => builder.get(endpoint, &request),
			Method::Post => builder.post(endpoint, &request),
			Method::Patch => builder.patch(endpoint, &request),
			Method::Put => builder.put(endpoint, &request),
			Method::Delete => builder.delete(endpoint, &request),
			Method::Head => builder.head(endpoint, &request),
		}
	}
}

/// Query and form parameters in the order `oauth1-request` expects: sorted by key, then value.
fn signed_parameters(url: &Url, form: &[(String, String)]) -> Vec<(String, String)> {
	let mut params = url
		.query_pairs()
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.chain(form.iter().cloned())
		.collect::<Vec<_>>();

	params.sort();

	params
}

fn random_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
