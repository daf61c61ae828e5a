//! Request-token and access-token legs of the three-legged handshake.
//!
//! Both legs send a signed POST and expect a form-encoded body carrying `oauth_token` and
//! `oauth_token_secret`. The adapter returns the parsed pair and leaves storing it to the
//! user collaborator.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	adapter::{OAuthAdapter, with_secret},
	auth::TokenCredentials,
	error::ConfigError,
	http::{OAuthTransport, RawResponse},
	obs::{self, CallKind},
	request::{Method, PreparedRequest, RequestData},
	sign::OAuthParams,
};

/// Name of the verifier key expected by [`OAuthAdapter::get_access_token`].
pub const VERIFIER_KEY: &str = "oauth_verifier";

const TOKEN_KEY: &str = "oauth_token";
const TOKEN_SECRET_KEY: &str = "oauth_token_secret";

/// Credentials issued by a token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Issued token + secret pair.
	pub credentials: TokenCredentials,
	/// Every other parameter returned alongside the pair (e.g. `oauth_callback_confirmed`).
	pub params: BTreeMap<String, String>,
}
impl TokenResponse {
	/// Parses a token endpoint response.
	///
	/// Non-2xx statuses fail with [`Error::TokenRequestDenied`]; a body without both
	/// `oauth_token` and `oauth_token_secret` fails with [`Error::TokenMissing`].
	pub fn from_response(response: &RawResponse) -> Result<Self> {
		if !response.is_success() {
			return Err(Error::TokenRequestDenied {
				status: response.status,
				body: String::from_utf8_lossy(&response.body).into_owned(),
			});
		}

		let mut params = form_urlencoded::parse(&response.body)
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect::<BTreeMap<_, _>>();
		let (Some(token), Some(secret)) =
			(params.remove(TOKEN_KEY), params.remove(TOKEN_SECRET_KEY))
		else {
			return Err(Error::TokenMissing);
		};

		Ok(Self { credentials: TokenCredentials::new(token, secret), params })
	}

	/// Issued token value.
	pub fn token(&self) -> &str {
		&self.credentials.token
	}

	/// Looks up an additional response parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}
}

impl<T> OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	/// Fetches a request token from `url` (first leg; no user token required).
	///
	/// `data` is prepared as a POST form body and takes part in the signature.
	pub async fn get_request_token(
		&self,
		url: &str,
		data: Option<&RequestData>,
	) -> Result<TokenResponse> {
		obs::observe(CallKind::RequestToken, async move {
			let prepared = PreparedRequest::new(Method::Post, url, data);
			let params =
				OAuthParams::new(self.consumer.clone()).with_callback(self.callback.clone());
			let raw = self.dispatch(prepared, params).await?;

			TokenResponse::from_response(&raw)
		})
		.await
	}

	/// Exchanges the user's request token plus the verifier in `data` for an access token.
	///
	/// `data` must contain [`VERIFIER_KEY`]; otherwise the call fails with
	/// [`Error::MissingParameter`] before anything else is checked. A user without a request
	/// token is still signed and sent, leaving the rejection to the token endpoint.
	pub async fn get_access_token(&self, data: &RequestData) -> Result<TokenResponse> {
		obs::observe(CallKind::AccessToken, async move {
			let verifier = match data.get(VERIFIER_KEY) {
				Some(Value::String(text)) => text.clone(),
				Some(other) => other.to_string(),
				None => return Err(Error::MissingParameter { key: VERIFIER_KEY }),
			};
			let user = self.require_user()?;
			let url = self.access_token_url.as_deref().ok_or(ConfigError::MissingAccessTokenUrl)?;
			let params = OAuthParams::new(self.consumer.clone())
				.with_token(with_secret(&**user, user.request_token()))
				.with_verifier(verifier);
			let prepared = PreparedRequest::new(Method::Post, url, None);
			let raw = self.dispatch(prepared, params).await?;

			TokenResponse::from_response(&raw)
		})
		.await
	}
}
