//! OAuth 1.0a adapter: token legs and signed resource requests against one API.

pub mod token;

mod resource;

pub use token::*;

// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, OAuthUser, TokenCredentials, TokenSecret},
	error::ConfigError,
	http::{OAuthTransport, OutboundRequest, RawResponse},
	obs,
	request::PreparedRequest,
	sign::OAuthParams,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Adapter specialized for the crate's default reqwest transport.
pub type ReqwestAdapter = OAuthAdapter<ReqwestTransport>;

/// Signs and dispatches OAuth 1.0a requests against a single API base URL.
///
/// The adapter owns the consumer credentials, the base URL, and the transport. It holds no
/// token state: the user collaborator is read on every call, and each call builds its own
/// [`OAuthParams`], so one adapter can serve concurrent requests and token exchanges.
pub struct OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	/// HTTP transport used for every outbound request.
	pub transport: Arc<T>,
	/// Application-level credential pair.
	pub consumer: ConsumerCredentials,
	/// Prefix prepended to relative request paths.
	pub base_url: String,
	/// Endpoint used by [`OAuthAdapter::get_access_token`].
	pub access_token_url: Option<String>,
	/// Callback URI announced on the request-token leg.
	pub callback: Option<String>,
	user: Option<Arc<dyn OAuthUser>>,
}
impl<T> OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	/// Creates an adapter that dispatches through the caller-provided transport.
	///
	/// No network I/O happens here.
	pub fn with_transport(
		key: impl Into<String>,
		secret: impl Into<TokenSecret>,
		base_url: impl Into<String>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self {
			transport: transport.into(),
			consumer: ConsumerCredentials::new(key, secret),
			base_url: base_url.into(),
			access_token_url: None,
			callback: None,
			user: None,
		}
	}

	/// Attaches the user collaborator that supplies resource-owner tokens.
	pub fn with_user(mut self, user: Arc<dyn OAuthUser>) -> Self {
		self.user = Some(user);

		self
	}

	/// Sets the endpoint used to exchange a verified request token for an access token.
	pub fn with_access_token_url(mut self, url: impl Into<String>) -> Self {
		self.access_token_url = Some(url.into());

		self
	}

	/// Sets the callback URI sent as `oauth_callback` on the request-token leg.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = Some(callback.into());

		self
	}

	/// Returns the attached user collaborator, if any.
	pub fn user(&self) -> Option<&Arc<dyn OAuthUser>> {
		self.user.as_ref()
	}

	/// Pairs the user's highest-priority token with its secret.
	///
	/// Returns `None` when no user is attached or the user holds neither token.
	pub fn highest_priority_credentials(&self) -> Option<TokenCredentials> {
		let user = self.user.as_ref()?;

		with_secret(&**user, user.highest_priority_token())
	}

	fn require_user(&self) -> Result<&Arc<dyn OAuthUser>> {
		self.user.as_ref().ok_or_else(|| ConfigError::MissingUser.into())
	}

	/// Signs `prepared` with `params` and hands it to the transport.
	async fn dispatch(
		&self,
		prepared: PreparedRequest,
		params: OAuthParams,
	) -> Result<RawResponse> {
		let form = prepared.signed_form_params();
		let PreparedRequest { method, url, body } = prepared;
		let url = Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })?;
		let authorization = params.authorization_header(method, &url, &form);
		let request = OutboundRequest { method, url: url.clone(), authorization, body };
		let response = self.transport.execute(request).await?;

		obs::record_response(method, &url, response.status);

		Ok(response)
	}
}
#[cfg(feature = "reqwest")]
impl OAuthAdapter<ReqwestTransport> {
	/// Creates an adapter backed by a default reqwest transport.
	///
	/// No network I/O happens here. Use [`OAuthAdapter::with_transport`] to supply a client
	/// with custom timeouts or TLS settings.
	pub fn new(
		key: impl Into<String>,
		secret: impl Into<TokenSecret>,
		base_url: impl Into<String>,
	) -> Self {
		Self::with_transport(key, secret, base_url, ReqwestTransport::default())
	}
}
impl<T> Clone for OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			consumer: self.consumer.clone(),
			base_url: self.base_url.clone(),
			access_token_url: self.access_token_url.clone(),
			callback: self.callback.clone(),
			user: self.user.clone(),
		}
	}
}
impl<T> Debug for OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthAdapter")
			.field("consumer", &self.consumer)
			.field("base_url", &self.base_url)
			.field("access_token_url", &self.access_token_url)
			.field("callback", &self.callback)
			.field("user_set", &self.user.is_some())
			.finish()
	}
}

/// Pairs `token` with the user's current secret; absent or empty tokens yield `None`.
fn with_secret(user: &dyn OAuthUser, token: Option<String>) -> Option<TokenCredentials> {
	let token = token.filter(|token| !token.is_empty())?;
	let secret = user.token_secret().unwrap_or_default();

	Some(TokenCredentials::new(token, secret))
}
