//! Signed resource requests.
//!
//! Every request resolves its URL against the adapter's base URL, prepares a method-specific
//! body, signs with the user's current access token, and dispatches the requested method.

// self
use crate::{
	_prelude::*,
	adapter::{OAuthAdapter, with_secret},
	http::OAuthTransport,
	obs::{self, CallKind},
	request::{self, Method, PreparedRequest, RequestData},
	response::{self, Payload, ResponseSelector},
	sign::OAuthParams,
};

impl<T> OAuthAdapter<T>
where
	T: ?Sized + OAuthTransport,
{
	/// Signs and sends `method` against `url`, shaping the result with `response`.
	///
	/// Relative paths are prefixed with the base URL; URLs that already start with `http` pass
	/// through. GET data is appended to the query string, POST data travels as a form body, and
	/// PATCH data as a JSON body. Statuses of 400 and above fail with [`Error::Api`]. A user
	/// without an access token is still signed (consumer credentials only) and sent.
	pub async fn request(
		&self,
		method: Method,
		url: &str,
		data: Option<&RequestData>,
		response: ResponseSelector,
	) -> Result<Payload> {
		obs::observe(CallKind::Resource, async move {
			let user = self.require_user()?;
			let prepared =
				PreparedRequest::new(method, request::expand_url(&self.base_url, url), data);
			let params = OAuthParams::new(self.consumer.clone())
				.with_token(with_secret(&**user, user.access_token()));
			let raw = self.dispatch(prepared, params).await?;

			response::interpret(raw, response)
		})
		.await
	}

	/// Shorthand for a GET request returning the parsed body.
	pub async fn get(&self, url: &str, data: Option<&RequestData>) -> Result<Payload> {
		self.request(Method::Get, url, data, ResponseSelector::Body).await
	}

	/// Shorthand for a POST request returning the parsed body.
	pub async fn post(&self, url: &str, data: Option<&RequestData>) -> Result<Payload> {
		self.request(Method::Post, url, data, ResponseSelector::Body).await
	}

	/// Shorthand for a PATCH request returning the parsed body.
	pub async fn patch(&self, url: &str, data: Option<&RequestData>) -> Result<Payload> {
		self.request(Method::Patch, url, data, ResponseSelector::Body).await
	}
}
