//! User collaborator contract plus an in-memory implementation.
//!
//! The adapter never caches tokens. Every call reads the current values through
//! [`OAuthUser`], so a rotation performed by the collaborator is visible to the very next
//! request.

// self
use crate::{
	_prelude::*,
	auth::{TokenCredentials, TokenSecret},
};

/// Read-only view over a user's OAuth token state.
///
/// Accessors are plain reads and must not fail; an absent token is reported as `None`.
pub trait OAuthUser
where
	Self: Send + Sync,
{
	/// Current long-lived access token, if the handshake has completed.
	fn access_token(&self) -> Option<String>;

	/// Current short-lived request token, if a handshake is in progress.
	fn request_token(&self) -> Option<String>;

	/// Secret paired with whichever token the user currently holds.
	fn token_secret(&self) -> Option<TokenSecret>;

	/// Highest-priority token available: the access token, falling back to the request token.
	fn highest_priority_token(&self) -> Option<String> {
		self.access_token()
			.filter(|token| !token.is_empty())
			.or_else(|| self.request_token().filter(|token| !token.is_empty()))
	}
}

#[derive(Clone, Debug, Default)]
struct UserTokens {
	access_token: Option<String>,
	request_token: Option<String>,
	token_secret: Option<TokenSecret>,
}

/// Thread-safe [`OAuthUser`] that keeps tokens in memory.
#[derive(Debug, Default)]
pub struct MemoryUser(RwLock<UserTokens>);
impl MemoryUser {
	/// Records a freshly issued request token, replacing the current secret.
	pub fn set_request_token(&self, token: impl Into<String>, secret: impl Into<TokenSecret>) {
		let mut tokens = self.0.write();

		tokens.request_token = Some(token.into());
		tokens.token_secret = Some(secret.into());
	}

	/// Records an access token, replacing the current secret and clearing the request token.
	pub fn set_access_token(&self, token: impl Into<String>, secret: impl Into<TokenSecret>) {
		let mut tokens = self.0.write();

		tokens.access_token = Some(token.into());
		tokens.request_token = None;
		tokens.token_secret = Some(secret.into());
	}

	/// Stores a token pair returned by a token endpoint as either the request or access token.
	pub fn apply(&self, credentials: TokenCredentials, leg: TokenLeg) {
		match leg {
			TokenLeg::Request => self.set_request_token(credentials.token, credentials.secret),
			TokenLeg::Access => self.set_access_token(credentials.token, credentials.secret),
		}
	}

	/// Drops every stored token.
	pub fn clear(&self) {
		*self.0.write() = UserTokens::default();
	}
}
impl OAuthUser for MemoryUser {
	fn access_token(&self) -> Option<String> {
		self.0.read().access_token.clone()
	}

	fn request_token(&self) -> Option<String> {
		self.0.read().request_token.clone()
	}

	fn token_secret(&self) -> Option<TokenSecret> {
		self.0.read().token_secret.clone()
	}
}

/// Handshake leg a token pair belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenLeg {
	/// Temporary credentials from the request-token endpoint.
	Request,
	/// Token credentials from the access-token endpoint.
	Access,
}
impl TokenLeg {
	/// Returns a stable label suitable for logs and errors.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenLeg::Request => "request",
			TokenLeg::Access => "access",
		}
	}
}
impl Display for TokenLeg {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
