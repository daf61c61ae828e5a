//! OAuth 1.0a client adapter: three-legged token exchange, HMAC-SHA1 request signing, and typed
//! API error mapping over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod auth;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
pub mod sign;
#[cfg(feature = "reqwest")]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		adapter::OAuthAdapter,
		auth::{MemoryUser, OAuthUser},
		http::ReqwestTransport,
	};

	/// Consumer key shared by integration tests.
	pub const TEST_CONSUMER_KEY: &str = "consumer-key";
	/// Consumer secret shared by integration tests.
	pub const TEST_CONSUMER_SECRET: &str = "consumer-secret";

	/// Adapter type alias used by reqwest-backed integration tests.
	pub type ReqwestTestAdapter = OAuthAdapter<ReqwestTransport>;

	/// Builds a user holding the provided access token + secret pair.
	pub fn test_user(access_token: &str, token_secret: &str) -> Arc<MemoryUser> {
		let user = MemoryUser::default();

		user.set_access_token(access_token, token_secret);

		Arc::new(user)
	}

	/// Constructs an [`OAuthAdapter`] rooted at `base_url` that reads tokens from `user`.
	pub fn build_reqwest_test_adapter(base_url: &str, user: Arc<MemoryUser>) -> ReqwestTestAdapter {
		let user: Arc<dyn OAuthUser> = user;

		OAuthAdapter::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET, base_url).with_user(user)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
