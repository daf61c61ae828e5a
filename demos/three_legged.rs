//! Walks through the three-legged OAuth 1.0a handshake against a local mock API, then issues a
//! signed resource request with the freshly issued access token.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use oauth1_adapter::{
	adapter::{OAuthAdapter, VERIFIER_KEY},
	auth::{MemoryUser, OAuthUser, TokenLeg},
	request::RequestData,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let request_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200).body(
				"oauth_token=demo-request&oauth_token_secret=demo-request-secret&oauth_callback_confirmed=true",
			);
		})
		.await;
	let access_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=demo-access&oauth_token_secret=demo-access-secret");
		})
		.await;
	let accounts_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1.0/accounts");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"entries\":[{\"id\":1,\"company\":\"Demo Co\"}],\"total_size\":1}");
		})
		.await;
	let user = Arc::new(MemoryUser::default());
	let shared: Arc<dyn OAuthUser> = user.clone();
	let adapter = OAuthAdapter::new("demo-consumer", "demo-consumer-secret", server.url("/1.0"))
		.with_user(shared)
		.with_access_token_url(server.url("/oauth/access_token"))
		.with_callback("oob");
	let issued = adapter.get_request_token(&server.url("/oauth/request_token"), None).await?;
	let mut authorize_url = Url::parse(&server.url("/oauth/authorize"))?;

	authorize_url.query_pairs_mut().append_pair("oauth_token", issued.token());
	println!("Send your user to {authorize_url}.");

	user.apply(issued.credentials, TokenLeg::Request);

	// Simulate the provider redirecting back with a verifier.
	let mut data = RequestData::new();

	data.insert(VERIFIER_KEY.into(), json!("demo-verifier"));

	let access = adapter.get_access_token(&data).await?;

	println!("Issued access token {}.", access.token());
	user.apply(access.credentials, TokenLeg::Access);

	let accounts = adapter.get("/accounts", None).await?;

	println!("Accounts: {}.", accounts.as_json().map(ToString::to_string).unwrap_or_default());

	request_mock.assert_async().await;
	access_mock.assert_async().await;
	accounts_mock.assert_async().await;

	Ok(())
}
