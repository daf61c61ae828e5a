// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use oauth1_adapter::{
	_preludet::*,
	adapter::{OAuthAdapter, VERIFIER_KEY},
	auth::{MemoryUser, OAuthUser, TokenLeg},
	request::RequestData,
};

fn adapter_for(server: &MockServer, user: Arc<MemoryUser>) -> ReqwestTestAdapter {
	let user: Arc<dyn OAuthUser> = user;

	OAuthAdapter::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET, server.url("/1.0"))
		.with_user(user)
		.with_access_token_url(server.url("/oauth/access_token"))
		.with_callback("oob")
}

fn verifier(value: &str) -> RequestData {
	let mut data = RequestData::new();

	data.insert(VERIFIER_KEY.into(), json!(value));

	data
}

#[tokio::test]
async fn three_legged_exchange_stores_both_token_pairs() {
	let server = MockServer::start_async().await;
	let user = Arc::new(MemoryUser::default());
	let adapter = adapter_for(&server, user.clone());
	let request_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token").header_exists("authorization");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true");
		})
		.await;
	let access_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token").header_exists("authorization");
			then.status(200).body("oauth_token=acc-token&oauth_token_secret=acc-secret");
		})
		.await;
	let issued = adapter
		.get_request_token(&server.url("/oauth/request_token"), None)
		.await
		.expect("Request token leg should succeed.");

	assert_eq!(issued.token(), "req-token");
	assert_eq!(issued.get("oauth_callback_confirmed"), Some("true"));

	user.apply(issued.credentials, TokenLeg::Request);

	assert_eq!(user.request_token().as_deref(), Some("req-token"));

	let access = adapter
		.get_access_token(&verifier("verifier-123"))
		.await
		.expect("Access token leg should succeed.");

	user.apply(access.credentials, TokenLeg::Access);

	assert_eq!(user.access_token().as_deref(), Some("acc-token"));
	assert_eq!(user.request_token(), None);
	assert_eq!(
		adapter.highest_priority_credentials().map(|credentials| credentials.token),
		Some("acc-token".into())
	);

	request_mock.assert_async().await;
	access_mock.assert_async().await;
}

#[tokio::test]
async fn rejected_request_token_calls_surface_status_and_body() {
	let server = MockServer::start_async().await;
	let adapter = adapter_for(&server, Arc::new(MemoryUser::default()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(401).body("oauth_problem=signature_invalid");
		})
		.await;
	let err = adapter
		.get_request_token(&server.url("/oauth/request_token"), None)
		.await
		.expect_err("401 should fail.");

	assert!(matches!(
		err,
		Error::TokenRequestDenied { status: 401, ref body } if body == "oauth_problem=signature_invalid"
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn incomplete_token_bodies_are_rejected() {
	let server = MockServer::start_async().await;
	let adapter = adapter_for(&server, Arc::new(MemoryUser::default()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200).body("oauth_token=lonely");
		})
		.await;
	let err = adapter
		.get_request_token(&server.url("/oauth/request_token"), None)
		.await
		.expect_err("Missing secret should fail.");

	assert!(matches!(err, Error::TokenMissing));

	mock.assert_async().await;
}

#[tokio::test]
async fn access_token_requires_a_verifier_before_any_io() {
	let server = MockServer::start_async().await;
	let user = Arc::new(MemoryUser::default());

	user.set_request_token("req-token", "req-secret");

	let adapter = adapter_for(&server, user);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token");
			then.status(200).body("oauth_token=acc-token&oauth_token_secret=acc-secret");
		})
		.await;
	let err = adapter
		.get_access_token(&RequestData::new())
		.await
		.expect_err("Missing verifier should fail.");

	assert!(matches!(err, Error::MissingParameter { key: VERIFIER_KEY }));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn access_token_without_request_token_is_left_to_the_server() {
	let server = MockServer::start_async().await;
	let adapter = adapter_for(&server, Arc::new(MemoryUser::default()));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/access_token").header_exists("authorization");
			then.status(401).body("oauth_problem=token_rejected");
		})
		.await;
	let err = adapter
		.get_access_token(&verifier("verifier-123"))
		.await
		.expect_err("Server rejection should fail.");

	assert!(matches!(
		err,
		Error::TokenRequestDenied { status: 401, ref body } if body == "oauth_problem=token_rejected"
	));

	mock.assert_async().await;
}
