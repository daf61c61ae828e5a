// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use oauth1_adapter::{
	_preludet::*,
	error::ApiError,
	request::{Method, RequestData},
	response::{Payload, ResponseSelector},
};

const ACCESS_TOKEN: &str = "access-token";
const ACCESS_SECRET: &str = "access-secret";

fn data(value: Value) -> RequestData {
	match value {
		Value::Object(map) => map,
		_ => panic!("Request data fixture must be a JSON object."),
	}
}

fn build_adapter(server: &MockServer) -> ReqwestTestAdapter {
	build_reqwest_test_adapter(&server.url("/1.0"), test_user(ACCESS_TOKEN, ACCESS_SECRET))
}

#[tokio::test]
async fn get_appends_data_as_query_and_parses_json() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/1.0/accounts")
				.query_param("ws.op", "find")
				.query_param("ids", "[1,2]")
				.header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"entries\":[{\"id\":42}],\"total_size\":1}");
		})
		.await;
	let payload = adapter
		.get("/accounts", Some(&data(json!({"ids": [1, 2], "ws.op": "find"}))))
		.await
		.expect("Signed GET should succeed.");

	assert_eq!(payload, Payload::Json(json!({"entries": [{"id": 42}], "total_size": 1})));

	mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_form_body() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/1.0/lists")
				.header("content-type", "application/x-www-form-urlencoded")
				.body("name=My+List&tags=%5B%22a%22%5D");
			then.status(201).header("location", "/1.0/lists/7").body("");
		})
		.await;
	let headers = adapter
		.request(
			Method::Post,
			"/lists",
			Some(&data(json!({"name": "My List", "tags": ["a"]}))),
			ResponseSelector::Headers,
		)
		.await
		.expect("Signed POST should succeed.");

	assert_eq!(
		headers.headers().and_then(|headers| headers.get("location")).map(String::as_str),
		Some("/1.0/lists/7")
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn patch_sends_json_body_and_reports_status() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/1.0/lists/7")
				.header("content-type", "application/json")
				.body("{\"name\":\"Renamed\"}");
			then.status(209).body("{\"name\":\"Renamed\"}");
		})
		.await;
	let status = adapter
		.request(
			Method::Patch,
			"/lists/7",
			Some(&data(json!({"name": "Renamed"}))),
			ResponseSelector::Status,
		)
		.await
		.expect("Signed PATCH should succeed.");

	assert_eq!(status, Payload::Status(209));

	mock.assert_async().await;
}

#[tokio::test]
async fn absolute_urls_bypass_the_base_url() {
	let server = MockServer::start_async().await;
	let adapter =
		build_reqwest_test_adapter("http://unused.invalid/1.0", test_user(ACCESS_TOKEN, ACCESS_SECRET));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/direct");
			then.status(200).body("plain text");
		})
		.await;
	let payload =
		adapter.get(&server.url("/direct"), None).await.expect("Absolute GET should succeed.");

	assert_eq!(payload, Payload::Text("plain text".into()));

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_bodies_are_returned_verbatim() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1.0/empty");
			then.status(200).body("");
		})
		.await;
	let payload = adapter.get("/empty", None).await.expect("Empty GET should succeed.");

	assert_eq!(payload, Payload::Text(String::new()));

	mock.assert_async().await;
}

#[tokio::test]
async fn error_responses_map_to_api_errors() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1.0/accounts");
			then.status(404).header("content-type", "application/json").body(
				"{\"error\":{\"type\":\"InvalidAccessToken\",\"message\":\"bad token\",\"status\":404}}",
			);
		})
		.await;
	let err = adapter.get("/accounts", None).await.expect_err("404 responses should fail.");

	assert_eq!(err.to_string(), "InvalidAccessToken: bad token");
	assert!(matches!(
		err,
		Error::Api(ApiError { status: 404, ref error_type, .. })
			if error_type.as_deref() == Some("InvalidAccessToken")
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_error_bodies_are_wrapped() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1.0/broken");
			then.status(502).body("<html>Bad Gateway</html>");
		})
		.await;
	let err = adapter
		.request(Method::Get, "/broken", None, ResponseSelector::Status)
		.await
		.expect_err("502 responses should fail.");

	assert!(matches!(err, Error::MalformedErrorBody { status: 502, .. }));

	mock.assert_async().await;
}
