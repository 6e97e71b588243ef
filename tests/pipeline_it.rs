mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use sase_common_keys::error::{Error, MalformedResponseError};

#[tokio::test]
async fn token_request_posts_credentials_and_tenant_scope_once() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("authorization", basic_auth_header())
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("grant_type", "client_credentials")
				.form_urlencoded_tuple("scope", format!("tsg_id:{TSG_ID}"));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"scoped-token\",\"token_type\":\"Bearer\"}");
		})
		.await;
	let token = pipeline.acquire_token().await.expect("Token exchange should succeed.");

	assert_eq!(token.secret(), "scoped-token");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn token_rejection_carries_status_and_body() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(401).body("{\"error\":\"invalid_client\"}");
		})
		.await;
	let err = pipeline.acquire_token().await.expect_err("Rejected credentials should fail.");

	match err {
		Error::Authentication { status, body } => {
			assert_eq!(status, 401);
			assert_eq!(body, "{\"error\":\"invalid_client\"}");
		},
		other => panic!("Unexpected error: {other:?}"),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn token_response_without_access_token_is_malformed() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token_type\":\"Bearer\"}");
		})
		.await;
	let err = pipeline.acquire_token().await.expect_err("Missing access_token should fail.");

	assert!(matches!(err, Error::Malformed(MalformedResponseError::TokenResponse { .. })));
}

#[tokio::test]
async fn collect_sends_bearer_token_and_drops_reachability_body() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs", "/sites"]);
	let _token = mock_token_success(&server).await;
	let profile = mock_json(&server, "/profile", "{\"tenant\":\"acme\"}").await;
	let jobs = mock_json(&server, "/jobs", "{\"data\":[],\"total\":0}").await;
	let sites = mock_json(&server, "/sites", "{\"total\":3}").await;
	let token = pipeline.acquire_token().await.expect("Token exchange should succeed.");
	let results = pipeline.collect(&token).await.expect("Collection should succeed.");

	assert_eq!(results.len(), 2);
	assert!(!results.contains_key(&url(&server.url("/profile"))));
	assert_eq!(results[&url(&server.url("/jobs"))]["total"], 0);
	assert_eq!(results[&url(&server.url("/sites"))]["total"], 3);

	profile.assert_calls_async(1).await;
	jobs.assert_calls_async(1).await;
	sites.assert_calls_async(1).await;
}

#[tokio::test]
async fn failing_reachability_check_stops_collection() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let _token = mock_token_success(&server).await;
	let profile = server
		.mock_async(|when, then| {
			when.method(GET).path("/profile");
			then.status(403).body("forbidden");
		})
		.await;
	let jobs = mock_json(&server, "/jobs", "{\"x\":1}").await;
	let token = pipeline.acquire_token().await.expect("Token exchange should succeed.");
	let err = pipeline.collect(&token).await.expect_err("Forbidden reachability check should fail.");

	match err {
		Error::Request { url: failed, status, body } => {
			assert_eq!(failed, url(&server.url("/profile")));
			assert_eq!(status, 403);
			assert_eq!(body, "forbidden");
		},
		other => panic!("Unexpected error: {other:?}"),
	}

	profile.assert_calls_async(1).await;
	jobs.assert_calls_async(0).await;
}

#[tokio::test]
async fn invalid_json_body_is_malformed() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let _token = mock_token_success(&server).await;
	let _profile = mock_json(&server, "/profile", "{}").await;
	let _jobs = mock_json(&server, "/jobs", "<html>maintenance</html>").await;
	let token = pipeline.acquire_token().await.expect("Token exchange should succeed.");
	let err = pipeline.collect(&token).await.expect_err("Non-JSON body should fail.");

	assert!(matches!(
		err,
		Error::Malformed(MalformedResponseError::Body { url: failed, .. })
			if failed == url(&server.url("/jobs"))
	));
}

#[tokio::test]
async fn reachability_body_is_not_parsed() {
	let server = MockServer::start_async().await;
	let pipeline = build_pipeline(&server, &["/profile", "/jobs"]);
	let _token = mock_token_success(&server).await;
	let _profile = mock_json(&server, "/profile", "not json at all").await;
	let _jobs = mock_json(&server, "/jobs", "{\"x\":1}").await;
	let token = pipeline.acquire_token().await.expect("Token exchange should succeed.");
	let results = pipeline.collect(&token).await.expect("Discarded body should not be parsed.");
	let keys = pipeline.intersect(&results).expect("Intersection should succeed.");

	assert_eq!(keys.into_iter().collect::<Vec<_>>(), ["x"]);
}
