#![allow(dead_code)]

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use httpmock::prelude::*;
// self
use sase_common_keys::{
	auth::Credentials,
	config::Config,
	flows::ReqwestPipeline,
	http::ReqwestHttpClient,
	reqwest::Client,
	url::Url,
};

pub const CLIENT_ID: &str = "probe@1001.iam.example.com";
pub const CLIENT_SECRET: &str = "probe-secret";
pub const TSG_ID: &str = "1001";
pub const ACCESS_TOKEN: &str = "probe-access-token";
pub const TOKEN_PATH: &str = "/oauth2/access_token";

pub fn url(value: &str) -> Url {
	Url::parse(value).expect("Fixture URL should parse.")
}

pub fn basic_auth_header() -> String {
	format!("Basic {}", STANDARD.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}")))
}

pub fn bearer_header() -> String {
	format!("Bearer {ACCESS_TOKEN}")
}

/// Builds a configuration whose token endpoint and data endpoints live on `server`.
pub fn build_config(server: &MockServer, paths: &[&str]) -> Config {
	Config::builder()
		.credentials(Credentials::new(CLIENT_ID, CLIENT_SECRET, TSG_ID))
		.token_endpoint(url(&server.url(TOKEN_PATH)))
		.endpoint_urls(paths.iter().map(|path| url(&server.url(*path))))
		.expect("Mock endpoint list should be non-empty.")
		.build()
		.expect("Mock configuration should build.")
}

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock`.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

pub fn build_pipeline(server: &MockServer, paths: &[&str]) -> ReqwestPipeline {
	ReqwestPipeline::with_http_client(build_config(server, paths), test_reqwest_http_client())
}

pub async fn mock_token_success(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(format!(
				"{{\"access_token\":\"{ACCESS_TOKEN}\",\"token_type\":\"Bearer\",\"expires_in\":899}}"
			));
		})
		.await
}

pub async fn mock_json<'a>(server: &'a MockServer, path: &str, body: &str) -> httpmock::Mock<'a> {
	let path = path.to_owned();
	let body = body.to_owned();

	server
		.mock_async(move |when, then| {
			when.method(GET).path(path).header("authorization", bearer_header());
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await
}
