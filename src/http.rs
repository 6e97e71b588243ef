//! Transport primitives for the token exchange and the data requests.
//!
//! [`ApiHttpClient`] is the pipeline's only dependency on an HTTP stack. It reports what the
//! server said ([`HttpResponse`]) and leaves status classification to the stages, so a non-2xx
//! answer is never a [`TransportError`].

// std
use std::ops::Deref;
// crates.io
use oauth2::{AccessToken, ClientId, ClientSecret};
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`ApiHttpClient`] operations.
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports able to run the two request shapes the pipeline needs.
///
/// Implementations must be `Send + Sync + 'static` so a single client can be shared behind
/// an [`Arc`] for the whole run.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends a form-encoded POST authenticated with HTTP Basic credentials.
	fn post_form(&self, request: FormRequest) -> HttpFuture<'_>;

	/// Sends a GET carrying `Authorization: Bearer <token>`.
	fn get(&self, request: BearerRequest) -> HttpFuture<'_>;
}

/// Form POST issued against the token endpoint.
#[derive(Clone, Debug)]
pub struct FormRequest {
	/// Target URL.
	pub url: Url,
	/// Basic-auth user.
	pub client_id: ClientId,
	/// Basic-auth password.
	pub client_secret: ClientSecret,
	/// Form fields in send order.
	pub form: Vec<(&'static str, String)>,
}

/// Authenticated GET issued against a data endpoint.
#[derive(Clone, Debug)]
pub struct BearerRequest {
	/// Target URL.
	pub url: Url,
	/// Bearer token placed in the `Authorization` header.
	pub token: AccessToken,
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from its parts.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Whether the status is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Body decoded as UTF-8, replacing invalid sequences.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default client keeps reqwest's defaults: redirects are followed and no timeout is set.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl ApiHttpClient for ReqwestHttpClient {
	fn post_form(&self, request: FormRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let FormRequest { url, client_id, client_secret, form } = request;
			let response = self
				.0
				.post(url.clone())
				.basic_auth(client_id.as_str(), Some(client_secret.secret()))
				.form(&form)
				.send()
				.await
				.map_err(|e| TransportError::network(url.clone(), e))?;

			read_response(url, response).await
		})
	}

	fn get(&self, request: BearerRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let BearerRequest { url, token } = request;
			let response = self
				.0
				.get(url.clone())
				.bearer_auth(token.secret())
				.send()
				.await
				.map_err(|e| TransportError::network(url.clone(), e))?;

			read_response(url, response).await
		})
	}
}

async fn read_response(
	url: Url,
	response: reqwest::Response,
) -> Result<HttpResponse, TransportError> {
	let status = response.status().as_u16();
	let body = response.bytes().await.map_err(|e| TransportError::network(url, e))?;

	Ok(HttpResponse::new(status, body.to_vec()))
}
