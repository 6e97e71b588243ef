//! Client-credentials token exchange.
//!
//! One form POST carrying `grant_type=client_credentials` and `scope=tsg_id:<tenant>` is sent
//! with HTTP Basic authentication. Nothing is cached: every run exchanges a fresh token.

// crates.io
use oauth2::AccessToken;
// self
use crate::{
	_prelude::*,
	error::MalformedResponseError,
	flows::Pipeline,
	http::{ApiHttpClient, FormRequest},
	obs::{Stage, StageKind},
};

const GRANT_TYPE: &str = "client_credentials";

#[derive(Deserialize)]
struct TokenResponse {
	access_token: TokenValue,
}

/// Numeric tokens are sent back in their JSON text form.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenValue {
	Text(String),
	Number(serde_json::Number),
}
impl From<TokenValue> for AccessToken {
	fn from(value: TokenValue) -> Self {
		match value {
			TokenValue::Text(text) => AccessToken::new(text),
			TokenValue::Number(number) => AccessToken::new(number.to_string()),
		}
	}
}

impl<C> Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Exchanges the configured credentials for a bearer token.
	///
	/// A non-2xx answer fails with [`Error::Authentication`]. A 2xx body whose `access_token` is
	/// missing, or is not a string or number, fails with
	/// [`MalformedResponseError::TokenResponse`].
	pub async fn acquire_token(&self) -> Result<AccessToken> {
		Stage::begin(StageKind::TokenAcquisition, "acquire_token")
			.run_async(async move {
				let credentials = &self.config.credentials;
				let request = FormRequest {
					url: self.config.token_endpoint.clone(),
					client_id: credentials.client_id.clone(),
					client_secret: credentials.client_secret.clone(),
					form: vec![("grant_type", GRANT_TYPE.into()), ("scope", credentials.scope())],
				};
				let response = self.http_client.post_form(request).await?;

				if !response.is_success() {
					return Err(Error::Authentication {
						status: response.status,
						body: response.body_text(),
					});
				}

				parse_token_response(&response.body)
			})
			.await
	}
}

fn parse_token_response(body: &[u8]) -> Result<AccessToken> {
	let de = &mut serde_json::Deserializer::from_slice(body);
	let parsed: TokenResponse = serde_path_to_error::deserialize(de)
		.map_err(|source| MalformedResponseError::TokenResponse { source })?;

	Ok(parsed.access_token.into())
}
