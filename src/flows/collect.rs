//! Sequential authenticated GETs against the configured endpoint list.

// crates.io
use oauth2::AccessToken;
// self
use crate::{
	_prelude::*,
	error::MalformedResponseError,
	flows::{Pipeline, ResultMap},
	http::{ApiHttpClient, BearerRequest, HttpResponse},
	obs::{Stage, StageKind},
};

impl<C> Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches every configured endpoint with `token` and stores the parsed documents.
	///
	/// The first endpoint only has to answer with a 2xx status; its body is dropped. Every
	/// later endpoint must answer with a 2xx JSON body, which is stored under its URL. The
	/// first failure ends the stage and nothing collected so far is returned.
	pub async fn collect(&self, token: &AccessToken) -> Result<ResultMap> {
		Stage::begin(StageKind::DataCollection, "collect")
			.run_async(async move {
				let endpoints = &self.config.endpoints;

				self.fetch(endpoints.reachability(), token).await?;

				let mut results = ResultMap::with_capacity(endpoints.stored().len());

				for url in endpoints.stored() {
					let response = self.fetch(url, token).await?;
					let document = serde_json::from_slice::<Value>(&response.body).map_err(
						|source| MalformedResponseError::Body { url: url.clone(), source },
					)?;

					results.insert(url.clone(), document);
				}

				Ok(results)
			})
			.await
	}

	async fn fetch(&self, url: &Url, token: &AccessToken) -> Result<HttpResponse> {
		let request = BearerRequest { url: url.clone(), token: token.clone() };
		let response = self.http_client.get(request).await?;

		if !response.is_success() {
			return Err(Error::Request {
				url: url.clone(),
				status: response.status,
				body: response.body_text(),
			});
		}

		Ok(response)
	}
}
