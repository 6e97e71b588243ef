// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::{Config, EndpointList},
	error::ConfigError,
};

/// Builder for [`Config`] values.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
	/// Client credentials.
	pub credentials: Option<Credentials>,
	/// Token endpoint.
	pub token_endpoint: Option<Url>,
	/// Data endpoints.
	pub endpoints: Option<EndpointList>,
}
impl ConfigBuilder {
	/// Sets the client credentials.
	pub fn credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the data endpoints.
	pub fn endpoints(mut self, endpoints: EndpointList) -> Self {
		self.endpoints = Some(endpoints);

		self
	}

	/// Sets the data endpoints from raw URLs.
	pub fn endpoint_urls<I>(mut self, urls: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = Url>,
	{
		self.endpoints = Some(EndpointList::new(urls)?);

		Ok(self)
	}

	/// Consumes the builder and returns the configuration.
	pub fn build(self) -> Result<Config, ConfigError> {
		let credentials = self.credentials.ok_or(ConfigError::MissingCredentials)?;
		let token_endpoint = self.token_endpoint.ok_or(ConfigError::MissingTokenEndpoint)?;
		let endpoints = self.endpoints.ok_or(ConfigError::EmptyEndpointList)?;

		Ok(Config { credentials, token_endpoint, endpoints })
	}
}
