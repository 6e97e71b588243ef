//! Process configuration assembled once at startup and handed to the pipeline by value.
//!
//! Credentials come from `CLIENT_ID`, `CLIENT_SECRET`, and `TSG_ID`. Two optional variables
//! override the built-in targets: `AUTH_URL` replaces the token endpoint and `API_URLS`
//! replaces the endpoint list (comma or whitespace separated, order preserved).

mod builder;
mod endpoints;

pub use builder::*;
pub use endpoints::*;

// std
use std::path::Path;
// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// Token endpoint used when `AUTH_URL` is unset.
pub const DEFAULT_AUTH_URL: &str = "https://auth.apps.paloaltonetworks.com/oauth2/access_token";
/// Endpoints queried when `API_URLS` is unset.
pub const DEFAULT_API_URLS: [&str; 2] = [
	"https://api.sase.paloaltonetworks.com/sdwan/v2.1/api/profile",
	"https://api.sase.paloaltonetworks.com/config/v1/jobs",
];

/// Environment variable holding the client identifier.
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
/// Environment variable holding the tenant service group identifier.
pub const ENV_TSG_ID: &str = "TSG_ID";
/// Optional token endpoint override.
pub const ENV_AUTH_URL: &str = "AUTH_URL";
/// Optional endpoint list override.
pub const ENV_API_URLS: &str = "API_URLS";

/// Immutable run configuration.
#[derive(Clone, Debug)]
pub struct Config {
	/// Client credentials exchanged for the bearer token.
	pub credentials: Credentials,
	/// OAuth 2.0 token endpoint.
	pub token_endpoint: Url,
	/// Ordered data endpoints.
	pub endpoints: EndpointList,
}
impl Config {
	/// Creates a builder with no fields set.
	pub fn builder() -> ConfigBuilder {
		ConfigBuilder::default()
	}

	/// Reads the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads the configuration through `lookup`, which maps a variable name to its value.
	///
	/// Missing credentials become empty strings; they are not validated here.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let credentials = Credentials::new(
			lookup(ENV_CLIENT_ID).unwrap_or_default(),
			lookup(ENV_CLIENT_SECRET).unwrap_or_default(),
			lookup(ENV_TSG_ID).unwrap_or_default(),
		);
		let token_endpoint = match lookup(ENV_AUTH_URL).filter(|v| !v.trim().is_empty()) {
			Some(value) => parse_url(ENV_AUTH_URL, value.trim())?,
			None => parse_url(ENV_AUTH_URL, DEFAULT_AUTH_URL)?,
		};
		let endpoints = match lookup(ENV_API_URLS).filter(|v| !v.trim().is_empty()) {
			Some(value) => EndpointList::new(
				value
					.split(|c: char| c == ',' || c.is_whitespace())
					.filter(|part| !part.is_empty())
					.map(|part| parse_url(ENV_API_URLS, part))
					.collect::<Result<Vec<_>, _>>()?,
			)?,
			None => EndpointList::new(
				DEFAULT_API_URLS
					.iter()
					.map(|raw| parse_url(ENV_API_URLS, raw))
					.collect::<Result<Vec<_>, _>>()?,
			)?,
		};

		Self::builder()
			.credentials(credentials)
			.token_endpoint(token_endpoint)
			.endpoints(endpoints)
			.build()
	}
}

/// Loads `.env` from the working directory (or a parent) into the process environment.
///
/// Returns whether a file was loaded; a missing file is not an error.
pub fn load_env_file() -> Result<bool, ConfigError> {
	env_file_outcome(dotenvy::dotenv().map(|_| ()))
}

/// Loads the environment file at `path` into the process environment.
///
/// Returns whether a file was loaded; a missing file is not an error.
pub fn load_env_file_from(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
	env_file_outcome(dotenvy::from_path(path))
}

fn env_file_outcome(loaded: Result<(), dotenvy::Error>) -> Result<bool, ConfigError> {
	match loaded {
		Ok(()) => Ok(true),
		Err(e) if e.not_found() => Ok(false),
		Err(e) => Err(ConfigError::EnvFile(e)),
	}
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
	Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
		var,
		value: value.to_owned(),
		source,
	})
}
