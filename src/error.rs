//! Error types shared by the pipeline stages, configuration, and transport.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error returned by every pipeline stage.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token endpoint answered with a non-2xx status.
	#[error("Token endpoint rejected the client credentials with HTTP {status}: {body}")]
	Authentication {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body, decoded lossily.
		body: String,
	},
	/// A data endpoint answered with a non-2xx status.
	#[error("Request to {url} failed with HTTP {status}: {body}")]
	Request {
		/// Endpoint that failed.
		url: Url,
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Raw response body, decoded lossily.
		body: String,
	},
	/// A response body could not be interpreted.
	#[error(transparent)]
	Malformed(#[from] MalformedResponseError),
	/// A stored document is not a JSON object, so it has no keys.
	#[error("Response from {url} is a JSON {found}, not an object.")]
	TypeMismatch {
		/// Endpoint whose document was inspected.
		url: Url,
		/// JSON kind that was found instead.
		found: &'static str,
	},
	/// Fewer than two endpoints are configured, so no document seeds the intersection.
	#[error("No endpoint at index 1 is configured to seed the key intersection.")]
	MissingSeed,
	/// A configured endpoint has no collected document.
	#[error("No collected response exists for {url}.")]
	MissingResponse {
		/// Endpoint without a stored document.
		url: Url,
	},
	/// Transport failure (DNS, TCP, TLS, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Writing the report failed.
	#[error("Failed to write the report.")]
	Output(#[source] std::io::Error),
}
impl Error {
	/// Classifies the error for the orchestrator.
	///
	/// Network and HTTP-status failures from token acquisition and data collection are
	/// reported and the run ends normally; everything else aborts the process.
	pub fn disposition(&self) -> Disposition {
		match self {
			Error::Authentication { .. } | Error::Request { .. } | Error::Transport(_) =>
				Disposition::Reported,
			Error::Malformed(_)
			| Error::TypeMismatch { .. }
			| Error::MissingSeed
			| Error::MissingResponse { .. }
			| Error::Config(_)
			| Error::Output(_) => Disposition::Fatal,
		}
	}
}

/// How the orchestrator treats a failed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
	/// Print a diagnostic and exit normally.
	Reported,
	/// Propagate to the caller and terminate abnormally.
	Fatal,
}

/// Response bodies that do not have the expected shape.
#[derive(Debug, ThisError)]
pub enum MalformedResponseError {
	/// Token endpoint body is not JSON or lacks `access_token`.
	#[error("Token endpoint returned a malformed response.")]
	TokenResponse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Data endpoint body is not valid JSON.
	#[error("Response from {url} is not valid JSON.")]
	Body {
		/// Endpoint whose body failed to parse.
		url: Url,
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The endpoint list must contain at least one URL.
	#[error("Endpoint list cannot be empty.")]
	EmptyEndpointList,
	/// An environment override holds an unparsable URL.
	#[error("Environment variable {var} contains an invalid URL: {value}.")]
	InvalidUrl {
		/// Variable that was read.
		var: &'static str,
		/// Offending value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The builder was finished without a token endpoint.
	#[error("Missing token endpoint.")]
	MissingTokenEndpoint,
	/// The builder was finished without credentials.
	#[error("Missing client credentials.")]
	MissingCredentials,
	/// The `.env` file exists but could not be loaded.
	#[error("Failed to load the environment file.")]
	EnvFile(#[source] dotenvy::Error),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}: {source}")]
	Network {
		/// Endpoint being called.
		url: Url,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: Url, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url, source: Box::new(src) }
	}
}
