//! The three pipeline stages and the [`Pipeline`] that owns their shared state.
//!
//! Each stage returns a [`Result`]; composing them and deciding what is fatal is the
//! [`runner`](crate::runner) module's job.

pub mod intersect;

mod collect;
mod token;

pub use intersect::*;

// self
use crate::{
	_prelude::*,
	config::Config,
	http::{ApiHttpClient, ReqwestHttpClient},
};

/// Parsed JSON documents keyed by the endpoint they were fetched from.
pub type ResultMap = HashMap<Url, Value>;
/// Top-level keys shared by the compared documents.
pub type CommonKeySet = BTreeSet<String>;

/// Pipeline specialized for the crate's default reqwest transport.
pub type ReqwestPipeline = Pipeline<ReqwestHttpClient>;

/// Runs token acquisition, data collection, and key intersection against one configuration.
///
/// Requests are issued one at a time; every stage borrows the configuration and nothing is
/// mutated after construction.
#[derive(Clone)]
pub struct Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Run configuration.
	pub config: Config,
}
impl<C> Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a pipeline that reuses the caller-provided transport.
	pub fn with_http_client(config: Config, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), config }
	}
}
impl Pipeline<ReqwestHttpClient> {
	/// Creates a pipeline backed by a default reqwest client.
	pub fn new(config: Config) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Pipeline").field("config", &self.config).finish()
	}
}
