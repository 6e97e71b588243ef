// std
use std::slice::Iter;
// self
use crate::{_prelude::*, error::ConfigError};

/// Ordered, non-empty list of data endpoints.
///
/// Index 0 is only probed for reachability. Index 1 onward is stored, index 1 seeds the key
/// intersection, and index 2 onward narrows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointList(Vec<Url>);
impl EndpointList {
	/// Wraps `urls`, rejecting an empty list.
	pub fn new(urls: impl IntoIterator<Item = Url>) -> Result<Self, ConfigError> {
		let urls: Vec<Url> = urls.into_iter().collect();

		if urls.is_empty() {
			return Err(ConfigError::EmptyEndpointList);
		}

		Ok(Self(urls))
	}

	/// Endpoint whose response is checked but discarded.
	pub fn reachability(&self) -> &Url {
		&self.0[0]
	}

	/// Endpoints whose documents are stored, in order.
	pub fn stored(&self) -> &[Url] {
		&self.0[1..]
	}

	/// Endpoint whose key set seeds the intersection, if configured.
	pub fn seed(&self) -> Option<&Url> {
		self.0.get(1)
	}

	/// Endpoints that narrow the intersection.
	pub fn narrowing(&self) -> &[Url] {
		self.0.get(2..).unwrap_or_default()
	}

	/// Number of configured endpoints.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the list is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over every endpoint in order.
	pub fn iter(&self) -> Iter<'_, Url> {
		self.0.iter()
	}
}
impl<'a> IntoIterator for &'a EndpointList {
	type IntoIter = Iter<'a, Url>;
	type Item = &'a Url;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
