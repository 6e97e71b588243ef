//! Top-level key intersection across the collected documents.

// crates.io
use serde_json::map::Keys;
// self
use crate::{
	_prelude::*,
	config::EndpointList,
	flows::{CommonKeySet, Pipeline, ResultMap},
	http::ApiHttpClient,
	obs::{Stage, StageKind},
};

/// Intersects the top-level key sets of the stored documents.
///
/// The document at `endpoints[1]` seeds the set and each document from index 2 onward narrows
/// it. The reachability endpoint at index 0 never contributes, so with two endpoints the result
/// is the second document's key set.
pub fn common_keys(results: &ResultMap, endpoints: &EndpointList) -> Result<CommonKeySet> {
	let seed = endpoints.seed().ok_or(Error::MissingSeed)?;
	let mut common: CommonKeySet = object_keys(results, seed)?.cloned().collect();

	for url in endpoints.narrowing() {
		let keys: BTreeSet<&String> = object_keys(results, url)?.collect();

		common.retain(|key| keys.contains(key));
	}

	Ok(common)
}

impl<C> Pipeline<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Runs [`common_keys`] over `results` with the configured endpoint list.
	pub fn intersect(&self, results: &ResultMap) -> Result<CommonKeySet> {
		Stage::begin(StageKind::KeyIntersection, "intersect")
			.run(|| common_keys(results, &self.config.endpoints))
	}
}

fn object_keys<'a>(results: &'a ResultMap, url: &Url) -> Result<Keys<'a>> {
	let document = results.get(url).ok_or_else(|| Error::MissingResponse { url: url.clone() })?;

	match document {
		Value::Object(map) => Ok(map.keys()),
		other => Err(Error::TypeMismatch { url: url.clone(), found: json_kind(other) }),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
