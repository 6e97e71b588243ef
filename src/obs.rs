//! Optional observability helpers for the pipeline stages.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `sase_common_keys.stage` with the
//!   `stage` and `step` fields, plus a debug event per outcome. [`init_logging`] installs a
//!   stderr subscriber filtered by `RUST_LOG`.
//! - Enable `metrics` to increment the `sase_common_keys_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod counter;
mod logging;
mod stage;

pub use counter::*;
pub use logging::*;
pub use stage::*;

// self
use crate::_prelude::*;

/// Pipeline stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
	/// Client-credentials token exchange.
	TokenAcquisition,
	/// Authenticated GETs against the endpoint list.
	DataCollection,
	/// Top-level key intersection.
	KeyIntersection,
}
impl StageKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageKind::TokenAcquisition => "token_acquisition",
			StageKind::DataCollection => "data_collection",
			StageKind::KeyIntersection => "key_intersection",
		}
	}
}
impl Display for StageKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
