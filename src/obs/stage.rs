//! One pipeline stage as seen by the logs and counters: an attempt, a span around the work, and
//! exactly one terminal outcome.

// self
use crate::{
	_prelude::*,
	obs::{self, StageKind, StageOutcome},
};

/// An opened stage; the attempt is already recorded.
///
/// Consume it with [`Stage::run`] for synchronous work or [`Stage::run_async`] for work that
/// awaits the transport. Either records success or failure from the returned [`Result`].
#[derive(Debug)]
pub struct Stage {
	kind: StageKind,
	#[cfg(feature = "tracing")]
	step: &'static str,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl Stage {
	/// Opens `kind` at `step` and records the attempt.
	pub fn begin(kind: StageKind, step: &'static str) -> Self {
		obs::record_stage_outcome(kind, StageOutcome::Attempt);

		#[cfg(not(feature = "tracing"))]
		let _ = step;

		Self {
			kind,
			#[cfg(feature = "tracing")]
			step,
			#[cfg(feature = "tracing")]
			span: tracing::info_span!("sase_common_keys.stage", stage = kind.as_str(), step),
		}
	}

	/// Runs `work` inside the stage span.
	pub fn run<T, F>(self, work: F) -> Result<T>
	where
		F: FnOnce() -> Result<T>,
	{
		#[cfg(feature = "tracing")]
		let result = self.span.in_scope(work);
		#[cfg(not(feature = "tracing"))]
		let result = work();

		self.finish(&result);

		result
	}

	/// Awaits `work` with the stage span attached to every poll.
	pub async fn run_async<T, Fut>(self, work: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		#[cfg(feature = "tracing")]
		let result = {
			use tracing::Instrument;

			work.instrument(self.span.clone()).await
		};
		#[cfg(not(feature = "tracing"))]
		let result = work.await;

		self.finish(&result);

		result
	}

	fn finish<T>(&self, result: &Result<T>) {
		match result {
			Ok(_) => obs::record_stage_outcome(self.kind, StageOutcome::Success),
			Err(_e) => {
				#[cfg(feature = "tracing")]
				tracing::warn!(
					stage = self.kind.as_str(),
					step = self.step,
					error = %_e,
					"Stage failed."
				);

				obs::record_stage_outcome(self.kind, StageOutcome::Failure);
			},
		}
	}
}
