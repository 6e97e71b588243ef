// self
use crate::obs::{StageKind, StageOutcome};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_stage_outcome(kind: StageKind, outcome: StageOutcome) {
	#[cfg(feature = "tracing")]
	tracing::debug!(stage = kind.as_str(), outcome = outcome.as_str(), "Stage outcome recorded.");

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"sase_common_keys_stage_total",
			"stage" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(any(feature = "metrics", feature = "tracing")))]
	{
		let _ = (kind, outcome);
	}
}
