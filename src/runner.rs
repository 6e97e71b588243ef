//! Orchestration: run the stages in order and decide what gets reported versus propagated.

// std
use std::io::Write;
// self
use crate::{
	_prelude::*,
	error::Disposition,
	flows::{CommonKeySet, Pipeline},
	http::ApiHttpClient,
};

/// Line written once the token exchange succeeds.
pub const TOKEN_OBTAINED: &str = "Access token obtained successfully.";
/// Line written once every endpoint answered.
pub const REQUESTS_MADE: &str = "API requests made successfully.";
/// Header written before the common keys.
pub const COMMON_KEYS_HEADER: &str = "Common values found:";
/// Prefix of the diagnostic written for reported failures.
pub const FAILURE_PREFIX: &str = "Error occurred during API requests:";

/// How a run ended when it did not hit a fatal error.
#[derive(Debug)]
pub enum RunOutcome {
	/// Every stage succeeded.
	Completed(CommonKeySet),
	/// A network or HTTP-status failure was printed and the run stopped.
	Reported(Error),
}

/// Runs the pipeline and writes its progress and result lines to `out`.
///
/// Errors whose [`Error::disposition`] is [`Disposition::Reported`] are written to `out` and
/// returned as [`RunOutcome::Reported`]. Fatal errors are returned unprinted.
pub async fn run<C, W>(pipeline: &Pipeline<C>, out: &mut W) -> Result<RunOutcome>
where
	C: ?Sized + ApiHttpClient,
	W: ?Sized + Write,
{
	match run_stages(pipeline, out).await {
		Ok(keys) => Ok(RunOutcome::Completed(keys)),
		Err(e) if e.disposition() == Disposition::Reported => {
			writeln!(out, "{FAILURE_PREFIX} {e}").map_err(Error::Output)?;

			Ok(RunOutcome::Reported(e))
		},
		Err(e) => Err(e),
	}
}

async fn run_stages<C, W>(pipeline: &Pipeline<C>, out: &mut W) -> Result<CommonKeySet>
where
	C: ?Sized + ApiHttpClient,
	W: ?Sized + Write,
{
	let token = pipeline.acquire_token().await?;

	writeln!(out, "{TOKEN_OBTAINED}").map_err(Error::Output)?;

	let results = pipeline.collect(&token).await?;

	writeln!(out, "{REQUESTS_MADE}").map_err(Error::Output)?;

	let keys = pipeline.intersect(&results)?;

	writeln!(out, "{COMMON_KEYS_HEADER}").map_err(Error::Output)?;

	for key in &keys {
		writeln!(out, "{key}").map_err(Error::Output)?;
	}

	out.flush().map_err(Error::Output)?;

	Ok(keys)
}
