//! Command-line entry point: load `.env`, read the configuration, and print the common keys.

// std
use std::io;
// crates.io
use color_eyre::Result;
// self
use sase_common_keys::{
	config::{self, Config},
	flows::Pipeline,
	obs,
	runner,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	color_eyre::install()?;
	config::load_env_file()?;
	obs::init_logging();

	let pipeline = Pipeline::new(Config::from_env()?);
	let mut stdout = io::stdout().lock();

	// Reported failures were already printed; only fatal ones change the exit status.
	runner::run(&pipeline, &mut stdout).await?;

	Ok(())
}
