//! Client-credentials probe for Prisma SASE APIs: obtain a bearer token, collect JSON documents
//! from a fixed endpoint list, and report the top-level keys those documents share.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod runner;

mod _prelude {
	pub use std::{
		collections::{BTreeSet, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use reqwest::Client as ReqwestClient;
	pub use serde::Deserialize;
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use reqwest;
pub use url;
// Only the binary drives these.
use {color_eyre as _, tokio as _};
#[cfg(test)] use {base64 as _, httpmock as _, parking_lot as _};
