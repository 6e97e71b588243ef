//! Service-account credentials scoped to a single tenant service group.

// crates.io
use oauth2::{ClientId, ClientSecret};
// self
use crate::_prelude::*;

/// Prefix the token endpoint expects in front of the tenant identifier.
pub const TENANT_SCOPE_PREFIX: &str = "tsg_id:";

/// Client-credentials triple read once at startup.
///
/// Values are taken verbatim: an empty identifier or secret is only rejected by the
/// token endpoint itself.
#[derive(Clone)]
pub struct Credentials {
	/// OAuth 2.0 client identifier.
	pub client_id: ClientId,
	/// Client secret sent through HTTP Basic authentication.
	pub client_secret: ClientSecret,
	/// Tenant service group the token is scoped to.
	pub tenant_id: String,
}
impl Credentials {
	/// Creates a credentials triple.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		tenant_id: impl Into<String>,
	) -> Self {
		Self {
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
			tenant_id: tenant_id.into(),
		}
	}

	/// Scope string requested from the token endpoint.
	pub fn scope(&self) -> String {
		format!("{TENANT_SCOPE_PREFIX}{}", self.tenant_id)
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id.as_str())
			.field("client_secret", &"<redacted>")
			.field("tenant_id", &self.tenant_id)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scope_embeds_tenant_id() {
		let credentials = Credentials::new("svc@1001.iam.example.com", "secret", "1001");

		assert_eq!(credentials.scope(), "tsg_id:1001");
	}

	#[test]
	fn empty_values_are_accepted() {
		let credentials = Credentials::new("", "", "");

		assert_eq!(credentials.scope(), "tsg_id:");
		assert!(credentials.client_id.is_empty());
	}

	#[test]
	fn debug_redacts_secret() {
		let credentials = Credentials::new("client", "super-secret", "42");
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("<redacted>"));
	}
}
