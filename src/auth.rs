//! Client credentials and the bearer token they are exchanged for.

mod credentials;

pub use credentials::*;
pub use oauth2::{AccessToken, ClientId, ClientSecret};
