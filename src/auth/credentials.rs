//! Per-user credential state.

// self
use crate::{_prelude::*, auth::AccessToken};

/// Authorization state of a client.
///
/// The access token only exists inside [`Credentials::Authenticated`], so "authenticated"
/// and "has a token" can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Credentials {
	/// No access token has been set.
	#[default]
	Unauthenticated,
	/// An access token obtained through the authorization exchange.
	Authenticated {
		/// Per-user access token.
		access_token: AccessToken,
		/// Username reported by the service, informational only.
		username: Option<String>,
	},
}
impl Credentials {
	/// Builds authenticated credentials without a username.
	pub fn authenticated(access_token: impl Into<AccessToken>) -> Self {
		Self::Authenticated { access_token: access_token.into(), username: None }
	}

	/// Attaches (or replaces) the username; no-op while unauthenticated.
	pub fn with_username(mut self, name: impl Into<String>) -> Self {
		if let Self::Authenticated { username, .. } = &mut self {
			*username = Some(name.into());
		}

		self
	}

	/// Whether an access token is present.
	pub fn is_authenticated(&self) -> bool {
		matches!(self, Self::Authenticated { .. })
	}

	/// Returns the access token, if present.
	pub fn access_token(&self) -> Option<&AccessToken> {
		match self {
			Self::Authenticated { access_token, .. } => Some(access_token),
			Self::Unauthenticated => None,
		}
	}

	/// Returns the username, if present.
	pub fn username(&self) -> Option<&str> {
		match self {
			Self::Authenticated { username, .. } => username.as_deref(),
			Self::Unauthenticated => None,
		}
	}
}
