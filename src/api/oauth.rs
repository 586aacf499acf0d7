//! The two-step authorization exchange.
//!
//! 1. [`Client::obtain_request_token`] asks the service for a request token bound to a
//!    redirect URI.
//! 2. The user approves it at [`Client::authorization_url`].
//! 3. [`Client::obtain_access_token`] trades the approved request token for an access token.
//!
//! The client does not store the result; apply it with
//! [`Client::set_credentials`] and persist it however the application sees fit.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials},
	client::Client,
	http::ApiHttpClient,
	payload::Payload,
};

/// Unapproved request token returned by the first step of the exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
	/// Opaque request token.
	pub code: String,
	/// State echoed back by the service, when one was sent.
	#[serde(default)]
	pub state: Option<String>,
}

/// Access token and account name returned once the user approved the request token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
	/// Per-user access token.
	pub access_token: AccessToken,
	/// Account name.
	#[serde(default)]
	pub username: Option<String>,
	/// State echoed back by the service, when one was sent.
	#[serde(default)]
	pub state: Option<String>,
}
impl From<AccessGrant> for Credentials {
	fn from(grant: AccessGrant) -> Self {
		Credentials::Authenticated { access_token: grant.access_token, username: grant.username }
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Requests a token the user can approve; `redirect_uri` is where the service sends the
	/// browser afterwards.
	pub async fn obtain_request_token(
		&self,
		redirect_uri: &Url,
		state: Option<&str>,
	) -> Result<RequestToken> {
		let url = self.config.endpoint("oauth/request")?;
		let payload = Payload::new()
			.with_consumer_key(self.consumer_key())
			.with("redirect_uri", redirect_uri.as_str())
			.with_opt("state", state);

		self.request(&url, payload).await
	}

	/// Browser URL where the user approves `request_token`.
	pub fn authorization_url(&self, request_token: &RequestToken, redirect_uri: &Url) -> Url {
		let mut url = self.config.authorize_endpoint.clone();

		url.query_pairs_mut()
			.append_pair("request_token", &request_token.code)
			.append_pair("redirect_uri", redirect_uri.as_str());

		url
	}

	/// Exchanges an approved request token for an access token.
	pub async fn obtain_access_token(&self, request_token: &RequestToken) -> Result<AccessGrant> {
		let url = self.config.endpoint("oauth/authorize")?;
		let payload = Payload::new()
			.with_consumer_key(self.consumer_key())
			.with("code", request_token.code.as_str());

		self.request(&url, payload).await
	}
}
