//! The API client and its credential state.

pub mod pipeline;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ConsumerKey, Credentials},
	config::ServiceConfig,
	http::ApiHttpClient,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Entry point for every API call.
///
/// The client owns the transport, the endpoint configuration, the application's consumer key,
/// and the per-user [`Credentials`]. Clones share the same credential state, so a token set
/// through one handle is visible to all of them. Each call is independent; the client keeps
/// no per-request state.
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Endpoint configuration.
	pub config: ServiceConfig,
	consumer_key: ConsumerKey,
	credentials: Arc<RwLock<Credentials>>,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates an unauthenticated client over the caller-provided transport.
	pub fn with_http_client(
		consumer_key: ConsumerKey,
		config: ServiceConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			config,
			consumer_key,
			credentials: Default::default(),
		}
	}

	/// Seeds the credential state, e.g. from a token the caller persisted earlier.
	pub fn with_credentials(self, credentials: Credentials) -> Self {
		self.set_credentials(credentials);

		self
	}

	/// Application identifier sent with every authenticated call.
	pub fn consumer_key(&self) -> &ConsumerKey {
		&self.consumer_key
	}

	/// Snapshot of the current credential state.
	pub fn credentials(&self) -> Credentials {
		self.credentials.read().clone()
	}

	/// Replaces the credential state, returning the previous one.
	pub fn set_credentials(&self, credentials: Credentials) -> Credentials {
		std::mem::replace(&mut *self.credentials.write(), credentials)
	}

	/// Stores an access token, keeping the current username if there is one.
	pub fn set_access_token(&self, access_token: impl Into<AccessToken>) {
		let mut credentials = self.credentials.write();
		let username = credentials.username().map(ToOwned::to_owned);

		*credentials = Credentials::Authenticated { access_token: access_token.into(), username };
	}

	/// Drops the access token, returning the previous credential state.
	pub fn sign_out(&self) -> Credentials {
		self.set_credentials(Credentials::Unauthenticated)
	}

	/// Whether an access token is present.
	pub fn is_authenticated(&self) -> bool {
		self.credentials.read().is_authenticated()
	}

	/// Current access token, if any.
	pub fn access_token(&self) -> Option<AccessToken> {
		self.credentials.read().access_token().cloned()
	}

	/// Username reported by the service, if any.
	pub fn username(&self) -> Option<String> {
		self.credentials.read().username().map(ToOwned::to_owned)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for the hosted service backed by a default reqwest transport.
	pub fn new(consumer_key: ConsumerKey) -> Self {
		Self::with_config(consumer_key, ServiceConfig::default())
	}

	/// Creates a client for custom endpoints backed by a default reqwest transport.
	pub fn with_config(consumer_key: ConsumerKey, config: ServiceConfig) -> Self {
		Self::with_http_client(consumer_key, config, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			config: self.config.clone(),
			consumer_key: self.consumer_key.clone(),
			credentials: Arc::clone(&self.credentials),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("config", &self.config)
			.field("consumer_key", &self.consumer_key)
			.field("authenticated", &self.is_authenticated())
			.finish()
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	fn client() -> ReqwestApiClient {
		Client::new(ConsumerKey::new("ck1"))
	}

	#[test]
	fn fresh_client_is_unauthenticated() {
		let long = "k".repeat(300);

		for key in ["ck1", "1234-abcd1234abcd1234abcd1234", "", "has space", long.as_str()] {
			let client = Client::new(ConsumerKey::new(key));

			assert!(!client.is_authenticated());
			assert!(client.access_token().is_none());
			assert!(client.username().is_none());
			assert_eq!(client.consumer_key().as_ref(), key);
		}
	}

	#[test]
	fn setting_a_token_authenticates() {
		let client = client();

		client.set_access_token("tok1");

		assert!(client.is_authenticated());
		assert_eq!(client.access_token().map(|t| t.expose().to_owned()), Some("tok1".into()));

		client.set_access_token("");

		assert!(client.is_authenticated(), "Any present token counts, even an empty one.");
	}

	#[test]
	fn token_rotation_keeps_username() {
		let client = client();

		client.set_credentials(Credentials::authenticated("tok1").with_username("reader"));
		client.set_access_token("tok2");

		assert_eq!(client.username().as_deref(), Some("reader"));
		assert_eq!(client.access_token().map(|t| t.expose().to_owned()), Some("tok2".into()));

		let previous = client.sign_out();

		assert!(previous.is_authenticated());
		assert!(!client.is_authenticated());
		assert!(client.username().is_none());
	}

	#[test]
	fn clones_share_credentials_and_debug_redacts() {
		let client = client();
		let clone = client.clone();

		client.set_access_token("very-secret-token");

		assert!(clone.is_authenticated());

		let rendered = format!("{clone:?}");

		assert!(rendered.contains("authenticated: true"));
		assert!(!rendered.contains("very-secret-token"));
	}
}
