//! JSON request bodies.
//!
//! Every call sends a flat JSON object of string pairs. Two keys are owned by the protocol
//! rather than the caller: [`CONSUMER_KEY_FIELD`] and [`ACCESS_TOKEN_FIELD`] are written by
//! [`Client::request_authenticated`](crate::client::Client::request_authenticated) and
//! overwrite anything a caller placed under the same names.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ConsumerKey},
};

/// Reserved field carrying the application's consumer key.
pub const CONSUMER_KEY_FIELD: &str = "consumer_key";
/// Reserved field carrying the per-user access token.
pub const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Ordered string→string body of an outgoing request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);
impl Payload {
	/// Creates an empty payload.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field, replacing any previous value.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);

		self
	}

	/// Adds a field only when `value` is present.
	pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
		if let Some(value) = value {
			self.insert(key, value);
		}

		self
	}

	/// Inserts a field, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the payload has no fields.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the fields in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Writes the consumer key.
	pub fn with_consumer_key(self, consumer_key: &ConsumerKey) -> Self {
		self.with(CONSUMER_KEY_FIELD, consumer_key.as_ref())
	}

	/// Writes both reserved credential fields.
	pub(crate) fn authenticated(self, consumer_key: &ConsumerKey, token: &AccessToken) -> Self {
		self.with_consumer_key(consumer_key).with(ACCESS_TOKEN_FIELD, token.expose())
	}

	/// Encodes the payload as a JSON object.
	pub fn to_json(&self) -> Result<Vec<u8>> {
		serde_json::to_vec(self).map_err(Error::Encode)
	}
}
impl<K, V> FromIterator<(K, V)> for Payload
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for Payload
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(fields: [(K, V); N]) -> Self {
		fields.into_iter().collect()
	}
}
