//! Strongly typed application identifier.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Application-level API identifier issued to the integrating app.
///
/// The key is fixed per application and distinct from any per-user token; it is sent with
/// every authenticated call and with both halves of the authorization exchange. The service
/// is the only judge of whether a key is valid, so any string is accepted here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumerKey(String);
impl ConsumerKey {
	/// Wraps a consumer key string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}
}
impl Deref for ConsumerKey {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ConsumerKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ConsumerKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<String> for ConsumerKey {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for ConsumerKey {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<ConsumerKey> for String {
	fn from(value: ConsumerKey) -> Self {
		value.0
	}
}
impl Debug for ConsumerKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ConsumerKey({})", self.0)
	}
}
impl Display for ConsumerKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
