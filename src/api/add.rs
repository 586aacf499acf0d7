//! Saving a single item.

// self
use crate::{_prelude::*, client::Client, http::ApiHttpClient, payload::Payload};

/// Item to save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddItem {
	/// Page to save.
	pub url: Url,
	/// Title to use when the service cannot resolve one.
	pub title: Option<String>,
	/// Tags to attach.
	pub tags: Vec<String>,
	/// Tweet the item was shared from.
	pub tweet_id: Option<String>,
}
impl AddItem {
	/// Creates a request for `url` with no title, tags, or tweet.
	pub fn new(url: Url) -> Self {
		Self { url, title: None, tags: Vec::new(), tweet_id: None }
	}

	/// Sets the fallback title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}

	/// Adds tags.
	pub fn tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags.extend(tags.into_iter().map(Into::into));

		self
	}

	/// Sets the originating tweet.
	pub fn tweet_id(mut self, tweet_id: impl Into<String>) -> Self {
		self.tweet_id = Some(tweet_id.into());

		self
	}

	/// Maps the request onto its wire fields.
	pub fn to_payload(&self) -> Payload {
		let tags = (!self.tags.is_empty()).then(|| self.tags.join(","));

		Payload::new()
			.with("url", self.url.as_str())
			.with_opt("title", self.title.as_deref())
			.with_opt("tags", tags)
			.with_opt("tweet_id", self.tweet_id.as_deref())
	}
}

/// Response of the add endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResponse {
	/// The saved item as resolved by the service.
	pub item: AddedItem,
	/// `1` on success.
	#[serde(default)]
	pub status: i64,
}

/// Item metadata returned after saving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedItem {
	/// Identifier of the saved item.
	pub item_id: String,
	/// URL as normalized by the service.
	pub normal_url: Option<String>,
	/// Identifier of the resolved item.
	pub resolved_id: Option<String>,
	/// URL after redirects.
	pub resolved_url: Option<String>,
	/// Resolved title.
	pub title: Option<String>,
	/// Resolved excerpt.
	pub excerpt: Option<String>,
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Saves one item to the user's list.
	pub async fn add(&self, item: &AddItem) -> Result<AddResponse> {
		let url = self.config.endpoint("add")?;

		self.request_authenticated(&url, item.to_payload()).await
	}
}
