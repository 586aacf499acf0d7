//! Listing saved items.

// crates.io
use serde::{
	Deserializer,
	de::{self, MapAccess, SeqAccess, Visitor},
};
// self
use crate::{_prelude::*, client::Client, http::ApiHttpClient, payload::Payload};

macro_rules! def_filter {
	($name:ident, $doc:literal, { $($(#[$meta:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
		#[doc = $doc]
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(
				$(#[$meta])*
				#[serde(rename = $label)]
				$variant,
			)+
		}
		impl $name {
			/// Returns the wire label.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $label,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
	};
}

def_filter! { ItemState, "Read state filter.", {
	/// Only unread items.
	Unread => "unread",
	/// Only archived items.
	Archive => "archive",
	/// Both.
	All => "all",
} }
def_filter! { ContentType, "Content type filter.", {
	/// Articles.
	Article => "article",
	/// Videos or articles with embedded videos.
	Video => "video",
	/// Images.
	Image => "image",
} }
def_filter! { Sort, "Result ordering.", {
	/// Newest first.
	Newest => "newest",
	/// Oldest first.
	Oldest => "oldest",
	/// By title.
	Title => "title",
	/// By URL.
	Site => "site",
} }
def_filter! { DetailType, "Amount of item data returned.", {
	/// Basic fields only.
	Simple => "simple",
	/// Every field, including tags.
	Complete => "complete",
} }

/// Filters for listing items; every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RetrieveQuery {
	/// Read state.
	pub state: Option<ItemState>,
	/// Favorited (`true`) or not (`false`).
	pub favorite: Option<bool>,
	/// Items carrying this tag; `_untagged_` selects items without tags.
	pub tag: Option<String>,
	/// Content type.
	pub content_type: Option<ContentType>,
	/// Ordering.
	pub sort: Option<Sort>,
	/// Detail level.
	pub detail_type: Option<DetailType>,
	/// Items whose title or URL contains this string.
	pub search: Option<String>,
	/// Items from this domain.
	pub domain: Option<String>,
	/// Items modified since this moment.
	pub since: Option<OffsetDateTime>,
	/// Page size.
	pub count: Option<u32>,
	/// Page offset; only honored together with `count`.
	pub offset: Option<u32>,
}
impl RetrieveQuery {
	/// Maps the query onto its wire fields.
	pub fn to_payload(&self) -> Payload {
		Payload::new()
			.with_opt("state", self.state.map(ItemState::as_str))
			.with_opt("favorite", self.favorite.map(|favorite| if favorite { "1" } else { "0" }))
			.with_opt("tag", self.tag.as_deref())
			.with_opt("contentType", self.content_type.map(ContentType::as_str))
			.with_opt("sort", self.sort.map(Sort::as_str))
			.with_opt("detailType", self.detail_type.map(DetailType::as_str))
			.with_opt("search", self.search.as_deref())
			.with_opt("domain", self.domain.as_deref())
			.with_opt("since", self.since.map(|since| since.unix_timestamp().to_string()))
			.with_opt("count", self.count.map(|count| count.to_string()))
			.with_opt("offset", self.offset.map(|offset| offset.to_string()))
	}
}

/// Response of the retrieve endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RetrieveResponse {
	/// `1` when items were returned, `2` when none matched.
	#[serde(default)]
	pub status: i64,
	/// `1` when the full list was returned.
	#[serde(default)]
	pub complete: i64,
	/// Items keyed by item id.
	#[serde(default, deserialize_with = "item_list")]
	pub list: BTreeMap<String, Item>,
	/// Server time of this snapshot; pass it back as [`RetrieveQuery::since`] to sync.
	#[serde(default, with = "time::serde::timestamp::option")]
	pub since: Option<OffsetDateTime>,
}

/// Saved item as listed by the service; numeric and boolean fields arrive as strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	/// Item identifier.
	pub item_id: String,
	/// Identifier of the resolved item.
	pub resolved_id: Option<String>,
	/// URL as saved.
	pub given_url: Option<String>,
	/// Title as saved.
	pub given_title: Option<String>,
	/// `"1"` when favorited.
	pub favorite: Option<String>,
	/// `"0"` unread, `"1"` archived, `"2"` pending deletion.
	pub status: Option<String>,
	/// Title resolved by the service.
	pub resolved_title: Option<String>,
	/// URL after redirects.
	pub resolved_url: Option<String>,
	/// First paragraph of text.
	pub excerpt: Option<String>,
	/// Word count.
	pub word_count: Option<String>,
	/// Save time in unix seconds.
	pub time_added: Option<String>,
	/// Tags keyed by name (complete detail only).
	#[serde(default)]
	pub tags: BTreeMap<String, Tag>,
}
impl Item {
	/// Whether the item is favorited.
	pub fn is_favorite(&self) -> bool {
		self.favorite.as_deref() == Some("1")
	}

	/// Whether the item is archived.
	pub fn is_archived(&self) -> bool {
		self.status.as_deref() == Some("1")
	}

	/// Save time, when present and well formed.
	pub fn time_added(&self) -> Option<OffsetDateTime> {
		let secs = self.time_added.as_deref()?.parse::<i64>().ok()?;

		OffsetDateTime::from_unix_timestamp(secs).ok()
	}

	/// Best available title.
	pub fn title(&self) -> Option<&str> {
		self.resolved_title
			.as_deref()
			.filter(|title| !title.is_empty())
			.or(self.given_title.as_deref())
	}
}

/// Tag attached to an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	/// Tag name.
	pub tag: String,
	/// Owning item.
	pub item_id: Option<String>,
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the user's items matching `query`.
	pub async fn retrieve(&self, query: &RetrieveQuery) -> Result<RetrieveResponse> {
		let url = self.config.endpoint("get")?;

		self.request_authenticated(&url, query.to_payload()).await
	}
}

// The service sends `[]` instead of `{}` when nothing matched.
fn item_list<'de, D>(deserializer: D) -> Result<BTreeMap<String, Item>, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(ItemListVisitor)
}

struct ItemListVisitor;
impl<'de> Visitor<'de> for ItemListVisitor {
	type Value = BTreeMap<String, Item>;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("an object or array of items")
	}

	fn visit_unit<E>(self) -> Result<Self::Value, E>
	where
		E: de::Error,
	{
		Ok(BTreeMap::new())
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut items = BTreeMap::new();

		while let Some((id, item)) = map.next_entry::<String, Item>()? {
			items.insert(id, item);
		}

		Ok(items)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = BTreeMap::new();

		while let Some(item) = seq.next_element::<Item>()? {
			items.insert(item.item_id.clone(), item);
		}

		Ok(items)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn query_maps_onto_wire_names() {
		let query = RetrieveQuery {
			state: Some(ItemState::Unread),
			favorite: Some(false),
			content_type: Some(ContentType::Article),
			detail_type: Some(DetailType::Complete),
			sort: Some(Sort::Newest),
			since: Some(datetime!(2021-10-28 12:00 UTC)),
			count: Some(10),
			offset: Some(20),
			..Default::default()
		};
		let payload = query.to_payload();

		assert_eq!(payload.get("state"), Some("unread"));
		assert_eq!(payload.get("favorite"), Some("0"));
		assert_eq!(payload.get("contentType"), Some("article"));
		assert_eq!(payload.get("detailType"), Some("complete"));
		assert_eq!(payload.get("sort"), Some("newest"));
		assert_eq!(payload.get("since"), Some("1635422400"));
		assert_eq!(payload.get("count"), Some("10"));
		assert_eq!(payload.get("offset"), Some("20"));
		assert_eq!(payload.get("tag"), None);
		assert!(RetrieveQuery::default().to_payload().is_empty());
	}

	#[test]
	fn empty_list_arrives_as_array() {
		let response: RetrieveResponse =
			serde_json::from_str(r#"{"status":2,"complete":1,"list":[],"since":1635422400}"#)
				.expect("Empty list fixture should decode.");

		assert_eq!(response.status, 2);
		assert!(response.list.is_empty());
		assert_eq!(response.since, Some(datetime!(2021-10-28 12:00 UTC)));
	}

	#[test]
	fn keyed_list_decodes_items() {
		let response: RetrieveResponse = serde_json::from_str(
			r#"{
				"status": 1,
				"complete": 1,
				"list": {
					"229279689": {
						"item_id": "229279689",
						"given_url": "http://www.grantland.com/blog/the-triangle/post/_/id/38347/ryder-cup-preview",
						"given_title": "The Massive Ryder Cup Preview",
						"favorite": "1",
						"status": "0",
						"resolved_title": "",
						"time_added": "1473020919",
						"tags": { "golf": { "item_id": "229279689", "tag": "golf" } }
					}
				},
				"since": null
			}"#,
		)
		.expect("Keyed list fixture should decode.");
		let item = &response.list["229279689"];

		assert!(item.is_favorite());
		assert!(!item.is_archived());
		assert_eq!(item.title(), Some("The Massive Ryder Cup Preview"));
		assert_eq!(item.time_added().map(OffsetDateTime::unix_timestamp), Some(1473020919));
		assert_eq!(item.tags["golf"].tag, "golf");
		assert_eq!(response.since, None);
	}

	#[test]
	fn malformed_item_reports_its_path() {
		let keyed = r#"{"status":1,"list":{"1":{"item_id":"1","favorite":1}}}"#;
		let err = serde_path_to_error::deserialize::<_, RetrieveResponse>(
			&mut serde_json::Deserializer::from_str(keyed),
		)
		.expect_err("A numeric favorite flag should not decode.");

		assert_eq!(err.path().to_string(), "list.1.favorite");

		let listed = r#"{"status":1,"list":[{"item_id":"1"},{"item_id":"2","tags":[]}]}"#;
		let err = serde_path_to_error::deserialize::<_, RetrieveResponse>(
			&mut serde_json::Deserializer::from_str(listed),
		)
		.expect_err("An array of tags should not decode.");

		assert_eq!(err.path().to_string(), "list[1].tags");
	}

	#[test]
	fn null_and_missing_lists_are_empty() {
		for body in [r#"{"status":2,"list":null}"#, r#"{"status":2}"#] {
			let response: RetrieveResponse =
				serde_json::from_str(body).expect("Absent list should decode.");

			assert!(response.list.is_empty());
		}
	}
}
