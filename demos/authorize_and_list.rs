//! Walks through the authorization exchange and lists the newest unread items.
//!
//! 1. Set `POCKET_CONSUMER_KEY` to the application's consumer key.
//! 2. Optionally set `POCKET_ACCESS_TOKEN` to skip the browser step.
//! 3. Otherwise open the printed URL, approve the app, and press Enter.

// std
use std::{env, io};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use pocket_client::{
	api::{DetailType, ItemState, RetrieveQuery, Sort},
	auth::ConsumerKey,
	client::Client,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let consumer_key = env::var("POCKET_CONSUMER_KEY").wrap_err("POCKET_CONSUMER_KEY is not set")?;
	let client = Client::new(ConsumerKey::new(consumer_key));

	match env::var("POCKET_ACCESS_TOKEN") {
		Ok(token) => client.set_access_token(token),
		Err(_) => {
			let redirect_uri = Url::parse("https://localhost/pocket-client-demo")?;
			let request_token = client.obtain_request_token(&redirect_uri, None).await?;

			println!("Approve access at {}.", client.authorization_url(&request_token, &redirect_uri));
			println!("Press Enter once approved.");
			io::stdin().read_line(&mut String::new())?;

			let grant = client.obtain_access_token(&request_token).await?;

			println!(
				"Authorized as {}; store the access token to skip this step next time.",
				grant.username.as_deref().unwrap_or("<unknown>")
			);
			client.set_credentials(grant.into());
		},
	}

	let query = RetrieveQuery {
		state: Some(ItemState::Unread),
		sort: Some(Sort::Newest),
		detail_type: Some(DetailType::Simple),
		count: Some(10),
		..Default::default()
	};
	let response = client.retrieve(&query).await?;

	for item in response.list.values() {
		println!("{}: {}", item.item_id, item.title().unwrap_or("<untitled>"));
	}

	Ok(())
}
