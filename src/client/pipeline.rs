//! The request pipeline every API call goes through.
//!
//! [`Client::request`] serializes a [`Payload`], performs exactly one POST through the
//! transport, and turns the response into either the decoded `T` or an [`Error`].
//! [`Client::request_authenticated`] refuses to run without an access token and otherwise
//! signs the payload with the consumer key and access token before delegating.
//!
//! Each call resolves exactly once. Nothing is retried, cached, or logged-and-dropped: every
//! failure is returned to the caller.

// crates.io
use http::{
	HeaderMap, Method, StatusCode,
	header::{CONTENT_TYPE, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	client::Client,
	error::ConfigError,
	http::{ApiHttpClient, HttpRequest, X_ACCEPT, X_ERROR, X_ERROR_CODE},
	obs::{self, RequestKind, RequestOutcome, RequestSpan},
	payload::Payload,
};

const APPLICATION_JSON: &str = "application/json";

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Sends `payload` to `url` as-is and decodes a 200 response into `T`.
	///
	/// Non-200 responses are classified from their status and the `X-Error-Code` / `X-Error`
	/// headers; see [`Error::from_status`].
	pub async fn request<T>(&self, url: &Url, payload: Payload) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.observe(RequestKind::Public, url, self.send(url, payload)).await
	}

	/// Like [`request`](Self::request), but signs the payload with the consumer key and the
	/// current access token.
	///
	/// Fails with [`Error::NotAuthenticated`] before touching the transport when no token is
	/// set. The token is read once, when the call starts.
	pub async fn request_authenticated<T>(&self, url: &Url, payload: Payload) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.observe(RequestKind::Authenticated, url, async move {
			let signed = self.sign(payload)?;

			self.send(url, signed).await
		})
		.await
	}

	fn sign(&self, payload: Payload) -> Result<Payload> {
		let credentials = self.credentials.read();
		let token = credentials.access_token().ok_or(Error::NotAuthenticated)?;

		Ok(payload.authenticated(&self.consumer_key, token))
	}

	async fn send<T>(&self, url: &Url, payload: Payload) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = build_request(url, &payload)?;
		let response = self.http_client.execute(request).await.map_err(Error::network)?;
		let (parts, body) = response.into_parts();
		let body = body.ok_or(Error::UnsuccessfulResponse)?;

		if parts.status != StatusCode::OK {
			return Err(classify_error_response(parts.status, &parts.headers));
		}

		decode(&body)
	}

	async fn observe<T, Fut>(&self, kind: RequestKind, url: &Url, fut: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		let span = RequestSpan::new(kind, url.path());

		obs::record_request_outcome(kind, RequestOutcome::Attempt);

		let result = span.instrument(fut).await;

		match &result {
			Ok(_) => obs::record_request_outcome(kind, RequestOutcome::Success),
			Err(e) => {
				obs::record_request_outcome(kind, RequestOutcome::Failure);
				obs::record_request_error(kind, e);
			},
		}

		result
	}
}

fn build_request(url: &Url, payload: &Payload) -> Result<HttpRequest> {
	let body = payload.to_json()?;
	let request = http::Request::builder()
		.method(Method::POST)
		.uri(url.as_str())
		.header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
		.header(X_ACCEPT, HeaderValue::from_static(APPLICATION_JSON))
		.body(body)
		.map_err(ConfigError::from)?;

	Ok(request)
}

fn classify_error_response(status: StatusCode, headers: &HeaderMap) -> Error {
	// Anything but a bare integer counts as absent.
	let code = headers
		.get(X_ERROR_CODE)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.parse::<i64>().ok())
		.unwrap_or(0);
	let message = headers
		.get(X_ERROR)
		.map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
		.unwrap_or_default();

	Error::from_status(status.as_u16(), code, message)
}

fn decode<T>(body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let de = &mut serde_json::Deserializer::from_slice(body);

	Ok(serde_path_to_error::deserialize(de)?)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize, PartialEq)]
	struct Sample {
		status: u8,
		list: Vec<String>,
	}

	fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
		pairs
			.iter()
			.map(|&(name, value)| {
				(
					http::HeaderName::from_static(name),
					HeaderValue::from_static(value),
				)
			})
			.collect()
	}

	#[test]
	fn request_carries_json_headers() {
		let url = Url::parse("https://getpocket.com/v3/get").expect("Failed to parse test URL.");
		let request = build_request(&url, &Payload::from([("count", "10")]))
			.expect("Request construction should succeed.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://getpocket.com/v3/get");
		assert_eq!(request.headers()[CONTENT_TYPE], APPLICATION_JSON);
		assert_eq!(request.headers()[X_ACCEPT], APPLICATION_JSON);
		assert_eq!(request.body().as_slice(), br#"{"count":"10"}"#);
	}

	#[test]
	fn error_headers_default_when_missing_or_malformed() {
		let err = classify_error_response(StatusCode::BAD_REQUEST, &HeaderMap::new());

		assert!(matches!(err, Error::InvalidRequest { code: 0, ref message } if message.is_empty()));

		let err = classify_error_response(
			StatusCode::FORBIDDEN,
			&headers(&[("x-error-code", "abc"), ("x-error", "User was authenticated, but access denied")]),
		);

		assert!(matches!(
			err,
			Error::LackingPermission { code: 0, ref message }
				if message == "User was authenticated, but access denied"
		));

		let err = classify_error_response(
			StatusCode::UNAUTHORIZED,
			&headers(&[("x-error-code", " 138"), ("x-error", "Missing consumer key.")]),
		);

		assert!(matches!(err, Error::AuthenticationFailed { code: 0, .. }));
	}

	#[test]
	fn maintenance_ignores_error_headers() {
		let err = classify_error_response(
			StatusCode::SERVICE_UNAVAILABLE,
			&headers(&[("x-error-code", "199"), ("x-error", "Pocket server issue")]),
		);

		assert!(matches!(err, Error::ServerDownForMaintenance));
	}

	#[test]
	fn decode_reports_json_path() {
		let sample: Sample =
			decode(br#"{"status":1,"list":["a","b"]}"#).expect("Well-formed body should decode.");

		assert_eq!(sample, Sample { status: 1, list: vec!["a".into(), "b".into()] });

		let err = decode::<Sample>(br#"{"status":1,"list":["a",2]}"#)
			.expect_err("Schema mismatches should surface.");

		match err {
			Error::Decode { source } => assert_eq!(source.path().to_string(), "list[1]"),
			other => panic!("Expected a decode error, got {other:?}."),
		}
	}
}
