//! Transport primitives for API calls.
//!
//! The module exposes [`ApiHttpClient`], the client's only dependency on an HTTP stack, along
//! with the header names the service protocol relies on. [`ReqwestHttpClient`] is the default
//! implementation behind the `reqwest` feature; tests and embedders can bring their own.

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, time::Duration as StdDuration};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Header declaring the response format the service should produce.
pub const X_ACCEPT: &str = "x-accept";
/// Response header carrying the service's numeric error code.
pub const X_ERROR_CODE: &str = "x-error-code";
/// Response header carrying the service's error message.
pub const X_ERROR: &str = "x-error";

/// Outgoing request handed to the transport.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Response produced by the transport; the body is `None` when none could be captured.
pub type HttpResponse = http::Response<Option<Vec<u8>>>;
/// Boxed future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing one API call.
///
/// Implementations perform exactly one round trip per [`execute`](ApiHttpClient::execute) and
/// never retry. Any HTTP status, including errors, is a successful transport outcome; the
/// `Err` branch is reserved for failures that produced no response at all (DNS, TCP, TLS,
/// timeouts). Implementations must be `Send + Sync + 'static` so a single transport can be
/// shared across clients behind an `Arc`.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves once with the response or the transport failure.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests fail once `timeout` elapses.
	///
	/// This is the only latency bound a call has; the client itself never cancels.
	pub fn with_timeout(timeout: StdDuration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(reqwest::Request::try_from(request)?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			// Headers arrived, so the exchange happened; a lost body is reported as a missing one.
			let body = match response.bytes().await {
				Ok(bytes) => Some(bytes.to_vec()),
				Err(_e) => {
					#[cfg(feature = "tracing")]
					tracing::debug!(error = %_e, "Response body could not be read.");

					None
				},
			};
			let mut response_new = HttpResponse::new(body);

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn timeout_client_builds() {
		ReqwestHttpClient::with_timeout(StdDuration::from_secs(5))
			.expect("A plain timeout should always build.");
	}
}
