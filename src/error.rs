//! Client-level error types shared by the request pipeline and every endpoint caller.
//!
//! [`Error`] is the full failure taxonomy. Remote failures are classified from the HTTP status
//! plus the service's `X-Error-Code` / `X-Error` headers via [`Error::from_status`]; local
//! failures (missing credentials, encoding, configuration) never reach the transport.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Outgoing payload could not be serialized.
	#[error("Request payload could not be encoded as JSON.")]
	Encode(#[source] serde_json::Error),
	/// A successful response carried a body that does not match the expected shape.
	#[error("Response body could not be decoded at `{}`.", .source.path())]
	Decode {
		/// Structured decoding failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},

	/// The transport failed before producing a response (DNS, TCP, TLS).
	#[error("Network error occurred while calling the service.")]
	Network {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
	/// The transport returned without a usable response body.
	#[error("Service returned no usable response.")]
	UnsuccessfulResponse,
	/// Status 400.
	#[error("Service rejected the request ({code}): {message}.")]
	InvalidRequest {
		/// Value of the `X-Error-Code` header.
		code: i64,
		/// Value of the `X-Error` header.
		message: String,
	},
	/// Status 401.
	#[error("Service rejected the credentials ({code}): {message}.")]
	AuthenticationFailed {
		/// Value of the `X-Error-Code` header.
		code: i64,
		/// Value of the `X-Error` header.
		message: String,
	},
	/// Status 403.
	#[error("Credentials lack permission for this action ({code}): {message}.")]
	LackingPermission {
		/// Value of the `X-Error-Code` header.
		code: i64,
		/// Value of the `X-Error` header.
		message: String,
	},
	/// Status 503.
	#[error("Service is down for maintenance.")]
	ServerDownForMaintenance,
	/// Any other non-200 status.
	#[error("Service responded with status {status} ({code}): {message}.")]
	ErrorResponse {
		/// HTTP status code.
		status: u16,
		/// Value of the `X-Error-Code` header.
		code: i64,
		/// Value of the `X-Error` header.
		message: String,
	},
	/// An authenticated call was attempted without an access token.
	#[error("Client has no access token.")]
	NotAuthenticated,
}
impl Error {
	/// Wraps a transport failure.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Classifies a non-200 response.
	///
	/// The mapping is total over `status`: 400, 401, 403, and 503 have dedicated variants and
	/// every other status lands in [`Error::ErrorResponse`]. `code` and `message` are passed
	/// through untouched (and dropped for 503).
	pub fn from_status(status: u16, code: i64, message: impl Into<String>) -> Self {
		let message = message.into();

		match status {
			400 => Self::InvalidRequest { code, message },
			401 => Self::AuthenticationFailed { code, message },
			403 => Self::LackingPermission { code, message },
			503 => Self::ServerDownForMaintenance,
			_ => Self::ErrorResponse { status, code, message },
		}
	}

	/// HTTP status attached to a remote failure, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::InvalidRequest { .. } => Some(400),
			Self::AuthenticationFailed { .. } => Some(401),
			Self::LackingPermission { .. } => Some(403),
			Self::ServerDownForMaintenance => Some(503),
			Self::ErrorResponse { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Service-issued error code, if any.
	pub fn code(&self) -> Option<i64> {
		match self {
			Self::InvalidRequest { code, .. }
			| Self::AuthenticationFailed { code, .. }
			| Self::LackingPermission { code, .. }
			| Self::ErrorResponse { code, .. } => Some(*code),
			_ => None,
		}
	}

	/// Service-issued error message, if any.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::InvalidRequest { message, .. }
			| Self::AuthenticationFailed { message, .. }
			| Self::LackingPermission { message, .. }
			| Self::ErrorResponse { message, .. } => Some(message),
			_ => None,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::Encode(_) => "encode",
			Self::Decode { .. } => "decode",
			Self::Network { .. } => "network",
			Self::UnsuccessfulResponse => "unsuccessful_response",
			Self::InvalidRequest { .. } => "invalid_request",
			Self::AuthenticationFailed { .. } => "authentication_failed",
			Self::LackingPermission { .. } => "lacking_permission",
			Self::ServerDownForMaintenance => "server_down_for_maintenance",
			Self::ErrorResponse { .. } => "error_response",
			Self::NotAuthenticated => "not_authenticated",
		}
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Decode { source }
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// An endpoint URL cannot be parsed or joined.
	#[error("The {endpoint} endpoint is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless explicitly relaxed.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// The base URL cannot carry relative paths (e.g. `data:` URLs).
	#[error("The {endpoint} endpoint cannot be used as a base URL: {url}.")]
	CannotBeABase {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
