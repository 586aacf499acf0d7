//! Optional observability helpers for the request pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every call inside a `pocket_client.request` span carrying the `kind`
//!   (public or authenticated) and `path` (request URL path) fields.
//! - Enable `metrics` to increment `pocket_client_request_total` for every attempt/success/failure,
//!   labeled by `kind` + `outcome`, and `pocket_client_request_error_total`, labeled by `kind` +
//!   `error` (see [`Error::kind`]).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Pipeline entry points observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// Calls that carry only what the caller supplied.
	Public,
	/// Calls signed with the consumer key and access token.
	Authenticated,
}
impl RequestKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestKind::Public => "public",
			RequestKind::Authenticated => "authenticated",
		}
	}
}
impl Display for RequestKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to the pipeline.
	Attempt,
	/// Decoded response returned to the caller.
	Success,
	/// Failure returned to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
