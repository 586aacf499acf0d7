// self
use crate::{
	_prelude::*,
	obs::{RequestKind, RequestOutcome},
};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(kind: RequestKind, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pocket_client_request_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records the failure class of a call via the global metrics recorder (when enabled).
pub fn record_request_error(kind: RequestKind, error: &Error) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pocket_client_request_error_total",
			"kind" => kind.as_str(),
			"error" => error.kind()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_request_outcome(RequestKind::Authenticated, RequestOutcome::Failure);
		record_request_error(RequestKind::Authenticated, &Error::NotAuthenticated);
	}
}
