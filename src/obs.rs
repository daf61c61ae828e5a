//! Observability for adapter calls.
//!
//! Every public adapter operation runs through [`observe`], which wraps it in an
//! `oauth1_adapter.call` span (feature `tracing`) and counts its attempt and outcome in
//! `oauth1_adapter_call_total{call, outcome}` (feature `metrics`). Each transport round trip
//! adds a `debug` event via [`record_response`]. Without either feature everything compiles
//! down to plain `.await`s.

// self
use crate::{_prelude::*, request::Method};

/// Adapter operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// First leg: request-token fetch.
	RequestToken,
	/// Second leg: verifier exchange for an access token.
	AccessToken,
	/// Signed resource request.
	Resource,
}
impl CallKind {
	/// Stable label used for the `call` span field and metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::RequestToken => "request_token",
			CallKind::AccessToken => "access_token",
			CallKind::Resource => "resource",
		}
	}
}

/// Progress of a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// The call started.
	Attempt,
	/// The call returned `Ok`.
	Success,
	/// The call returned `Err`.
	Failure,
}
impl CallOutcome {
	/// Stable label used for the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}

/// Runs `call` as one observed adapter operation of the given kind.
pub async fn observe<V, F>(kind: CallKind, call: F) -> Result<V>
where
	F: Future<Output = Result<V>>,
{
	record(kind, CallOutcome::Attempt);

	#[cfg(feature = "tracing")]
	let result = {
		use tracing::Instrument;

		call.instrument(tracing::info_span!("oauth1_adapter.call", call = kind.as_str())).await
	};
	#[cfg(not(feature = "tracing"))]
	let result = call.await;

	match &result {
		Ok(_) => record(kind, CallOutcome::Success),
		Err(e) => {
			#[cfg(feature = "tracing")]
			{
				tracing::debug!(call = kind.as_str(), error = %e, "OAuth call failed.");
			}
			#[cfg(not(feature = "tracing"))]
			{
				let _ = e;
			}

			record(kind, CallOutcome::Failure);
		},
	}

	result
}

/// Notes one dispatched request and the status it came back with.
///
/// Only the method, URL, and status are recorded; credentials never reach the event.
pub fn record_response(method: Method, url: &Url, status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			method = method.as_str(),
			url = url.as_str(),
			status,
			"OAuth request completed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (method, url, status);
	}
}

fn record(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_adapter_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
