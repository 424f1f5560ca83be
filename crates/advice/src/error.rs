use thiserror::Error;

/// Errors surfaced while resolving advice for an intercepted call.
///
/// Every variant originates in a collaborator (the request descriptor or a
/// registered rule) and is propagated unchanged; the core itself has no
/// failure modes and never retries, suppresses, or caches a failure.
#[derive(Error, Debug, Clone)]
pub enum AdviceError {
	/// The request descriptor could not yield a stable method identity.
	#[error("no stable method identity: {0}")]
	Identity(String),
	/// An advice match predicate failed.
	#[error("match predicate failed: {0}")]
	Predicate(String),
	/// An interceptor factory failed for a matched rule.
	#[error("interceptor factory failed: {0}")]
	Factory(String),
}
