use crate::AdviceError;

/// Stable identity of an interceptable method.
///
/// Used both for matching and as the cache key. Equality and hash must be
/// consistent across repeated calls to the same method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(u64);

impl MethodId {
	/// Creates an identity from a raw handle value.
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the underlying raw value.
	#[inline]
	pub fn as_u64(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for MethodId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "MethodId({})", self.0)
	}
}

/// Descriptor of an intercepted call.
///
/// Implementations expose a stable identity for the target method. Identity
/// extraction may fail; that failure aborts resolution before the cache is
/// touched.
pub trait CallRequest {
	/// Returns the stable identity of the intercepted method.
	fn method_id(&self) -> Result<MethodId, AdviceError>;
}
