use std::sync::Arc;

use crate::{AdviceError, CallRequest};

/// Opaque handle to a behavior wrapper invoked around an intercepted call.
///
/// Construction and execution live outside this core; the resolver only
/// selects and orders handles.
pub trait Interceptor: Send + Sync {}

/// An ordered sequence of interceptor handles, ascending by advice order.
///
/// Ties between equal orders keep their relative registration order.
/// Cloning is cheap; the resolver clones a chain on every cache hit.
#[derive(Clone, Default)]
pub struct InterceptorChain(Vec<Arc<dyn Interceptor>>);

impl InterceptorChain {
	/// Returns the number of interceptors in the chain.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no advice matched the request.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the handles in invocation order.
	pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Interceptor>> {
		self.0.iter()
	}
}

impl From<Vec<Arc<dyn Interceptor>>> for InterceptorChain {
	fn from(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
		Self(interceptors)
	}
}

impl IntoIterator for InterceptorChain {
	type Item = Arc<dyn Interceptor>;
	type IntoIter = std::vec::IntoIter<Arc<dyn Interceptor>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a InterceptorChain {
	type Item = &'a Arc<dyn Interceptor>;
	type IntoIter = std::slice::Iter<'a, Arc<dyn Interceptor>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl std::fmt::Debug for InterceptorChain {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InterceptorChain")
			.field("len", &self.0.len())
			.finish()
	}
}

/// A registered interception rule.
///
/// Pairs a match predicate over a request with a priority and a factory
/// producing an interceptor handle for a matching request. Immutable once
/// registered; registration order carries no meaning except as the
/// tie-breaker among equal priorities.
pub trait Advice<R: CallRequest>: Send + Sync {
	/// Priority of the produced interceptor; lower runs first.
	fn order(&self) -> i32;

	/// Whether the match outcome or produced interceptor may differ between
	/// calls to the same method. Dynamic advice suppresses all caching.
	fn is_dynamic(&self) -> bool {
		false
	}

	/// Whether this rule applies to the given request.
	fn matches(&self, request: &R) -> Result<bool, AdviceError>;

	/// Produces the interceptor handle for a matching request.
	///
	/// Invoked exactly once per match per evaluation. Handle construction
	/// is never cached on its own; only the evaluated chain is.
	fn interceptor(&self, request: &R) -> Result<Arc<dyn Interceptor>, AdviceError>;
}

type MatchFn<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;
type FactoryFn<R> = Box<dyn Fn(&R) -> Result<Arc<dyn Interceptor>, AdviceError> + Send + Sync>;

/// Closure-backed [`Advice`] implementation.
///
/// The ergonomic path for collaborators that do not need a named rule type:
/// a predicate, a factory, and an order, with [`FnAdvice::dynamic`] opting
/// into call-site-dependent semantics.
pub struct FnAdvice<R> {
	order: i32,
	dynamic: bool,
	matches: MatchFn<R>,
	factory: FactoryFn<R>,
}

impl<R: CallRequest> FnAdvice<R> {
	/// Creates static advice from a predicate and an interceptor factory.
	pub fn new(
		order: i32,
		matches: impl Fn(&R) -> bool + Send + Sync + 'static,
		factory: impl Fn(&R) -> Result<Arc<dyn Interceptor>, AdviceError> + Send + Sync + 'static,
	) -> Self {
		Self {
			order,
			dynamic: false,
			matches: Box::new(matches),
			factory: Box::new(factory),
		}
	}

	/// Marks the advice as call-site-dependent, which disables caching of
	/// every chain resolved after its registration.
	pub fn dynamic(mut self) -> Self {
		self.dynamic = true;
		self
	}
}

impl<R: CallRequest> Advice<R> for FnAdvice<R> {
	fn order(&self) -> i32 {
		self.order
	}

	fn is_dynamic(&self) -> bool {
		self.dynamic
	}

	fn matches(&self, request: &R) -> Result<bool, AdviceError> {
		Ok((self.matches)(request))
	}

	fn interceptor(&self, request: &R) -> Result<Arc<dyn Interceptor>, AdviceError> {
		(self.factory)(request)
	}
}
