//! Concurrent resolution cache for interception advice.
//!
//! [`AdviceResolver`] sits in front of an [`AdviceSet`] and caches the
//! evaluated interceptor chain per method identity, so repeated calls to
//! the same method do not re-evaluate every registered rule. Caching is
//! suppressed entirely once any dynamic advice exists: a dynamic rule's
//! match outcome or produced interceptor may legitimately differ between
//! calls to the same method, so no shared decision can stand in for it.
//!
//! The resolver is the only component exposed to the interception
//! pipeline; collaborators register [`Advice`] through it and present a
//! [`CallRequest`] per intercepted invocation.

mod resolver;

pub use resolver::AdviceResolver;
pub use waylay_advice::{
	Advice, AdviceError, AdviceSet, CallRequest, FnAdvice, Interceptor, InterceptorChain, MethodId,
};
