//! Advice rule model and the append-only [`AdviceSet`].
//!
//! This crate provides the leaf types of the interception core:
//! - [`Advice`]: a rule pairing a match predicate with an interceptor factory and a priority
//! - [`AdviceSet`]: the append-only rule collection with the sticky dynamic latch
//! - [`InterceptorChain`]: the ordered result of evaluating a request against the set
//! - [`CallRequest`]: the request descriptor collaborators implement
//!
//! Interceptor construction and execution live outside this crate; an
//! [`Interceptor`] here is an opaque handle that the resolver selects and
//! orders, nothing more.

mod error;
mod request;
mod rule;
mod set;

pub use error::AdviceError;
pub use request::{CallRequest, MethodId};
pub use rule::{Advice, FnAdvice, Interceptor, InterceptorChain};
pub use set::AdviceSet;
