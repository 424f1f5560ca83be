use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use crate::{Advice, AdviceError, CallRequest, InterceptorChain};


/// Append-only collection of registered advice rules.
///
/// Rules are never removed or mutated once registered. The dynamic latch is
/// sticky: once any dynamic advice has been seen it stays set for the
/// lifetime of the set, regardless of what is registered afterwards.
pub struct AdviceSet<R: CallRequest> {
	rules: RwLock<Vec<Arc<dyn Advice<R>>>>,
	has_dynamic: AtomicBool,
}

impl<R: CallRequest> Default for AdviceSet<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: CallRequest> AdviceSet<R> {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self {
			rules: RwLock::new(Vec::new()),
			has_dynamic: AtomicBool::new(false),
		}
	}

	/// Appends a rule. Safe to call concurrently with [`AdviceSet::evaluate`].
	///
	/// The latch is raised before the rule becomes visible, so no evaluation
	/// that observes a dynamic rule can still read the latch as unset.
	pub fn register(&self, advice: Arc<dyn Advice<R>>) {
		if advice.is_dynamic() {
			self.has_dynamic.store(true, Ordering::SeqCst);
		}
		let mut rules = self.rules.write();
		rules.push(advice);
		debug!(rules = rules.len(), "advice registered");
	}

	/// Evaluates the matching rules for a request, in priority order.
	///
	/// Matches are stable-sorted ascending by [`Advice::order`], so rules
	/// with equal order keep their relative registration order. Each matched
	/// rule's factory runs exactly once per evaluation. Predicate and
	/// factory errors propagate unchanged.
	pub fn evaluate(&self, request: &R) -> Result<InterceptorChain, AdviceError> {
		// Snapshot the list so collaborator predicates and factories run
		// outside the lock; a slow rule must not stall registration.
		let rules = self.rules.read().clone();

		let mut matched = Vec::new();
		for rule in rules {
			if rule.matches(request)? {
				matched.push(rule);
			}
		}

		matched.sort_by_key(|rule| rule.order());

		let mut chain = Vec::with_capacity(matched.len());
		for rule in &matched {
			chain.push(rule.interceptor(request)?);
		}
		Ok(InterceptorChain::from(chain))
	}

	/// True once any dynamic advice has ever been registered.
	pub fn has_dynamic_advice(&self) -> bool {
		self.has_dynamic.load(Ordering::SeqCst)
	}

	/// Number of registered rules.
	pub fn len(&self) -> usize {
		self.rules.read().len()
	}

	/// Returns true if no rules have been registered.
	pub fn is_empty(&self) -> bool {
		self.rules.read().is_empty()
	}
}
