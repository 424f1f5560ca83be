use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};
use waylay_advice::{Advice, AdviceError, AdviceSet, CallRequest, InterceptorChain, MethodId};


/// Concurrent cache in front of [`AdviceSet`] evaluation.
///
/// The cache map and its lock are created once per resolver and live for
/// the resolver's lifetime. After warm-up the hot path is a shared read;
/// only the transition from uncached to cached takes the lock exclusively,
/// and only while no dynamic advice exists.
pub struct AdviceResolver<R: CallRequest> {
	advice: AdviceSet<R>,
	cache: RwLock<FxHashMap<MethodId, InterceptorChain>>,
}

impl<R: CallRequest> Default for AdviceResolver<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: CallRequest> AdviceResolver<R> {
	/// Creates an empty resolver.
	pub fn new() -> Self {
		Self {
			advice: AdviceSet::new(),
			cache: RwLock::new(FxHashMap::default()),
		}
	}

	/// Registers a rule.
	///
	/// Registering dynamic advice invalidates every cached chain. The
	/// sticky latch is raised before the wipe, so a lookup racing with the
	/// registration either observes the latch and skips its insert, or
	/// inserts first and has the entry removed by the wipe.
	pub fn register(&self, advice: Arc<dyn Advice<R>>) {
		let dynamic = advice.is_dynamic();
		self.advice.register(advice);
		if dynamic {
			let mut cache = self.cache.write();
			let evicted = cache.len();
			cache.clear();
			info!(evicted, "dynamic advice registered; chain cache cleared");
		}
	}

	/// Computes the ordered interceptor chain for an intercepted call.
	///
	/// A cache hit returns the previously evaluated chain without invoking
	/// any predicate or factory. A miss evaluates the advice set and stores
	/// the result only while no dynamic advice exists; with dynamic advice
	/// present every call re-evaluates from scratch. A failed evaluation is
	/// propagated unchanged and never cached.
	pub fn resolve(&self, request: &R) -> Result<InterceptorChain, AdviceError> {
		let method = request.method_id()?;

		// Warm hits share a plain read guard; they contend with nothing
		// but a write in progress.
		{
			let cache = self.cache.read();
			if let Some(chain) = cache.get(&method) {
				trace!(%method, "chain cache hit");
				return Ok(chain.clone());
			}
		}

		// Misses serialize on the upgradable guard, so a cold-start race
		// on one method evaluates exactly once. The guard admits plain
		// readers, so hits for other methods keep flowing while an
		// evaluation is in flight. Re-check the key: a racing miss may
		// have filled it while we waited.
		let cache = self.cache.upgradable_read();
		if let Some(chain) = cache.get(&method) {
			trace!(%method, "chain filled by racing miss");
			return Ok(chain.clone());
		}

		let chain = self.advice.evaluate(request)?;

		// Latch check and insert happen under the same guard; a dynamic
		// registration cannot slip between them and leave a stale entry.
		if !self.advice.has_dynamic_advice() {
			let mut cache = RwLockUpgradableReadGuard::upgrade(cache);
			cache.insert(method, chain.clone());
			debug!(%method, interceptors = chain.len(), "chain cached");
		}

		Ok(chain)
	}

	/// True once any dynamic advice has ever been registered.
	pub fn has_dynamic_advice(&self) -> bool {
		self.advice.has_dynamic_advice()
	}

	/// Number of registered rules.
	pub fn advice_count(&self) -> usize {
		self.advice.len()
	}

	#[cfg(test)]
	fn cached_entries(&self) -> usize {
		self.cache.read().len()
	}
}
