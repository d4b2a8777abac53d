use crate::{Callable, CallableSource, DataSource, ResolvedValue, build_with};
use argbind_parser::ParameterList;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::trace;

/// Parsed parameter lists keyed by callable source text.
///
/// Safe to share between threads. When two threads parse the same source at
/// once, the first stored result wins.
///
/// Entries are never evicted automatically; the cache grows with every
/// distinct source it sees. Callers that feed it unbounded input own
/// eviction through [`remove`](Self::remove) and [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct SignatureCache {
    signatures: DashMap<String, Arc<ParameterList>, FxBuildHasher>,
}

impl SignatureCache {
    pub fn new() -> Self {
        SignatureCache::default()
    }

    /// The parsed parameter list of `source`.
    pub fn signature(&self, source: &str) -> Arc<ParameterList> {
        if let Some(hit) = self.signatures.get(source) {
            return Arc::clone(hit.value());
        }
        trace!(len = source.len(), "parsing callable source");
        let parsed = Arc::new(ParameterList::from_source(source));
        let entry = self
            .signatures
            .entry(source.to_string())
            .or_insert(parsed);
        Arc::clone(entry.value())
    }

    /// [`prepare`](crate::prepare), with the parameter list looked up here.
    pub fn prepare<C>(&self, callable: &C, data: impl Into<DataSource>) -> Vec<ResolvedValue>
    where
        C: CallableSource + ?Sized,
    {
        let data = data.into();
        if data.is_empty() {
            return Vec::new();
        }
        build_with(&self.signature(callable.source_text()), &data)
    }

    /// [`call`](crate::call), with the parameter list looked up here.
    pub fn call<C>(&self, callable: &C, data: impl Into<DataSource>) -> C::Output
    where
        C: Callable + ?Sized,
    {
        callable.invoke(self.prepare(callable, data))
    }

    /// Forget the parsed list of `source`, returning it if it was cached.
    pub fn remove(&self, source: &str) -> Option<Arc<ParameterList>> {
        self.signatures.remove(source).map(|(_, parameters)| parameters)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn clear(&self) {
        self.signatures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SOURCE: &str = "function (a, b) {}";

    #[test]
    fn parses_each_source_once() {
        let cache = SignatureCache::new();
        let first = cache.signature(SOURCE);
        let second = cache.signature(SOURCE);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.signature("x => x");
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn remove_evicts_one_source() {
        let cache = SignatureCache::new();
        let parsed = cache.signature(SOURCE);
        cache.signature("x => x");

        let removed = cache.remove(SOURCE).expect("cached");
        assert!(Arc::ptr_eq(&parsed, &removed));
        assert_eq!(cache.len(), 1);
        assert!(cache.remove(SOURCE).is_none());

        assert!(!Arc::ptr_eq(&parsed, &cache.signature(SOURCE)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn prepare_matches_uncached_prepare() {
        let cache = SignatureCache::new();
        let data = json!({ "b": 2, "a": 1, "c": 3 });
        assert_eq!(
            cache.prepare(SOURCE, data.clone()),
            crate::prepare(SOURCE, data)
        );
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(SignatureCache::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.prepare(SOURCE, json!({ "a": i, "b": 0 })))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let arguments = handle.join().unwrap();
            assert_eq!(arguments[0], ResolvedValue::from(json!(i)));
        }
        assert_eq!(cache.len(), 1);
    }
}
