//! Collection sources with scripted behaviour

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mall_catalog::async_trait::async_trait;
use mall_catalog::{CandidateMall, CollectionSource, SourceError, SourceResult};

/// Returns one candidate per configured suffix, named `"{keyword} {suffix}"`
#[derive(Debug, Clone)]
pub struct FixedSource {
	suffixes: Vec<String>,
	calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FixedSource {
	pub fn new(suffixes: &[&str]) -> Self {
		Self {
			suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl CollectionSource for FixedSource {
	fn id(&self) -> &str {
		"fixed"
	}

	async fn fetch(&self, keyword: &str) -> SourceResult<Vec<CandidateMall>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self
			.suffixes
			.iter()
			.map(|s| CandidateMall::new(format!("{} {}", keyword, s)))
			.collect())
	}
}

/// Always reports the upstream as unavailable
#[derive(Debug, Clone, Default)]
pub struct FailingSource;

#[async_trait]
impl CollectionSource for FailingSource {
	fn id(&self) -> &str {
		"failing"
	}

	async fn fetch(&self, _keyword: &str) -> SourceResult<Vec<CandidateMall>> {
		Err(SourceError::Unavailable {
			source_id: "failing".to_string(),
			reason: "upstream offline".to_string(),
		})
	}
}
