//! Template-based collection source
//!
//! Stands in for real storefront discovery: every keyword yields the same
//! fixed batch of storefronts, named by prefixing the keyword to a set of
//! shop-type suffixes.

use async_trait::async_trait;
use mall_types::{CandidateMall, CollectionSource, SourceError, SourceResult};
use tracing::debug;

pub const TEMPLATE_SOURCE_ID: &str = "template";
pub const DEFAULT_BASE_LINK: &str = "https://smartstore.naver.com";
const LOGO_BASE: &str = "https://via.placeholder.com/64?text=SHOP";

const NAME_SUFFIXES: [&str; 5] = [
	"Casual Womenswear Shop",
	"Knitwear Specialist",
	"Overseas Direct Select Shop",
	"Daily Look Mall",
	"Luxury Brand Select Shop",
];

/// Deterministic generator of five storefront candidates per keyword
#[derive(Debug, Clone)]
pub struct TemplateSource {
	base_link: String,
}

impl TemplateSource {
	pub fn new() -> Self {
		Self::with_base_link(DEFAULT_BASE_LINK)
	}

	pub fn with_base_link(base_link: impl Into<String>) -> Self {
		let base_link: String = base_link.into();
		Self {
			base_link: base_link.trim_end_matches('/').to_string(),
		}
	}

	/// Number of candidates produced per fetch
	pub fn batch_size(&self) -> usize {
		NAME_SUFFIXES.len()
	}

	pub fn base_link(&self) -> &str {
		&self.base_link
	}
}

impl Default for TemplateSource {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl CollectionSource for TemplateSource {
	fn id(&self) -> &str {
		TEMPLATE_SOURCE_ID
	}

	async fn fetch(&self, keyword: &str) -> SourceResult<Vec<CandidateMall>> {
		let keyword = keyword.trim();
		if keyword.is_empty() {
			return Err(SourceError::InvalidKeyword {
				source_id: TEMPLATE_SOURCE_ID.to_string(),
				reason: "keyword must not be empty".to_string(),
			});
		}

		let candidates: Vec<CandidateMall> = NAME_SUFFIXES
			.iter()
			.enumerate()
			.map(|(i, suffix)| {
				let n = i + 1;
				CandidateMall::new(format!("{} {}", keyword, suffix))
					.with_link(format!("{}/example{}", self.base_link, n))
					.with_logo_url(format!("{}{}", LOGO_BASE, n))
			})
			.collect();

		debug!(
			keyword,
			count = candidates.len(),
			"Generated template candidates"
		);
		Ok(candidates)
	}
}
