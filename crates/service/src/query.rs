//! Query engine: read-only filter and sort over a store snapshot

use std::cmp::Ordering;

use mall_types::{MallRecord, SortBy};

/// Produce the filtered, ordered view of `records`.
///
/// A present, non-empty `keyword_filter` keeps records whose name or source
/// keyword contains it, compared after Unicode lowercasing. Sorting is stable,
/// so ties keep insertion order. Name order is plain code-point order.
pub fn query(
	records: &[MallRecord],
	keyword_filter: Option<&str>,
	sort_by: SortBy,
) -> Vec<MallRecord> {
	let mut view: Vec<MallRecord> = match keyword_filter.filter(|k| !k.is_empty()) {
		Some(filter) => {
			let needle = filter.to_lowercase();
			records
				.iter()
				.filter(|r| r.matches_lowercase(&needle))
				.cloned()
				.collect()
		},
		None => records.to_vec(),
	};

	view.sort_by(|a, b| compare(sort_by, a, b));
	view
}

fn compare(sort_by: SortBy, a: &MallRecord, b: &MallRecord) -> Ordering {
	match sort_by {
		SortBy::Recent => b.collected_at.cmp(&a.collected_at),
		SortBy::Oldest => a.collected_at.cmp(&b.collected_at),
		SortBy::Name => a.name.cmp(&b.name),
	}
}
