//! Core mall record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{MallValidationError, MallValidationResult};
pub use request::{CollectRequest, ListMallsQuery};
pub use response::{ClearResponse, CollectResponse, HealthResponse, MallResponse};

/// One discovered storefront held by the record store.
///
/// Records are only ever created by an ingestion run and are never updated in
/// place afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MallRecord {
	/// Store-assigned identifier, unique among live records
	pub id: u64,

	/// Display label, never empty
	pub name: String,

	/// Keyword of the collection run that produced this record
	pub source_keyword: Option<String>,

	/// Storefront URL
	pub link: Option<String>,

	/// Logo image URL
	pub logo_url: Option<String>,

	/// Ingestion time, shared by every record of the same run
	pub collected_at: DateTime<Utc>,
}

impl MallRecord {
	/// Case-insensitive substring match against the name and source keyword.
	///
	/// `needle_lower` must already be lowercased.
	pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
		if self.name.to_lowercase().contains(needle_lower) {
			return true;
		}
		self.source_keyword
			.as_deref()
			.map(|k| k.to_lowercase().contains(needle_lower))
			.unwrap_or(false)
	}
}

/// Fields a collection source produces for a single record before the store
/// assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMall {
	pub name: String,
	pub link: Option<String>,
	pub logo_url: Option<String>,
}

impl CandidateMall {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			link: None,
			logo_url: None,
		}
	}

	pub fn with_link(mut self, link: impl Into<String>) -> Self {
		self.link = Some(link.into());
		self
	}

	pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
		self.logo_url = Some(logo_url.into());
		self
	}

	/// Build the stored record for this candidate
	pub fn into_record(self, id: u64, keyword: &str, collected_at: DateTime<Utc>) -> MallRecord {
		MallRecord {
			id,
			name: self.name,
			source_keyword: Some(keyword.to_string()),
			link: self.link,
			logo_url: self.logo_url,
			collected_at,
		}
	}
}

/// How an ingestion run merges into the existing records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
	/// Discard the current records and renumber the new batch from 1
	#[default]
	Replace,
	/// Keep the current records and number the new batch from the running counter
	Append,
}

impl IngestMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Replace => "replace",
			Self::Append => "append",
		}
	}
}

impl fmt::Display for IngestMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for IngestMode {
	type Err = MallValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"replace" => Ok(Self::Replace),
			"append" => Ok(Self::Append),
			_ => Err(MallValidationError::InvalidIngestMode {
				value: s.to_string(),
			}),
		}
	}
}

/// Presentation order for listed records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
	/// Newest `collected_at` first
	#[default]
	Recent,
	/// Oldest `collected_at` first
	Oldest,
	/// Ascending by name in code-point order
	Name,
}

impl SortBy {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Recent => "recent",
			Self::Oldest => "oldest",
			Self::Name => "name",
		}
	}
}

impl fmt::Display for SortBy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortBy {
	type Err = MallValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"" | "recent" => Ok(Self::Recent),
			"oldest" => Ok(Self::Oldest),
			"name" => Ok(Self::Name),
			_ => Err(MallValidationError::InvalidSortBy {
				value: s.to_string(),
			}),
		}
	}
}
