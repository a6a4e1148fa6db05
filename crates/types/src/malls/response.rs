//! Response models for the mall API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IngestMode, MallRecord};

/// A mall record as returned by `GET /api/malls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MallResponse {
	pub id: u64,
	pub name: String,
	pub keyword: Option<String>,
	pub link: Option<String>,
	pub logo_url: Option<String>,
	pub collected_at: DateTime<Utc>,
}

impl From<&MallRecord> for MallResponse {
	fn from(record: &MallRecord) -> Self {
		Self {
			id: record.id,
			name: record.name.clone(),
			keyword: record.source_keyword.clone(),
			link: record.link.clone(),
			logo_url: record.logo_url.clone(),
			collected_at: record.collected_at,
		}
	}
}

impl From<MallRecord> for MallResponse {
	fn from(record: MallRecord) -> Self {
		Self {
			id: record.id,
			name: record.name,
			keyword: record.source_keyword,
			link: record.link,
			logo_url: record.logo_url,
			collected_at: record.collected_at,
		}
	}
}

/// Summary of a collection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CollectResponse {
	pub ok: bool,
	/// Records held by the store after the run
	pub count: usize,
	/// Records inserted by the run
	pub added: usize,
	pub keyword: String,
	pub mode: IngestMode,
	pub collected_at: DateTime<Utc>,
}

/// Confirmation of a clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClearResponse {
	pub ok: bool,
	pub message: String,
	pub removed: usize,
}

impl ClearResponse {
	pub fn new(removed: usize) -> Self {
		Self {
			ok: true,
			message: "All malls have been deleted.".to_string(),
			removed,
		}
	}
}

/// Body of the liveness endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
	pub status: String,
	pub time: DateTime<Utc>,
}

impl HealthResponse {
	pub fn ok() -> Self {
		Self {
			status: "ok".to_string(),
			time: Utc::now(),
		}
	}
}
