use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::{collect, health, malls};
use mall_types::{
	ClearResponse, CollectRequest, CollectResponse, HealthResponse, IngestMode, MallResponse,
	SortBy,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        malls::list_malls,
        malls::clear_malls,
        collect::post_collect,
        collect::post_collect_best,
        collect::get_collect_best,
    ),
    components(schemas(
        MallResponse, CollectRequest, CollectResponse, ClearResponse,
        HealthResponse, IngestMode, SortBy, ErrorResponse
    )),
    tags(
        (name = "malls", description = "Listing and clearing collected malls"),
        (name = "collect", description = "Keyword collection runs"),
        (name = "health", description = "Liveness endpoint")
    )
)]
pub struct ApiDoc;
