//! Mall Catalog Server
//!
//! Main entry point for the catalog server

use mall_catalog::CatalogBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	CatalogBuilder::new().start_server().await
}
