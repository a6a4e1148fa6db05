//! Test server for integration tests

use mall_catalog::{CatalogBuilder, CollectionSource, Settings};
use tokio::task::JoinHandle;

/// Running server bound to an ephemeral local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a test server with default settings and the template source
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_settings(Settings::default()).await
	}

	pub async fn spawn_with_settings(
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = CatalogBuilder::new()
			.with_settings(settings)
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	pub async fn spawn_with_source<C>(
		settings: Settings,
		source: C,
	) -> Result<Self, Box<dyn std::error::Error>>
	where
		C: CollectionSource + 'static,
	{
		let (app, _state) = CatalogBuilder::new()
			.with_settings(settings)
			.with_source(source)
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(
		app: axum::Router,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		Ok(Self { base_url, handle })
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}
