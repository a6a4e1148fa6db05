//! Writes the mall catalog OpenAPI document without starting the server.
//!
//! ```bash
//! cargo run -p mall-api --bin generate_openapi --features openapi
//! cargo run -p mall-api --bin generate_openapi --features openapi -- out/openapi.json
//! ```

#[cfg(feature = "openapi")]
fn write_document(output_path: &std::path::Path) -> Result<usize, Box<dyn std::error::Error>> {
	use mall_api::openapi::ApiDoc;
	use utoipa::OpenApi;

	let doc = ApiDoc::openapi();
	if let Some(parent) = output_path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(output_path, doc.to_pretty_json()?)?;
	Ok(doc.paths.paths.len())
}

#[cfg(feature = "openapi")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
	let output_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "docs/api/openapi.json".to_string());

	let path_count = write_document(std::path::Path::new(&output_path))?;
	println!(
		"Wrote OpenAPI document with {} paths to {}",
		path_count, output_path
	);
	Ok(())
}

#[cfg(not(feature = "openapi"))]
fn main() {
	eprintln!("generate_openapi needs the 'openapi' feature:");
	eprintln!("  cargo run -p mall-api --bin generate_openapi --features openapi");
	std::process::exit(1);
}
