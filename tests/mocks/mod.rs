//! Shared test fixtures

pub mod sources;
pub mod test_server;

#[allow(unused_imports)]
pub use sources::{FailingSource, FixedSource};
#[allow(unused_imports)]
pub use test_server::TestServer;
