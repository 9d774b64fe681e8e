//! Common test utilities for spr-reword tests

pub mod fixtures;
pub mod mock_history;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_history::{FixedIds, MockHistory};
