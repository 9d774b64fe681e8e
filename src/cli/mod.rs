//! CLI command implementations

mod reword;

pub use reword::run_reword;
