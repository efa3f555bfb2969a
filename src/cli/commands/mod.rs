//! CLI command implementations.

mod chunks;
mod clean;
mod config;
mod query;

pub use chunks::run_chunks;
pub use clean::run_clean;
pub use config::run_config;
pub use query::run_query;
