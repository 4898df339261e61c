//! Application context and path resolution.

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
