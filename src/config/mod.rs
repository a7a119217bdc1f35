mod loader;
mod merge;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult,
    PROJECT_ROOT_MARKER, RealFileSystem,
};
pub use merge::resolve_rule_key;
pub use model::{Config, DEFAULT_PATH, DEFAULT_THRESHOLD, PartialConfig, PathList, RuleConfig};
