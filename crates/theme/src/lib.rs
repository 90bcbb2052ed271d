pub mod config;
pub mod theme;
pub mod value_map;

// Re-export main types
pub use config::{load_config_from_json, ConfigError, ConverterConfig, CorePlugins};
pub use theme::ResolvedTheme;
pub use value_map::{CategoryKind, ThemeValueMap, ValueTable};
