pub mod context;
pub mod converter;
pub mod declaration;
pub mod keywords;
pub mod property;
pub mod selector;

// Re-export main types
pub use context::ContextResolver;
pub use converter::{ConversionOutput, ConvertError, Converter};
pub use declaration::DeclarationConverter;
pub use property::{Conversion, Property, TypeHint};
pub use selector::{DecomposedSelector, SelectorDecomposer};

pub use crosswind_core::RegistryEntry;
pub use crosswind_theme::{load_config_from_json, ConverterConfig};
