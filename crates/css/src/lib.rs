pub mod apply;
pub mod ast;
pub mod emit;
pub mod nesting;
pub mod parse;
pub mod tree;

// Re-export main functions
pub use apply::{apply_classes, prune_empty};
pub use emit::{emit_css, emit_css_with, to_stylesheet, EmitConfig, ToCss};
pub use nesting::{flatten_nesting, resolve_nested_selector};
pub use parse::{parse_css, parse_fragment, parse_rule_prelude, CssError};
pub use tree::{CssNode, CssTree, NodeKind, RuleView};
