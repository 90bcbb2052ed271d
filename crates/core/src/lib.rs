pub mod normalize;
pub mod reduce;
pub mod registry;
pub mod split;
pub mod types;

// Re-export commonly used types
pub use reduce::reduce_classes;
pub use registry::NodeRegistry;
pub use types::{
    node_key, render_prefix, Ancestor, Declaration, NodeId, Placement, RegistryEntry,
    TailwindNode, VariantKind, VariantToken,
};
