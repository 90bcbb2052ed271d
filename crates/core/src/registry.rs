use crate::types::{Placement, RegistryEntry, TailwindNode};
use indexmap::IndexMap;
use tracing::trace;

/// 单次转换会话中的节点注册表
///
/// - 按结构键去重，保持首次创建的顺序（IndexMap）
/// - 类名按到达顺序追加，不去重
/// - 从不删除节点
#[derive(Debug, Default)]
pub struct NodeRegistry {
    entries: IndexMap<String, RegistryEntry>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_node(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    pub fn into_entries(self) -> Vec<RegistryEntry> {
        self.entries.into_values().collect()
    }

    /// 合并一个节点
    ///
    /// - `Resolved`：追加到同键节点，或新建
    /// - `Unresolved` 且依赖键已存在：每个类名加上前缀后追加
    /// - `Unresolved` 且依赖键不存在：在回退位置新建节点（类名不加前缀）。
    ///   之后才出现的依赖键不会再收回它。
    pub fn merge_node(&mut self, node: TailwindNode) {
        match node {
            TailwindNode::Resolved {
                key,
                placement,
                classes,
            } => self.append(key, placement, classes),
            TailwindNode::Unresolved {
                dependent_key,
                fallback_key,
                fallback,
                prefix,
                classes,
            } => {
                if let Some(entry) = self.entries.get_mut(&dependent_key) {
                    trace!(key = %dependent_key, %prefix, "dependent node found");
                    entry
                        .classes
                        .extend(classes.into_iter().map(|c| format!("{}{}", prefix, c)));
                } else {
                    trace!(key = %dependent_key, fallback = %fallback_key, "dependent node missing");
                    self.append(fallback_key, fallback, classes);
                }
            }
        }
    }

    pub fn merge_nodes(&mut self, nodes: impl IntoIterator<Item = TailwindNode>) {
        for node in nodes {
            self.merge_node(node);
        }
    }

    fn append(&mut self, key: String, placement: Placement, classes: Vec<String>) {
        match self.entries.get_mut(&key) {
            Some(entry) => entry.classes.extend(classes),
            None => {
                self.entries.insert(
                    key.clone(),
                    RegistryEntry {
                        key,
                        placement,
                        classes,
                    },
                );
            }
        }
    }
}
