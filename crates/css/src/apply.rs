use crate::tree::{CssTree, NodeKind};
use crosswind_core::{NodeId, RegistryEntry};
use std::collections::HashMap;
use tracing::trace;

/// 将节点注册表的结果写回规则树
///
/// - 移除已转换的声明
/// - 在挂载位置插入 `@apply`（挂载选择器与原规则不同时，在原规则之后克隆一条新规则）
/// - 删除变空的规则和 at-rule
pub fn apply_classes<'a>(
    tree: &mut CssTree,
    entries: impl IntoIterator<Item = &'a RegistryEntry>,
    converted: &[NodeId],
) {
    for id in converted {
        tree.remove(*id);
    }

    let mut clones: HashMap<(NodeId, String), NodeId> = HashMap::new();
    // 每条原规则之后最近插入的克隆规则，保持克隆顺序
    let mut last_clone: HashMap<NodeId, NodeId> = HashMap::new();

    for entry in entries {
        if entry.classes.is_empty() {
            continue;
        }
        let placement = &entry.placement;
        let target = if tree.selector(placement.rule) == Some(placement.selector.as_str()) {
            placement.rule
        } else {
            let key = (placement.rule, placement.selector.clone());
            match clones.get(&key) {
                Some(id) => *id,
                None => {
                    let after = last_clone
                        .get(&placement.rule)
                        .copied()
                        .unwrap_or(placement.rule);
                    let id = tree.insert_after(after, NodeKind::rule(placement.selector.clone()));
                    clones.insert(key, id);
                    last_clone.insert(placement.rule, id);
                    id
                }
            }
        };

        trace!(key = %entry.key, selector = %placement.selector, "write @apply");
        tree.prepend(target, NodeKind::apply(&entry.classes));
    }

    prune_empty(tree);
}

/// 删除没有子节点的规则和带块 at-rule（自底向上）
pub fn prune_empty(tree: &mut CssTree) {
    let roots = tree.roots().to_vec();
    for root in roots {
        prune_node(tree, root);
    }
}

fn prune_node(tree: &mut CssTree, id: NodeId) {
    let children = tree.children(id).to_vec();
    for child in children {
        prune_node(tree, child);
    }
    let removable = match &tree.node(id).kind {
        NodeKind::Rule { .. } => true,
        NodeKind::AtRule { has_block, .. } => *has_block,
        NodeKind::Declaration(_) | NodeKind::Raw(_) => false,
    };
    if removable && tree.children(id).is_empty() {
        tree.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::{Declaration, Placement};
    use pretty_assertions::assert_eq;

    fn entry(key: &str, rule: NodeId, selector: &str, classes: &[&str]) -> RegistryEntry {
        RegistryEntry {
            key: key.to_string(),
            placement: Placement::new(rule, selector),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn apply_params(tree: &CssTree, rule: NodeId) -> Vec<String> {
        tree.children(rule)
            .iter()
            .filter_map(|child| match &tree.node(*child).kind {
                NodeKind::AtRule { name, params, .. } if name == "apply" => Some(params.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_apply_replaces_declarations() {
        let mut tree = CssTree::new();
        let foo = tree.push(None, NodeKind::rule(".foo"));
        let converted = tree.push(
            Some(foo),
            NodeKind::Declaration(Declaration::new("text-align", "center")),
        );
        tree.push(
            Some(foo),
            NodeKind::Declaration(Declaration::new("-webkit-x", "y")),
        );

        apply_classes(
            &mut tree,
            &[entry(".foo", foo, ".foo", &["text-center"])],
            &[converted],
        );

        assert_eq!(apply_params(&tree, foo), vec!["text-center".to_string()]);
        assert_eq!(tree.children(foo).len(), 2);
    }

    #[test]
    fn test_apply_clones_override_selector() {
        let mut tree = CssTree::new();
        let list = tree.push(None, NodeKind::rule(".a:hover, .b"));
        let decl = tree.push(
            Some(list),
            NodeKind::Declaration(Declaration::new("color", "red")),
        );

        apply_classes(
            &mut tree,
            &[
                entry(".a", list, ".a", &["hover:text-[red]"]),
                entry(".b", list, ".b", &["text-[red]"]),
            ],
            &[decl],
        );

        // 原规则变空被删除，只剩两条克隆
        assert_eq!(tree.roots().len(), 2);
        let selectors: Vec<_> = tree
            .roots()
            .iter()
            .filter_map(|id| tree.selector(*id))
            .collect();
        assert_eq!(selectors, vec![".a", ".b"]);
    }

    #[test]
    fn test_prune_empty_at_rules() {
        let mut tree = CssTree::new();
        let media = tree.push(None, NodeKind::at_rule("media", "print", true));
        tree.push(Some(media), NodeKind::rule(".a"));
        tree.push(None, NodeKind::at_rule("import", "\"x.css\"", false));

        prune_empty(&mut tree);
        assert_eq!(tree.roots().len(), 1);
    }
}
