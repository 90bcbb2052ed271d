//! Nesting flattener.
//!
//! Rewrites nested rules into top-level rules with fully resolved selectors,
//! and bubbles at-rules nested in a style rule out of it, re-wrapping the
//! parent selector inside.

use crate::tree::{CssTree, NodeKind};
use crosswind_core::split::split_selector_list;
use crosswind_core::NodeId;

/// 展开嵌套规则，返回新的规则树
pub fn flatten_nesting(tree: &CssTree) -> CssTree {
    let mut out = CssTree::new();
    for root in tree.roots() {
        flatten_node(tree, *root, None, None, &mut out);
    }
    out
}

fn flatten_node(
    src: &CssTree,
    id: NodeId,
    parent_selector: Option<&str>,
    out_parent: Option<NodeId>,
    out: &mut CssTree,
) {
    let node = src.node(id);
    match &node.kind {
        NodeKind::Rule { selector } => {
            let selector = match parent_selector {
                Some(parent) => resolve_nested_selector(selector, parent),
                None => selector.clone(),
            };
            let rule = out.push(out_parent, NodeKind::rule(selector.clone()));
            // 嵌套规则紧跟在父规则之后
            for child in &node.children {
                match &src.node(*child).kind {
                    NodeKind::Rule { .. } | NodeKind::AtRule { .. } => {
                        flatten_node(src, *child, Some(&selector), out_parent, out)
                    }
                    kind => {
                        out.push(Some(rule), kind.clone());
                    }
                }
            }
        }
        NodeKind::AtRule { .. } => {
            let at_rule = out.push(out_parent, node.kind.clone());
            let mut wrapper: Option<NodeId> = None;
            for child in &node.children {
                match &src.node(*child).kind {
                    NodeKind::Rule { .. } | NodeKind::AtRule { .. } => {
                        flatten_node(src, *child, parent_selector, Some(at_rule), out)
                    }
                    kind => match parent_selector {
                        Some(selector) => {
                            let target = *wrapper
                                .get_or_insert_with(|| out.push(Some(at_rule), NodeKind::rule(selector)));
                            out.push(Some(target), kind.clone());
                        }
                        None => {
                            out.push(Some(at_rule), kind.clone());
                        }
                    },
                }
            }
        }
        kind => {
            out.push(out_parent, kind.clone());
        }
    }
}

/// 解析嵌套选择器
///
/// 含 `&` 的子选择器用父选择器替换 `&`，否则以后代关系拼接；
/// 选择器列表两两组合。
///
/// ```
/// use crosswind_css::nesting::resolve_nested_selector;
///
/// assert_eq!(resolve_nested_selector("&:hover", ".a, .b"), ".a:hover, .b:hover");
/// assert_eq!(resolve_nested_selector("span", ".a"), ".a span");
/// ```
pub fn resolve_nested_selector(child: &str, parent: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);
    let mut resolved = Vec::with_capacity(parents.len() * children.len());
    for parent in &parents {
        for child in &children {
            if child.contains('&') {
                resolved.push(child.replace('&', parent));
            } else {
                resolved.push(format!("{} {}", parent, child));
            }
        }
    }
    resolved.join(", ")
}
