use crate::ast::raw_prelude;
use crosswind_core::{Ancestor, Declaration, NodeId};
use swc_css_ast::{AtRulePrelude, ComponentValue};

/// 节点内容
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Rule {
        selector: String,
    },
    AtRule {
        name: String,
        /// 头部参数的文本形式，用于祖先链和节点键
        params: String,
        /// 输出时使用的头部语法节点
        prelude: Option<Box<AtRulePrelude>>,
        /// `@import x;` 这类无块的 at-rule 为 false
        has_block: bool,
    },
    Declaration(Declaration),
    /// 原样输出的语法节点（如关键帧块）
    Raw(ComponentValue),
}

impl NodeKind {
    pub fn rule(selector: impl Into<String>) -> Self {
        NodeKind::Rule {
            selector: selector.into(),
        }
    }

    /// 以参数文本构造 at-rule
    pub fn at_rule(name: impl Into<String>, params: impl Into<String>, has_block: bool) -> Self {
        let params = params.into();
        NodeKind::AtRule {
            name: name.into(),
            prelude: raw_prelude(&params),
            params,
            has_block,
        }
    }

    /// `@apply a b c;`
    pub fn apply(classes: &[String]) -> Self {
        Self::at_rule("apply", classes.join(" "), false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CssNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// 规则树（节点池 + 下标引用）
///
/// 被移除的节点仍留在池中，只是不再挂在任何父节点下。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssTree {
    nodes: Vec<CssNode>,
    roots: Vec<NodeId>,
}

/// 供转换器读取的一条规则
#[derive(Debug, Clone, PartialEq)]
pub struct RuleView<'a> {
    pub id: NodeId,
    pub selector: &'a str,
    /// 由外到内
    pub ancestors: Vec<Ancestor>,
    pub declarations: Vec<(NodeId, &'a Declaration)>,
}

impl CssTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &CssNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    fn alloc(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(CssNode {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> &mut Vec<NodeId> {
        match parent {
            Some(parent) => &mut self.nodes[parent.0].children,
            None => &mut self.roots,
        }
    }

    /// 追加为最后一个子节点（`parent` 为空时追加到顶层）
    pub fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = self.alloc(parent, kind);
        self.siblings_mut(parent).push(id);
        id
    }

    /// 插入为第一个子节点
    pub fn prepend(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.alloc(Some(parent), kind);
        self.nodes[parent.0].children.insert(0, id);
        id
    }

    /// 紧跟在 `sibling` 之后插入
    pub fn insert_after(&mut self, sibling: NodeId, kind: NodeKind) -> NodeId {
        let parent = self.parent(sibling);
        let id = self.alloc(parent, kind);
        let siblings = self.siblings_mut(parent);
        let index = siblings
            .iter()
            .position(|s| *s == sibling)
            .map_or(siblings.len(), |i| i + 1);
        siblings.insert(index, id);
        id
    }

    /// 从父节点上摘除
    pub fn remove(&mut self, id: NodeId) {
        let parent = self.parent(id);
        self.siblings_mut(parent).retain(|child| *child != id);
    }

    /// 祖先链（由外到内）
    pub fn ancestors(&self, id: NodeId) -> Vec<Ancestor> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            match &self.node(parent).kind {
                NodeKind::Rule { selector } => ancestors.push(Ancestor::rule(selector.clone())),
                NodeKind::AtRule { name, params, .. } => {
                    ancestors.push(Ancestor::at_rule(name.clone(), params.clone()))
                }
                NodeKind::Declaration(_) | NodeKind::Raw(_) => {}
            }
            current = self.parent(parent);
        }
        ancestors.reverse();
        ancestors
    }

    /// 按文档顺序列出所有规则
    pub fn rules(&self) -> Vec<RuleView<'_>> {
        let mut rules = Vec::new();
        for root in &self.roots {
            self.collect_rules(*root, &mut rules);
        }
        rules
    }

    fn collect_rules<'a>(&'a self, id: NodeId, out: &mut Vec<RuleView<'a>>) {
        let node = self.node(id);
        if let NodeKind::Rule { selector } = &node.kind {
            let declarations = node
                .children
                .iter()
                .filter_map(|child| match &self.node(*child).kind {
                    NodeKind::Declaration(decl) => Some((*child, decl)),
                    _ => None,
                })
                .collect();
            out.push(RuleView {
                id,
                selector,
                ancestors: self.ancestors(id),
                declarations,
            });
        }
        for child in &node.children {
            self.collect_rules(*child, out);
        }
    }

    /// 规则的选择器（非规则节点返回 `None`）
    pub fn selector(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Rule { selector } => Some(selector),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ast::raw_ident;

    fn rule(selector: &str) -> NodeKind {
        NodeKind::rule(selector)
    }

    fn media(params: &str) -> NodeKind {
        NodeKind::at_rule("media", params, true)
    }

    #[test]
    fn test_rules_in_document_order() {
        let mut tree = CssTree::new();
        let foo = tree.push(None, rule(".foo"));
        tree.push(Some(foo), NodeKind::Declaration(Declaration::new("color", "red")));
        let at = tree.push(None, media("(min-width: 768px)"));
        let bar = tree.push(Some(at), rule(".bar"));

        let rules = tree.rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, foo);
        assert_eq!(rules[0].declarations.len(), 1);
        assert!(rules[0].ancestors.is_empty());
        assert_eq!(rules[1].id, bar);
        assert_eq!(
            rules[1].ancestors,
            vec![Ancestor::at_rule("media", "(min-width: 768px)")]
        );
    }

    #[test]
    fn test_insert_after_and_remove() {
        let mut tree = CssTree::new();
        let a = tree.push(None, rule(".a"));
        let c = tree.push(None, rule(".c"));
        let b = tree.insert_after(a, rule(".b"));
        assert_eq!(tree.roots(), &[a, b, c]);

        tree.remove(b);
        assert_eq!(tree.roots(), &[a, c]);
    }

    #[test]
    fn test_apply_node() {
        let NodeKind::AtRule {
            name,
            params,
            prelude,
            has_block,
        } = NodeKind::apply(&["hidden".to_string(), "md:block".to_string()])
        else {
            panic!("at-rule expected");
        };
        assert_eq!(name, "apply");
        assert_eq!(params, "hidden md:block");
        assert!(prelude.is_some());
        assert!(!has_block);
    }

    #[test]
    fn test_prepend() {
        let mut tree = CssTree::new();
        let a = tree.push(None, rule(".a"));
        let first = tree.push(
            Some(a),
            NodeKind::Raw(ComponentValue::Ident(Box::new(raw_ident("x")))),
        );
        let apply = tree.prepend(a, NodeKind::apply(&["block".to_string()]));
        assert_eq!(tree.children(a), &[apply, first]);
        assert_eq!(tree.parent(apply), Some(a));
    }
}
