use serde::{Deserialize, Serialize};

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"），不含 `!important`
    pub value: String,
    /// 是否带有 `!important`
    #[serde(default)]
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// 规则树节点句柄
///
/// 由 CSS 树的持有方分配，核心只做透传。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// 规则的祖先（由外到内）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ancestor {
    /// `@name params { ... }`
    AtRule { name: String, params: String },
    /// 嵌套 CSS 中的外层规则
    Rule { selector: String },
}

impl Ancestor {
    pub fn at_rule(name: impl Into<String>, params: impl Into<String>) -> Self {
        Ancestor::AtRule {
            name: name.into(),
            params: params.into(),
        }
    }

    pub fn rule(selector: impl Into<String>) -> Self {
        Ancestor::Rule {
            selector: selector.into(),
        }
    }

    fn key_segment(&self) -> String {
        match self {
            Ancestor::AtRule { name, params } => format!("a({}|{})", name, params),
            Ancestor::Rule { selector } => format!("r({})", selector),
        }
    }
}

/// 构造节点的结构键
///
/// 祖先片段由外到内拼接，最后是规则自身的选择器：
/// `a(media|(min-width: 768px))__r(.foo)__.bar`
pub fn node_key(ancestors: &[Ancestor], selector: &str) -> String {
    let mut segments: Vec<String> = ancestors.iter().map(Ancestor::key_segment).collect();
    segments.push(selector.to_string());
    segments.join("__")
}

/// 变体来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    /// 伪类 / 伪元素（`hover`、`before`）
    Pseudo,
    /// `aria-*` / `data-*` 属性选择器
    AriaData,
    /// `@media`
    Media,
    /// `@supports`
    Supports,
}

/// 单个变体前缀
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantToken {
    pub kind: VariantKind,
    pub name: String,
}

impl VariantToken {
    pub fn new(kind: VariantKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// 渲染为 `{name}{separator}`
    pub fn render(&self, separator: &str) -> String {
        format!("{}{}", self.name, separator)
    }
}

/// 将变体序列渲染为类名前缀（按顺序拼接）
pub fn render_prefix(tokens: &[VariantToken], separator: &str) -> String {
    tokens.iter().map(|t| t.render(separator)).collect()
}

/// 类名挂载位置
///
/// `selector` 与规则自身选择器不同时，表示需要以该选择器克隆出一条新规则。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub rule: NodeId,
    pub selector: String,
}

impl Placement {
    pub fn new(rule: NodeId, selector: impl Into<String>) -> Self {
        Self {
            rule,
            selector: selector.into(),
        }
    }
}

/// 单条规则的转换结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailwindNode {
    /// 已确定挂载位置
    Resolved {
        key: String,
        placement: Placement,
        classes: Vec<String>,
    },
    /// 依赖另一个节点：找到 `dependent_key` 时以 `prefix` 追加，
    /// 否则在 `fallback` 处新建节点
    Unresolved {
        dependent_key: String,
        fallback_key: String,
        fallback: Placement,
        prefix: String,
        classes: Vec<String>,
    },
}

/// 注册表中的一个节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub key: String,
    pub placement: Placement,
    pub classes: Vec<String>,
}
