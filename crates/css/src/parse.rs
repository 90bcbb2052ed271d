use crate::emit::ToCss;
use crate::tree::{CssTree, NodeKind};
use crosswind_core::{Declaration, NodeId};
use swc_common::{input::StringInput, sync::Lrc, FileName, SourceFile, SourceMap, Spanned};
use swc_css_ast::{
    AtRule, AtRuleName, ComponentValue, Declaration as SwcDeclaration, DeclarationName,
    ListOfComponentValues, QualifiedRule, QualifiedRulePrelude, RelativeSelectorList, Rule,
    SelectorList, SimpleBlock, Stylesheet, Token,
};
use swc_css_parser::{lexer::Lexer, parse_file, parser::Parser, parser::ParserConfig, Parse};
use tracing::{debug, trace};

/// 样式表解析 / 生成错误
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("failed to parse CSS: {0}")]
    Parse(String),
    #[error("failed to generate CSS")]
    Emit(#[from] std::fmt::Error),
}

fn source_file(name: &str, source: &str) -> Lrc<SourceFile> {
    let cm: Lrc<SourceMap> = Default::default();
    cm.new_source_file(
        FileName::Custom(name.into()).into(),
        source.to_string(),
    )
}

/// 将 CSS 文本解析为规则树
///
/// 解析器收集到的任何错误都视为失败。
pub fn parse_css(source: &str) -> Result<CssTree, CssError> {
    if source.trim().is_empty() {
        return Ok(CssTree::new());
    }

    let fm = source_file("input.css", source);
    let mut errors = vec![];
    let stylesheet: Stylesheet = parse_file(&fm, None, ParserConfig::default(), &mut errors)
        .map_err(|e| CssError::Parse(format!("{:?}", e)))?;

    if let Some(error) = errors.first() {
        return Err(CssError::Parse(format!("{:?}", error)));
    }

    let mut tree = CssTree::new();
    for rule in &stylesheet.rules {
        push_rule(&mut tree, None, rule)?;
    }

    debug!(rules = stylesheet.rules.len(), "parsed stylesheet");
    Ok(tree)
}

/// 把一段 CSS 片段解析为指定的语法节点（选择器列表、媒体查询等）
///
/// 片段必须被完整消费，末尾多余的内容视为错误。
///
/// ```
/// use crosswind_css::parse::parse_fragment;
/// use swc_css_ast::SelectorList;
///
/// let list: SelectorList = parse_fragment(".a:hover, .b").unwrap();
/// assert_eq!(list.children.len(), 2);
/// assert!(parse_fragment::<SelectorList>(".a:hover)").is_err());
/// ```
pub fn parse_fragment<T>(source: &str) -> Result<T, CssError>
where
    T: Spanned,
    for<'a> Parser<Lexer<'a, StringInput<'a>>>: Parse<T>,
{
    let source = source.trim();
    let fm = source_file("fragment.css", source);
    let mut errors = vec![];
    let node: T = parse_file(&fm, None, ParserConfig::default(), &mut errors)
        .map_err(|e| CssError::Parse(format!("{:?}", e)))?;

    if let Some(error) = errors.first() {
        return Err(CssError::Parse(format!("{:?}", error)));
    }
    if node.span().hi < fm.end_pos {
        return Err(CssError::Parse(format!("unexpected trailing input in `{}`", source)));
    }
    Ok(node)
}

/// 选择器文本 → 规则头部
///
/// 依次尝试选择器列表与相对选择器列表（`> p` 这类嵌套写法），
/// 都不成立时退回到原始记号序列。
pub fn parse_rule_prelude(selector: &str) -> Result<QualifiedRulePrelude, CssError> {
    if let Ok(list) = parse_fragment::<SelectorList>(selector) {
        return Ok(QualifiedRulePrelude::SelectorList(list));
    }
    if let Ok(list) = parse_fragment::<RelativeSelectorList>(selector) {
        return Ok(QualifiedRulePrelude::RelativeSelectorList(list));
    }
    trace!(%selector, "selector kept as component values");
    parse_fragment::<ListOfComponentValues>(selector).map(QualifiedRulePrelude::ListOfComponentValues)
}

fn push_rule(tree: &mut CssTree, parent: Option<NodeId>, rule: &Rule) -> Result<(), CssError> {
    match rule {
        Rule::QualifiedRule(rule) => push_qualified_rule(tree, parent, rule),
        Rule::AtRule(at_rule) => push_at_rule(tree, parent, at_rule),
        Rule::ListOfComponentValues(list) => {
            tree.push(
                parent,
                NodeKind::Raw(ComponentValue::ListOfComponentValues(list.clone())),
            );
            Ok(())
        }
    }
}

fn push_qualified_rule(
    tree: &mut CssTree,
    parent: Option<NodeId>,
    rule: &QualifiedRule,
) -> Result<(), CssError> {
    let selector = rule.prelude.to_css()?;
    let id = tree.push(parent, NodeKind::rule(selector.trim()));
    push_block(tree, id, &rule.block)
}

fn push_at_rule(tree: &mut CssTree, parent: Option<NodeId>, at_rule: &AtRule) -> Result<(), CssError> {
    let name = match &at_rule.name {
        AtRuleName::Ident(ident) => ident.value.to_ascii_lowercase().to_string(),
        AtRuleName::DashedIdent(ident) => format!("--{}", &*ident.value),
    };
    let params = match &at_rule.prelude {
        Some(prelude) => prelude.to_css()?.trim().to_string(),
        None => String::new(),
    };

    let id = tree.push(
        parent,
        NodeKind::AtRule {
            name,
            params,
            prelude: at_rule.prelude.clone(),
            has_block: at_rule.block.is_some(),
        },
    );
    match &at_rule.block {
        Some(block) => push_block(tree, id, block),
        None => Ok(()),
    }
}

fn push_block(tree: &mut CssTree, parent: NodeId, block: &SimpleBlock) -> Result<(), CssError> {
    for value in &block.value {
        match value {
            ComponentValue::QualifiedRule(rule) => push_qualified_rule(tree, Some(parent), rule)?,
            ComponentValue::AtRule(at_rule) => push_at_rule(tree, Some(parent), at_rule)?,
            ComponentValue::Declaration(decl) => {
                tree.push(Some(parent), NodeKind::Declaration(declaration(decl)?));
            }
            ComponentValue::PreservedToken(token)
                if matches!(token.token, Token::WhiteSpace { .. } | Token::Semi) => {}
            other => {
                tree.push(Some(parent), NodeKind::Raw(other.clone()));
            }
        }
    }
    Ok(())
}

/// swc 声明 → crosswind Declaration（值为生成器输出的文本）
fn declaration(decl: &SwcDeclaration) -> Result<Declaration, CssError> {
    // 自定义属性保留大小写
    let property = match &decl.name {
        DeclarationName::Ident(ident) => ident.value.to_ascii_lowercase().to_string(),
        DeclarationName::DashedIdent(ident) => format!("--{}", &*ident.value),
    };
    let value = ListOfComponentValues {
        span: decl.span,
        children: decl.value.clone(),
    }
    .to_css()?;

    Ok(Declaration::new(property, value.trim()).with_important(decl.important.is_some()))
}
