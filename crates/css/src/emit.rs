use crate::ast::{brace_block, raw_ident, swc_declaration};
use crate::parse::{parse_rule_prelude, CssError};
use crate::tree::{CssTree, NodeKind};
use crosswind_core::NodeId;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    AtRule, AtRuleName, AtRulePrelude, ComplexSelector, ComponentValue, ListOfComponentValues,
    MediaInParens, QualifiedRule, QualifiedRulePrelude, Rule, SelectorList, Stylesheet,
    SubclassSelector,
};
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig, IndentType, LineFeed},
    CodeGenerator, CodegenConfig, Emit,
};

/// 输出格式
#[derive(Debug, Clone)]
pub struct EmitConfig {
    pub indent_width: usize,
    pub minify: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            minify: false,
        }
    }
}

/// 使用 swc_css_codegen 生成 CSS 字符串（默认两空格缩进）
pub fn emit_css(tree: &CssTree) -> Result<String, CssError> {
    emit_css_with(tree, &EmitConfig::default())
}

pub fn emit_css_with(tree: &CssTree, config: &EmitConfig) -> Result<String, CssError> {
    let stylesheet = to_stylesheet(tree)?;
    generate(config, |gen| gen.emit(&stylesheet))
}

/// 规则树 → swc 样式表
pub fn to_stylesheet(tree: &CssTree) -> Result<Stylesheet, CssError> {
    let rules = tree
        .roots()
        .iter()
        .map(|root| {
            Ok(match component(tree, *root)? {
                ComponentValue::QualifiedRule(rule) => Rule::QualifiedRule(rule),
                ComponentValue::AtRule(at_rule) => Rule::AtRule(at_rule),
                ComponentValue::ListOfComponentValues(list) => Rule::ListOfComponentValues(list),
                other => Rule::ListOfComponentValues(Box::new(ListOfComponentValues {
                    span: DUMMY_SP,
                    children: vec![other],
                })),
            })
        })
        .collect::<Result<Vec<_>, CssError>>()?;

    Ok(Stylesheet {
        span: DUMMY_SP,
        rules,
    })
}

fn component(tree: &CssTree, id: NodeId) -> Result<ComponentValue, CssError> {
    Ok(match &tree.node(id).kind {
        NodeKind::Rule { selector } => ComponentValue::QualifiedRule(Box::new(QualifiedRule {
            span: DUMMY_SP,
            prelude: parse_rule_prelude(selector)?,
            block: brace_block(children(tree, id)?),
        })),
        NodeKind::AtRule {
            name,
            prelude,
            has_block,
            ..
        } => {
            let block = if *has_block {
                Some(brace_block(children(tree, id)?))
            } else {
                None
            };
            ComponentValue::AtRule(Box::new(AtRule {
                span: DUMMY_SP,
                name: AtRuleName::Ident(raw_ident(name)),
                prelude: prelude.clone(),
                block,
            }))
        }
        NodeKind::Declaration(decl) => ComponentValue::Declaration(Box::new(swc_declaration(decl))),
        NodeKind::Raw(value) => value.clone(),
    })
}

fn children(tree: &CssTree, id: NodeId) -> Result<Vec<ComponentValue>, CssError> {
    tree.children(id)
        .iter()
        .map(|child| component(tree, *child))
        .collect()
}

fn generate<F>(config: &EmitConfig, emit: F) -> Result<String, CssError>
where
    F: FnOnce(&mut CodeGenerator<&mut BasicCssWriter<'_, &mut String>>) -> std::fmt::Result,
{
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: IndentType::Space,
        indent_width: config.indent_width.try_into().unwrap_or(2),
        linefeed: LineFeed::LF,
    };

    {
        let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
        let mut gen = CodeGenerator::new(
            &mut wr,
            CodegenConfig {
                minify: config.minify,
            },
        );
        emit(&mut gen)?;
    }

    Ok(output)
}

/// 可以单独输出为 CSS 文本的语法节点
pub trait ToCss {
    fn to_css(&self) -> Result<String, CssError>;
}

macro_rules! impl_to_css {
    ($($node:ty),* $(,)?) => {
        $(
            impl ToCss for $node {
                fn to_css(&self) -> Result<String, CssError> {
                    generate(&EmitConfig::default(), |gen| gen.emit(self))
                }
            }
        )*
    };
}

impl_to_css!(
    Stylesheet,
    SelectorList,
    ComplexSelector,
    SubclassSelector,
    MediaInParens,
    QualifiedRulePrelude,
    AtRulePrelude,
    ListOfComponentValues,
);
