use crate::context::ContextResolver;
use crate::declaration::{arbitrary_property, DeclarationConverter};
use crate::selector::{DecomposedSelector, SelectorDecomposer};
use crosswind_core::split::split_selector_list;
use crosswind_core::{
    node_key, reduce_classes, render_prefix, NodeId, NodeRegistry, Placement, RegistryEntry,
    TailwindNode, VariantToken,
};
use crosswind_css::{apply_classes, emit_css, flatten_nesting, parse_css, CssError, CssTree, RuleView};
use crosswind_theme::{load_config_from_json, ConfigError, ConverterConfig, ThemeValueMap};
use tracing::{debug, trace};

/// 转换错误
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Css(#[from] CssError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// 转换结果
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// 写回 `@apply` 后的 CSS
    pub css: String,
    /// 按创建顺序排列的节点（挂载位置 + 类名）
    pub nodes: Vec<RegistryEntry>,
}

/// CSS → 工具类转换器
///
/// 主题反向索引在构造时建立一次；每次转换使用独立的节点注册表，
/// 转换之间不共享状态。
///
/// # 示例
///
/// ```
/// use crosswind_convert::{Converter, ConverterConfig};
///
/// let converter = Converter::new(ConverterConfig::default()).unwrap();
/// let output = converter.convert_css(".foo { text-align: center; }").unwrap();
///
/// assert_eq!(output.nodes[0].classes, vec!["text-center"]);
/// assert!(output.css.contains("@apply text-center"));
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    values: ThemeValueMap,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        let theme = config.resolve_theme()?;
        let values = ThemeValueMap::from_theme(&theme, config.rem_in_px);
        Ok(Self { config, values })
    }

    /// 从 JSON 配置构造
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Self::new(load_config_from_json(json)?)
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn values(&self) -> &ThemeValueMap {
        &self.values
    }

    /// 解析、转换并重新输出 CSS
    ///
    /// 只有 CSS 解析或输出失败会返回错误；无法转换的声明、选择器和上下文
    /// 原样保留在输出中。
    pub fn convert_css(&self, source: &str) -> Result<ConversionOutput, ConvertError> {
        let mut tree = parse_css(source)?;
        if self.config.flatten_nesting {
            tree = flatten_nesting(&tree);
        }

        let nodes = self.convert_tree(&mut tree);
        let css = emit_css(&tree)?;

        debug!(
            nodes = nodes.len(),
            classes = nodes.iter().map(|n| n.classes.len()).sum::<usize>(),
            "conversion finished"
        );

        Ok(ConversionOutput { css, nodes })
    }

    /// 转换已解析的规则树，并把结果写回树中
    ///
    /// 规则按文档顺序处理，返回最终的节点列表。
    pub fn convert_tree(&self, tree: &mut CssTree) -> Vec<RegistryEntry> {
        let mut registry = NodeRegistry::new();
        let mut converted = Vec::new();

        for rule in tree.rules() {
            registry.merge_nodes(self.convert_rule(&rule, &mut converted));
        }

        let entries: Vec<RegistryEntry> = registry
            .into_entries()
            .into_iter()
            .map(|mut entry| {
                entry.classes = reduce_classes(entry.classes);
                entry
            })
            .collect();

        apply_classes(tree, &entries, &converted);
        entries
    }

    /// 单条规则 → 待合并的节点
    fn convert_rule(&self, rule: &RuleView<'_>, converted: &mut Vec<NodeId>) -> Vec<TailwindNode> {
        let classes = self.rule_classes(rule, converted);
        if classes.is_empty() {
            return Vec::new();
        }

        // 无祖先时上下文为空；祖先链无法转换时规则整体留在原位，选择器不拆解
        let context = if rule.ancestors.is_empty() {
            Vec::new()
        } else {
            match ContextResolver::new(&self.values).resolve(&rule.ancestors) {
                Some(context) => context,
                None => {
                    trace!(selector = %rule.selector, "context vetoed");
                    return vec![TailwindNode::Resolved {
                        key: node_key(&rule.ancestors, rule.selector),
                        placement: Placement::new(rule.id, rule.selector),
                        classes,
                    }];
                }
            }
        };

        let decomposer = SelectorDecomposer::new(&self.values);
        let members: Vec<(&str, DecomposedSelector)> = split_selector_list(rule.selector)
            .into_iter()
            .map(|member| (member, decomposer.decompose(member)))
            .collect();

        // 整个选择器列表都没有变体时，规则保持原样作为一个节点
        if rule.ancestors.is_empty() && members.iter().all(|(_, d)| d.variants.is_empty()) {
            return vec![TailwindNode::Resolved {
                key: node_key(&rule.ancestors, rule.selector),
                placement: Placement::new(rule.id, rule.selector),
                classes,
            }];
        }

        members
            .into_iter()
            .map(|(member, decomposed)| self.member_node(rule, member, decomposed, &context, &classes))
            .collect()
    }

    /// 选择器列表中的一项 → 节点
    ///
    /// 既无上下文祖先也无变体的项直接挂在自身上。其余的项都依赖基础
    /// 选择器：基础节点此前已存在时带前缀并入，否则在该项自身的位置
    /// 建立不带前缀的节点，之后出现的基础规则不会再回头合并。
    /// 能走到这里的上下文祖先都已转换为变体，所以依赖键不含祖先。
    fn member_node(
        &self,
        rule: &RuleView<'_>,
        member: &str,
        decomposed: DecomposedSelector,
        context: &[VariantToken],
        classes: &[String],
    ) -> TailwindNode {
        if rule.ancestors.is_empty() && decomposed.variants.is_empty() {
            return TailwindNode::Resolved {
                key: node_key(&rule.ancestors, member),
                placement: Placement::new(rule.id, member),
                classes: classes.to_vec(),
            };
        }

        let tokens: Vec<VariantToken> = context
            .iter()
            .cloned()
            .chain(decomposed.variants)
            .collect();
        trace!(selector = %member, base = %decomposed.base, "dependent node");

        TailwindNode::Unresolved {
            dependent_key: node_key(&[], &decomposed.base),
            fallback_key: node_key(&rule.ancestors, member),
            fallback: Placement::new(rule.id, member),
            prefix: render_prefix(&tokens, &self.config.separator),
            classes: classes.to_vec(),
        }
    }

    /// 规则自身声明产生的类名（已归并、已加类名前缀，尚未加变体）
    fn rule_classes(&self, rule: &RuleView<'_>, converted: &mut Vec<NodeId>) -> Vec<String> {
        let declarations = DeclarationConverter::new(&self.values, &self.config.core_plugins);
        let mut classes = Vec::new();

        for (id, declaration) in &rule.declarations {
            let mut produced = declarations.convert(declaration);
            if produced.is_empty()
                && self.config.arbitrary_properties_is_enabled
                && !declarations.is_disabled(&declaration.property)
            {
                produced.push(arbitrary_property(&declaration.property, &declaration.value));
            }
            if produced.is_empty() {
                continue;
            }

            if declaration.important {
                for class in &mut produced {
                    class.insert(0, '!');
                }
            }
            converted.push(*id);
            classes.extend(produced);
        }

        reduce_classes(classes)
            .into_iter()
            .map(|class| with_class_prefix(&class, &self.config.prefix))
            .collect()
    }
}

/// 在 `!` 与 `-` 之后插入类名前缀：`!-mt-4` → `!-tw-mt-4`
fn with_class_prefix(class: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return class.to_string();
    }
    let (important, rest) = match class.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", class),
    };
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rest),
    };
    format!("{}{}{}{}", important, negative, prefix, rest)
}
