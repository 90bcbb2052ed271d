use crosswind_core::{VariantKind, VariantToken};
use crosswind_css::{parse_fragment, ToCss};
use crosswind_theme::ThemeValueMap;
use phf::phf_map;
use swc_css_ast::{
    AttributeSelector, AttributeSelectorMatcherValue, AttributeSelectorValue,
    ComplexSelectorChildren, SelectorList, SubclassSelector,
};
use tracing::trace;

/// 伪类 / 伪元素 → 变体名
///
/// 带参数的伪类以去空白后的完整形式作为键：`nth-child(2n+1)`。
static PSEUDOS: phf::Map<&'static str, &'static str> = phf_map! {
    "hover" => "hover",
    "focus" => "focus",
    "focus-within" => "focus-within",
    "focus-visible" => "focus-visible",
    "active" => "active",
    "visited" => "visited",
    "target" => "target",
    "first-child" => "first",
    "last-child" => "last",
    "only-child" => "only",
    "nth-child(odd)" => "odd",
    "nth-child(2n+1)" => "odd",
    "nth-child(even)" => "even",
    "nth-child(2n)" => "even",
    "first-of-type" => "first-of-type",
    "last-of-type" => "last-of-type",
    "only-of-type" => "only-of-type",
    "empty" => "empty",
    "disabled" => "disabled",
    "enabled" => "enabled",
    "checked" => "checked",
    "indeterminate" => "indeterminate",
    "default" => "default",
    "required" => "required",
    "optional" => "optional",
    "valid" => "valid",
    "invalid" => "invalid",
    "in-range" => "in-range",
    "out-of-range" => "out-of-range",
    "placeholder-shown" => "placeholder-shown",
    "autofill" => "autofill",
    "read-only" => "read-only",
    "before" => "before",
    "after" => "after",
    "first-letter" => "first-letter",
    "first-line" => "first-line",
    "marker" => "marker",
    "selection" => "selection",
    "placeholder" => "placeholder",
    "file-selector-button" => "file",
    "backdrop" => "backdrop",
};

/// 选择器拆分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedSelector {
    /// 去掉变体后的结构选择器；无法拆分时为原选择器
    pub base: String,
    /// 按出现顺序排列的变体
    pub variants: Vec<VariantToken>,
}

impl DecomposedSelector {
    fn unchanged(selector: &str) -> Self {
        Self {
            base: selector.to_string(),
            variants: Vec::new(),
        }
    }
}

/// 属性选择器 → (属性名, 运算符, 值)；带大小写标志或无值时为 `None`
fn attribute_parts(attribute: &AttributeSelector) -> Option<(&str, &'static str, &str)> {
    if attribute.modifier.is_some() {
        return None;
    }
    let op = match attribute.matcher.as_ref()?.value {
        AttributeSelectorMatcherValue::Equals => "=",
        AttributeSelectorMatcherValue::Tilde => "~=",
        AttributeSelectorMatcherValue::Bar => "|=",
        AttributeSelectorMatcherValue::Caret => "^=",
        AttributeSelectorMatcherValue::Dollar => "$=",
        AttributeSelectorMatcherValue::Asterisk => "*=",
    };
    let value = match attribute.value.as_ref()? {
        AttributeSelectorValue::Str(value) => &*value.value,
        AttributeSelectorValue::Ident(value) => &*value.value,
    };
    Some((&*attribute.name.value.value, op, value))
}

/// 选择器 → 结构基底 + 变体序列
pub struct SelectorDecomposer<'a> {
    values: &'a ThemeValueMap,
}

impl<'a> SelectorDecomposer<'a> {
    pub fn new(values: &'a ThemeValueMap) -> Self {
        Self { values }
    }

    /// 拆分单个复杂选择器（选择器列表需先按顶层逗号拆开）
    ///
    /// 只剥离最右侧复合选择器末尾、最后一个结构项之后的连续可转换项；
    /// 其余部分原样保留在基底中。
    pub fn decompose(&self, selector: &str) -> DecomposedSelector {
        let selector = selector.trim();
        let mut complex = match parse_fragment::<SelectorList>(selector) {
            Ok(SelectorList { mut children, .. }) if children.len() == 1 => children.remove(0),
            _ => {
                trace!(%selector, "selector not decomposable");
                return DecomposedSelector::unchanged(selector);
            }
        };
        let Some(ComplexSelectorChildren::CompoundSelector(compound)) = complex.children.last_mut()
        else {
            return DecomposedSelector::unchanged(selector);
        };

        let classified: Vec<Option<VariantToken>> = compound
            .subclass_selectors
            .iter()
            .map(|subclass| self.variant(subclass))
            .collect();

        // 变体之前必须有结构项：类 / id / 属性，或标签 / `*` / `&`
        let keep = match classified.iter().rposition(Option::is_none) {
            Some(index) => index + 1,
            None if compound.type_selector.is_some() || compound.nesting_selector.is_some() => 0,
            None => return DecomposedSelector::unchanged(selector),
        };

        let variants: Vec<VariantToken> = classified.into_iter().skip(keep).flatten().collect();
        if variants.is_empty() {
            return DecomposedSelector::unchanged(selector);
        }

        compound.subclass_selectors.truncate(keep);
        match complex.to_css() {
            Ok(base) => DecomposedSelector {
                base: base.trim().to_string(),
                variants,
            },
            Err(error) => {
                trace!(%selector, %error, "selector base not printable");
                DecomposedSelector::unchanged(selector)
            }
        }
    }

    fn variant(&self, subclass: &SubclassSelector) -> Option<VariantToken> {
        match subclass {
            SubclassSelector::PseudoClass(_) | SubclassSelector::PseudoElement(_) => {
                // `:nth-child( 2n + 1 )` → `nth-child(2n+1)`
                let key: String = subclass
                    .to_css()
                    .ok()?
                    .trim_start_matches(':')
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                PSEUDOS
                    .get(key.to_ascii_lowercase().as_str())
                    .map(|variant| VariantToken::new(VariantKind::Pseudo, *variant))
            }
            SubclassSelector::Attribute(attribute) => {
                let (name, op, value) = attribute_parts(attribute)?;
                let condition = |attribute: &str| format!("{}{}\"{}\"", attribute, op, value);
                if let Some(attribute) = name.strip_prefix("aria-") {
                    let token = self.values.aria(&condition(attribute))?;
                    Some(VariantToken::new(
                        VariantKind::AriaData,
                        format!("aria-{}", token),
                    ))
                } else if let Some(attribute) = name.strip_prefix("data-") {
                    let token = self.values.data(&condition(attribute))?;
                    Some(VariantToken::new(
                        VariantKind::AriaData,
                        format!("data-{}", token),
                    ))
                } else {
                    None
                }
            }
            SubclassSelector::Id(_) | SubclassSelector::Class(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_theme::ConverterConfig;
    use pretty_assertions::assert_eq;

    fn decompose_with(config: &ConverterConfig, selector: &str) -> (String, Vec<String>) {
        let theme = config.resolve_theme().unwrap();
        let values = ThemeValueMap::from_theme(&theme, config.rem_in_px);
        let result = SelectorDecomposer::new(&values).decompose(selector);
        let names = result.variants.into_iter().map(|v| v.name).collect();
        (result.base, names)
    }

    fn decompose(selector: &str) -> (String, Vec<String>) {
        decompose_with(&ConverterConfig::default(), selector)
    }

    fn expect(base: &str, variants: &[&str]) -> (String, Vec<String>) {
        (
            base.to_string(),
            variants.iter().map(|v| v.to_string()).collect(),
        )
    }

    #[test]
    fn test_pseudo_classes() {
        assert_eq!(decompose(".foo:hover"), expect(".foo", &["hover"]));
        assert_eq!(
            decompose("a.link:focus:first-child"),
            expect("a.link", &["focus", "first"])
        );
        assert_eq!(decompose("li:nth-child( 2n + 1 )"), expect("li", &["odd"]));
        assert_eq!(decompose("li:nth-child(3)"), expect("li:nth-child(3)", &[]));
    }

    #[test]
    fn test_pseudo_elements() {
        assert_eq!(decompose(".foo::before"), expect(".foo", &["before"]));
        assert_eq!(decompose(".foo:after"), expect(".foo", &["after"]));
        assert_eq!(
            decompose("input::file-selector-button"),
            expect("input", &["file"])
        );
    }

    #[test]
    fn test_only_trailing_run_is_stripped() {
        assert_eq!(
            decompose(".a:hover .b:focus"),
            expect(".a:hover .b", &["focus"])
        );
        assert_eq!(decompose(".a:hover.b"), expect(".a:hover.b", &[]));
        assert_eq!(
            decompose(".a > .b:not(.c):hover"),
            expect(".a > .b:not(.c)", &["hover"])
        );
    }

    #[test]
    fn test_aria_and_data() {
        assert_eq!(
            decompose(".tab[aria-selected=\"true\"]:hover"),
            expect(".tab", &["aria-selected", "hover"])
        );
        assert_eq!(
            decompose(".tab[aria-selected=\"false\"]"),
            expect(".tab[aria-selected=\"false\"]", &[])
        );

        let config = crosswind_theme::load_config_from_json(
            r#"{ "theme": { "data": { "checked": "ui~=\"checked\"" } } }"#,
        )
        .unwrap();
        assert_eq!(
            decompose_with(&config, ".item[data-ui~='checked']"),
            expect(".item", &["data-checked"])
        );
    }

    #[test]
    fn test_not_decomposable() {
        assert_eq!(decompose(":hover"), expect(":hover", &[]));
        assert_eq!(decompose(".a > :hover"), expect(".a > :hover", &[]));
        assert_eq!(decompose(".a:hover)"), expect(".a:hover)", &[]));
        assert_eq!(decompose(".a[x"), expect(".a[x", &[]));
        assert_eq!(
            decompose(".tab[aria-selected=\"true\" i]"),
            expect(".tab[aria-selected=\"true\" i]", &[])
        );
    }

    #[test]
    fn test_nesting_selector_is_structural() {
        assert_eq!(decompose("&:hover"), expect("&", &["hover"]));
    }
}
