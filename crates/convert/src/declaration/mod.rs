mod arbitrary;
mod composite;

pub use arbitrary::{arbitrary_class, arbitrary_property, escape_arbitrary, token_class};

use crate::keywords::lookup_keyword;
use crate::property::{Conversion, Property, TypeHint};
use crosswind_core::Declaration;
use crosswind_theme::{CorePlugins, ThemeValueMap};
use tracing::trace;

/// 声明 → 工具类
///
/// 每个属性对应一种 [`Conversion`]；结果为空表示无法转换，
/// 复合属性要么全部子项成功，要么整体为空。
pub struct DeclarationConverter<'a> {
    values: &'a ThemeValueMap,
    core_plugins: &'a CorePlugins,
}

impl<'a> DeclarationConverter<'a> {
    pub fn new(values: &'a ThemeValueMap, core_plugins: &'a CorePlugins) -> Self {
        Self {
            values,
            core_plugins,
        }
    }

    /// 属性所属家族是否被禁用（未知属性视为启用）
    pub fn is_disabled(&self, property: &str) -> bool {
        Property::from_name(property)
            .is_some_and(|p| !self.core_plugins.is_enabled(p.core_plugin()))
    }

    /// 转换单条声明（不含 `!important` 与类名前缀处理）
    pub fn convert(&self, declaration: &Declaration) -> Vec<String> {
        let Some(property) = Property::from_name(&declaration.property) else {
            trace!(property = %declaration.property, "no utility family for property");
            return Vec::new();
        };

        if !self.core_plugins.is_enabled(property.core_plugin()) {
            trace!(
                property = %declaration.property,
                family = property.core_plugin(),
                "utility family disabled"
            );
            return Vec::new();
        }

        let classes = self.convert_value(property.conversion(), &declaration.value);
        if classes.is_none() {
            trace!(
                property = %declaration.property,
                value = %declaration.value,
                "declaration not convertible"
            );
        }
        classes.unwrap_or_default()
    }

    fn convert_value(&self, conversion: Conversion, value: &str) -> Option<Vec<String>> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        match conversion {
            Conversion::Keyword(table) => lookup_keyword(table, value).map(|c| vec![c.to_string()]),
            Conversion::Theme {
                category,
                prefix,
                signed,
                hint,
            } => Some(vec![self.theme_class(category, prefix, value, signed, hint)]),
            Conversion::Border { prefix } => self.border(prefix, value),
            Conversion::Box {
                category,
                prefixes,
                signed,
            } => self.box_sides(category, prefixes, signed, value),
            Conversion::Axis {
                category,
                prefixes,
                signed,
            } => self.axis(category, prefixes, signed, value),
            Conversion::FlexFlow => self.flex_flow(value),
            Conversion::Transform => self.transform(value),
            Conversion::Filter { backdrop } => self.filter(backdrop, value),
            Conversion::Transition => self.transition(value),
            Conversion::Unsupported => None,
        }
    }

    /// 查主题表得到单个类名，未命中时输出任意值
    ///
    /// 有符号属性先按原值查找（`-0.05em` → `tracking-tighter`），
    /// 失败后去掉负号再查，负号移到类名前：`-mt-4`、`-mb-[0.8rem]`。
    pub(crate) fn theme_class(
        &self,
        category: &str,
        prefix: &str,
        value: &str,
        signed: bool,
        hint: Option<TypeHint>,
    ) -> String {
        let value = value.trim();
        if let Some(token) = self.values.lookup(category, value) {
            return token_class(prefix, token);
        }

        if signed {
            if let Some(positive) = value.strip_prefix('-') {
                return match self.values.lookup(category, positive) {
                    Some(token) => format!("-{}", token_class(prefix, token)),
                    None => format!("-{}", arbitrary_class(prefix, positive, hint)),
                };
            }
        }

        arbitrary_class(prefix, value, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_theme::{load_config_from_json, ConverterConfig};
    use pretty_assertions::assert_eq;

    fn value_map(config: &ConverterConfig) -> ThemeValueMap {
        let theme = config.resolve_theme().unwrap();
        ThemeValueMap::from_theme(&theme, config.rem_in_px)
    }

    fn convert_with(config: &ConverterConfig, property: &str, value: &str) -> Vec<String> {
        let values = value_map(config);
        let converter = DeclarationConverter::new(&values, &config.core_plugins);
        converter.convert(&Declaration::new(property, value))
    }

    fn convert(property: &str, value: &str) -> Vec<String> {
        let config = load_config_from_json(r#"{ "remInPx": 16 }"#).unwrap();
        convert_with(&config, property, value)
    }

    #[test]
    fn test_keyword_properties() {
        assert_eq!(convert("text-align", "center"), vec!["text-center"]);
        assert_eq!(convert("display", "none"), vec!["hidden"]);
        assert_eq!(convert("display", "ruby"), Vec::<String>::new());
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(convert("font-size", "12px"), vec!["text-xs"]);
        assert_eq!(convert("font-size", "0.75rem"), vec!["text-xs"]);
        assert_eq!(convert("font-weight", "600"), vec!["font-semibold"]);
        assert_eq!(convert("border-radius", "0.25rem"), vec!["rounded"]);
        assert_eq!(convert("transition-duration", "0.2s"), vec!["duration-200"]);
        assert_eq!(convert("width", "50%"), vec!["w-1/2"]);
        assert_eq!(convert("margin-top", "0px"), vec!["mt-0"]);
    }

    #[test]
    fn test_colors() {
        assert_eq!(convert("color", "#fff"), vec!["text-white"]);
        assert_eq!(convert("background-color", "rgb(239, 68, 68)"), vec!["bg-red-500"]);
        assert_eq!(convert("color", "transparent"), vec!["text-transparent"]);
        assert_eq!(convert("color", "some-color"), vec!["text-[some-color]"]);
        assert_eq!(
            convert("color", "var(--some-color)"),
            vec!["text-[color:var(--some-color)]"]
        );
    }

    #[test]
    fn test_custom_theme_color() {
        let config = load_config_from_json(
            r#"{ "theme": { "extend": { "colors": { "gold": "hsl(41, 28.3%, 79.8%)" } } } }"#,
        )
        .unwrap();
        assert_eq!(
            convert_with(&config, "border-color", "hsl(41,28.3%,79.8%)"),
            vec!["border-gold"]
        );
        assert_eq!(
            convert_with(&config, "border-color", "hsl(1, 2%, 3%)"),
            vec!["border-[hsl(1,2%,3%)]"]
        );
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(convert("margin-top", "-1rem"), vec!["-mt-4"]);
        assert_eq!(convert("margin-bottom", "-0.8rem"), vec!["-mb-[0.8rem]"]);
        assert_eq!(convert("letter-spacing", "-0.05em"), vec!["tracking-tighter"]);
        assert_eq!(convert("order", "-9999"), vec!["order-first"]);
        assert_eq!(convert("z-index", "-10"), vec!["-z-10"]);
        // 不支持负值的属性保留负号
        assert_eq!(convert("padding-top", "-4px"), vec!["pt-[-4px]"]);
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(convert("top", "13px"), vec!["top-[13px]"]);
        assert_eq!(
            convert("animation", "some-animation 2s linear infinite"),
            vec!["animate-[some-animation_2s_linear_infinite]"]
        );
        assert_eq!(
            convert("background-image", "url('/large_image.jpg')"),
            vec!["bg-[url('/large\\_image.jpg')]"]
        );
    }

    #[test]
    fn test_disabled_family() {
        let config = load_config_from_json(r#"{ "corePlugins": { "fontWeight": false } }"#).unwrap();
        assert!(convert_with(&config, "font-weight", "600").is_empty());
        assert_eq!(convert_with(&config, "font-size", "1rem"), vec!["text-base"]);

        let values = value_map(&config);
        let converter = DeclarationConverter::new(&values, &config.core_plugins);
        assert!(converter.is_disabled("font-weight"));
        assert!(!converter.is_disabled("animation-delay"));
    }

    #[test]
    fn test_unknown_property() {
        assert!(convert("animation-delay", "200ms").is_empty());
    }
}
