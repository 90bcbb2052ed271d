use crate::theme::ResolvedTheme;
use crosswind_core::normalize::{
    collapse_whitespace, is_css_variable, normalize_color_value, normalize_numbers,
    normalize_size_value, normalize_time_value, normalize_value, remove_unnecessary_spaces,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// 按尺寸规则规范化的分类（零值归一、rem → px）
const SIZE_CATEGORIES: &[&str] = &[
    "backdropBlur",
    "backdropHueRotate",
    "blur",
    "borderRadius",
    "borderSpacing",
    "borderWidth",
    "flexBasis",
    "fontSize",
    "gap",
    "height",
    "hueRotate",
    "inset",
    "letterSpacing",
    "lineHeight",
    "margin",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "outlineOffset",
    "outlineWidth",
    "padding",
    "rotate",
    "scrollMargin",
    "scrollPadding",
    "skew",
    "spacing",
    "strokeWidth",
    "textDecorationThickness",
    "textIndent",
    "textUnderlineOffset",
    "translate",
    "width",
];

/// 分类的规范化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Color,
    Size,
    Time,
    Generic,
    /// 断点：值为媒体查询条件
    Screen,
    /// `@supports` 条件
    Supports,
    /// `aria-*` / `data-*` 属性条件
    AriaData,
}

impl CategoryKind {
    pub fn of(category: &str) -> Self {
        match category {
            "screens" => CategoryKind::Screen,
            "supports" => CategoryKind::Supports,
            "aria" | "data" => CategoryKind::AriaData,
            "transitionDuration" | "transitionDelay" => CategoryKind::Time,
            "fill" | "stroke" => CategoryKind::Color,
            _ if category.to_ascii_lowercase().contains("color") => CategoryKind::Color,
            _ if SIZE_CATEGORIES.contains(&category) => CategoryKind::Size,
            _ => CategoryKind::Generic,
        }
    }

    /// 规范化一个原始值，主题值与声明值共用
    pub fn normalize(self, value: &str, rem_in_px: Option<f64>) -> String {
        match self {
            CategoryKind::Color => normalize_color_value(&normalize_value(value)),
            CategoryKind::Size => normalize_size_value(&normalize_value(value), rem_in_px),
            CategoryKind::Time => normalize_time_value(&normalize_value(value)),
            CategoryKind::Generic => normalize_value(value),
            CategoryKind::Screen => normalize_media_condition(value),
            CategoryKind::Supports => normalize_supports_condition(value),
            CategoryKind::AriaData => normalize_attribute_condition(value),
        }
    }
}

/// `(min-width: 768px)` → `(min-width:768px)`
pub fn normalize_media_condition(value: &str) -> String {
    normalize_numbers(&remove_unnecessary_spaces(&collapse_whitespace(value))).to_ascii_lowercase()
}

/// 统一为带括号、无多余空白的形式：`display: grid` → `(display:grid)`
pub fn normalize_supports_condition(value: &str) -> String {
    let value = remove_unnecessary_spaces(&collapse_whitespace(value));
    if value.starts_with('(') || value.starts_with("not ") {
        value
    } else {
        format!("({})", value)
    }
}

/// 去掉引号：`checked="true"` → `checked=true`
pub fn normalize_attribute_condition(value: &str) -> String {
    remove_unnecessary_spaces(&collapse_whitespace(value))
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect()
}

/// 断点配置 → 媒体查询条件
///
/// - `"640px"` → `(min-width: 640px)`
/// - `{ "min": "a", "max": "b" }` → `(min-width: a) and (max-width: b)`
/// - `{ "raw": "print" }` → `print`
/// - 数组 → 逗号拼接
pub fn build_screen_query(value: &Value) -> Option<String> {
    match value {
        Value::String(width) => Some(format!("(min-width: {})", width)),
        Value::Object(map) => {
            if let Some(raw) = map.get("raw").and_then(Value::as_str) {
                return Some(raw.to_string());
            }
            let mut parts = Vec::new();
            if let Some(min) = map.get("min").and_then(Value::as_str) {
                parts.push(format!("(min-width: {})", min));
            }
            if let Some(max) = map.get("max").and_then(Value::as_str) {
                parts.push(format!("(max-width: {})", max));
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" and "))
            }
        }
        Value::Array(items) => {
            let queries: Vec<String> = items.iter().filter_map(build_screen_query).collect();
            if queries.is_empty() {
                None
            } else {
                Some(queries.join(", "))
            }
        }
        _ => None,
    }
}

/// 展开嵌套令牌为 `路径 → 原始值`
///
/// 路径以 `-` 连接；嵌套的 `DEFAULT` 使用父路径；数组取第一个元素。
fn flatten_tokens(value: &Value, path: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else if key == "DEFAULT" {
                    path.to_string()
                } else {
                    format!("{}-{}", path, key)
                };
                flatten_tokens(child, &child_path, out);
            }
        }
        Value::Array(items) => {
            if let Some(first) = items.first() {
                if !first.is_object() && !first.is_array() {
                    flatten_tokens(first, path, out);
                }
            }
        }
        Value::String(s) => out.push((path.to_string(), s.clone())),
        Value::Number(n) => out.push((path.to_string(), n.to_string())),
        Value::Bool(_) | Value::Null => {}
    }
}

/// 单个分类的反向表：规范化值 → 令牌名
#[derive(Debug, Clone)]
pub struct ValueTable {
    kind: CategoryKind,
    entries: HashMap<String, String>,
}

impl ValueTable {
    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }
}

/// 主题反向索引
///
/// 每个分类一张表，构建后不再修改。同一规范化值对应多个令牌时，
/// 按主题迭代顺序后出现者覆盖先出现者。
#[derive(Debug, Clone)]
pub struct ThemeValueMap {
    tables: HashMap<String, ValueTable>,
    rem_in_px: Option<f64>,
}

impl ThemeValueMap {
    pub fn from_theme(theme: &ResolvedTheme, rem_in_px: Option<f64>) -> Self {
        let mut tables = HashMap::new();

        for (category, value) in theme.categories() {
            let kind = CategoryKind::of(category);
            let mut entries = HashMap::new();

            if kind == CategoryKind::Screen {
                if let Value::Object(screens) = value {
                    for (name, screen) in screens {
                        if let Some(query) = build_screen_query(screen) {
                            entries.insert(kind.normalize(&query, rem_in_px), name.clone());
                        }
                    }
                }
            } else {
                let mut tokens = Vec::new();
                flatten_tokens(value, "", &mut tokens);
                for (token, raw) in tokens {
                    entries.insert(kind.normalize(&raw, rem_in_px), token);
                }
            }

            tables.insert(category.clone(), ValueTable { kind, entries });
        }

        debug!(tables = tables.len(), "theme value map built");

        Self { tables, rem_in_px }
    }

    pub fn rem_in_px(&self) -> Option<f64> {
        self.rem_in_px
    }

    pub fn table(&self, category: &str) -> Option<&ValueTable> {
        self.tables.get(category)
    }

    /// 以分类自身的规则规范化后查表；`var()` 引用从不匹配
    pub fn lookup(&self, category: &str, value: &str) -> Option<&str> {
        if is_css_variable(value) {
            return None;
        }
        let table = self.tables.get(category)?;
        table.get(&table.kind.normalize(value, self.rem_in_px))
    }

    /// 断点名（条件需已是 `and` 连接的宽高条件）
    pub fn screen(&self, condition: &str) -> Option<&str> {
        self.lookup("screens", condition)
    }

    pub fn supports(&self, condition: &str) -> Option<&str> {
        self.lookup("supports", condition)
    }

    pub fn aria(&self, condition: &str) -> Option<&str> {
        self.lookup("aria", condition)
    }

    pub fn data(&self, condition: &str) -> Option<&str> {
        self.lookup("data", condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn value_map(theme: Value, rem_in_px: Option<f64>) -> ThemeValueMap {
        let user: Map<String, Value> = match theme {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let theme = ResolvedTheme::resolve(&user).unwrap();
        ThemeValueMap::from_theme(&theme, rem_in_px)
    }

    #[test]
    fn test_category_kind() {
        assert_eq!(CategoryKind::of("borderColor"), CategoryKind::Color);
        assert_eq!(CategoryKind::of("fill"), CategoryKind::Color);
        assert_eq!(CategoryKind::of("margin"), CategoryKind::Size);
        assert_eq!(CategoryKind::of("fontWeight"), CategoryKind::Generic);
        assert_eq!(CategoryKind::of("transitionDuration"), CategoryKind::Time);
        assert_eq!(CategoryKind::of("screens"), CategoryKind::Screen);
    }

    #[test]
    fn test_color_lookup_normalizes_both_sides() {
        let map = value_map(json!({ "extend": { "colors": { "gold": "hsl(41, 28.3%, 79.8%)" } } }), None);
        assert_eq!(map.lookup("borderColor", "hsl(41,28.3%,79.8%)"), Some("gold"));
        assert_eq!(map.lookup("textColor", "#EF4444"), Some("red-500"));
        assert_eq!(map.lookup("textColor", "rgb(239, 68, 68)"), Some("red-500"));
        assert_eq!(map.lookup("textColor", "not-a-color"), None);
    }

    #[test]
    fn test_nested_default_uses_parent_path() {
        let map = value_map(json!({ "colors": { "brand": { "DEFAULT": "#123456", "light": "#abcdef" } } }), None);
        assert_eq!(map.lookup("colors", "#123456"), Some("brand"));
        assert_eq!(map.lookup("colors", "#abcdef"), Some("brand-light"));
    }

    #[test]
    fn test_top_level_default_sentinel() {
        let map = value_map(json!({}), None);
        assert_eq!(map.lookup("borderWidth", "1px"), Some("DEFAULT"));
        assert_eq!(map.lookup("borderRadius", "0.25rem"), Some("DEFAULT"));
    }

    #[test]
    fn test_last_key_wins() {
        let map = value_map(json!({}), None);
        // blur: "0" 与 "none" 同为 0，后者覆盖
        assert_eq!(map.lookup("blur", "0"), Some("none"));

        let map = value_map(json!({ "zIndex": { "a": "5", "b": "5" } }), None);
        assert_eq!(map.lookup("zIndex", "5"), Some("b"));
    }

    #[test]
    fn test_size_lookup_with_rem() {
        let map = value_map(json!({}), Some(16.0));
        assert_eq!(map.lookup("margin", "12px"), Some("3"));
        assert_eq!(map.lookup("margin", ".75rem"), Some("3"));
        assert_eq!(map.lookup("padding", "0"), Some("0"));
        assert_eq!(map.lookup("fontSize", "0.75rem"), Some("xs"));

        let map = value_map(json!({}), None);
        assert_eq!(map.lookup("margin", "12px"), None);
        assert_eq!(map.lookup("margin", "0.75rem"), Some("3"));
    }

    #[test]
    fn test_generic_lookup_normalizes_numbers() {
        let map = value_map(json!({}), None);
        assert_eq!(map.lookup("brightness", "0.5"), Some("50"));
        assert_eq!(map.lookup("opacity", ".05"), Some("5"));
        assert_eq!(map.lookup("fontWeight", "600"), Some("semibold"));
        assert_eq!(
            map.lookup("transitionTimingFunction", "cubic-bezier(.4,0,.2,1)"),
            Some("in-out")
        );
    }

    #[test]
    fn test_time_lookup() {
        let map = value_map(json!({}), None);
        assert_eq!(map.lookup("transitionDuration", "0.2s"), Some("200"));
        assert_eq!(map.lookup("transitionDelay", "75ms"), Some("75"));
    }

    #[test]
    fn test_css_variable_never_matches() {
        let map = value_map(json!({ "extend": { "colors": { "cyan-var": "var(--cyan)" } } }), None);
        assert_eq!(map.lookup("colors", "var(--cyan)"), None);
    }

    #[test]
    fn test_screens() {
        let map = value_map(json!({}), None);
        assert_eq!(map.screen("(min-width: 768px)"), Some("md"));
        assert_eq!(map.screen("(min-width:1536px)"), Some("2xl"));

        let map = value_map(
            json!({ "screens": { "custom-screen": { "min": "768px", "max": "1024px" }, "tall": { "raw": "(min-height: 800px)" } } }),
            None,
        );
        assert_eq!(map.screen("(min-width: 768px) and (max-width: 1024px)"), Some("custom-screen"));
        assert_eq!(map.screen("(min-height:800px)"), Some("tall"));
    }

    #[test]
    fn test_build_screen_query() {
        assert_eq!(build_screen_query(&json!("640px")).as_deref(), Some("(min-width: 640px)"));
        assert_eq!(
            build_screen_query(&json!([{ "max": "639px" }, { "min": "1024px" }])).as_deref(),
            Some("(max-width: 639px), (min-width: 1024px)")
        );
        assert_eq!(build_screen_query(&json!(12)), None);
    }

    #[test]
    fn test_supports_and_aria() {
        let map = value_map(json!({ "supports": { "flex": "display: flex" }, "data": { "checked": "ui~=\"checked\"" } }), None);
        assert_eq!(map.supports("(display:flex)"), Some("flex"));
        assert_eq!(map.supports("(display: flex)"), Some("flex"));
        assert_eq!(map.aria("checked=\"true\""), Some("checked"));
        assert_eq!(map.data("ui~='checked'"), Some("checked"));
        assert_eq!(map.aria("checked=\"false\""), None);
    }
}
