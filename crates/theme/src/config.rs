use crate::theme::ResolvedTheme;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme entry `{0}` must be an object")]
    InvalidTheme(String),
}

/// 工具类家族开关（对应 Tailwind 的 `corePlugins`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CorePlugins {
    /// `{ "fontWeight": false }`：未列出的家族默认启用
    Toggles(IndexMap<String, bool>),
    /// `["margin", "padding"]`：只启用列出的家族
    AllowList(Vec<String>),
}

impl Default for CorePlugins {
    fn default() -> Self {
        CorePlugins::Toggles(IndexMap::new())
    }
}

impl CorePlugins {
    pub fn is_enabled(&self, family: &str) -> bool {
        match self {
            CorePlugins::Toggles(toggles) => toggles.get(family).copied().unwrap_or(true),
            CorePlugins::AllowList(allowed) => allowed.iter().any(|f| f == family),
        }
    }
}

/// 转换器配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "prefix": "tw-",
///   "separator": "_",
///   "corePlugins": { "fontWeight": false },
///   "theme": { "extend": { "colors": { "gold": "hsl(41, 28.3%, 79.8%)" } } },
///   "remInPx": 16,
///   "arbitraryPropertiesIsEnabled": true
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterConfig {
    /// 类名前缀（如 "tw-"）
    pub prefix: String,
    /// 变体分隔符
    pub separator: String,
    pub core_plugins: CorePlugins,
    /// 主题覆盖与 `extend`
    pub theme: Map<String, Value>,
    /// rem → px 比例
    pub rem_in_px: Option<f64>,
    /// 无法转换的声明输出为 `[property:value]`
    pub arbitrary_properties_is_enabled: bool,
    /// 转换前展开嵌套规则
    pub flatten_nesting: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: ":".to_string(),
            core_plugins: CorePlugins::default(),
            theme: Map::new(),
            rem_in_px: None,
            arbitrary_properties_is_enabled: false,
            flatten_nesting: true,
        }
    }
}

impl ConverterConfig {
    /// 合并默认主题与用户主题
    pub fn resolve_theme(&self) -> Result<ResolvedTheme, ConfigError> {
        ResolvedTheme::resolve(&self.theme)
    }
}

/// 从 JSON 字符串加载转换器配置
pub fn load_config_from_json(json_str: &str) -> Result<ConverterConfig, ConfigError> {
    Ok(serde_json::from_str(json_str)?)
}
