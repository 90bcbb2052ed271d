use crate::config::ConfigError;
use serde_json::{Map, Value};
use tracing::debug;

/// 内置默认主题（Tailwind v3 令牌）
static DEFAULT_THEME: &str = include_str!("default_theme.json");

/// 非整数的分数尺寸
const FRACTIONS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("3/4", "75%"),
];

const WIDE_FRACTIONS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("3/4", "75%"),
    ("1/5", "20%"),
    ("2/5", "40%"),
    ("3/5", "60%"),
    ("4/5", "80%"),
    ("1/6", "16.666667%"),
    ("5/6", "83.333333%"),
    ("1/12", "8.333333%"),
    ("5/12", "41.666667%"),
    ("7/12", "58.333333%"),
    ("11/12", "91.666667%"),
];

const AUTO: &[(&str, &str)] = &[("auto", "auto")];
const NONE: &[(&str, &str)] = &[("none", "none")];
const FULL: &[(&str, &str)] = &[("full", "100%")];
const CONTENT_SIZES: &[(&str, &str)] = &[
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];
const VIEWPORT_HEIGHTS: &[(&str, &str)] = &[
    ("screen", "100vh"),
    ("svh", "100svh"),
    ("lvh", "100lvh"),
    ("dvh", "100dvh"),
];
const VIEWPORT_WIDTHS: &[(&str, &str)] = &[
    ("screen", "100vw"),
    ("svw", "100svw"),
    ("lvw", "100lvw"),
    ("dvw", "100dvw"),
];

/// 派生分类片段
enum Part {
    /// 复制另一个已解析分类的全部条目
    Category(&'static str),
    /// 固定条目
    Entries(&'static [(&'static str, &'static str)]),
}

/// 由其它分类组合而成的分类（如 `margin` = `auto` + `spacing`）
struct Derived {
    key: &'static str,
    parts: &'static [Part],
}

static DERIVED: &[Derived] = &[
    Derived { key: "accentColor", parts: &[Part::Category("colors"), Part::Entries(AUTO)] },
    Derived { key: "backgroundColor", parts: &[Part::Category("colors")] },
    Derived { key: "borderColor", parts: &[Part::Category("colors")] },
    Derived { key: "caretColor", parts: &[Part::Category("colors")] },
    Derived { key: "fill", parts: &[Part::Entries(NONE), Part::Category("colors")] },
    Derived { key: "outlineColor", parts: &[Part::Category("colors")] },
    Derived { key: "stroke", parts: &[Part::Entries(NONE), Part::Category("colors")] },
    Derived { key: "textColor", parts: &[Part::Category("colors")] },
    Derived { key: "textDecorationColor", parts: &[Part::Category("colors")] },
    Derived { key: "backdropBlur", parts: &[Part::Category("blur")] },
    Derived { key: "backdropBrightness", parts: &[Part::Category("brightness")] },
    Derived { key: "backdropContrast", parts: &[Part::Category("contrast")] },
    Derived { key: "backdropGrayscale", parts: &[Part::Category("grayscale")] },
    Derived { key: "backdropHueRotate", parts: &[Part::Category("hueRotate")] },
    Derived { key: "backdropInvert", parts: &[Part::Category("invert")] },
    Derived { key: "backdropOpacity", parts: &[Part::Category("opacity")] },
    Derived { key: "backdropSaturate", parts: &[Part::Category("saturate")] },
    Derived { key: "backdropSepia", parts: &[Part::Category("sepia")] },
    Derived { key: "borderSpacing", parts: &[Part::Category("spacing")] },
    Derived { key: "gap", parts: &[Part::Category("spacing")] },
    Derived { key: "margin", parts: &[Part::Entries(AUTO), Part::Category("spacing")] },
    Derived { key: "padding", parts: &[Part::Category("spacing")] },
    Derived { key: "scrollMargin", parts: &[Part::Category("spacing")] },
    Derived { key: "scrollPadding", parts: &[Part::Category("spacing")] },
    Derived { key: "textIndent", parts: &[Part::Category("spacing")] },
    Derived {
        key: "inset",
        parts: &[
            Part::Entries(AUTO),
            Part::Category("spacing"),
            Part::Entries(FRACTIONS),
            Part::Entries(FULL),
        ],
    },
    Derived {
        key: "translate",
        parts: &[Part::Category("spacing"), Part::Entries(FRACTIONS), Part::Entries(FULL)],
    },
    Derived {
        key: "flexBasis",
        parts: &[
            Part::Entries(AUTO),
            Part::Category("spacing"),
            Part::Entries(WIDE_FRACTIONS),
            Part::Entries(FULL),
        ],
    },
    Derived {
        key: "width",
        parts: &[
            Part::Entries(AUTO),
            Part::Category("spacing"),
            Part::Entries(WIDE_FRACTIONS),
            Part::Entries(FULL),
            Part::Entries(VIEWPORT_WIDTHS),
            Part::Entries(CONTENT_SIZES),
        ],
    },
    Derived {
        key: "height",
        parts: &[
            Part::Entries(AUTO),
            Part::Category("spacing"),
            Part::Entries(FRACTIONS),
            Part::Entries(FULL),
            Part::Entries(VIEWPORT_HEIGHTS),
            Part::Entries(CONTENT_SIZES),
        ],
    },
    Derived {
        key: "maxHeight",
        parts: &[
            Part::Category("spacing"),
            Part::Entries(NONE),
            Part::Entries(FULL),
            Part::Entries(VIEWPORT_HEIGHTS),
            Part::Entries(CONTENT_SIZES),
        ],
    },
    Derived {
        key: "minHeight",
        parts: &[
            Part::Category("spacing"),
            Part::Entries(FULL),
            Part::Entries(VIEWPORT_HEIGHTS),
            Part::Entries(CONTENT_SIZES),
        ],
    },
    Derived {
        key: "minWidth",
        parts: &[Part::Category("spacing"), Part::Entries(FULL), Part::Entries(CONTENT_SIZES)],
    },
];

impl Derived {
    fn build(&self, categories: &Map<String, Value>) -> Map<String, Value> {
        let mut map = Map::new();
        for part in self.parts {
            match part {
                Part::Category(name) => {
                    if let Some(Value::Object(source)) = categories.get(*name) {
                        for (key, value) in source {
                            map.insert(key.clone(), value.clone());
                        }
                    }
                }
                Part::Entries(entries) => {
                    for (key, value) in entries.iter() {
                        map.insert(key.to_string(), Value::String(value.to_string()));
                    }
                }
            }
        }
        map
    }
}

fn is_derived(key: &str) -> bool {
    DERIVED.iter().any(|d| d.key == key)
}

/// 深度合并：对象逐键合并，其它值直接替换；新键追加在末尾
fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value)
                    }
                    _ => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// 合并后的主题
///
/// 分类按 JSON 文本顺序迭代（`serde_json` 的 `preserve_order`），
/// 同值令牌的“后者覆盖”依赖这一顺序。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    categories: Map<String, Value>,
}

impl ResolvedTheme {
    /// 解析顺序：
    /// 1. 内置默认主题
    /// 2. 用户分类整体覆盖
    /// 3. `extend` 合并到已有分类
    /// 4. 生成未被覆盖的派生分类，再应用其 `extend`
    pub fn resolve(user: &Map<String, Value>) -> Result<Self, ConfigError> {
        let mut categories: Map<String, Value> = serde_json::from_str(DEFAULT_THEME)?;

        let extend = match user.get("extend") {
            Some(Value::Object(extend)) => Some(extend),
            Some(_) => return Err(ConfigError::InvalidTheme("extend".to_string())),
            None => None,
        };

        for (key, value) in user {
            if key == "extend" {
                continue;
            }
            if !value.is_object() {
                return Err(ConfigError::InvalidTheme(key.clone()));
            }
            categories.insert(key.clone(), value.clone());
        }

        if let Some(extend) = extend {
            for (key, value) in extend {
                if is_derived(key) && !categories.contains_key(key) {
                    continue;
                }
                let target = categories
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                deep_merge(target, value);
            }
        }

        for derived in DERIVED {
            if categories.contains_key(derived.key) {
                continue;
            }
            let mut value = Value::Object(derived.build(&categories));
            if let Some(patch) = extend.and_then(|e| e.get(derived.key)) {
                deep_merge(&mut value, patch);
            }
            categories.insert(derived.key.to_string(), value);
        }

        debug!(categories = categories.len(), "theme resolved");

        Ok(Self { categories })
    }

    /// 仅内置默认主题
    pub fn default_theme() -> Result<Self, ConfigError> {
        Self::resolve(&Map::new())
    }

    pub fn category(&self, name: &str) -> Option<&Value> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.categories.iter()
    }
}
