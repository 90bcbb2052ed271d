use crate::declaration::escape_arbitrary;
use crosswind_core::{Ancestor, VariantKind, VariantToken};
use crosswind_css::{parse_fragment, ToCss};
use crosswind_theme::ThemeValueMap;
use phf::phf_map;
use swc_css_ast::{
    MediaConditionAllType, MediaConditionType, MediaConditionWithoutOrType, MediaInParens,
    MediaQueryList, MediaType,
};
use tracing::trace;

/// 布尔媒体特性 → 变体名（键为去空白、去括号、小写的形式）
static MEDIA_PARAMS: phf::Map<&'static str, &'static str> = phf_map! {
    "print" => "print",
    "orientation:portrait" => "portrait",
    "orientation:landscape" => "landscape",
    "prefers-contrast:more" => "contrast-more",
    "prefers-contrast:less" => "contrast-less",
    "prefers-color-scheme:dark" => "dark",
    "prefers-reduced-motion:no-preference" => "motion-safe",
    "prefers-reduced-motion:reduce" => "motion-reduce",
};

/// 不产生变体的媒体类型
const IGNORED_MEDIA_TYPES: &[&str] = &["screen", "all"];

/// 媒体条件 → 以 `and` 连接的各个括号项；含 `not` / `or` 或嵌套条件时为 `None`
fn media_features(condition: &MediaConditionType) -> Option<Vec<&MediaInParens>> {
    let mut features = Vec::new();
    match condition {
        MediaConditionType::All(condition) => {
            for item in &condition.conditions {
                match item {
                    MediaConditionAllType::MediaInParens(feature) => features.push(feature),
                    MediaConditionAllType::And(and) => features.push(&and.condition),
                    MediaConditionAllType::Not(_) | MediaConditionAllType::Or(_) => return None,
                }
            }
        }
        MediaConditionType::WithoutOr(condition) => {
            for item in &condition.conditions {
                match item {
                    MediaConditionWithoutOrType::MediaInParens(feature) => features.push(feature),
                    MediaConditionWithoutOrType::And(and) => features.push(&and.condition),
                    MediaConditionWithoutOrType::Not(_) => return None,
                }
            }
        }
    }
    if features
        .iter()
        .any(|feature| !matches!(feature, MediaInParens::Feature(_)))
    {
        return None;
    }
    Some(features)
}

fn compact(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn is_screen_feature(token: &str) -> bool {
    let compact = compact(token);
    compact.contains("width") || compact.contains("height")
}

/// 最外层若是一对完整的括号则去掉
fn strip_outer_parens(condition: &str) -> &str {
    let trimmed = condition.trim();
    let Some(inner) = trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return trimmed;
    };
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return trimmed,
            },
            _ => {}
        }
    }
    inner.trim()
}

/// `@media` / `@supports` 祖先链 → 变体前缀
pub struct ContextResolver<'a> {
    values: &'a ThemeValueMap,
}

impl<'a> ContextResolver<'a> {
    pub fn new(values: &'a ThemeValueMap) -> Self {
        Self { values }
    }

    /// 解析祖先链（由外到内）
    ///
    /// 返回 `None` 表示整条链无法转换：存在普通规则或其它 at-rule 祖先，
    /// 或媒体条件中有无法识别的部分。媒体变体排在 supports 变体之前。
    pub fn resolve(&self, ancestors: &[Ancestor]) -> Option<Vec<VariantToken>> {
        let mut media = Vec::new();
        let mut supports = Vec::new();

        for ancestor in ancestors {
            match ancestor {
                Ancestor::AtRule { name, params } if name.eq_ignore_ascii_case("media") => {
                    media.push(params.as_str())
                }
                Ancestor::AtRule { name, params } if name.eq_ignore_ascii_case("supports") => {
                    supports.push(params.as_str())
                }
                other => {
                    trace!(ancestor = ?other, "context not convertible");
                    return None;
                }
            }
        }

        let mut tokens = Vec::new();
        for params in media {
            let Some(resolved) = self.media(params) else {
                trace!(%params, "media query not convertible");
                return None;
            };
            tokens.extend(resolved);
        }
        if !supports.is_empty() {
            tokens.push(self.supports(&supports));
        }
        Some(tokens)
    }

    /// 单个 `@media` 条件；断点变体放在第一个宽高条件的位置
    fn media(&self, params: &str) -> Option<Vec<VariantToken>> {
        let MediaQueryList { mut queries, .. } = parse_fragment::<MediaQueryList>(params).ok()?;
        // 媒体查询列表无法用变体表达
        if queries.len() != 1 {
            return None;
        }
        let query = queries.remove(0);

        if let Some(modifier) = &query.modifier {
            if !modifier.value.eq_ignore_ascii_case("only") {
                return None;
            }
        }

        let mut tokens = Vec::new();
        if let Some(MediaType::Ident(media_type)) = &query.media_type {
            let media_type = media_type.value.to_ascii_lowercase();
            if !IGNORED_MEDIA_TYPES.contains(&media_type.as_str()) {
                let variant = MEDIA_PARAMS.get(media_type.as_str())?;
                tokens.push(VariantToken::new(VariantKind::Media, *variant));
            }
        }

        let features = match &query.condition {
            Some(condition) => media_features(condition)?,
            None => Vec::new(),
        };

        let mut screen_features = Vec::new();
        let mut screen_slot = None;
        for feature in features {
            let text = feature.to_css().ok()?;
            if is_screen_feature(&text) {
                screen_slot.get_or_insert(tokens.len());
                screen_features.push(text.trim().to_string());
                continue;
            }
            let key = compact(&text);
            let key = key.trim_start_matches('(').trim_end_matches(')');
            let variant = MEDIA_PARAMS.get(key)?;
            tokens.push(VariantToken::new(VariantKind::Media, *variant));
        }

        if let Some(slot) = screen_slot {
            let condition = screen_features.join(" and ");
            let screen = self.values.screen(&condition)?;
            tokens.insert(slot, VariantToken::new(VariantKind::Media, screen));
        }
        Some(tokens)
    }

    /// 所有 `@supports` 条件以 `and` 合并后查主题，未命中时输出任意变体
    fn supports(&self, params: &[&str]) -> VariantToken {
        let condition = params.join(" and ");
        let name = match self.values.supports(&condition) {
            Some(token) => format!("supports-{}", token),
            None => format!("supports-[{}]", escape_arbitrary(strip_outer_parens(&condition))),
        };
        VariantToken::new(VariantKind::Supports, name)
    }
}
