//! Shorthand properties.
//!
//! Every sub-component must convert; the first failure discards the whole
//! declaration so a shorthand never yields a partial class set.

use super::DeclarationConverter;
use crate::keywords::{lookup_keyword, BORDER_STYLE, FLEX_DIRECTION, FLEX_WRAP};
use crate::property::TypeHint;
use crosswind_core::normalize::{is_css_variable, parse_color};
use crosswind_core::split::{split_function, split_top_level, split_top_level_whitespace};

/// 依次转换每个子项，任一失败则整体失败
fn convert_all<T, F>(items: impl IntoIterator<Item = T>, mut convert: F) -> Option<Vec<String>>
where
    F: FnMut(T) -> Option<Vec<String>>,
{
    items.into_iter().try_fold(Vec::new(), |mut classes, item| {
        classes.extend(convert(item)?);
        Some(classes)
    })
}

/// 1–4 个盒模型值 → 上 右 下 左
fn expand_box<'v>(values: &[&'v str]) -> Option<[&'v str; 4]> {
    match *values {
        [all] => Some([all, all, all, all]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}

fn is_color_token(token: &str) -> bool {
    matches!(
        token.to_ascii_lowercase().as_str(),
        "currentcolor" | "current" | "inherit" | "transparent"
    ) || parse_color(token).is_some()
}

#[derive(Default)]
struct BorderParts<'v> {
    width: Option<&'v str>,
    style: Option<&'v str>,
    color: Option<&'v str>,
}

impl<'v> BorderParts<'v> {
    /// 按值的形态归类；同一部分出现两次即失败
    fn parse(value: &'v str) -> Option<Self> {
        let tokens = split_top_level_whitespace(value);
        if tokens.is_empty() || tokens.len() > 3 {
            return None;
        }

        let mut parts = Self::default();
        for token in tokens {
            let slot = if lookup_keyword(&BORDER_STYLE, token).is_some() {
                &mut parts.style
            } else if is_color_token(token) {
                &mut parts.color
            } else if is_css_variable(token) && parts.width.is_some() {
                &mut parts.color
            } else {
                &mut parts.width
            };
            if slot.replace(token).is_some() {
                return None;
            }
        }
        Some(parts)
    }
}

/// 滤镜函数名 → (分类, 类名前缀)
fn filter_function(name: &str, backdrop: bool) -> Option<(&'static str, &'static str)> {
    let entry = match (name, backdrop) {
        ("blur", false) => ("blur", "blur"),
        ("brightness", false) => ("brightness", "brightness"),
        ("contrast", false) => ("contrast", "contrast"),
        ("grayscale", false) => ("grayscale", "grayscale"),
        ("hue-rotate", false) => ("hueRotate", "hue-rotate"),
        ("invert", false) => ("invert", "invert"),
        ("opacity", false) => ("opacity", "opacity"),
        ("saturate", false) => ("saturate", "saturate"),
        ("sepia", false) => ("sepia", "sepia"),
        ("blur", true) => ("backdropBlur", "backdrop-blur"),
        ("brightness", true) => ("backdropBrightness", "backdrop-brightness"),
        ("contrast", true) => ("backdropContrast", "backdrop-contrast"),
        ("grayscale", true) => ("backdropGrayscale", "backdrop-grayscale"),
        ("hue-rotate", true) => ("backdropHueRotate", "backdrop-hue-rotate"),
        ("invert", true) => ("backdropInvert", "backdrop-invert"),
        ("opacity", true) => ("backdropOpacity", "backdrop-opacity"),
        ("saturate", true) => ("backdropSaturate", "backdrop-saturate"),
        ("sepia", true) => ("backdropSepia", "backdrop-sepia"),
        _ => return None,
    };
    Some(entry)
}

/// 过渡第三个位置：以数字开头视为延迟
fn starts_with_number(token: &str) -> bool {
    let token = token.strip_prefix(['-', '+']).unwrap_or(token);
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

impl DeclarationConverter<'_> {
    /// `border: 1px solid red` → `border border-solid border-red-500`
    pub(super) fn border(&self, prefix: &str, value: &str) -> Option<Vec<String>> {
        let parts = BorderParts::parse(value)?;

        let mut classes = Vec::new();
        if let Some(width) = parts.width {
            classes.push(self.theme_class(
                "borderWidth",
                prefix,
                width,
                false,
                Some(TypeHint::Length),
            ));
        }
        if let Some(style) = parts.style {
            classes.push(lookup_keyword(&BORDER_STYLE, style)?.to_string());
        }
        if let Some(color) = parts.color {
            let color = if color.eq_ignore_ascii_case("currentcolor") {
                "currentColor"
            } else {
                color
            };
            classes.push(self.theme_class(
                "borderColor",
                prefix,
                color,
                false,
                Some(TypeHint::Color),
            ));
        }
        Some(classes)
    }

    /// `margin: 1rem 2rem` → `mt-4 mr-8 mb-4 ml-8`
    pub(super) fn box_sides(
        &self,
        category: &str,
        prefixes: [&str; 4],
        signed: bool,
        value: &str,
    ) -> Option<Vec<String>> {
        let sides = expand_box(&split_top_level_whitespace(value))?;
        convert_all(prefixes.iter().zip(sides), |(prefix, side)| {
            Some(vec![self.theme_class(
                category,
                prefix,
                side,
                signed,
                Some(TypeHint::Length),
            )])
        })
    }

    /// `margin-inline: 1rem 2rem` → `ml-4 mr-8`
    pub(super) fn axis(
        &self,
        category: &str,
        prefixes: [&str; 2],
        signed: bool,
        value: &str,
    ) -> Option<Vec<String>> {
        let values = split_top_level_whitespace(value);
        let [start, end] = match *values.as_slice() {
            [both] => [both, both],
            [start, end] => [start, end],
            _ => return None,
        };
        convert_all(prefixes.iter().zip([start, end]), |(prefix, value)| {
            Some(vec![self.theme_class(
                category,
                prefix,
                value,
                signed,
                Some(TypeHint::Length),
            )])
        })
    }

    /// `flex-flow: row wrap` → `flex-row flex-wrap`
    pub(super) fn flex_flow(&self, value: &str) -> Option<Vec<String>> {
        let tokens = split_top_level_whitespace(value);
        if tokens.is_empty() || tokens.len() > 2 {
            return None;
        }

        let (mut direction, mut wrap) = (None, None);
        for token in tokens {
            let slot = if let Some(class) = lookup_keyword(&FLEX_DIRECTION, token) {
                direction.replace(class)
            } else if let Some(class) = lookup_keyword(&FLEX_WRAP, token) {
                wrap.replace(class)
            } else {
                return None;
            };
            if slot.is_some() {
                return None;
            }
        }

        Some(
            [direction, wrap]
                .into_iter()
                .flatten()
                .map(str::to_string)
                .collect(),
        )
    }

    /// 每个变换函数单独转换，函数名不可重复；任一未知函数导致整体失败
    pub(super) fn transform(&self, value: &str) -> Option<Vec<String>> {
        if value.eq_ignore_ascii_case("none") {
            return Some(vec!["transform-none".to_string()]);
        }

        let mut seen: Vec<String> = Vec::new();
        convert_all(split_top_level_whitespace(value), |function| {
            let (name, args) = split_function(function)?;
            let name = name.to_ascii_lowercase();
            if seen.contains(&name) {
                return None;
            }
            let args: Vec<&str> = split_top_level(args, ',');
            let classes = self.transform_function(&name, &args)?;
            seen.push(name);
            Some(classes)
        })
    }

    fn transform_function(&self, name: &str, args: &[&str]) -> Option<Vec<String>> {
        let class = |category: &str, prefix: &str, value: &str, hint: Option<TypeHint>| {
            self.theme_class(category, prefix, value, true, hint)
        };
        let number = Some(TypeHint::Number);
        let length = Some(TypeHint::Length);

        let classes = match (name, args) {
            ("scale", &[both]) => vec![class("scale", "scale", both, number)],
            ("scale", &[x, y]) if x == y => vec![class("scale", "scale", x, number)],
            ("scale", &[x, y]) => vec![
                class("scale", "scale-x", x, number),
                class("scale", "scale-y", y, number),
            ],
            ("scalex", &[x]) => vec![class("scale", "scale-x", x, number)],
            ("scaley", &[y]) => vec![class("scale", "scale-y", y, number)],
            ("translate", &[x]) => vec![class("translate", "translate-x", x, length)],
            ("translate", &[x, y]) => vec![
                class("translate", "translate-x", x, length),
                class("translate", "translate-y", y, length),
            ],
            ("translatex", &[x]) => vec![class("translate", "translate-x", x, length)],
            ("translatey", &[y]) => vec![class("translate", "translate-y", y, length)],
            ("skew", &[x]) => vec![class("skew", "skew-x", x, None)],
            ("skew", &[x, y]) => vec![
                class("skew", "skew-x", x, None),
                class("skew", "skew-y", y, None),
            ],
            ("skewx", &[x]) => vec![class("skew", "skew-x", x, None)],
            ("skewy", &[y]) => vec![class("skew", "skew-y", y, None)],
            ("rotate", &[angle]) => vec![class("rotate", "rotate", angle, None)],
            _ => return None,
        };
        Some(classes)
    }

    /// `filter` / `backdrop-filter`，每个函数只能出现一次
    pub(super) fn filter(&self, backdrop: bool, value: &str) -> Option<Vec<String>> {
        if value.eq_ignore_ascii_case("none") {
            let class = if backdrop {
                "backdrop-filter-none"
            } else {
                "filter-none"
            };
            return Some(vec![class.to_string()]);
        }

        let mut seen: Vec<String> = Vec::new();
        convert_all(split_top_level_whitespace(value), |function| {
            let (name, args) = split_function(function)?;
            let name = name.to_ascii_lowercase();
            if seen.contains(&name) {
                return None;
            }
            let (category, prefix) = filter_function(&name, backdrop)?;
            let signed = name == "hue-rotate";
            let class = self.theme_class(category, prefix, args, signed, None);
            seen.push(name);
            Some(vec![class])
        })
    }

    /// `transition: property duration [timing-function|delay] [delay]`
    ///
    /// 只接受单个过渡项；多个逗号分隔的过渡无法用工具类表达。
    pub(super) fn transition(&self, value: &str) -> Option<Vec<String>> {
        if split_top_level(value, ',').len() != 1 {
            return None;
        }

        let slots = split_top_level_whitespace(value);
        let class = |category: &str, prefix: &str, value: &str| {
            self.theme_class(category, prefix, value, false, None)
        };

        let mut classes = Vec::new();
        match slots.as_slice() {
            [property, rest @ ..] if rest.len() <= 3 => {
                classes.push(class("transitionProperty", "transition", property));
                if let Some(duration) = rest.first() {
                    classes.push(class("transitionDuration", "duration", duration));
                }
                let mut has_delay = false;
                if let Some(third) = rest.get(1) {
                    if starts_with_number(third) {
                        classes.push(class("transitionDelay", "delay", third));
                        has_delay = true;
                    } else {
                        classes.push(class("transitionTimingFunction", "ease", third));
                    }
                }
                if let Some(delay) = rest.get(2) {
                    // 第三项已经是延迟时不能再有第四项
                    if has_delay || !starts_with_number(delay) {
                        return None;
                    }
                    classes.push(class("transitionDelay", "delay", delay));
                }
            }
            _ => return None,
        }
        Some(classes)
    }
}
