//! Value normalization for theme lookups.
//!
//! Theme values and declaration values go through the same functions, so a
//! lookup is a plain string comparison afterwards.

use crate::split::split_function;
use palette::{FromColor, Hsl, Hwb, Srgb};

// ── Text ────────────────────────────────────────────────────────────────────

/// 折叠连续空白并去除首尾空白
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 去掉 `,` `;` `:` 两侧的空白
///
/// `display: grid` → `display:grid`，`rgb(0, 0, 0)` → `rgb(0,0,0)`
pub fn remove_unnecessary_spaces(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, ',' | ';' | ':') {
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
            out.push(c);
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// 为 `.5` 这类数字补上前导 `0`
///
/// 仅在值开头或 `( , ; + - / *` 与空白之后生效：`blur(.5px)` → `blur(0.5px)`
pub fn normalize_numbers(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    let mut prev: Option<char> = None;
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.'
            && chars.peek().is_some_and(|n| n.is_ascii_digit())
            && prev.map_or(true, |p| p.is_whitespace() || "(,;+-/*".contains(p))
        {
            out.push('0');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// 通用值规范化：空白折叠 + 标点空白移除 + 数字补零
pub fn normalize_value(value: &str) -> String {
    normalize_numbers(&remove_unnecessary_spaces(&collapse_whitespace(value)))
}

/// 是否为 `var(--...)` 引用
///
/// 这类值在转换时无法得知真实取值，从不参与主题匹配。
pub fn is_css_variable(value: &str) -> bool {
    matches!(split_function(value), Some(("var", args)) if args.trim_start().starts_with("--"))
}

// ── Numbers & lengths ───────────────────────────────────────────────────────

/// 数字转字符串（去掉多余的小数位，`12.0` → `12`）
pub fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

/// `rem` → `px`，非 `rem` 数值返回 `None`
pub fn rem_to_px(value: &str, rem_in_px: f64) -> Option<String> {
    let number = value.strip_suffix("rem")?;
    let digits = number.strip_prefix('-').unwrap_or(number);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let n: f64 = number.parse().ok()?;
    Some(format!("{}px", format_number(n * rem_in_px)))
}

/// 数值为零的尺寸（`0`、`0px`、`0.0rem`、`0deg`、`0%`）
fn is_zero_dimension(value: &str) -> bool {
    let unit_start = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(unit_start);

    !number.is_empty()
        && unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%')
        && number.parse::<f64>().is_ok_and(|n| n == 0.0)
}

/// 尺寸值规范化
///
/// 零值统一为 `0`；配置了 rem 比例时 `rem` 换算为 `px`。
pub fn normalize_size_value(value: &str, rem_in_px: Option<f64>) -> String {
    let value = normalize_numbers(value.trim());
    if is_zero_dimension(&value) {
        return "0".to_string();
    }
    if let Some(px) = rem_in_px.and_then(|ratio| rem_to_px(&value, ratio)) {
        return px;
    }
    value
}

/// 时间值规范化：`0.3s` → `300ms`
pub fn normalize_time_value(value: &str) -> String {
    let value = normalize_numbers(value.trim());
    if let Some(number) = value.strip_suffix("ms") {
        if number.parse::<f64>().is_ok() {
            return value;
        }
    }
    if let Some(number) = value.strip_suffix('s') {
        if let Ok(n) = number.parse::<f64>() {
            return format!("{}ms", format_number(n * 1000.0));
        }
    }
    value
}

// ── Colors ──────────────────────────────────────────────────────────────────

/// 解析后的颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Srgb<u8>,
    /// 0.0 ..= 1.0
    pub alpha: f32,
}

impl Rgba {
    pub fn opaque(color: Srgb<u8>) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// 小写十六进制；透明度小于 1 时追加 alpha 字节
    pub fn to_hex(&self) -> String {
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            self.color.red, self.color.green, self.color.blue
        );
        if self.alpha < 1.0 {
            hex.push_str(&format!("{:02x}", (self.alpha * 255.0).round() as u8));
        }
        hex
    }
}

/// 解析 CSS 颜色：十六进制、命名色、`rgb()`/`rgba()`、`hsl()`/`hsla()`、`hwb()`
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if value == "transparent" {
        return Some(Rgba {
            color: Srgb::new(0, 0, 0),
            alpha: 0.0,
        });
    }
    if let Some((name, args)) = split_function(&value) {
        let args = color_args(args);
        return match name {
            "rgb" | "rgba" => parse_rgb(&args),
            "hsl" | "hsla" => parse_hsl(&args),
            "hwb" => parse_hwb(&args),
            _ => None,
        };
    }

    palette::named::from_str(&value).map(Rgba::opaque)
}

/// 颜色值规范化，无法解析时原样返回
pub fn normalize_color_value(value: &str) -> String {
    match parse_color(value) {
        Some(color) => color.to_hex(),
        None => value.trim().to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channels: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d * 17) as u8)
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect(),
        _ => return None,
    };

    Some(Rgba {
        color: Srgb::new(channels[0], channels[1], channels[2]),
        alpha: channels.get(3).map_or(1.0, |a| *a as f32 / 255.0),
    })
}

fn color_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_channel(token: &str) -> Option<u8> {
    let n = match token.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? * 2.55,
        None => token.parse::<f32>().ok()?,
    };
    Some(n.clamp(0.0, 255.0).round() as u8)
}

fn parse_unit_interval(token: &str) -> Option<f32> {
    let n = match token.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0,
        None => token.parse::<f32>().ok()?,
    };
    Some(n.clamp(0.0, 1.0))
}

fn parse_percent(token: &str) -> Option<f32> {
    let n = token.strip_suffix('%').unwrap_or(token).parse::<f32>().ok()?;
    Some((n / 100.0).clamp(0.0, 1.0))
}

fn parse_hue(token: &str) -> Option<f32> {
    // grad 必须先于 rad 判断
    if let Some(n) = token.strip_suffix("deg") {
        return n.parse().ok();
    }
    if let Some(n) = token.strip_suffix("grad") {
        return n.parse::<f32>().ok().map(|n| n * 0.9);
    }
    if let Some(n) = token.strip_suffix("rad") {
        return n.parse::<f32>().ok().map(f32::to_degrees);
    }
    if let Some(n) = token.strip_suffix("turn") {
        return n.parse::<f32>().ok().map(|n| n * 360.0);
    }
    token.parse().ok()
}

fn parse_alpha(args: &[&str]) -> Option<f32> {
    match args.get(3) {
        Some(token) => parse_unit_interval(token),
        None => Some(1.0),
    }
}

fn parse_rgb(args: &[&str]) -> Option<Rgba> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    Some(Rgba {
        color: Srgb::new(
            parse_channel(args[0])?,
            parse_channel(args[1])?,
            parse_channel(args[2])?,
        ),
        alpha: parse_alpha(args)?,
    })
}

fn parse_hsl(args: &[&str]) -> Option<Rgba> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hsl: Hsl = Hsl::new(
        parse_hue(args[0])?,
        parse_percent(args[1])?,
        parse_percent(args[2])?,
    );
    let rgb: Srgb = Srgb::from_color(hsl);
    Some(Rgba {
        color: rgb.into_format(),
        alpha: parse_alpha(args)?,
    })
}

fn parse_hwb(args: &[&str]) -> Option<Rgba> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hwb: Hwb = Hwb::new(
        parse_hue(args[0])?,
        parse_percent(args[1])?,
        parse_percent(args[2])?,
    );
    let rgb: Srgb = Srgb::from_color(hwb);
    Some(Rgba {
        color: rgb.into_format(),
        alpha: parse_alpha(args)?,
    })
}
