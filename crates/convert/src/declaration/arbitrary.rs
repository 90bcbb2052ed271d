use crate::property::TypeHint;
use crosswind_core::normalize::{is_css_variable, normalize_value};

/// 转义任意值：`_` → `\_`，空白 → `_`
///
/// ```
/// use crosswind_convert::declaration::escape_arbitrary;
///
/// assert_eq!(escape_arbitrary("some-animation  2s linear"), "some-animation_2s_linear");
/// assert_eq!(escape_arbitrary("url(large_image.jpg)"), "url(large\\_image.jpg)");
/// ```
pub fn escape_arbitrary(value: &str) -> String {
    normalize_value(value).replace('_', "\\_").replace(' ', "_")
}

/// `prefix-[value]`，`var()` 引用附带类型提示：`text-[color:var(--c)]`
pub fn arbitrary_class(prefix: &str, value: &str, hint: Option<TypeHint>) -> String {
    let escaped = escape_arbitrary(value);
    match hint {
        Some(hint) if is_css_variable(value) => {
            format!("{}-[{}:{}]", prefix, hint.as_str(), escaped)
        }
        _ => format!("{}-[{}]", prefix, escaped),
    }
}

/// 任意属性：`[animation-delay:200ms]`
pub fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", property.trim(), escape_arbitrary(value))
}

/// 令牌 → 类名，`DEFAULT` 只输出前缀
pub fn token_class(prefix: &str, token: &str) -> String {
    if token == "DEFAULT" {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_class() {
        assert_eq!(arbitrary_class("top", "13px", None), "top-[13px]");
        assert_eq!(
            arbitrary_class("text", "var(--some-color)", Some(TypeHint::Color)),
            "text-[color:var(--some-color)]"
        );
        // 提示只用于 var()
        assert_eq!(
            arbitrary_class("text", "red", Some(TypeHint::Color)),
            "text-[red]"
        );
        assert_eq!(
            arbitrary_class("ease", "cubic-bezier(.23, 0, .25, 1)", None),
            "ease-[cubic-bezier(0.23,0,0.25,1)]"
        );
    }

    #[test]
    fn test_arbitrary_property() {
        assert_eq!(
            arbitrary_property("animation-delay", "200ms"),
            "[animation-delay:200ms]"
        );
        assert_eq!(
            arbitrary_property("transform", "translateX(12px) rotate(124deg)"),
            "[transform:translateX(12px)_rotate(124deg)]"
        );
    }

    #[test]
    fn test_token_class() {
        assert_eq!(token_class("rounded", "DEFAULT"), "rounded");
        assert_eq!(token_class("rounded", "lg"), "rounded-lg");
    }
}
