/// 在顶层按分隔符拆分
///
/// 括号（`()`、`[]`）与引号内的分隔符不参与拆分，结果片段已去除首尾空白，
/// 空片段被丢弃。
///
/// ```
/// use crosswind_core::split::split_top_level;
///
/// let parts = split_top_level("rgb(0, 0, 0), .a", ',');
/// assert_eq!(parts, vec!["rgb(0, 0, 0)", ".a"]);
/// ```
pub fn split_top_level(input: &str, delimiter: char) -> Vec<&str> {
    split_by(input, |c| c == delimiter)
}

/// 在顶层按空白拆分（如 `blur(4px) brightness(.5)`）
pub fn split_top_level_whitespace(input: &str) -> Vec<&str> {
    split_by(input, char::is_whitespace)
}

/// 逗号分隔的选择器列表
pub fn split_selector_list(selector: &str) -> Vec<&str> {
    split_top_level(selector, ',')
}

fn split_by(input: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_delimiter(c) => {
                push_part(&mut parts, &input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    push_part(&mut parts, &input[start..]);

    parts
}

fn push_part<'a>(parts: &mut Vec<&'a str>, part: &'a str) {
    let part = part.trim();
    if !part.is_empty() {
        parts.push(part);
    }
}

/// 解析 `name(args)` 形式的函数调用
///
/// 返回函数名与括号内的原始参数文本；不是单个函数调用时返回 `None`。
pub fn split_function(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    let open = value.find('(')?;
    if !value.ends_with(')') || open == 0 {
        return None;
    }
    let name = &value[..open];
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    // 第一个 `(` 必须与末尾的 `)` 配对
    let mut depth = 0usize;
    for (i, c) in value[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && open + i != value.len() - 1 {
                    return None;
                }
            }
            _ => {}
        }
    }

    Some((name, &value[open + 1..value.len() - 1]))
}
