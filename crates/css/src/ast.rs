use crosswind_core::Declaration;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    AtRulePrelude, ComponentValue, Declaration as SwcDeclaration, DeclarationName, Ident,
    ImportantFlag, ListOfComponentValues, SimpleBlock, Token, TokenAndSpan,
};

/// 原样输出的标识符（`raw` 与 `value` 相同，生成器不做转义）
pub fn raw_ident(text: &str) -> Ident {
    Ident {
        span: DUMMY_SP,
        value: text.into(),
        raw: Some(text.into()),
    }
}

/// at-rule 头部参数 → 前导空白 + 原样文本
pub fn raw_prelude(params: &str) -> Option<Box<AtRulePrelude>> {
    if params.is_empty() {
        return None;
    }
    let whitespace = ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token: Token::WhiteSpace { value: " ".into() },
    }));
    Some(Box::new(AtRulePrelude::ListOfComponentValues(
        ListOfComponentValues {
            span: DUMMY_SP,
            children: vec![
                whitespace,
                ComponentValue::Ident(Box::new(raw_ident(params))),
            ],
        },
    )))
}

/// 从 crosswind Declaration 创建 SWC Declaration
pub fn swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(raw_ident(&decl.property)),
        value: vec![ComponentValue::Ident(Box::new(raw_ident(&decl.value)))],
        important: decl.important.then(|| ImportantFlag {
            span: DUMMY_SP,
            value: raw_ident("important"),
        }),
    }
}

/// 花括号块
pub fn brace_block(value: Vec<ComponentValue>) -> SimpleBlock {
    SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value,
    }
}
