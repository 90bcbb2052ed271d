use crosswind_css::{apply_classes, emit_css, flatten_nesting, parse_css, NodeKind};
use crosswind_core::{Placement, RegistryEntry};
use pretty_assertions::assert_eq;

/// 折叠空白后比较，不依赖生成器的换行细节
fn squash(css: &str) -> String {
    let collapsed = css.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::new();
    for c in collapsed.chars() {
        if matches!(c, '{' | '}' | ';' | ':' | ',' | '!') && out.ends_with(' ') {
            out.pop();
        }
        if c == '}' && out.ends_with(';') {
            out.pop();
        }
        if c == ' ' && matches!(out.chars().last(), Some('{' | '}' | ';' | ':' | ',')) {
            continue;
        }
        out.push(c);
    }
    out
}

#[test]
fn test_parse_flatten_emit() {
    let tree = parse_css(".foo { color: red; &:hover { color: blue; } }").unwrap();
    let flat = flatten_nesting(&tree);

    assert_eq!(
        squash(&emit_css(&flat).unwrap()),
        ".foo{color:red}.foo:hover{color:blue}"
    );
}

#[test]
fn test_roundtrip_keeps_unconverted_content() {
    let css = "@media (min-width: 768px) {\n  .bar {\n    -webkit-appearance: none;\n  }\n}\n";
    let tree = parse_css(css).unwrap();

    assert_eq!(squash(&emit_css(&tree).unwrap()), squash(css));
}

#[test]
fn test_write_back_apply() {
    let mut tree = parse_css(".foo { text-align: center; color: red; }").unwrap();
    let (rule, converted) = {
        let rules = tree.rules();
        let view = &rules[0];
        (view.id, vec![view.declarations[0].0])
    };

    let entries = vec![RegistryEntry {
        key: ".foo".to_string(),
        placement: Placement::new(rule, ".foo"),
        classes: vec!["text-center".to_string()],
    }];
    apply_classes(&mut tree, &entries, &converted);

    assert_eq!(
        squash(&emit_css(&tree).unwrap()),
        ".foo{@apply text-center;color:red}"
    );
    assert!(matches!(
        tree.node(tree.children(rule)[0]).kind,
        NodeKind::AtRule { ref name, .. } if name == "apply"
    ));
}

#[test]
fn test_invalid_css_is_an_error() {
    assert!(parse_css(".foo { color: red;").is_err());
}
