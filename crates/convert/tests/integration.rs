use crosswind_convert::{ConvertError, Converter};
use pretty_assertions::assert_eq;

const SIMPLE_CSS: &str = r#"
.foo {
  text-align: center;
  font-size: 12px;
  animation-delay: 200ms;

  &:hover {
    filter: blur(4px) brightness(0.5) sepia(100%) contrast(1) hue-rotate(30deg)
      invert(0) opacity(0.05) saturate(1.5);
    transform: translateX(12px) translateY(0.5em) translateZ(0.5rem)
      scaleY(0.725) rotate(124deg);
    font-size: 16px;
  }

  @media screen and (min-width: 768px) {
    font-weight: 600;
  }
}
"#;

fn converter(extra: &str) -> Converter {
    let json = format!(
        r##"{{
            "remInPx": 16,
            "theme": {{
                "extend": {{
                    "colors": {{
                        "custom-color": {{
                            "100": "#123456",
                            "gold": "hsl(41, 28.3%, 79.8%)"
                        }}
                    }},
                    "screens": {{
                        "custom-screen": {{ "min": "768px", "max": "1024px" }}
                    }}
                }},
                "supports": {{
                    "grid": "display: grid",
                    "flex": "display: flex"
                }}
            }}
            {}
        }}"##,
        extra
    );
    Converter::from_json(&json).unwrap()
}

fn nodes(converter: &Converter, css: &str) -> Vec<(String, Vec<String>)> {
    converter
        .convert_css(css)
        .unwrap()
        .nodes
        .into_iter()
        .map(|node| (node.placement.selector, node.classes))
        .collect()
}

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

fn node(selector: &str, classes: &[&str]) -> (String, Vec<String>) {
    (
        selector.to_string(),
        classes.iter().map(|c| c.to_string()).collect(),
    )
}

#[test]
fn test_simple_css() {
    assert_eq!(
        nodes(&converter(""), SIMPLE_CSS),
        vec![node(
            ".foo",
            &[
                "text-center",
                "text-xs",
                "hover:blur-sm",
                "hover:brightness-50",
                "hover:sepia",
                "hover:contrast-100",
                "hover:hue-rotate-30",
                "hover:invert-0",
                "hover:opacity-5",
                "hover:saturate-150",
                "hover:text-base",
                "md:font-semibold",
            ],
        )]
    );
}

#[test]
fn test_simple_css_output() {
    let output = converter("").convert_css(SIMPLE_CSS).unwrap();

    let css = squash(&output.css);
    assert!(css.starts_with(".foo{@apply text-center text-xs hover:blur-sm hover:brightness-50"));
    assert!(css.contains(";animation-delay:200ms"));
    // 无法转换的 transform 留在 hover 规则中
    assert!(css.contains(".foo:hover{transform:translateX(12px)"));
    assert!(!output.css.contains("font-weight"));
    assert!(!output.css.contains("@media"));
}

#[test]
fn test_prefix_separator_and_core_plugins() {
    let converter = converter(
        r#", "prefix": "tw-", "separator": "_", "corePlugins": { "fontWeight": false }"#,
    );
    assert_eq!(
        nodes(&converter, SIMPLE_CSS),
        vec![node(
            ".foo",
            &[
                "tw-text-center",
                "tw-text-xs",
                "hover_tw-blur-sm",
                "hover_tw-brightness-50",
                "hover_tw-sepia",
                "hover_tw-contrast-100",
                "hover_tw-hue-rotate-30",
                "hover_tw-invert-0",
                "hover_tw-opacity-5",
                "hover_tw-saturate-150",
                "hover_tw-text-base",
            ],
        )]
    );

    // 被禁用的声明保持原样
    let output = converter.convert_css(SIMPLE_CSS).unwrap();
    assert!(squash(&output.css).contains("font-weight:600"));
}

#[test]
fn test_arbitrary_properties() {
    let converter = converter(r#", "arbitraryPropertiesIsEnabled": true"#);
    assert_eq!(
        nodes(&converter, SIMPLE_CSS),
        vec![node(
            ".foo",
            &[
                "text-center",
                "text-xs",
                "[animation-delay:200ms]",
                "hover:blur-sm",
                "hover:brightness-50",
                "hover:sepia",
                "hover:contrast-100",
                "hover:hue-rotate-30",
                "hover:invert-0",
                "hover:opacity-5",
                "hover:saturate-150",
                "hover:[transform:translateX(12px)_translateY(0.5em)_translateZ(0.5rem)_scaleY(0.725)_rotate(124deg)]",
                "hover:text-base",
                "md:font-semibold",
            ],
        )]
    );

    let output = converter.convert_css(SIMPLE_CSS).unwrap();
    assert_eq!(
        squash(&output.css),
        ".foo{@apply text-center text-xs [animation-delay:200ms] hover:blur-sm hover:brightness-50 \
         hover:sepia hover:contrast-100 hover:hue-rotate-30 hover:invert-0 hover:opacity-5 \
         hover:saturate-150 hover:[transform:translateX(12px)_translateY(0.5em)_translateZ(0.5rem)_scaleY(0.725)_rotate(124deg)] \
         hover:text-base md:font-semibold}"
    );
}

#[test]
fn test_empty_input() {
    let output = converter("").convert_css("").unwrap();
    assert_eq!(output.css, "");
    assert!(output.nodes.is_empty());
}

#[test]
fn test_invalid_css_is_fatal() {
    let result = converter("").convert_css(".some-class { display: block; ");
    assert!(matches!(result, Err(ConvertError::Css(_))));
}

#[test]
fn test_theme_colors() {
    let converter = converter("");
    assert_eq!(
        nodes(
            &converter,
            ".a { border-color: hsl(41,28.3%,79.8%); color: #123456; background-color: hsl(1, 2%, 3%); }"
        ),
        vec![node(
            ".a",
            &[
                "border-custom-color-gold",
                "text-custom-color-100",
                "bg-[hsl(1,2%,3%)]",
            ],
        )]
    );
}

#[test]
fn test_css_variables_get_type_hints() {
    assert_eq!(
        nodes(
            &converter(""),
            ".a { font-size: var(--some-size); color: var(--some-color); caret-color: var(--cyan); }"
        ),
        vec![node(
            ".a",
            &[
                "text-[length:var(--some-size)]",
                "text-[color:var(--some-color)]",
                "caret-[color:var(--cyan)]",
            ],
        )]
    );
}

#[test]
fn test_context_chain() {
    let css = r#"
.baz { position: relative; }

@media (prefers-reduced-motion: no-preference) and (min-width: 768px) and (max-width: 1024px) {
  @supports (display: flex) {
    .baz {
      margin-top: 0.75rem;
      margin-left: 1.5rem;
      margin-right: 1.5rem;
      margin-bottom: -0.8rem;
    }
  }
}

@supports (scroll-snap-align: end) {
  .baz { scroll-snap-align: end; }
}
"#;
    assert_eq!(
        nodes(&converter(""), css),
        vec![node(
            ".baz",
            &[
                "relative",
                "motion-safe:custom-screen:supports-flex:mt-3",
                "motion-safe:custom-screen:supports-flex:-mb-[0.8rem]",
                "motion-safe:custom-screen:supports-flex:mx-6",
                "supports-[scroll-snap-align:end]:snap-end",
            ],
        )]
    );
}

#[test]
fn test_context_and_selector_variants() {
    let css = r#"
.foo-bar { text-align: left; }

@media (min-width: 1280px) {
  .foo-bar:active { color: #075985; }
  .foo-bar:active:focus { justify-items: start; }
}
"#;
    assert_eq!(
        nodes(&converter(""), css),
        vec![node(
            ".foo-bar",
            &[
                "text-left",
                "xl:active:text-sky-800",
                "xl:active:focus:justify-items-start",
            ],
        )]
    );
}

#[test]
fn test_structural_selectors_are_kept() {
    let css = r#"
.foo { display: block; }
.foo [aria-role='button'] { text-transform: uppercase; }
.foo[aria-hidden='false'] { visibility: collapse; }
.foo[aria-hidden='true'] { display: none; }
"#;
    assert_eq!(
        nodes(&converter(""), css),
        vec![
            node(".foo", &["block", "aria-hidden:hidden"]),
            node(".foo [aria-role='button']", &["uppercase"]),
            node(".foo[aria-hidden='false']", &["collapse"]),
        ]
    );

    // 没有可挂载的基底规则时，带变体的选择器保持原样
    assert_eq!(
        nodes(&converter(""), ".foo[aria-hidden='true'] { display: none; }"),
        vec![node(".foo[aria-hidden='true']", &["hidden"])]
    );
}

#[test]
fn test_separately_authored_variants_are_distinct() {
    let output = converter("")
        .convert_css(".foo:hover { display: none; } .foo:focus { display: block; }")
        .unwrap();
    let keys: Vec<&str> = output.nodes.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec![".foo:hover", ".foo:focus"]);
    assert_eq!(
        nodes(&converter(""), ".foo:hover { display: none; } .foo:focus { display: block; }"),
        vec![node(".foo:hover", &["hidden"]), node(".foo:focus", &["block"])]
    );
}

#[test]
fn test_forward_reference_keeps_its_position() {
    let css = r#"
.card:hover { opacity: 0.5; }
.card { display: flex; }
@media (min-width: 768px) {
  .card:hover { opacity: 1; }
}
"#;
    // 先于基底出现的变体规则成为独立节点，后续规则不会并回去
    assert_eq!(
        nodes(&converter(""), css),
        vec![
            node(".card:hover", &["opacity-50"]),
            node(".card", &["flex", "md:hover:opacity-100"]),
        ]
    );
}

#[test]
fn test_vetoed_context_keeps_selector() {
    let css = r#"
.link { display: inline; }
@media (hover: hover) {
  .link:hover { text-decoration-line: underline; }
}
"#;
    let output = converter("").convert_css(css).unwrap();
    assert_eq!(
        output
            .nodes
            .iter()
            .map(|n| (n.placement.selector.clone(), n.classes.clone()))
            .collect::<Vec<_>>(),
        vec![node(".link", &["inline"]), node(".link:hover", &["underline"])]
    );
    let css = squash(&output.css);
    assert!(css.contains("@media (hover:hover){.link:hover{@apply underline}}"));
    assert!(!css.contains("hover:underline"));
}

#[test]
fn test_media_screen_merges_into_dependent() {
    let css = r#"
.a { display: block; }
@media screen {
  .a { margin-top: 1rem; }
  .a:hover { display: none; }
}
"#;
    let output = converter("").convert_css(css).unwrap();
    assert_eq!(
        output
            .nodes
            .iter()
            .map(|n| (n.placement.selector.clone(), n.classes.clone()))
            .collect::<Vec<_>>(),
        vec![node(".a", &["block", "mt-4", "hover:hidden"])]
    );
    assert!(!output.css.contains("@media"));
}

#[test]
fn test_box_shorthand_reduction() {
    assert_eq!(
        nodes(
            &converter(""),
            ".a { padding: 1rem; } .b { padding-top: 1rem; padding-right: 1rem; padding-bottom: 1rem; } .c { margin-left: -0.75rem; margin-right: 0.75rem; }"
        ),
        vec![
            node(".a", &["p-4"]),
            node(".b", &["pr-4", "py-4"]),
            node(".c", &["-ml-3", "mr-3"]),
        ]
    );
}

#[test]
fn test_arbitrary_values() {
    assert_eq!(
        nodes(
            &converter(""),
            ".bar { animation: some-animation 2s linear infinite; transition-timing-function: cubic-bezier(.23, 0, .25, 1); background-image: url('/some-path/to/large_image.jpg'); }"
        ),
        vec![node(
            ".bar",
            &[
                "animate-[some-animation_2s_linear_infinite]",
                "ease-[cubic-bezier(0.23,0,0.25,1)]",
                "bg-[url('/some-path/to/large\\_image.jpg')]",
            ],
        )]
    );
}

#[test]
fn test_without_nesting_flattening() {
    let converter = converter(r#", "flattenNesting": false"#);
    let output = converter
        .convert_css(".a { display: block; .b { display: none; } }")
        .unwrap();
    assert_eq!(
        output
            .nodes
            .iter()
            .map(|n| n.key.as_str())
            .collect::<Vec<_>>(),
        vec![".a", "r(.a)__.b"]
    );
}
