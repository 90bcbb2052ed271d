use crosswind_theme::{load_config_from_json, ConfigError, ThemeValueMap};
use pretty_assertions::assert_eq;

fn value_map(json: &str) -> ThemeValueMap {
    let config = load_config_from_json(json).expect("valid config");
    let theme = config.resolve_theme().expect("valid theme");
    ThemeValueMap::from_theme(&theme, config.rem_in_px)
}

#[test]
fn test_config_to_lookup() {
    let map = value_map(
        r##"{
            "remInPx": 16,
            "theme": {
                "extend": {
                    "colors": { "custom-color": { "100": "#123456", "gold": "hsl(41, 28.3%, 79.8%)" } },
                    "screens": { "custom-screen": { "min": "768px", "max": "1024px" } }
                },
                "supports": { "grid": "display: grid" }
            }
        }"##,
    );

    // 扩展的颜色同时进入派生分类
    assert_eq!(map.lookup("textColor", "#123456"), Some("custom-color-100"));
    assert_eq!(map.lookup("borderColor", "hsl(41,28.3%,79.8%)"), Some("custom-color-gold"));
    assert_eq!(map.lookup("backgroundColor", "#ef4444"), Some("red-500"));

    assert_eq!(map.lookup("margin", "24px"), Some("6"));
    assert_eq!(map.lookup("margin", "1.5rem"), Some("6"));
    assert_eq!(map.rem_in_px(), Some(16.0));

    assert_eq!(map.screen("(min-width: 768px)"), Some("md"));
    assert_eq!(
        map.screen("(min-width:768px) and (max-width:1024px)"),
        Some("custom-screen")
    );
    assert_eq!(map.supports("(display: grid)"), Some("grid"));
    // 未配置的条件不命中
    assert_eq!(map.supports("(display: flex)"), None);
}

#[test]
fn test_override_replaces_category() {
    let map = value_map(r#"{ "theme": { "spacing": { "gutter": "20px" } } }"#);

    assert_eq!(map.lookup("padding", "20px"), Some("gutter"));
    assert_eq!(map.lookup("margin", "auto"), Some("auto"));
    assert_eq!(map.lookup("margin", "1.5rem"), None);
}

#[test]
fn test_invalid_config() {
    assert!(matches!(
        load_config_from_json("{ \"prefix\": 1 }"),
        Err(ConfigError::Json(_))
    ));

    let config = load_config_from_json(r#"{ "theme": { "extend": [] } }"#).expect("valid json");
    assert!(matches!(
        config.resolve_theme(),
        Err(ConfigError::InvalidTheme(key)) if key == "extend"
    ));
}
