//! Keyword tables for properties whose values map one-to-one onto utilities.
//!
//! Keys are lowercase CSS values with collapsed whitespace, values are the
//! full utility class.

use phf::phf_map;

pub type KeywordTable = phf::Map<&'static str, &'static str>;

pub static ALIGN_CONTENT: KeywordTable = phf_map! {
    "normal" => "content-normal",
    "center" => "content-center",
    "flex-start" => "content-start",
    "start" => "content-start",
    "flex-end" => "content-end",
    "end" => "content-end",
    "space-between" => "content-between",
    "space-around" => "content-around",
    "space-evenly" => "content-evenly",
    "baseline" => "content-baseline",
    "stretch" => "content-stretch",
};

pub static ALIGN_ITEMS: KeywordTable = phf_map! {
    "flex-start" => "items-start",
    "start" => "items-start",
    "flex-end" => "items-end",
    "end" => "items-end",
    "center" => "items-center",
    "baseline" => "items-baseline",
    "stretch" => "items-stretch",
};

pub static ALIGN_SELF: KeywordTable = phf_map! {
    "auto" => "self-auto",
    "flex-start" => "self-start",
    "start" => "self-start",
    "flex-end" => "self-end",
    "end" => "self-end",
    "center" => "self-center",
    "stretch" => "self-stretch",
    "baseline" => "self-baseline",
};

pub static APPEARANCE: KeywordTable = phf_map! {
    "none" => "appearance-none",
    "auto" => "appearance-auto",
};

pub static BACKGROUND_ATTACHMENT: KeywordTable = phf_map! {
    "fixed" => "bg-fixed",
    "local" => "bg-local",
    "scroll" => "bg-scroll",
};

pub static BACKGROUND_BLEND_MODE: KeywordTable = phf_map! {
    "normal" => "bg-blend-normal",
    "multiply" => "bg-blend-multiply",
    "screen" => "bg-blend-screen",
    "overlay" => "bg-blend-overlay",
    "darken" => "bg-blend-darken",
    "lighten" => "bg-blend-lighten",
    "color-dodge" => "bg-blend-color-dodge",
    "color-burn" => "bg-blend-color-burn",
    "hard-light" => "bg-blend-hard-light",
    "soft-light" => "bg-blend-soft-light",
    "difference" => "bg-blend-difference",
    "exclusion" => "bg-blend-exclusion",
    "hue" => "bg-blend-hue",
    "saturation" => "bg-blend-saturation",
    "color" => "bg-blend-color",
    "luminosity" => "bg-blend-luminosity",
};

pub static BACKGROUND_CLIP: KeywordTable = phf_map! {
    "border-box" => "bg-clip-border",
    "padding-box" => "bg-clip-padding",
    "content-box" => "bg-clip-content",
    "text" => "bg-clip-text",
};

pub static BACKGROUND_ORIGIN: KeywordTable = phf_map! {
    "border-box" => "bg-origin-border",
    "padding-box" => "bg-origin-padding",
    "content-box" => "bg-origin-content",
};

pub static BACKGROUND_REPEAT: KeywordTable = phf_map! {
    "repeat" => "bg-repeat",
    "no-repeat" => "bg-no-repeat",
    "repeat-x" => "bg-repeat-x",
    "repeat-y" => "bg-repeat-y",
    "round" => "bg-repeat-round",
    "space" => "bg-repeat-space",
};

pub static BORDER_COLLAPSE: KeywordTable = phf_map! {
    "collapse" => "border-collapse",
    "separate" => "border-separate",
};

pub static BORDER_STYLE: KeywordTable = phf_map! {
    "solid" => "border-solid",
    "dashed" => "border-dashed",
    "dotted" => "border-dotted",
    "double" => "border-double",
    "hidden" => "border-hidden",
    "none" => "border-none",
};

pub static BOX_DECORATION_BREAK: KeywordTable = phf_map! {
    "clone" => "box-decoration-clone",
    "slice" => "box-decoration-slice",
};

pub static BOX_SIZING: KeywordTable = phf_map! {
    "border-box" => "box-border",
    "content-box" => "box-content",
};

pub static BREAK_AFTER: KeywordTable = phf_map! {
    "auto" => "break-after-auto",
    "avoid" => "break-after-avoid",
    "all" => "break-after-all",
    "avoid-page" => "break-after-avoid-page",
    "page" => "break-after-page",
    "left" => "break-after-left",
    "right" => "break-after-right",
    "column" => "break-after-column",
};

pub static BREAK_BEFORE: KeywordTable = phf_map! {
    "auto" => "break-before-auto",
    "avoid" => "break-before-avoid",
    "all" => "break-before-all",
    "avoid-page" => "break-before-avoid-page",
    "page" => "break-before-page",
    "left" => "break-before-left",
    "right" => "break-before-right",
    "column" => "break-before-column",
};

pub static BREAK_INSIDE: KeywordTable = phf_map! {
    "auto" => "break-inside-auto",
    "avoid" => "break-inside-avoid",
    "avoid-page" => "break-inside-avoid-page",
    "avoid-column" => "break-inside-avoid-column",
};

pub static CLEAR: KeywordTable = phf_map! {
    "left" => "clear-left",
    "right" => "clear-right",
    "both" => "clear-both",
    "none" => "clear-none",
};

pub static DISPLAY: KeywordTable = phf_map! {
    "block" => "block",
    "inline-block" => "inline-block",
    "inline" => "inline",
    "flex" => "flex",
    "inline-flex" => "inline-flex",
    "table" => "table",
    "inline-table" => "inline-table",
    "table-caption" => "table-caption",
    "table-cell" => "table-cell",
    "table-column" => "table-column",
    "table-column-group" => "table-column-group",
    "table-footer-group" => "table-footer-group",
    "table-header-group" => "table-header-group",
    "table-row-group" => "table-row-group",
    "table-row" => "table-row",
    "flow-root" => "flow-root",
    "grid" => "grid",
    "inline-grid" => "inline-grid",
    "contents" => "contents",
    "list-item" => "list-item",
    "none" => "hidden",
};

pub static FLEX_DIRECTION: KeywordTable = phf_map! {
    "row" => "flex-row",
    "row-reverse" => "flex-row-reverse",
    "column" => "flex-col",
    "column-reverse" => "flex-col-reverse",
};

pub static FLEX_WRAP: KeywordTable = phf_map! {
    "wrap" => "flex-wrap",
    "wrap-reverse" => "flex-wrap-reverse",
    "nowrap" => "flex-nowrap",
};

pub static FLOAT: KeywordTable = phf_map! {
    "right" => "float-right",
    "left" => "float-left",
    "none" => "float-none",
};

pub static FONT_SMOOTHING: KeywordTable = phf_map! {
    "antialiased" => "antialiased",
    "grayscale" => "antialiased",
    "auto" => "subpixel-antialiased",
};

pub static FONT_STYLE: KeywordTable = phf_map! {
    "italic" => "italic",
    "normal" => "not-italic",
};

pub static FONT_VARIANT_NUMERIC: KeywordTable = phf_map! {
    "normal" => "normal-nums",
    "ordinal" => "ordinal",
    "slashed-zero" => "slashed-zero",
    "lining-nums" => "lining-nums",
    "oldstyle-nums" => "oldstyle-nums",
    "proportional-nums" => "proportional-nums",
    "tabular-nums" => "tabular-nums",
    "diagonal-fractions" => "diagonal-fractions",
    "stacked-fractions" => "stacked-fractions",
};

pub static GRID_AUTO_FLOW: KeywordTable = phf_map! {
    "row" => "grid-flow-row",
    "column" => "grid-flow-col",
    "dense" => "grid-flow-dense",
    "row dense" => "grid-flow-row-dense",
    "column dense" => "grid-flow-col-dense",
};

pub static ISOLATION: KeywordTable = phf_map! {
    "isolate" => "isolate",
    "auto" => "isolation-auto",
};

pub static JUSTIFY_CONTENT: KeywordTable = phf_map! {
    "normal" => "justify-normal",
    "flex-start" => "justify-start",
    "start" => "justify-start",
    "flex-end" => "justify-end",
    "end" => "justify-end",
    "center" => "justify-center",
    "space-between" => "justify-between",
    "space-around" => "justify-around",
    "space-evenly" => "justify-evenly",
    "stretch" => "justify-stretch",
};

pub static JUSTIFY_ITEMS: KeywordTable = phf_map! {
    "start" => "justify-items-start",
    "end" => "justify-items-end",
    "center" => "justify-items-center",
    "stretch" => "justify-items-stretch",
};

pub static JUSTIFY_SELF: KeywordTable = phf_map! {
    "auto" => "justify-self-auto",
    "start" => "justify-self-start",
    "end" => "justify-self-end",
    "center" => "justify-self-center",
    "stretch" => "justify-self-stretch",
};

pub static LIST_STYLE_POSITION: KeywordTable = phf_map! {
    "inside" => "list-inside",
    "outside" => "list-outside",
};

pub static MIX_BLEND_MODE: KeywordTable = phf_map! {
    "normal" => "mix-blend-normal",
    "multiply" => "mix-blend-multiply",
    "screen" => "mix-blend-screen",
    "overlay" => "mix-blend-overlay",
    "darken" => "mix-blend-darken",
    "lighten" => "mix-blend-lighten",
    "color-dodge" => "mix-blend-color-dodge",
    "color-burn" => "mix-blend-color-burn",
    "hard-light" => "mix-blend-hard-light",
    "soft-light" => "mix-blend-soft-light",
    "difference" => "mix-blend-difference",
    "exclusion" => "mix-blend-exclusion",
    "hue" => "mix-blend-hue",
    "saturation" => "mix-blend-saturation",
    "color" => "mix-blend-color",
    "luminosity" => "mix-blend-luminosity",
    "plus-lighter" => "mix-blend-plus-lighter",
};

pub static OBJECT_FIT: KeywordTable = phf_map! {
    "contain" => "object-contain",
    "cover" => "object-cover",
    "fill" => "object-fill",
    "none" => "object-none",
    "scale-down" => "object-scale-down",
};

pub static OUTLINE: KeywordTable = phf_map! {
    "none" => "outline-none",
    "0" => "outline-0",
};

pub static OUTLINE_STYLE: KeywordTable = phf_map! {
    "none" => "outline-none",
    "solid" => "outline",
    "dashed" => "outline-dashed",
    "dotted" => "outline-dotted",
    "double" => "outline-double",
};

pub static OVERFLOW: KeywordTable = phf_map! {
    "auto" => "overflow-auto",
    "hidden" => "overflow-hidden",
    "clip" => "overflow-clip",
    "visible" => "overflow-visible",
    "scroll" => "overflow-scroll",
};

pub static OVERFLOW_X: KeywordTable = phf_map! {
    "auto" => "overflow-x-auto",
    "hidden" => "overflow-x-hidden",
    "clip" => "overflow-x-clip",
    "visible" => "overflow-x-visible",
    "scroll" => "overflow-x-scroll",
};

pub static OVERFLOW_Y: KeywordTable = phf_map! {
    "auto" => "overflow-y-auto",
    "hidden" => "overflow-y-hidden",
    "clip" => "overflow-y-clip",
    "visible" => "overflow-y-visible",
    "scroll" => "overflow-y-scroll",
};

pub static OVERFLOW_WRAP: KeywordTable = phf_map! {
    "break-word" => "break-words",
    "anywhere" => "break-words",
};

pub static OVERSCROLL_BEHAVIOR: KeywordTable = phf_map! {
    "auto" => "overscroll-auto",
    "contain" => "overscroll-contain",
    "none" => "overscroll-none",
};

pub static OVERSCROLL_BEHAVIOR_X: KeywordTable = phf_map! {
    "auto" => "overscroll-x-auto",
    "contain" => "overscroll-x-contain",
    "none" => "overscroll-x-none",
};

pub static OVERSCROLL_BEHAVIOR_Y: KeywordTable = phf_map! {
    "auto" => "overscroll-y-auto",
    "contain" => "overscroll-y-contain",
    "none" => "overscroll-y-none",
};

pub static PLACE_CONTENT: KeywordTable = phf_map! {
    "center" => "place-content-center",
    "start" => "place-content-start",
    "end" => "place-content-end",
    "space-between" => "place-content-between",
    "space-around" => "place-content-around",
    "space-evenly" => "place-content-evenly",
    "baseline" => "place-content-baseline",
    "stretch" => "place-content-stretch",
};

pub static PLACE_ITEMS: KeywordTable = phf_map! {
    "start" => "place-items-start",
    "end" => "place-items-end",
    "center" => "place-items-center",
    "baseline" => "place-items-baseline",
    "stretch" => "place-items-stretch",
};

pub static PLACE_SELF: KeywordTable = phf_map! {
    "auto" => "place-self-auto",
    "start" => "place-self-start",
    "end" => "place-self-end",
    "center" => "place-self-center",
    "stretch" => "place-self-stretch",
};

pub static POINTER_EVENTS: KeywordTable = phf_map! {
    "none" => "pointer-events-none",
    "auto" => "pointer-events-auto",
};

pub static POSITION: KeywordTable = phf_map! {
    "static" => "static",
    "fixed" => "fixed",
    "absolute" => "absolute",
    "relative" => "relative",
    "sticky" => "sticky",
};

pub static RESIZE: KeywordTable = phf_map! {
    "none" => "resize-none",
    "vertical" => "resize-y",
    "horizontal" => "resize-x",
    "both" => "resize",
};

pub static SCROLL_BEHAVIOR: KeywordTable = phf_map! {
    "auto" => "scroll-auto",
    "smooth" => "scroll-smooth",
};

pub static SCROLL_SNAP_ALIGN: KeywordTable = phf_map! {
    "start" => "snap-start",
    "end" => "snap-end",
    "center" => "snap-center",
    "none" => "snap-align-none",
};

pub static SCROLL_SNAP_STOP: KeywordTable = phf_map! {
    "normal" => "snap-normal",
    "always" => "snap-always",
};

pub static SCROLL_SNAP_TYPE: KeywordTable = phf_map! {
    "none" => "snap-none",
    "x" => "snap-x",
    "y" => "snap-y",
    "both" => "snap-both",
};

pub static TABLE_LAYOUT: KeywordTable = phf_map! {
    "auto" => "table-auto",
    "fixed" => "table-fixed",
};

pub static TEXT_ALIGN: KeywordTable = phf_map! {
    "left" => "text-left",
    "center" => "text-center",
    "right" => "text-right",
    "justify" => "text-justify",
    "start" => "text-start",
    "end" => "text-end",
};

pub static TEXT_DECORATION_LINE: KeywordTable = phf_map! {
    "underline" => "underline",
    "overline" => "overline",
    "line-through" => "line-through",
    "none" => "no-underline",
};

pub static TEXT_DECORATION_STYLE: KeywordTable = phf_map! {
    "solid" => "decoration-solid",
    "double" => "decoration-double",
    "dotted" => "decoration-dotted",
    "dashed" => "decoration-dashed",
    "wavy" => "decoration-wavy",
};

pub static TEXT_OVERFLOW: KeywordTable = phf_map! {
    "ellipsis" => "text-ellipsis",
    "clip" => "text-clip",
};

pub static TEXT_TRANSFORM: KeywordTable = phf_map! {
    "uppercase" => "uppercase",
    "lowercase" => "lowercase",
    "capitalize" => "capitalize",
    "none" => "normal-case",
};

pub static TOUCH_ACTION: KeywordTable = phf_map! {
    "auto" => "touch-auto",
    "none" => "touch-none",
    "pan-x" => "touch-pan-x",
    "pan-left" => "touch-pan-left",
    "pan-right" => "touch-pan-right",
    "pan-y" => "touch-pan-y",
    "pan-up" => "touch-pan-up",
    "pan-down" => "touch-pan-down",
    "pinch-zoom" => "touch-pinch-zoom",
    "manipulation" => "touch-manipulation",
};

pub static USER_SELECT: KeywordTable = phf_map! {
    "none" => "select-none",
    "text" => "select-text",
    "all" => "select-all",
    "auto" => "select-auto",
};

pub static VERTICAL_ALIGN: KeywordTable = phf_map! {
    "baseline" => "align-baseline",
    "top" => "align-top",
    "middle" => "align-middle",
    "bottom" => "align-bottom",
    "text-top" => "align-text-top",
    "text-bottom" => "align-text-bottom",
    "sub" => "align-sub",
    "super" => "align-super",
};

pub static VISIBILITY: KeywordTable = phf_map! {
    "visible" => "visible",
    "hidden" => "invisible",
    "collapse" => "collapse",
};

pub static WHITE_SPACE: KeywordTable = phf_map! {
    "normal" => "whitespace-normal",
    "nowrap" => "whitespace-nowrap",
    "pre" => "whitespace-pre",
    "pre-line" => "whitespace-pre-line",
    "pre-wrap" => "whitespace-pre-wrap",
    "break-spaces" => "whitespace-break-spaces",
};

pub static WORD_BREAK: KeywordTable = phf_map! {
    "normal" => "break-normal",
    "break-all" => "break-all",
    "keep-all" => "break-keep",
};

/// 查关键字表（忽略大小写与多余空白）
pub fn lookup_keyword(table: &KeywordTable, value: &str) -> Option<&'static str> {
    let key = value.split_whitespace().collect::<Vec<_>>().join(" ");
    table.get(key.to_ascii_lowercase().as_str()).copied()
}
