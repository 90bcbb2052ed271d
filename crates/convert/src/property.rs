use crate::keywords::{self, KeywordTable};
use phf::phf_map;

/// `var()` 任意值的类型提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Color,
    Length,
    Image,
    Position,
    Number,
}

impl TypeHint {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeHint::Color => "color",
            TypeHint::Length => "length",
            TypeHint::Image => "image",
            TypeHint::Position => "position",
            TypeHint::Number => "number",
        }
    }
}

/// 属性的转换方式
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// 值与类名一一对应，不在表中即失败
    Keyword(&'static KeywordTable),
    /// 查主题分类表，未命中时输出任意值
    Theme {
        category: &'static str,
        prefix: &'static str,
        signed: bool,
        hint: Option<TypeHint>,
    },
    /// `border` 及单边简写：宽度 样式 颜色
    Border { prefix: &'static str },
    /// 1–4 个值的盒模型简写，前缀按 上 右 下 左
    Box {
        category: &'static str,
        prefixes: [&'static str; 4],
        signed: bool,
    },
    /// 1–2 个值的逻辑方向简写（`margin-inline` 等），前缀按 起 止
    Axis {
        category: &'static str,
        prefixes: [&'static str; 2],
        signed: bool,
    },
    FlexFlow,
    Transform,
    Filter { backdrop: bool },
    Transition,
    /// 已知属性，但没有对应的工具类
    Unsupported,
}

const fn theme(category: &'static str, prefix: &'static str) -> Conversion {
    Conversion::Theme {
        category,
        prefix,
        signed: false,
        hint: None,
    }
}

const fn hinted(category: &'static str, prefix: &'static str, hint: TypeHint) -> Conversion {
    Conversion::Theme {
        category,
        prefix,
        signed: false,
        hint: Some(hint),
    }
}

const fn color(category: &'static str, prefix: &'static str) -> Conversion {
    hinted(category, prefix, TypeHint::Color)
}

const fn size(category: &'static str, prefix: &'static str) -> Conversion {
    hinted(category, prefix, TypeHint::Length)
}

const fn signed(category: &'static str, prefix: &'static str, hint: Option<TypeHint>) -> Conversion {
    Conversion::Theme {
        category,
        prefix,
        signed: true,
        hint,
    }
}

/// 支持转换的 CSS 属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    AccentColor,
    AlignContent,
    AlignItems,
    AlignSelf,
    Animation,
    Appearance,
    AspectRatio,
    BackdropFilter,
    BackgroundAttachment,
    BackgroundBlendMode,
    BackgroundClip,
    BackgroundColor,
    BackgroundImage,
    BackgroundOrigin,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    Border,
    BorderBottom,
    BorderBottomColor,
    BorderBottomLeftRadius,
    BorderBottomRightRadius,
    BorderBottomWidth,
    BorderCollapse,
    BorderColor,
    BorderLeft,
    BorderLeftColor,
    BorderLeftWidth,
    BorderRadius,
    BorderRight,
    BorderRightColor,
    BorderRightWidth,
    BorderSpacing,
    BorderStyle,
    BorderTop,
    BorderTopColor,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderTopWidth,
    BorderWidth,
    Bottom,
    BoxDecorationBreak,
    BoxShadow,
    BoxSizing,
    BreakAfter,
    BreakBefore,
    BreakInside,
    CaretColor,
    Clear,
    Color,
    ColumnGap,
    Columns,
    Content,
    Cursor,
    Display,
    Fill,
    Filter,
    Flex,
    FlexBasis,
    FlexDirection,
    FlexFlow,
    FlexGrow,
    FlexShrink,
    FlexWrap,
    Float,
    FontSize,
    FontSmoothing,
    FontStyle,
    FontVariantNumeric,
    FontWeight,
    Gap,
    Grid,
    GridAutoColumns,
    GridAutoFlow,
    GridAutoRows,
    GridColumn,
    GridColumnEnd,
    GridColumnGap,
    GridColumnStart,
    GridGap,
    GridRow,
    GridRowEnd,
    GridRowGap,
    GridRowStart,
    GridTemplateColumns,
    GridTemplateRows,
    Height,
    Inset,
    Isolation,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    Left,
    LetterSpacing,
    LineHeight,
    ListStylePosition,
    ListStyleType,
    Margin,
    MarginBlock,
    MarginBottom,
    MarginInline,
    MarginLeft,
    MarginRight,
    MarginTop,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    MixBlendMode,
    ObjectFit,
    ObjectPosition,
    Opacity,
    Order,
    Outline,
    OutlineColor,
    OutlineOffset,
    OutlineStyle,
    OutlineWidth,
    Overflow,
    OverflowWrap,
    OverflowX,
    OverflowY,
    OverscrollBehavior,
    OverscrollBehaviorX,
    OverscrollBehaviorY,
    Padding,
    PaddingBlock,
    PaddingBottom,
    PaddingInline,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PageBreakAfter,
    PageBreakBefore,
    PageBreakInside,
    PlaceContent,
    PlaceItems,
    PlaceSelf,
    PointerEvents,
    Position,
    Resize,
    Right,
    RowGap,
    ScrollBehavior,
    ScrollMargin,
    ScrollMarginBottom,
    ScrollMarginLeft,
    ScrollMarginRight,
    ScrollMarginTop,
    ScrollPadding,
    ScrollPaddingBottom,
    ScrollPaddingLeft,
    ScrollPaddingRight,
    ScrollPaddingTop,
    ScrollSnapAlign,
    ScrollSnapStop,
    ScrollSnapType,
    Stroke,
    StrokeWidth,
    TableLayout,
    TextAlign,
    TextDecoration,
    TextDecorationColor,
    TextDecorationLine,
    TextDecorationStyle,
    TextDecorationThickness,
    TextIndent,
    TextOverflow,
    TextTransform,
    TextUnderlineOffset,
    Top,
    TouchAction,
    Transform,
    TransformOrigin,
    Transition,
    TransitionDelay,
    TransitionDuration,
    TransitionProperty,
    TransitionTimingFunction,
    UserSelect,
    VerticalAlign,
    Visibility,
    WhiteSpace,
    Width,
    WillChange,
    WordBreak,
    ZIndex,
}

static PROPERTIES: phf::Map<&'static str, Property> = phf_map! {
    "accent-color" => Property::AccentColor,
    "align-content" => Property::AlignContent,
    "align-items" => Property::AlignItems,
    "align-self" => Property::AlignSelf,
    "animation" => Property::Animation,
    "appearance" => Property::Appearance,
    "aspect-ratio" => Property::AspectRatio,
    "backdrop-filter" => Property::BackdropFilter,
    "background-attachment" => Property::BackgroundAttachment,
    "background-blend-mode" => Property::BackgroundBlendMode,
    "background-clip" => Property::BackgroundClip,
    "background-color" => Property::BackgroundColor,
    "background-image" => Property::BackgroundImage,
    "background-origin" => Property::BackgroundOrigin,
    "background-position" => Property::BackgroundPosition,
    "background-repeat" => Property::BackgroundRepeat,
    "background-size" => Property::BackgroundSize,
    "border" => Property::Border,
    "border-bottom" => Property::BorderBottom,
    "border-bottom-color" => Property::BorderBottomColor,
    "border-bottom-left-radius" => Property::BorderBottomLeftRadius,
    "border-bottom-right-radius" => Property::BorderBottomRightRadius,
    "border-bottom-width" => Property::BorderBottomWidth,
    "border-collapse" => Property::BorderCollapse,
    "border-color" => Property::BorderColor,
    "border-left" => Property::BorderLeft,
    "border-left-color" => Property::BorderLeftColor,
    "border-left-width" => Property::BorderLeftWidth,
    "border-radius" => Property::BorderRadius,
    "border-right" => Property::BorderRight,
    "border-right-color" => Property::BorderRightColor,
    "border-right-width" => Property::BorderRightWidth,
    "border-spacing" => Property::BorderSpacing,
    "border-style" => Property::BorderStyle,
    "border-top" => Property::BorderTop,
    "border-top-color" => Property::BorderTopColor,
    "border-top-left-radius" => Property::BorderTopLeftRadius,
    "border-top-right-radius" => Property::BorderTopRightRadius,
    "border-top-width" => Property::BorderTopWidth,
    "border-width" => Property::BorderWidth,
    "bottom" => Property::Bottom,
    "box-decoration-break" => Property::BoxDecorationBreak,
    "-webkit-box-decoration-break" => Property::BoxDecorationBreak,
    "box-shadow" => Property::BoxShadow,
    "box-sizing" => Property::BoxSizing,
    "break-after" => Property::BreakAfter,
    "break-before" => Property::BreakBefore,
    "break-inside" => Property::BreakInside,
    "caret-color" => Property::CaretColor,
    "clear" => Property::Clear,
    "color" => Property::Color,
    "column-gap" => Property::ColumnGap,
    "columns" => Property::Columns,
    "content" => Property::Content,
    "cursor" => Property::Cursor,
    "display" => Property::Display,
    "fill" => Property::Fill,
    "filter" => Property::Filter,
    "flex" => Property::Flex,
    "flex-basis" => Property::FlexBasis,
    "flex-direction" => Property::FlexDirection,
    "flex-flow" => Property::FlexFlow,
    "flex-grow" => Property::FlexGrow,
    "flex-shrink" => Property::FlexShrink,
    "flex-wrap" => Property::FlexWrap,
    "float" => Property::Float,
    "font-size" => Property::FontSize,
    "font-smoothing" => Property::FontSmoothing,
    "-webkit-font-smoothing" => Property::FontSmoothing,
    "font-style" => Property::FontStyle,
    "font-variant-numeric" => Property::FontVariantNumeric,
    "font-weight" => Property::FontWeight,
    "gap" => Property::Gap,
    "grid" => Property::Grid,
    "grid-auto-columns" => Property::GridAutoColumns,
    "grid-auto-flow" => Property::GridAutoFlow,
    "grid-auto-rows" => Property::GridAutoRows,
    "grid-column" => Property::GridColumn,
    "grid-column-end" => Property::GridColumnEnd,
    "grid-column-gap" => Property::GridColumnGap,
    "grid-column-start" => Property::GridColumnStart,
    "grid-gap" => Property::GridGap,
    "grid-row" => Property::GridRow,
    "grid-row-end" => Property::GridRowEnd,
    "grid-row-gap" => Property::GridRowGap,
    "grid-row-start" => Property::GridRowStart,
    "grid-template-columns" => Property::GridTemplateColumns,
    "grid-template-rows" => Property::GridTemplateRows,
    "height" => Property::Height,
    "inset" => Property::Inset,
    "isolation" => Property::Isolation,
    "justify-content" => Property::JustifyContent,
    "justify-items" => Property::JustifyItems,
    "justify-self" => Property::JustifySelf,
    "left" => Property::Left,
    "letter-spacing" => Property::LetterSpacing,
    "line-height" => Property::LineHeight,
    "list-style-position" => Property::ListStylePosition,
    "list-style-type" => Property::ListStyleType,
    "margin" => Property::Margin,
    "margin-block" => Property::MarginBlock,
    "margin-bottom" => Property::MarginBottom,
    "margin-inline" => Property::MarginInline,
    "margin-left" => Property::MarginLeft,
    "margin-right" => Property::MarginRight,
    "margin-top" => Property::MarginTop,
    "max-height" => Property::MaxHeight,
    "max-width" => Property::MaxWidth,
    "min-height" => Property::MinHeight,
    "min-width" => Property::MinWidth,
    "mix-blend-mode" => Property::MixBlendMode,
    "object-fit" => Property::ObjectFit,
    "object-position" => Property::ObjectPosition,
    "opacity" => Property::Opacity,
    "order" => Property::Order,
    "outline" => Property::Outline,
    "outline-color" => Property::OutlineColor,
    "outline-offset" => Property::OutlineOffset,
    "outline-style" => Property::OutlineStyle,
    "outline-width" => Property::OutlineWidth,
    "overflow" => Property::Overflow,
    "overflow-wrap" => Property::OverflowWrap,
    "word-wrap" => Property::OverflowWrap,
    "overflow-x" => Property::OverflowX,
    "overflow-y" => Property::OverflowY,
    "overscroll-behavior" => Property::OverscrollBehavior,
    "overscroll-behavior-x" => Property::OverscrollBehaviorX,
    "overscroll-behavior-y" => Property::OverscrollBehaviorY,
    "padding" => Property::Padding,
    "padding-block" => Property::PaddingBlock,
    "padding-bottom" => Property::PaddingBottom,
    "padding-inline" => Property::PaddingInline,
    "padding-left" => Property::PaddingLeft,
    "padding-right" => Property::PaddingRight,
    "padding-top" => Property::PaddingTop,
    "page-break-after" => Property::PageBreakAfter,
    "page-break-before" => Property::PageBreakBefore,
    "page-break-inside" => Property::PageBreakInside,
    "place-content" => Property::PlaceContent,
    "place-items" => Property::PlaceItems,
    "place-self" => Property::PlaceSelf,
    "pointer-events" => Property::PointerEvents,
    "position" => Property::Position,
    "resize" => Property::Resize,
    "right" => Property::Right,
    "row-gap" => Property::RowGap,
    "scroll-behavior" => Property::ScrollBehavior,
    "scroll-margin" => Property::ScrollMargin,
    "scroll-margin-bottom" => Property::ScrollMarginBottom,
    "scroll-margin-left" => Property::ScrollMarginLeft,
    "scroll-margin-right" => Property::ScrollMarginRight,
    "scroll-margin-top" => Property::ScrollMarginTop,
    "scroll-padding" => Property::ScrollPadding,
    "scroll-padding-bottom" => Property::ScrollPaddingBottom,
    "scroll-padding-left" => Property::ScrollPaddingLeft,
    "scroll-padding-right" => Property::ScrollPaddingRight,
    "scroll-padding-top" => Property::ScrollPaddingTop,
    "scroll-snap-align" => Property::ScrollSnapAlign,
    "scroll-snap-stop" => Property::ScrollSnapStop,
    "scroll-snap-type" => Property::ScrollSnapType,
    "stroke" => Property::Stroke,
    "stroke-width" => Property::StrokeWidth,
    "table-layout" => Property::TableLayout,
    "text-align" => Property::TextAlign,
    "text-decoration" => Property::TextDecoration,
    "text-decoration-color" => Property::TextDecorationColor,
    "text-decoration-line" => Property::TextDecorationLine,
    "text-decoration-style" => Property::TextDecorationStyle,
    "text-decoration-thickness" => Property::TextDecorationThickness,
    "text-indent" => Property::TextIndent,
    "text-overflow" => Property::TextOverflow,
    "text-transform" => Property::TextTransform,
    "text-underline-offset" => Property::TextUnderlineOffset,
    "top" => Property::Top,
    "touch-action" => Property::TouchAction,
    "transform" => Property::Transform,
    "transform-origin" => Property::TransformOrigin,
    "transition" => Property::Transition,
    "transition-delay" => Property::TransitionDelay,
    "transition-duration" => Property::TransitionDuration,
    "transition-property" => Property::TransitionProperty,
    "transition-timing-function" => Property::TransitionTimingFunction,
    "user-select" => Property::UserSelect,
    "vertical-align" => Property::VerticalAlign,
    "visibility" => Property::Visibility,
    "white-space" => Property::WhiteSpace,
    "width" => Property::Width,
    "will-change" => Property::WillChange,
    "word-break" => Property::WordBreak,
    "z-index" => Property::ZIndex,
};

impl Property {
    /// 按 CSS 属性名查找（忽略大小写）
    pub fn from_name(name: &str) -> Option<Property> {
        PROPERTIES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// 所属工具类家族（`corePlugins` 中的键）
    pub fn core_plugin(self) -> &'static str {
        use Property::*;
        match self {
            AccentColor => "accentColor",
            AlignContent => "alignContent",
            AlignItems => "alignItems",
            AlignSelf => "alignSelf",
            Animation => "animation",
            Appearance => "appearance",
            AspectRatio => "aspectRatio",
            BackdropFilter => "backdropFilter",
            BackgroundAttachment => "backgroundAttachment",
            BackgroundBlendMode => "backgroundBlendMode",
            BackgroundClip => "backgroundClip",
            BackgroundColor => "backgroundColor",
            BackgroundImage => "backgroundImage",
            BackgroundOrigin => "backgroundOrigin",
            BackgroundPosition => "backgroundPosition",
            BackgroundRepeat => "backgroundRepeat",
            BackgroundSize => "backgroundSize",
            Border | BorderBottom | BorderLeft | BorderRight | BorderTop => "borderWidth",
            BorderBottomWidth | BorderLeftWidth | BorderRightWidth | BorderTopWidth
            | BorderWidth => "borderWidth",
            BorderBottomColor | BorderLeftColor | BorderRightColor | BorderTopColor
            | BorderColor => "borderColor",
            BorderBottomLeftRadius | BorderBottomRightRadius | BorderTopLeftRadius
            | BorderTopRightRadius | BorderRadius => "borderRadius",
            BorderCollapse => "borderCollapse",
            BorderSpacing => "borderSpacing",
            BorderStyle => "borderStyle",
            Bottom | Left | Right | Top | Inset => "inset",
            BoxDecorationBreak => "boxDecorationBreak",
            BoxShadow => "boxShadow",
            BoxSizing => "boxSizing",
            BreakAfter | PageBreakAfter => "breakAfter",
            BreakBefore | PageBreakBefore => "breakBefore",
            BreakInside | PageBreakInside => "breakInside",
            CaretColor => "caretColor",
            Clear => "clear",
            Color => "textColor",
            ColumnGap | Gap | GridColumnGap | GridGap | GridRowGap | RowGap => "gap",
            Columns => "columns",
            Content => "content",
            Cursor => "cursor",
            Display => "display",
            Fill => "fill",
            Filter => "filter",
            Flex => "flex",
            FlexBasis => "flexBasis",
            FlexDirection | FlexFlow => "flexDirection",
            FlexGrow => "flexGrow",
            FlexShrink => "flexShrink",
            FlexWrap => "flexWrap",
            Float => "float",
            FontSize => "fontSize",
            FontSmoothing => "fontSmoothing",
            FontStyle => "fontStyle",
            FontVariantNumeric => "fontVariantNumeric",
            FontWeight => "fontWeight",
            Grid => "gridTemplateColumns",
            GridAutoColumns => "gridAutoColumns",
            GridAutoFlow => "gridAutoFlow",
            GridAutoRows => "gridAutoRows",
            GridColumn => "gridColumn",
            GridColumnEnd => "gridColumnEnd",
            GridColumnStart => "gridColumnStart",
            GridRow => "gridRow",
            GridRowEnd => "gridRowEnd",
            GridRowStart => "gridRowStart",
            GridTemplateColumns => "gridTemplateColumns",
            GridTemplateRows => "gridTemplateRows",
            Height => "height",
            Isolation => "isolation",
            JustifyContent => "justifyContent",
            JustifyItems => "justifyItems",
            JustifySelf => "justifySelf",
            LetterSpacing => "letterSpacing",
            LineHeight => "lineHeight",
            ListStylePosition => "listStylePosition",
            ListStyleType => "listStyleType",
            Margin | MarginBlock | MarginBottom | MarginInline | MarginLeft | MarginRight
            | MarginTop => "margin",
            MaxHeight => "maxHeight",
            MaxWidth => "maxWidth",
            MinHeight => "minHeight",
            MinWidth => "minWidth",
            MixBlendMode => "mixBlendMode",
            ObjectFit => "objectFit",
            ObjectPosition => "objectPosition",
            Opacity => "opacity",
            Order => "order",
            Outline | OutlineStyle => "outlineStyle",
            OutlineColor => "outlineColor",
            OutlineOffset => "outlineOffset",
            OutlineWidth => "outlineWidth",
            Overflow | OverflowX | OverflowY => "overflow",
            OverflowWrap | WordBreak => "wordBreak",
            OverscrollBehavior | OverscrollBehaviorX | OverscrollBehaviorY => "overscrollBehavior",
            Padding | PaddingBlock | PaddingBottom | PaddingInline | PaddingLeft
            | PaddingRight | PaddingTop => "padding",
            PlaceContent => "placeContent",
            PlaceItems => "placeItems",
            PlaceSelf => "placeSelf",
            PointerEvents => "pointerEvents",
            Position => "position",
            Resize => "resize",
            ScrollBehavior => "scrollBehavior",
            ScrollMargin | ScrollMarginBottom | ScrollMarginLeft | ScrollMarginRight
            | ScrollMarginTop => "scrollMargin",
            ScrollPadding | ScrollPaddingBottom | ScrollPaddingLeft | ScrollPaddingRight
            | ScrollPaddingTop => "scrollPadding",
            ScrollSnapAlign => "scrollSnapAlign",
            ScrollSnapStop => "scrollSnapStop",
            ScrollSnapType => "scrollSnapType",
            Stroke => "stroke",
            StrokeWidth => "strokeWidth",
            TableLayout => "tableLayout",
            TextAlign => "textAlign",
            TextDecoration | TextDecorationLine => "textDecoration",
            TextDecorationColor => "textDecorationColor",
            TextDecorationStyle => "textDecorationStyle",
            TextDecorationThickness => "textDecorationThickness",
            TextIndent => "textIndent",
            TextOverflow => "textOverflow",
            TextTransform => "textTransform",
            TextUnderlineOffset => "textUnderlineOffset",
            TouchAction => "touchAction",
            Transform => "transform",
            TransformOrigin => "transformOrigin",
            Transition | TransitionProperty => "transitionProperty",
            TransitionDelay => "transitionDelay",
            TransitionDuration => "transitionDuration",
            TransitionTimingFunction => "transitionTimingFunction",
            UserSelect => "userSelect",
            VerticalAlign => "verticalAlign",
            Visibility => "visibility",
            WhiteSpace => "whitespace",
            Width => "width",
            WillChange => "willChange",
            ZIndex => "zIndex",
        }
    }

    /// 转换方式
    pub fn conversion(self) -> Conversion {
        use Property::*;
        use TypeHint as H;
        match self {
            AccentColor => color("accentColor", "accent"),
            AlignContent => Conversion::Keyword(&keywords::ALIGN_CONTENT),
            AlignItems => Conversion::Keyword(&keywords::ALIGN_ITEMS),
            AlignSelf => Conversion::Keyword(&keywords::ALIGN_SELF),
            Animation => theme("animation", "animate"),
            Appearance => Conversion::Keyword(&keywords::APPEARANCE),
            AspectRatio => theme("aspectRatio", "aspect"),
            BackdropFilter => Conversion::Filter { backdrop: true },
            BackgroundAttachment => Conversion::Keyword(&keywords::BACKGROUND_ATTACHMENT),
            BackgroundBlendMode => Conversion::Keyword(&keywords::BACKGROUND_BLEND_MODE),
            BackgroundClip => Conversion::Keyword(&keywords::BACKGROUND_CLIP),
            BackgroundColor => color("backgroundColor", "bg"),
            BackgroundImage => hinted("backgroundImage", "bg", H::Image),
            BackgroundOrigin => Conversion::Keyword(&keywords::BACKGROUND_ORIGIN),
            BackgroundPosition => hinted("backgroundPosition", "bg", H::Position),
            BackgroundRepeat => Conversion::Keyword(&keywords::BACKGROUND_REPEAT),
            BackgroundSize => size("backgroundSize", "bg"),
            Border => Conversion::Border { prefix: "border" },
            BorderBottom => Conversion::Border { prefix: "border-b" },
            BorderLeft => Conversion::Border { prefix: "border-l" },
            BorderRight => Conversion::Border { prefix: "border-r" },
            BorderTop => Conversion::Border { prefix: "border-t" },
            BorderBottomColor => color("borderColor", "border-b"),
            BorderLeftColor => color("borderColor", "border-l"),
            BorderRightColor => color("borderColor", "border-r"),
            BorderTopColor => color("borderColor", "border-t"),
            BorderColor => color("borderColor", "border"),
            BorderBottomLeftRadius => size("borderRadius", "rounded-bl"),
            BorderBottomRightRadius => size("borderRadius", "rounded-br"),
            BorderTopLeftRadius => size("borderRadius", "rounded-tl"),
            BorderTopRightRadius => size("borderRadius", "rounded-tr"),
            BorderRadius => size("borderRadius", "rounded"),
            BorderBottomWidth => size("borderWidth", "border-b"),
            BorderLeftWidth => size("borderWidth", "border-l"),
            BorderRightWidth => size("borderWidth", "border-r"),
            BorderTopWidth => size("borderWidth", "border-t"),
            BorderWidth => size("borderWidth", "border"),
            BorderCollapse => Conversion::Keyword(&keywords::BORDER_COLLAPSE),
            BorderSpacing => size("borderSpacing", "border-spacing"),
            BorderStyle => Conversion::Keyword(&keywords::BORDER_STYLE),
            Bottom => signed("inset", "bottom", Some(H::Length)),
            Left => signed("inset", "left", Some(H::Length)),
            Right => signed("inset", "right", Some(H::Length)),
            Top => signed("inset", "top", Some(H::Length)),
            Inset => Conversion::Box {
                category: "inset",
                prefixes: ["top", "right", "bottom", "left"],
                signed: true,
            },
            BoxDecorationBreak => Conversion::Keyword(&keywords::BOX_DECORATION_BREAK),
            BoxShadow => theme("boxShadow", "shadow"),
            BoxSizing => Conversion::Keyword(&keywords::BOX_SIZING),
            BreakAfter | PageBreakAfter => Conversion::Keyword(&keywords::BREAK_AFTER),
            BreakBefore | PageBreakBefore => Conversion::Keyword(&keywords::BREAK_BEFORE),
            BreakInside | PageBreakInside => Conversion::Keyword(&keywords::BREAK_INSIDE),
            CaretColor => color("caretColor", "caret"),
            Clear => Conversion::Keyword(&keywords::CLEAR),
            Color => color("textColor", "text"),
            ColumnGap | GridColumnGap => size("gap", "gap-x"),
            RowGap | GridRowGap => size("gap", "gap-y"),
            Gap | GridGap => size("gap", "gap"),
            Columns => theme("columns", "columns"),
            Content => theme("content", "content"),
            Cursor => theme("cursor", "cursor"),
            Display => Conversion::Keyword(&keywords::DISPLAY),
            Fill => color("fill", "fill"),
            Filter => Conversion::Filter { backdrop: false },
            Flex => theme("flex", "flex"),
            FlexBasis => size("flexBasis", "basis"),
            FlexDirection => Conversion::Keyword(&keywords::FLEX_DIRECTION),
            FlexFlow => Conversion::FlexFlow,
            FlexGrow => hinted("flexGrow", "grow", H::Number),
            FlexShrink => hinted("flexShrink", "shrink", H::Number),
            FlexWrap => Conversion::Keyword(&keywords::FLEX_WRAP),
            Float => Conversion::Keyword(&keywords::FLOAT),
            FontSize => size("fontSize", "text"),
            FontSmoothing => Conversion::Keyword(&keywords::FONT_SMOOTHING),
            FontStyle => Conversion::Keyword(&keywords::FONT_STYLE),
            FontVariantNumeric => Conversion::Keyword(&keywords::FONT_VARIANT_NUMERIC),
            FontWeight => hinted("fontWeight", "font", H::Number),
            Grid => Conversion::Unsupported,
            GridAutoColumns => theme("gridAutoColumns", "auto-cols"),
            GridAutoFlow => Conversion::Keyword(&keywords::GRID_AUTO_FLOW),
            GridAutoRows => theme("gridAutoRows", "auto-rows"),
            GridColumn => theme("gridColumn", "col"),
            GridColumnEnd => theme("gridColumnEnd", "col-end"),
            GridColumnStart => theme("gridColumnStart", "col-start"),
            GridRow => theme("gridRow", "row"),
            GridRowEnd => theme("gridRowEnd", "row-end"),
            GridRowStart => theme("gridRowStart", "row-start"),
            GridTemplateColumns => theme("gridTemplateColumns", "grid-cols"),
            GridTemplateRows => theme("gridTemplateRows", "grid-rows"),
            Height => size("height", "h"),
            Isolation => Conversion::Keyword(&keywords::ISOLATION),
            JustifyContent => Conversion::Keyword(&keywords::JUSTIFY_CONTENT),
            JustifyItems => Conversion::Keyword(&keywords::JUSTIFY_ITEMS),
            JustifySelf => Conversion::Keyword(&keywords::JUSTIFY_SELF),
            LetterSpacing => signed("letterSpacing", "tracking", None),
            LineHeight => theme("lineHeight", "leading"),
            ListStylePosition => Conversion::Keyword(&keywords::LIST_STYLE_POSITION),
            ListStyleType => theme("listStyleType", "list"),
            Margin => Conversion::Box {
                category: "margin",
                prefixes: ["mt", "mr", "mb", "ml"],
                signed: true,
            },
            MarginBlock => Conversion::Axis {
                category: "margin",
                prefixes: ["mt", "mb"],
                signed: true,
            },
            MarginInline => Conversion::Axis {
                category: "margin",
                prefixes: ["ml", "mr"],
                signed: true,
            },
            MarginBottom => signed("margin", "mb", None),
            MarginLeft => signed("margin", "ml", None),
            MarginRight => signed("margin", "mr", None),
            MarginTop => signed("margin", "mt", None),
            MaxHeight => theme("maxHeight", "max-h"),
            MaxWidth => theme("maxWidth", "max-w"),
            MinHeight => theme("minHeight", "min-h"),
            MinWidth => theme("minWidth", "min-w"),
            MixBlendMode => Conversion::Keyword(&keywords::MIX_BLEND_MODE),
            ObjectFit => Conversion::Keyword(&keywords::OBJECT_FIT),
            ObjectPosition => theme("objectPosition", "object"),
            Opacity => hinted("opacity", "opacity", H::Number),
            Order => signed("order", "order", None),
            Outline => Conversion::Keyword(&keywords::OUTLINE),
            OutlineColor => color("outlineColor", "outline"),
            OutlineOffset => signed("outlineOffset", "outline-offset", Some(H::Length)),
            OutlineStyle => Conversion::Keyword(&keywords::OUTLINE_STYLE),
            OutlineWidth => size("outlineWidth", "outline"),
            Overflow => Conversion::Keyword(&keywords::OVERFLOW),
            OverflowWrap => Conversion::Keyword(&keywords::OVERFLOW_WRAP),
            OverflowX => Conversion::Keyword(&keywords::OVERFLOW_X),
            OverflowY => Conversion::Keyword(&keywords::OVERFLOW_Y),
            OverscrollBehavior => Conversion::Keyword(&keywords::OVERSCROLL_BEHAVIOR),
            OverscrollBehaviorX => Conversion::Keyword(&keywords::OVERSCROLL_BEHAVIOR_X),
            OverscrollBehaviorY => Conversion::Keyword(&keywords::OVERSCROLL_BEHAVIOR_Y),
            Padding => Conversion::Box {
                category: "padding",
                prefixes: ["pt", "pr", "pb", "pl"],
                signed: false,
            },
            PaddingBlock => Conversion::Axis {
                category: "padding",
                prefixes: ["pt", "pb"],
                signed: false,
            },
            PaddingInline => Conversion::Axis {
                category: "padding",
                prefixes: ["pl", "pr"],
                signed: false,
            },
            PaddingBottom => theme("padding", "pb"),
            PaddingLeft => theme("padding", "pl"),
            PaddingRight => theme("padding", "pr"),
            PaddingTop => theme("padding", "pt"),
            PlaceContent => Conversion::Keyword(&keywords::PLACE_CONTENT),
            PlaceItems => Conversion::Keyword(&keywords::PLACE_ITEMS),
            PlaceSelf => Conversion::Keyword(&keywords::PLACE_SELF),
            PointerEvents => Conversion::Keyword(&keywords::POINTER_EVENTS),
            Position => Conversion::Keyword(&keywords::POSITION),
            Resize => Conversion::Keyword(&keywords::RESIZE),
            ScrollBehavior => Conversion::Keyword(&keywords::SCROLL_BEHAVIOR),
            ScrollMargin => Conversion::Box {
                category: "scrollMargin",
                prefixes: ["scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml"],
                signed: true,
            },
            ScrollMarginBottom => signed("scrollMargin", "scroll-mb", None),
            ScrollMarginLeft => signed("scrollMargin", "scroll-ml", None),
            ScrollMarginRight => signed("scrollMargin", "scroll-mr", None),
            ScrollMarginTop => signed("scrollMargin", "scroll-mt", None),
            ScrollPadding => Conversion::Box {
                category: "scrollPadding",
                prefixes: ["scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl"],
                signed: false,
            },
            ScrollPaddingBottom => theme("scrollPadding", "scroll-pb"),
            ScrollPaddingLeft => theme("scrollPadding", "scroll-pl"),
            ScrollPaddingRight => theme("scrollPadding", "scroll-pr"),
            ScrollPaddingTop => theme("scrollPadding", "scroll-pt"),
            ScrollSnapAlign => Conversion::Keyword(&keywords::SCROLL_SNAP_ALIGN),
            ScrollSnapStop => Conversion::Keyword(&keywords::SCROLL_SNAP_STOP),
            ScrollSnapType => Conversion::Keyword(&keywords::SCROLL_SNAP_TYPE),
            Stroke => color("stroke", "stroke"),
            StrokeWidth => size("strokeWidth", "stroke"),
            TableLayout => Conversion::Keyword(&keywords::TABLE_LAYOUT),
            TextAlign => Conversion::Keyword(&keywords::TEXT_ALIGN),
            TextDecoration | TextDecorationLine => {
                Conversion::Keyword(&keywords::TEXT_DECORATION_LINE)
            }
            TextDecorationColor => color("textDecorationColor", "decoration"),
            TextDecorationStyle => Conversion::Keyword(&keywords::TEXT_DECORATION_STYLE),
            TextDecorationThickness => size("textDecorationThickness", "decoration"),
            TextIndent => signed("textIndent", "indent", None),
            TextOverflow => Conversion::Keyword(&keywords::TEXT_OVERFLOW),
            TextTransform => Conversion::Keyword(&keywords::TEXT_TRANSFORM),
            TextUnderlineOffset => theme("textUnderlineOffset", "underline-offset"),
            TouchAction => Conversion::Keyword(&keywords::TOUCH_ACTION),
            Transform => Conversion::Transform,
            TransformOrigin => theme("transformOrigin", "origin"),
            Transition => Conversion::Transition,
            TransitionDelay => theme("transitionDelay", "delay"),
            TransitionDuration => theme("transitionDuration", "duration"),
            TransitionProperty => theme("transitionProperty", "transition"),
            TransitionTimingFunction => theme("transitionTimingFunction", "ease"),
            UserSelect => Conversion::Keyword(&keywords::USER_SELECT),
            VerticalAlign => Conversion::Keyword(&keywords::VERTICAL_ALIGN),
            Visibility => Conversion::Keyword(&keywords::VISIBILITY),
            WhiteSpace => Conversion::Keyword(&keywords::WHITE_SPACE),
            Width => size("width", "w"),
            WillChange => theme("willChange", "will-change"),
            WordBreak => Conversion::Keyword(&keywords::WORD_BREAK),
            ZIndex => signed("zIndex", "z", None),
        }
    }
}
