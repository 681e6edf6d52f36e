//! Concentric CSS order: from the outside of the box to its contents.
//!
//! Position and layout first, then the margin, border and background of the
//! box, then its padding and dimensions, then what is drawn inside it.

/// Flat priority list for the `concentric` strategy.
pub const CONCENTRIC_ORDER: &[&str] = &[
    "display",
    "position",
    "inset",
    "top",
    "right",
    "bottom",
    "left",
    "flex",
    "flex-basis",
    "flex-direction",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "grid",
    "grid-area",
    "grid-template",
    "grid-template-areas",
    "grid-template-rows",
    "grid-template-columns",
    "grid-row",
    "grid-row-start",
    "grid-row-end",
    "grid-column",
    "grid-column-start",
    "grid-column-end",
    "grid-auto-rows",
    "grid-auto-columns",
    "grid-auto-flow",
    "gap",
    "row-gap",
    "align-content",
    "align-items",
    "align-self",
    "justify-content",
    "justify-items",
    "justify-self",
    "order",
    "float",
    "clear",
    "columns",
    "column-gap",
    "column-fill",
    "column-rule",
    "column-rule-width",
    "column-rule-style",
    "column-rule-color",
    "column-span",
    "column-count",
    "column-width",
    "backface-visibility",
    "perspective",
    "perspective-origin",
    "transform",
    "transform-origin",
    "transform-style",
    "transition",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "animation",
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-delay",
    "animation-iteration-count",
    "animation-direction",
    "animation-fill-mode",
    "animation-play-state",
    "visibility",
    "opacity",
    "z-index",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "outline",
    "outline-offset",
    "outline-width",
    "outline-style",
    "outline-color",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-width",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-style",
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "border-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
    "border-image",
    "box-shadow",
    "background",
    "background-attachment",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-repeat",
    "background-size",
    "cursor",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "box-sizing",
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "aspect-ratio",
    "overflow",
    "overflow-x",
    "overflow-y",
    "resize",
    "list-style",
    "list-style-type",
    "list-style-position",
    "list-style-image",
    "caption-side",
    "table-layout",
    "border-collapse",
    "border-spacing",
    "empty-cells",
    "object-fit",
    "object-position",
    "vertical-align",
    "text-align",
    "text-align-last",
    "text-indent",
    "text-transform",
    "text-decoration",
    "text-rendering",
    "text-shadow",
    "text-overflow",
    "line-height",
    "word-spacing",
    "letter-spacing",
    "white-space",
    "word-break",
    "word-wrap",
    "overflow-wrap",
    "hyphens",
    "color",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "font-smoothing",
    "font-style",
    "font-variant",
    "font-stretch",
    "content",
    "quotes",
    "counter-reset",
    "counter-increment",
];
