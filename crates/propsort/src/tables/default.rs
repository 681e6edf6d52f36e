//! Groups for the `grouped` strategy.

pub(super) const GROUPS: &[&[&str]] = &[
    // Positioning
    &[
        "position",
        "inset",
        "inset-block",
        "inset-inline",
        "top",
        "right",
        "bottom",
        "left",
        "z-index",
    ],
    // Display and box model
    &[
        "display",
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
        "column-gap",
        "align-content",
        "align-items",
        "align-self",
        "justify-content",
        "justify-items",
        "justify-self",
        "place-content",
        "place-items",
        "place-self",
        "order",
        "float",
        "clear",
        "box-sizing",
        "width",
        "min-width",
        "max-width",
        "height",
        "min-height",
        "max-height",
        "aspect-ratio",
        "margin",
        "margin-top",
        "margin-right",
        "margin-bottom",
        "margin-left",
        "margin-block",
        "margin-inline",
        "padding",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
        "padding-block",
        "padding-inline",
        "overflow",
        "overflow-x",
        "overflow-y",
        "object-fit",
        "object-position",
    ],
    // Typography
    &[
        "color",
        "font",
        "font-family",
        "font-size",
        "font-style",
        "font-variant",
        "font-weight",
        "font-stretch",
        "font-smoothing",
        "line-height",
        "letter-spacing",
        "word-spacing",
        "text-align",
        "text-decoration",
        "text-indent",
        "text-overflow",
        "text-rendering",
        "text-shadow",
        "text-transform",
        "white-space",
        "word-break",
        "word-wrap",
        "overflow-wrap",
        "hyphens",
        "vertical-align",
        "list-style",
        "list-style-type",
        "list-style-position",
        "list-style-image",
    ],
    // Visual
    &[
        "background",
        "background-attachment",
        "background-clip",
        "background-color",
        "background-image",
        "background-origin",
        "background-position",
        "background-repeat",
        "background-size",
        "border",
        "border-top",
        "border-right",
        "border-bottom",
        "border-left",
        "border-width",
        "border-style",
        "border-color",
        "border-radius",
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-right-radius",
        "border-bottom-left-radius",
        "border-collapse",
        "border-spacing",
        "outline",
        "outline-offset",
        "box-shadow",
        "opacity",
        "visibility",
        "filter",
        "backdrop-filter",
        "mix-blend-mode",
        "cursor",
    ],
    // Animation
    &[
        "transition",
        "transition-property",
        "transition-duration",
        "transition-timing-function",
        "transition-delay",
        "animation",
        "animation-name",
        "animation-duration",
        "animation-timing-function",
        "animation-delay",
        "animation-iteration-count",
        "animation-direction",
        "animation-fill-mode",
        "animation-play-state",
        "transform",
        "transform-origin",
        "transform-style",
        "perspective",
        "backface-visibility",
        "will-change",
    ],
    // Misc
    &[
        "appearance",
        "content",
        "quotes",
        "counter-reset",
        "counter-increment",
        "pointer-events",
        "user-select",
        "resize",
        "clip",
        "clip-path",
        "table-layout",
        "caption-side",
        "empty-cells",
    ],
];
