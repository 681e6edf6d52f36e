//! Groups for the `idiomatic` strategy.
//!
//! Follows the idiomatic-CSS convention: positioning first, then display and
//! the box model from the outside in, then typography, visuals and the rest.

pub(super) const GROUPS: &[&[&str]] = &[
    // Positioning
    &[
        "position",
        "z-index",
        "inset",
        "top",
        "right",
        "bottom",
        "left",
    ],
    // Display
    &["display", "visibility", "float", "clear"],
    // Flexible box
    &[
        "flex",
        "flex-flow",
        "flex-direction",
        "flex-wrap",
        "flex-grow",
        "flex-shrink",
        "flex-basis",
        "order",
    ],
    // Grid
    &[
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
    ],
    // Alignment
    &[
        "place-content",
        "place-items",
        "place-self",
        "align-content",
        "align-items",
        "align-self",
        "justify-content",
        "justify-items",
        "justify-self",
    ],
    // Box model
    &[
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
        "padding",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
    ],
    // Overflow
    &["overflow", "overflow-x", "overflow-y", "clip", "clip-path"],
    // Border
    &[
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
        "outline",
        "outline-offset",
    ],
    // Typography
    &[
        "font",
        "font-family",
        "font-size",
        "font-style",
        "font-variant",
        "font-weight",
        "font-stretch",
        "line-height",
        "letter-spacing",
        "word-spacing",
        "color",
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
        "vertical-align",
    ],
    // Lists and tables
    &[
        "list-style",
        "list-style-type",
        "list-style-position",
        "list-style-image",
        "table-layout",
        "border-collapse",
        "border-spacing",
        "caption-side",
        "empty-cells",
    ],
    // Background
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
    ],
    // Effects
    &[
        "opacity",
        "box-shadow",
        "filter",
        "backdrop-filter",
        "mix-blend-mode",
    ],
    // Transforms and motion
    &[
        "transform",
        "transform-origin",
        "transform-style",
        "perspective",
        "backface-visibility",
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
        "will-change",
    ],
    // Interaction
    &[
        "appearance",
        "cursor",
        "pointer-events",
        "user-select",
        "resize",
    ],
    // Generated content
    &["content", "quotes", "counter-reset", "counter-increment"],
];
