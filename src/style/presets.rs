//! Style objects for the intrinsic-ratio placeholder box.
//!
//! The container gets [`box_style`], a zero-height box whose top padding
//! reserves the ratio's height. Children use [`aspect_ratio_content`] (or
//! [`css_placeholder`]) to fill it.

use super::map::StyleMap;
use crate::ratio::AspectRatio;

/// Padding-ratio container for `ratio`.
pub fn box_style(ratio: AspectRatio) -> StyleMap {
    StyleMap::new()
        .with("position", "relative")
        .with("paddingTop", padding_top(ratio))
        .with("width", "100%")
        .with("height", "0")
        .with("overflow", "hidden")
}

/// Top padding as a percentage of the box width, e.g. `56.25%` for 16:9.
pub fn padding_top(ratio: AspectRatio) -> String {
    format!("{}%", ratio.height() * 100.0 / ratio.width())
}

/// Absolute child covering the whole ratio box.
pub fn aspect_ratio_content() -> StyleMap {
    StyleMap::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("left", "0")
        .with("width", "100%")
        .with("height", "100%")
}

/// Outer wrapper holding the image and its placeholder.
pub fn image_container() -> StyleMap {
    StyleMap::new()
        .with("width", "100%")
        .with("height", "100%")
        .with("position", "relative")
}

/// Full-bleed overlay for a CSS gradient placeholder; ignores pointer input.
pub fn css_placeholder() -> StyleMap {
    aspect_ratio_content().merged(&StyleMap::new().with("pointerEvents", "none"))
}

/// The real image, letterboxed inside its container.
pub fn image() -> StyleMap {
    StyleMap::new()
        .with("width", "100%")
        .with("height", "100%")
        .with("objectFit", "contain")
}
