//! Style objects and property-name helpers for placeholder rendering.

mod kebab;
mod map;
mod presets;

pub use kebab::{kebab_case, kebabify};
pub use map::{StyleMap, StyleValue};
pub use presets::{
    aspect_ratio_content, box_style, css_placeholder, image, image_container, padding_top,
};
